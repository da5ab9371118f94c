use crate::geometry::Vec2;

/// Input events delivered to a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse wheel or trackpad scroll. Delivered whether or not the widget
    /// holds input capture.
    Wheel { delta: Vec2 },
    /// Mouse button pressed
    MouseDown { position: Vec2, button: MouseButton },
    /// Mouse button released
    MouseUp { position: Vec2, button: MouseButton },
    /// Pointer moved
    MouseMove { position: Vec2 },
    /// Key press
    Key { key: Key },
    /// Host surface resized
    Resize { width: f32, height: f32 },
}

/// Tag identifying the kind of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Wheel,
    MouseDown,
    MouseUp,
    MouseMove,
    Key,
    Resize,
}

impl Event {
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Wheel { .. } => EventKind::Wheel,
            Event::MouseDown { .. } => EventKind::MouseDown,
            Event::MouseUp { .. } => EventKind::MouseUp,
            Event::MouseMove { .. } => EventKind::MouseMove,
            Event::Key { .. } => EventKind::Key,
            Event::Resize { .. } => EventKind::Resize,
        }
    }

    /// Translate a crossterm terminal event. Returns `None` for events with
    /// no counterpart (focus changes, paste, key releases).
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Event> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Mouse(mouse) => {
                let position = Vec2::new(mouse.column as f32, mouse.row as f32);
                let event = match mouse.kind {
                    MouseEventKind::ScrollUp => Event::Wheel {
                        delta: Vec2::new(0.0, -1.0),
                    },
                    MouseEventKind::ScrollDown => Event::Wheel {
                        delta: Vec2::new(0.0, 1.0),
                    },
                    MouseEventKind::ScrollLeft => Event::Wheel {
                        delta: Vec2::new(-1.0, 0.0),
                    },
                    MouseEventKind::ScrollRight => Event::Wheel {
                        delta: Vec2::new(1.0, 0.0),
                    },
                    MouseEventKind::Down(button) => Event::MouseDown {
                        position,
                        button: button.into(),
                    },
                    MouseEventKind::Up(button) => Event::MouseUp {
                        position,
                        button: button.into(),
                    },
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        Event::MouseMove { position }
                    }
                };
                Some(event)
            }
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
            }),
            CtEvent::Resize(width, height) => Some(Event::Resize {
                width: *width as f32,
                height: *height as f32,
            }),
            _ => None,
        }
    }
}

/// Whether an event continues up the widget tree after a handler saw it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Propagation {
    #[default]
    Continue,
    Stop,
}

impl Propagation {
    pub fn is_stopped(self) -> bool {
        self == Propagation::Stop
    }
}

/// Input-handling capability.
///
/// Every kind has a handler defaulting to [`Propagation::Continue`];
/// widgets override only the kinds they react to. [`EventHandler::handle_event`]
/// dispatches on [`Event::kind`].
pub trait EventHandler {
    fn on_wheel(&mut self, _delta: Vec2) -> Propagation {
        Propagation::Continue
    }

    fn on_mouse_down(&mut self, _position: Vec2, _button: MouseButton) -> Propagation {
        Propagation::Continue
    }

    fn on_mouse_up(&mut self, _position: Vec2, _button: MouseButton) -> Propagation {
        Propagation::Continue
    }

    fn on_mouse_move(&mut self, _position: Vec2) -> Propagation {
        Propagation::Continue
    }

    fn on_key(&mut self, _key: Key) -> Propagation {
        Propagation::Continue
    }

    fn on_resize(&mut self, _width: f32, _height: f32) -> Propagation {
        Propagation::Continue
    }

    fn handle_event(&mut self, event: &Event) -> Propagation {
        match *event {
            Event::Wheel { delta } => self.on_wheel(delta),
            Event::MouseDown { position, button } => self.on_mouse_down(position, button),
            Event::MouseUp { position, button } => self.on_mouse_up(position, button),
            Event::MouseMove { position } => self.on_mouse_move(position),
            Event::Key { key } => self.on_key(key),
            Event::Resize { width, height } => self.on_resize(width, height),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Other,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
