use std::fs::File;
use std::io::{self, Stdout, Write};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use scrollpane::{
    Event, EventHandler, LayoutResult, Rect, ScrollBar, ScrollView, ScrollViewConfig,
};

/// Number of content lines shown in the demo.
const LINES: u16 = 200;

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("scrollpane.log")?;
    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        log_file,
    )
    .expect("Failed to initialize logger");

    let mut view = ScrollView::new(ScrollViewConfig::new().page_size(5.0));
    let (width, height) = terminal::size()?;
    relayout(&mut view, width, height);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = run(&mut stdout, &mut view);

    execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

/// Stand-in for a layout engine: the viewport fills the terminal except the
/// status line, and the content is one row per line.
fn relayout(view: &mut ScrollView, width: u16, height: u16) {
    let region = Rect::from_size(width as f32, height as f32);
    let viewport = Rect::from_size(width as f32, height.saturating_sub(1) as f32);
    let content = Rect::from_size(width as f32, LINES as f32);

    let layout: LayoutResult = [
        (view.node().id.clone(), region),
        (view.content_viewport().id.clone(), viewport),
        (view.content_view().id.clone(), content),
    ]
    .into_iter()
    .collect();
    view.apply_layout(&layout);
}

fn run(stdout: &mut Stdout, view: &mut ScrollView) -> io::Result<()> {
    draw(stdout, view)?;

    loop {
        let raw = event::read()?;
        if let CrosstermEvent::Key(key) = &raw {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(());
            }
        }

        let Some(event) = Event::from_crossterm(&raw) else {
            continue;
        };

        if let Event::Resize { width, height } = event {
            relayout(view, width as u16, height as u16);
        } else {
            let verdict = view.handle_event(&event);
            log::trace!("[demo] {:?} -> {:?}", event.kind(), verdict);
        }

        if view.take_repaint() {
            draw(stdout, view)?;
        }
    }
}

fn draw(stdout: &mut Stdout, view: &ScrollView) -> io::Result<()> {
    let viewport = view.content_viewport().position;
    let first = (-view.content_view().transform.translation.y).max(0.0) as u16;
    let rows = viewport.height as u16;

    queue!(stdout, Clear(ClearType::All))?;
    for row in 0..rows {
        let line = first + row;
        if line >= LINES {
            break;
        }
        queue!(stdout, cursor::MoveTo(0, row), Print(format!("line {line:>4}")))?;
    }

    let scroller = view.vertical_scroller();
    let status = format!(
        "offset={:.1} thumb={:.2} enabled={} visible={}  (wheel scrolls, q quits)",
        view.scroll_offset().y,
        scroller.thumb_ratio(),
        scroller.is_enabled(),
        scroller.is_visible()
    );
    queue!(stdout, cursor::MoveTo(0, rows), Print(status))?;
    stdout.flush()
}
