pub mod config;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod node;
pub mod scroll_view;
pub mod scroller;

pub use config::{ConfigError, RangePolicy, ScrollViewConfig, WheelPolicy};
pub use event::{Event, EventHandler, EventKind, Key, MouseButton, Propagation};
pub use geometry::{Axis, Rect, Transform, Vec2};
pub use layout::LayoutResult;
pub use node::VisualNode;
pub use scroll_view::{ScrollView, SIZE_EPSILON};
pub use scroller::{ScrollBar, Scroller, ScrollerObserver, ScrollerRange, DEFAULT_PAGE_SIZE};
