use crate::geometry::Axis;
use crate::node::VisualNode;

/// Distance a page step moves a scroller's value when none is configured.
pub const DEFAULT_PAGE_SIZE: f32 = 20.0;

/// Value domain of a scrollbar.
///
/// `low` may be greater than `high`; the scroller then runs inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollerRange {
    pub low: f32,
    pub high: f32,
}

impl Default for ScrollerRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ScrollerRange {
    pub const DEFAULT: ScrollerRange = ScrollerRange::new(0.0, 100.0);

    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Signed width of the range (`high - low`).
    pub fn span(&self) -> f32 {
        self.high - self.low
    }

    pub fn is_finite(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    /// Clamp a value into the range, whichever way round it runs.
    pub fn clamp(&self, value: f32) -> f32 {
        let (min, max) = if self.is_inverted() {
            (self.high, self.low)
        } else {
            (self.low, self.high)
        };
        value.max(min).min(max)
    }
}

impl From<(f32, f32)> for ScrollerRange {
    fn from((low, high): (f32, f32)) -> Self {
        Self { low, high }
    }
}

/// Scrollbar capability consumed by [`crate::ScrollView`].
///
/// Operations that move the value return `Some(new_value)` when the value
/// actually changed. The caller is responsible for forwarding that change
/// to a [`ScrollerObserver`].
pub trait ScrollBar {
    fn axis(&self) -> Axis;
    fn node(&self) -> &VisualNode;
    fn node_mut(&mut self) -> &mut VisualNode;

    /// Current value domain.
    fn range(&self) -> ScrollerRange;
    fn value(&self) -> f32;
    fn set_value(&mut self, value: f32) -> Option<f32>;

    /// Resize the thumb to show `ratio` of the track.
    fn adjust(&mut self, ratio: f32);

    fn page_up(&mut self) -> Option<f32>;
    fn page_down(&mut self) -> Option<f32>;

    fn is_enabled(&self) -> bool {
        self.node().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.node_mut().enabled = enabled;
    }

    fn is_visible(&self) -> bool {
        self.node().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.node_mut().visible = visible;
    }
}

/// Receives value changes reported by a scrollbar.
pub trait ScrollerObserver {
    fn value_changed(&mut self, axis: Axis, value: f32);
}

/// Default scrollbar: a clamped value within a range, a thumb ratio and a
/// page size.
#[derive(Debug, Clone)]
pub struct Scroller {
    node: VisualNode,
    axis: Axis,
    range: ScrollerRange,
    value: f32,
    page_size: f32,
    thumb_ratio: f32,
}

impl Scroller {
    pub fn new(axis: Axis, range: ScrollerRange) -> Self {
        let name = match axis {
            Axis::Horizontal => "HorizontalScroller",
            Axis::Vertical => "VerticalScroller",
        };
        Self {
            node: VisualNode::named("scroller", name),
            axis,
            range,
            value: range.low,
            page_size: DEFAULT_PAGE_SIZE,
            thumb_ratio: 1.0,
        }
    }

    pub fn page_size(mut self, page_size: f32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn thumb_ratio(&self) -> f32 {
        self.thumb_ratio
    }

    /// Page size signed towards `high`.
    fn page_step(&self) -> f32 {
        if self.range.is_inverted() {
            -self.page_size
        } else {
            self.page_size
        }
    }
}

impl ScrollBar for Scroller {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn node(&self) -> &VisualNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut VisualNode {
        &mut self.node
    }

    fn range(&self) -> ScrollerRange {
        self.range
    }

    fn value(&self) -> f32 {
        self.value
    }

    fn set_value(&mut self, value: f32) -> Option<f32> {
        let clamped = self.range.clamp(value);
        if clamped == self.value {
            return None;
        }
        log::trace!(
            "[scroller] {} value {} -> {}",
            self.node.name,
            self.value,
            clamped
        );
        self.value = clamped;
        Some(clamped)
    }

    fn adjust(&mut self, ratio: f32) {
        self.thumb_ratio = ratio.clamp(0.0, 1.0);
    }

    fn page_up(&mut self) -> Option<f32> {
        let step = self.page_step();
        self.set_value(self.value - step)
    }

    fn page_down(&mut self) -> Option<f32> {
        let step = self.page_step();
        self.set_value(self.value + step)
    }
}
