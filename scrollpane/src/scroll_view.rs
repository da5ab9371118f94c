use crate::config::{ConfigError, RangePolicy, ScrollViewConfig, WheelPolicy};
use crate::event::{EventHandler, Propagation};
use crate::geometry::{Axis, Vec2};
use crate::layout::LayoutResult;
use crate::node::VisualNode;
use crate::scroller::{ScrollBar, Scroller, ScrollerObserver, ScrollerRange};

/// Content extents at or below this are treated as empty when sizing thumbs.
pub const SIZE_EPSILON: f32 = f32::EPSILON;

/// A clipped viewport over a larger content node, driven by two scrollers.
///
/// The region owns four children created once at construction:
/// `content_viewport` clips `content_view`, and a horizontal and vertical
/// scroller sit beside it. Layout sizes come from an external pass through
/// [`ScrollView::apply_layout`] (or [`ScrollView::on_post_layout`] when the
/// host writes positions itself). The scroll core writes only the content
/// translation and the scrollers' state.
#[derive(Debug, Clone)]
pub struct ScrollView<S = Scroller> {
    node: VisualNode,
    content_view: VisualNode,
    content_viewport: VisualNode,
    horizontal_scroller: S,
    vertical_scroller: S,

    horizontal_scroller_values: ScrollerRange,
    vertical_scroller_values: ScrollerRange,
    show_horizontal: bool,
    show_vertical: bool,
    range_policy: RangePolicy,
    wheel_policy: WheelPolicy,

    scroll_offset: Vec2,

    /// Repaint requests issued so far. Not deduplicated.
    repaint_requests: u64,
    needs_repaint: bool,
}

impl ScrollView<Scroller> {
    /// Build a region with default [`Scroller`]s. Any configuration is
    /// accepted; use [`ScrollView::try_new`] to reject non-finite values.
    pub fn new(config: ScrollViewConfig) -> Self {
        let horizontal = Scroller::new(Axis::Horizontal, config.horizontal_range)
            .page_size(config.page_size);
        let vertical =
            Scroller::new(Axis::Vertical, config.vertical_range).page_size(config.page_size);
        Self::with_scrollers(config, horizontal, vertical)
    }

    pub fn try_new(config: ScrollViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl Default for ScrollView<Scroller> {
    fn default() -> Self {
        Self::new(ScrollViewConfig::default())
    }
}

impl<S: ScrollBar> ScrollView<S> {
    /// Build a region around caller-supplied scrollers.
    ///
    /// The scrollers are expected to span the ranges in `config`; the
    /// transform updater always reads the range from the scroller itself.
    pub fn with_scrollers(
        config: ScrollViewConfig,
        horizontal_scroller: S,
        vertical_scroller: S,
    ) -> Self {
        Self {
            node: VisualNode::named("scrollview", "ScrollView"),
            content_view: VisualNode::named("content", "ContentView"),
            content_viewport: VisualNode::named("viewport", "ContentViewport").clip_children(true),
            horizontal_scroller,
            vertical_scroller,
            horizontal_scroller_values: config.horizontal_range,
            vertical_scroller_values: config.vertical_range,
            show_horizontal: config.show_horizontal,
            show_vertical: config.show_vertical,
            range_policy: config.range_policy,
            wheel_policy: config.wheel_policy,
            scroll_offset: Vec2::ZERO,
            repaint_requests: 0,
            needs_repaint: false,
        }
    }

    /// The region's own node.
    pub fn node(&self) -> &VisualNode {
        &self.node
    }

    /// Full content, potentially partially visible.
    pub fn content_view(&self) -> &VisualNode {
        &self.content_view
    }

    /// Visible window onto `content_view`.
    pub fn content_viewport(&self) -> &VisualNode {
        &self.content_viewport
    }

    pub fn horizontal_scroller(&self) -> &S {
        &self.horizontal_scroller
    }

    pub fn vertical_scroller(&self) -> &S {
        &self.vertical_scroller
    }

    pub fn scroller(&self, axis: Axis) -> &S {
        match axis {
            Axis::Horizontal => &self.horizontal_scroller,
            Axis::Vertical => &self.vertical_scroller,
        }
    }

    fn scroller_mut(&mut self, axis: Axis) -> &mut S {
        match axis {
            Axis::Horizontal => &mut self.horizontal_scroller,
            Axis::Vertical => &mut self.vertical_scroller,
        }
    }

    /// Range the horizontal scroller was constructed with.
    pub fn horizontal_scroller_values(&self) -> ScrollerRange {
        self.horizontal_scroller_values
    }

    /// Range the vertical scroller was constructed with.
    pub fn vertical_scroller_values(&self) -> ScrollerRange {
        self.vertical_scroller_values
    }

    pub fn show_horizontal(&self) -> bool {
        self.show_horizontal
    }

    /// Force the horizontal scroller visible. Takes effect on the next layout.
    pub fn set_show_horizontal(&mut self, show: bool) {
        self.show_horizontal = show;
    }

    pub fn show_vertical(&self) -> bool {
        self.show_vertical
    }

    /// Force the vertical scroller visible. Takes effect on the next layout.
    pub fn set_show_vertical(&mut self, show: bool) {
        self.show_vertical = show;
    }

    /// Content extent strictly exceeds the region's extent on `axis`.
    pub fn overflows(&self, axis: Axis) -> bool {
        self.content_view.position.extent(axis) - self.node.position.extent(axis) > 0.0
    }

    pub fn needs_horizontal(&self) -> bool {
        self.show_horizontal || self.overflows(Axis::Horizontal)
    }

    pub fn needs_vertical(&self) -> bool {
        self.show_vertical || self.overflows(Axis::Vertical)
    }

    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    /// Store `offset` as is and reposition the content. No clamping happens
    /// here; out-of-range offsets translate content past its edges.
    pub fn set_scroll_offset(&mut self, offset: Vec2) {
        self.scroll_offset = offset;
        self.update_transform();
    }

    /// Move a scroller as a user drag would, forwarding any change to the
    /// scroll offset.
    pub fn set_scroller_value(&mut self, axis: Axis, value: f32) {
        if let Some(value) = self.scroller_mut(axis).set_value(value) {
            self.value_changed(axis, value);
        }
    }

    /// Scroll offset on `axis` rescaled against the scroller's current range.
    pub fn normalized(&self, axis: Axis) -> f32 {
        let range = self.scroller(axis).range();
        let span = range.span();
        if self.range_policy == RangePolicy::Neutral && span.abs() <= f32::EPSILON {
            log::warn!(
                "[scroll_view] {:?} scroller range ({}, {}) is empty, using neutral offset",
                axis,
                range.low,
                range.high
            );
            return 0.0;
        }
        (self.scroll_offset.get(axis) - range.low) / span
    }

    pub fn normalized_offset(&self) -> Vec2 {
        Vec2::new(
            self.normalized(Axis::Horizontal),
            self.normalized(Axis::Vertical),
        )
    }

    /// How far the content can travel on each axis. Negative when content is
    /// smaller than the viewport.
    pub fn scrollable_extent(&self) -> Vec2 {
        self.content_view.position.size() - self.content_viewport.position.size()
    }

    /// Translate the content node for the stored offset and request a repaint.
    pub fn update_transform(&mut self) {
        let normalized = self.normalized_offset();
        let scrollable = self.scrollable_extent();
        let translation = Vec2::new(
            -(normalized.x * scrollable.x),
            -(normalized.y * scrollable.y),
        );

        self.content_view.transform = self.content_view.transform.with_translation(translation);
        log::trace!(
            "[scroll_view] {} offset={:?} normalized={:?} translation={:?}",
            self.node.id,
            self.scroll_offset,
            normalized,
            translation
        );
        self.request_repaint();
    }

    fn request_repaint(&mut self) {
        self.repaint_requests += 1;
        self.needs_repaint = true;
    }

    /// Total repaint requests issued since construction.
    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Clear the pending repaint flag, returning whether one was pending.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Copy this region's rects out of a layout pass and react to them.
    ///
    /// Nodes missing from `layout` keep their previous position. Returns
    /// whether any position changed.
    pub fn apply_layout(&mut self, layout: &LayoutResult) -> bool {
        let mut changed = false;
        let nodes = [
            &mut self.node,
            &mut self.content_viewport,
            &mut self.content_view,
            self.horizontal_scroller.node_mut(),
            self.vertical_scroller.node_mut(),
        ];
        for node in nodes {
            if let Some(rect) = layout.get(&node.id) {
                if rect != node.position {
                    node.position = rect;
                    changed = true;
                }
            }
        }

        self.on_post_layout(changed);
        changed
    }

    /// Post-layout hook. Node sizes must be final for this pass.
    pub fn on_post_layout(&mut self, has_new_layout: bool) {
        if !has_new_layout {
            return;
        }

        let content = self.content_view.position;
        let viewport = self.content_viewport.position;

        if content.width > SIZE_EPSILON {
            self.horizontal_scroller.adjust(viewport.width / content.width);
        }
        if content.height > SIZE_EPSILON {
            self.vertical_scroller.adjust(viewport.height / content.height);
        }

        let horizontal_enabled = self.overflows(Axis::Horizontal);
        let vertical_enabled = self.overflows(Axis::Vertical);
        self.horizontal_scroller.set_enabled(horizontal_enabled);
        self.vertical_scroller.set_enabled(vertical_enabled);

        let horizontal_visible = self.needs_horizontal();
        let vertical_visible = self.needs_vertical();
        self.horizontal_scroller.set_visible(horizontal_visible);
        self.vertical_scroller.set_visible(vertical_visible);

        log::debug!(
            "[scroll_view] {} layout content={:?} viewport={:?} enabled=({}, {}) visible=({}, {})",
            self.node.id,
            content,
            viewport,
            horizontal_enabled,
            vertical_enabled,
            horizontal_visible,
            vertical_visible
        );

        self.update_transform();
    }
}

impl<S: ScrollBar> ScrollerObserver for ScrollView<S> {
    fn value_changed(&mut self, axis: Axis, value: f32) {
        let offset = self.scroll_offset.with(axis, value);
        self.set_scroll_offset(offset);
    }
}

impl<S: ScrollBar> EventHandler for ScrollView<S> {
    // Only the vertical wheel delta scrolls; horizontal is ignored.
    fn on_wheel(&mut self, delta: Vec2) -> Propagation {
        let scrollable = self.overflows(Axis::Vertical);
        if scrollable {
            let change = if delta.y < 0.0 {
                self.vertical_scroller.page_up()
            } else if delta.y > 0.0 {
                self.vertical_scroller.page_down()
            } else {
                None
            };
            if let Some(value) = change {
                self.value_changed(Axis::Vertical, value);
            }
        }

        log::debug!(
            "[scroll_view] {} wheel delta={:?} scrollable={} offset={:?}",
            self.node.id,
            delta,
            scrollable,
            self.scroll_offset
        );

        match self.wheel_policy {
            WheelPolicy::AlwaysConsume => Propagation::Stop,
            WheelPolicy::ConsumeWhenScrollable if scrollable => Propagation::Stop,
            WheelPolicy::ConsumeWhenScrollable => Propagation::Continue,
        }
    }
}
