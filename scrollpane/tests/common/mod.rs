#![allow(dead_code)]

use scrollpane::{Axis, LayoutResult, Rect, ScrollBar, ScrollView, ScrollerRange, VisualNode};

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.0001,
        "expected {expected}, got {actual}"
    );
}

/// Run a layout pass giving the region, viewport and content the given sizes.
pub fn lay_out<S: ScrollBar>(
    view: &mut ScrollView<S>,
    region: (f32, f32),
    viewport: (f32, f32),
    content: (f32, f32),
) -> bool {
    let layout: LayoutResult = [
        (view.node().id.clone(), Rect::from_size(region.0, region.1)),
        (
            view.content_viewport().id.clone(),
            Rect::from_size(viewport.0, viewport.1),
        ),
        (
            view.content_view().id.clone(),
            Rect::from_size(content.0, content.1),
        ),
    ]
    .into_iter()
    .collect();
    view.apply_layout(&layout)
}

/// Scrollbar that records the calls the region makes on it.
#[derive(Debug, Clone)]
pub struct RecordingScroller {
    pub node: VisualNode,
    pub axis: Axis,
    pub range: ScrollerRange,
    pub value: f32,
    pub step: f32,
    pub page_ups: u32,
    pub page_downs: u32,
    pub adjustments: Vec<f32>,
}

impl RecordingScroller {
    pub fn new(axis: Axis, range: ScrollerRange) -> Self {
        Self {
            node: VisualNode::named("recording", format!("{axis:?}Scroller")),
            axis,
            range,
            value: range.low,
            step: 10.0,
            page_ups: 0,
            page_downs: 0,
            adjustments: Vec::new(),
        }
    }
}

impl ScrollBar for RecordingScroller {
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
        self.value = value;
        Some(value)
    }

    fn adjust(&mut self, ratio: f32) {
        self.adjustments.push(ratio);
    }

    fn page_up(&mut self) -> Option<f32> {
        self.page_ups += 1;
        self.value -= self.step;
        Some(self.value)
    }

    fn page_down(&mut self) -> Option<f32> {
        self.page_downs += 1;
        self.value += self.step;
        Some(self.value)
    }
}

pub fn recording_view(config: scrollpane::ScrollViewConfig) -> ScrollView<RecordingScroller> {
    let horizontal = RecordingScroller::new(Axis::Horizontal, config.horizontal_range);
    let vertical = RecordingScroller::new(Axis::Vertical, config.vertical_range);
    ScrollView::with_scrollers(config, horizontal, vertical)
}
