use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::{Rect, Transform};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of the retained widget tree as seen by the scroll core.
///
/// `position` is owned by the layout engine and only written through
/// [`crate::ScrollView::apply_layout`]. `transform` is written by the
/// scroll core (content translation).
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    // Identity
    pub id: String,
    pub name: String,

    // Layout
    pub position: Rect,
    pub transform: Transform,

    // Visual
    pub clip_children: bool,
    pub enabled: bool,
    pub visible: bool,
}

impl Default for VisualNode {
    fn default() -> Self {
        Self {
            id: generate_id("node"),
            name: String::new(),
            position: Rect::default(),
            transform: Transform::IDENTITY,
            clip_children: false,
            enabled: true,
            visible: true,
        }
    }
}

impl VisualNode {
    /// Create a node with a generated id and the given display name.
    pub fn named(prefix: &str, name: impl Into<String>) -> Self {
        Self {
            id: generate_id(prefix),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn clip_children(mut self, clip: bool) -> Self {
        self.clip_children = clip;
        self
    }
}
