use std::collections::HashMap;

use crate::geometry::Rect;

/// Output of an external layout pass: final rect per node id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Rect)> for LayoutResult {
    fn from_iter<I: IntoIterator<Item = (S, Rect)>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().map(|(id, rect)| (id.into(), rect)).collect(),
        }
    }
}
