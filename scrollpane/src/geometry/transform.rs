use super::Vec2;

/// 2D affine transform: per-axis scale followed by a translation.
///
/// A point `p` maps to `(p.x * scale.x + translation.x, p.y * scale.y + translation.y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec2,
    pub translation: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: Vec2::new(1.0, 1.0),
        translation: Vec2::ZERO,
    };

    pub const fn with_translation(mut self, translation: Vec2) -> Self {
        self.translation = translation;
        self
    }
}
