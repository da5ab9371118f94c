//! Scroll view configuration.

use thiserror::Error;

use crate::geometry::Axis;
use crate::scroller::{ScrollerRange, DEFAULT_PAGE_SIZE};

/// How the transform updater treats a scroller range of zero width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// A zero-width range normalizes to `0.0`, leaving content at its origin.
    #[default]
    Neutral,
    /// Divide anyway. NaN or infinity reaches the content transform.
    Propagate,
}

/// What a wheel event reports when nothing could be scrolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WheelPolicy {
    /// Always stop propagation, even without vertical overflow.
    #[default]
    AlwaysConsume,
    /// Let the event continue to the parent when there is no vertical
    /// overflow.
    ConsumeWhenScrollable,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{axis:?} scroller range ({low}, {high}) is not finite")]
    NonFiniteRange { axis: Axis, low: f32, high: f32 },

    #[error("page size must be finite and positive, got {0}")]
    InvalidPageSize(f32),
}

/// Construction-time settings for a [`crate::ScrollView`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollViewConfig {
    /// Value domain of the horizontal scroller.
    pub horizontal_range: ScrollerRange,

    /// Value domain of the vertical scroller.
    pub vertical_range: ScrollerRange,

    /// Show the horizontal scroller even when content fits.
    pub show_horizontal: bool,

    /// Show the vertical scroller even when content fits.
    pub show_vertical: bool,

    /// Distance one page step moves a scroller value.
    pub page_size: f32,

    pub range_policy: RangePolicy,
    pub wheel_policy: WheelPolicy,
}

impl Default for ScrollViewConfig {
    fn default() -> Self {
        Self {
            horizontal_range: ScrollerRange::DEFAULT,
            vertical_range: ScrollerRange::DEFAULT,
            show_horizontal: false,
            show_vertical: false,
            page_size: DEFAULT_PAGE_SIZE,
            range_policy: RangePolicy::default(),
            wheel_policy: WheelPolicy::default(),
        }
    }
}

impl ScrollViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both scroller ranges.
    pub fn ranges(
        mut self,
        horizontal: impl Into<ScrollerRange>,
        vertical: impl Into<ScrollerRange>,
    ) -> Self {
        self.horizontal_range = horizontal.into();
        self.vertical_range = vertical.into();
        self
    }

    pub fn show_horizontal(mut self, show: bool) -> Self {
        self.show_horizontal = show;
        self
    }

    pub fn show_vertical(mut self, show: bool) -> Self {
        self.show_vertical = show;
        self
    }

    pub fn page_size(mut self, page_size: f32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    pub fn wheel_policy(mut self, policy: WheelPolicy) -> Self {
        self.wheel_policy = policy;
        self
    }

    /// Check that ranges and page size are usable numbers.
    ///
    /// Zero-width ranges pass; they are handled by [`RangePolicy`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, range) in [
            (Axis::Horizontal, self.horizontal_range),
            (Axis::Vertical, self.vertical_range),
        ] {
            if !range.is_finite() {
                return Err(ConfigError::NonFiniteRange {
                    axis,
                    low: range.low,
                    high: range.high,
                });
            }
        }

        if !self.page_size.is_finite() || self.page_size <= 0.0 {
            return Err(ConfigError::InvalidPageSize(self.page_size));
        }

        Ok(())
    }
}
