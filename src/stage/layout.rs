use glam::Vec2;

use crate::options::{LayoutOptions, Placement};

/// Viewport size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// At most `breakpoint_px` wide.
    Narrow,
    /// Wider than `breakpoint_px`.
    Wide,
}

impl Breakpoint {
    /// Bucket for a viewport `width`.
    #[must_use]
    pub fn for_width(width: f32, breakpoint_px: f32) -> Self {
        if width <= breakpoint_px {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Picks the showpiece placement for the current viewport width.
///
/// Placement changes discontinuously when the width crosses the breakpoint;
/// there is no interpolation between buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveLayout {
    options: LayoutOptions,
    bucket: Breakpoint,
}

impl ResponsiveLayout {
    /// Start in the wide bucket until the first resize.
    #[must_use]
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            bucket: Breakpoint::Wide,
        }
    }

    /// Replace the bucket table, keeping the current bucket.
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    /// Current bucket.
    #[must_use]
    pub fn bucket(&self) -> Breakpoint {
        self.bucket
    }

    /// Placement for the current bucket.
    #[must_use]
    pub fn placement(&self) -> Placement {
        match self.bucket {
            Breakpoint::Narrow => self.options.narrow,
            Breakpoint::Wide => self.options.wide,
        }
    }

    /// Reselect the bucket for a new viewport size. Returns whether it
    /// changed.
    pub fn resize(&mut self, size: Vec2) -> bool {
        let bucket = Breakpoint::for_width(size.x, self.options.breakpoint_px);
        if bucket == self.bucket {
            return false;
        }
        log::debug!("layout bucket {:?} -> {bucket:?} at {}px", self.bucket, size.x);
        self.bucket = bucket;
        true
    }
}
