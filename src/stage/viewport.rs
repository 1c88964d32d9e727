//! Screen-space visibility for frame culling.

use glam::Vec2;

/// Axis-aligned rectangle in CSS pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl ScreenRect {
    /// Rectangle from a DOM-style `left, top, width, height` quadruple.
    #[must_use]
    pub fn from_xywh(left: f32, top: f32, width: f32, height: f32) -> Self {
        let min = Vec2::new(left, top);
        Self {
            min,
            max: min + Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    /// The viewport itself, anchored at the origin.
    #[must_use]
    pub fn from_size(size: Vec2) -> Self {
        Self {
            min: Vec2::ZERO,
            max: size.max(Vec2::ZERO),
        }
    }

    /// Whether the two rectangles overlap by a non-zero area.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let overlap = self.max.min(other.max) - self.min.max(other.min);
        overlap.x > 0.0 && overlap.y > 0.0
    }
}

/// Whether the showpiece is on screen, from the latest viewport size and
/// container bounds.
///
/// Until both are known the showpiece counts as visible.
#[must_use]
pub fn is_visible(viewport: Option<Vec2>, bounds: Option<ScreenRect>) -> bool {
    match (viewport, bounds) {
        (Some(size), Some(rect)) => rect.intersects(&ScreenRect::from_size(size)),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_and_touching_edges() {
        let a = ScreenRect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let b = ScreenRect::from_xywh(50.0, 50.0, 100.0, 100.0);
        let c = ScreenRect::from_xywh(100.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn scrolled_out_container_is_hidden() {
        let viewport = Some(Vec2::new(1280.0, 800.0));
        // Hero scrolled fully above the fold
        let above = ScreenRect::from_xywh(0.0, -900.0, 1280.0, 800.0);
        assert!(!is_visible(viewport, Some(above)));
        // Partially visible
        let peeking = ScreenRect::from_xywh(0.0, -700.0, 1280.0, 800.0);
        assert!(is_visible(viewport, Some(peeking)));
    }

    #[test]
    fn unknown_geometry_counts_as_visible() {
        assert!(is_visible(None, None));
        assert!(is_visible(Some(Vec2::new(10.0, 10.0)), None));
    }

    #[test]
    fn zero_sized_container_is_hidden() {
        let viewport = Some(Vec2::new(1280.0, 800.0));
        let collapsed = ScreenRect::from_xywh(10.0, 10.0, 0.0, 0.0);
        assert!(!is_visible(viewport, Some(collapsed)));
    }
}
