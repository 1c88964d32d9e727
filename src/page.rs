//! Scroll-driven page effects around the showpiece: the intro overlay that
//! fades out as the visitor scrolls, and the hero background parallax.

use crate::options::PageOptions;

/// Result of feeding one scroll position to the intro overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroUpdate {
    /// Overlay opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the overlay is dismissed (stops intercepting pointer input).
    pub dismissed: bool,
    /// True only on the update that dismissed it; the host persists the
    /// "seen" flag and detaches its scroll listener then.
    pub just_dismissed: bool,
}

/// Intro overlay shown to first-time visitors over the showpiece.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroOverlay {
    options: PageOptions,
    opacity: f64,
    dismissed: bool,
}

impl IntroOverlay {
    /// Create the overlay. Visitors who have already seen the intro get it
    /// dismissed from the start.
    #[must_use]
    pub fn new(options: PageOptions, seen: bool) -> Self {
        Self {
            options,
            opacity: if seen { 0.0 } else { 1.0 },
            dismissed: seen,
        }
    }

    /// Current opacity.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Whether the overlay has been dismissed.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Update for a new vertical scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> IntroUpdate {
        let unchanged = IntroUpdate {
            opacity: self.opacity,
            dismissed: self.dismissed,
            just_dismissed: false,
        };
        if self.dismissed
            || !scroll_y.is_finite()
            || scroll_y <= self.options.fade_start_px
        {
            return unchanged;
        }

        let fade_length = viewport_height * self.options.dismiss_fraction;
        if fade_length <= 0.0 {
            return unchanged;
        }

        self.opacity = (1.0 - scroll_y / fade_length).max(0.0);
        let just_dismissed = scroll_y > fade_length;
        if just_dismissed {
            self.dismissed = true;
            log::debug!("intro dismissed at scroll {scroll_y}");
        }
        IntroUpdate {
            opacity: self.opacity,
            dismissed: self.dismissed,
            just_dismissed,
        }
    }
}

/// Hero background offset for a scroll position.
#[must_use]
pub fn parallax_offset(scroll_y: f64, options: &PageOptions) -> f64 {
    -scroll_y * options.parallax_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> IntroOverlay {
        IntroOverlay::new(PageOptions::default(), false)
    }

    #[test]
    fn small_scroll_leaves_overlay_alone() {
        let mut intro = overlay();
        let update = intro.on_scroll(50.0, 800.0);
        assert_eq!(update.opacity, 1.0);
        assert!(!update.dismissed);
    }

    #[test]
    fn opacity_fades_over_half_the_viewport() {
        let mut intro = overlay();
        let update = intro.on_scroll(200.0, 800.0);
        assert!((update.opacity - 0.5).abs() < 1e-12);
        assert!(!update.dismissed);
    }

    #[test]
    fn dismissal_is_reported_once() {
        let mut intro = overlay();
        let update = intro.on_scroll(401.0, 800.0);
        assert!(update.dismissed);
        assert!(update.just_dismissed);
        assert_eq!(update.opacity, 0.0);

        // Scrolling back up does not bring it back
        let update = intro.on_scroll(100.0, 800.0);
        assert!(update.dismissed);
        assert!(!update.just_dismissed);
        assert_eq!(update.opacity, 0.0);
    }

    #[test]
    fn returning_visitor_starts_dismissed() {
        let mut intro = IntroOverlay::new(PageOptions::default(), true);
        assert!(intro.is_dismissed());
        assert_eq!(intro.on_scroll(0.0, 800.0).opacity, 0.0);
    }

    #[test]
    fn zero_height_viewport_is_ignored() {
        let mut intro = overlay();
        let update = intro.on_scroll(300.0, 0.0);
        assert_eq!(update.opacity, 1.0);
        assert!(!update.dismissed);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        let options = PageOptions::default();
        assert!((parallax_offset(500.0, &options) + 100.0).abs() < 1e-12);
        assert_eq!(parallax_offset(0.0, &options), 0.0);
    }
}
