use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Page", inline)]
#[serde(default)]
/// Scroll-driven page effects around the showpiece.
pub struct PageOptions {
    /// Scroll distance (CSS pixels) before the intro overlay starts fading.
    #[schemars(skip)]
    pub fade_start_px: f64,
    /// Fraction of the viewport height at which the intro is dismissed.
    #[schemars(title = "Intro Length", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub dismiss_fraction: f64,
    /// Hero background offset per pixel scrolled.
    #[schemars(title = "Parallax", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub parallax_factor: f64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            fade_start_px: 50.0,
            dismiss_fraction: 0.5,
            parallax_factor: 0.2,
        }
    }
}
