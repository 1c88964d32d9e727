use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scale and resting height of the showpiece for one viewport bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
pub struct Placement {
    /// Uniform scale factor.
    pub scale: f32,
    /// Base vertical offset in world units, before idle bobbing.
    pub base_offset_y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Responsive two-bucket placement.
pub struct LayoutOptions {
    /// Viewports at most this wide (CSS pixels) use the narrow placement.
    #[schemars(title = "Breakpoint", range(min = 320.0, max = 1920.0), extend("step" = 1.0))]
    pub breakpoint_px: f32,
    /// Placement for narrow (phone) viewports.
    #[schemars(skip)]
    pub narrow: Placement,
    /// Placement for wide viewports.
    #[schemars(skip)]
    pub wide: Placement,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            breakpoint_px: 767.0,
            narrow: Placement {
                scale: 0.65,
                base_offset_y: 0.6,
            },
            wide: Placement {
                scale: 1.0,
                base_offset_y: 0.0,
            },
        }
    }
}
