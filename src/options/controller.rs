use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Drag rotation, inertia and auto-rotation parameters.
pub struct ControllerOptions {
    /// Radians of rotation per pixel of pointer travel.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Symmetric pitch clamp in radians.
    #[schemars(title = "Pitch Limit", range(min = 0.0, max = 1.5), extend("step" = 0.05))]
    pub pitch_limit: f32,
    /// A move sample whose vertical travel exceeds this multiple of its
    /// horizontal travel is treated as a page scroll.
    #[schemars(skip)]
    pub scroll_ratio: f32,
    /// Per-frame multiplicative decay applied to residual velocity.
    #[schemars(title = "Friction", range(min = 0.5, max = 0.999), extend("step" = 0.005))]
    pub friction: f32,
    /// Velocity components below this magnitude snap to zero.
    #[schemars(skip)]
    pub rest_epsilon: f32,
    /// Idle yaw rate in radians per second.
    #[schemars(title = "Auto Rotate", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
    /// Auto-rotation only applies while residual yaw velocity is below this.
    #[schemars(skip)]
    pub auto_rotate_threshold: f32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.01,
            pitch_limit: 0.5,
            scroll_ratio: 2.0,
            friction: 0.95,
            rest_epsilon: 0.001,
            auto_rotate_speed: 0.2,
            auto_rotate_threshold: 0.1,
        }
    }
}
