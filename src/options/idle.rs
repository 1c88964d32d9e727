use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Idle Motion", inline)]
#[serde(default)]
/// Sinusoidal idle motion: vertical bob, scale pulse and roll wobble.
///
/// Frequencies are in radians per second of elapsed time. An amplitude of
/// zero disables that component.
pub struct IdleOptions {
    /// Vertical bob amplitude in world units.
    #[schemars(title = "Bob Height", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub bob_amplitude: f32,
    /// Vertical bob frequency.
    #[schemars(skip)]
    pub bob_frequency: f32,
    /// Scale pulse amplitude as a fraction of the base scale.
    #[schemars(title = "Breathe", range(min = 0.0, max = 0.1), extend("step" = 0.005))]
    pub pulse_amplitude: f32,
    /// Scale pulse frequency.
    #[schemars(skip)]
    pub pulse_frequency: f32,
    /// Roll wobble amplitude in radians.
    #[schemars(title = "Wobble", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub wobble_amplitude: f32,
    /// Roll wobble frequency.
    #[schemars(skip)]
    pub wobble_frequency: f32,
}

impl Default for IdleOptions {
    fn default() -> Self {
        Self {
            bob_amplitude: 0.15,
            bob_frequency: 0.7,
            pulse_amplitude: 0.02,
            pulse_frequency: 0.5,
            wobble_amplitude: 0.03,
            wobble_frequency: 0.8,
        }
    }
}
