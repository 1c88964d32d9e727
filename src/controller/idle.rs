use crate::options::IdleOptions;

/// One sample of the idle motion curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleSample {
    /// Vertical offset added to the resting height.
    pub bob: f32,
    /// Multiplier applied to the base scale.
    pub pulse: f32,
    /// Roll angle in radians.
    pub wobble: f32,
}

impl IdleSample {
    /// Motionless sample: no offset, unit scale, no roll.
    pub const REST: Self = Self {
        bob: 0.0,
        pulse: 1.0,
        wobble: 0.0,
    };
}

/// Sinusoidal floating motion evaluated at an elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct IdleMotion {
    options: IdleOptions,
}

impl IdleMotion {
    /// Create idle motion with the given curve parameters.
    #[must_use]
    pub fn new(options: IdleOptions) -> Self {
        Self { options }
    }

    /// Curve parameters.
    #[must_use]
    pub fn options(&self) -> &IdleOptions {
        &self.options
    }

    /// Evaluate all three curves at `elapsed` seconds.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> IdleSample {
        let o = &self.options;
        IdleSample {
            bob: (elapsed * o.bob_frequency).sin() * o.bob_amplitude,
            pulse: 1.0 + (elapsed * o.pulse_frequency).sin() * o.pulse_amplitude,
            wobble: (elapsed * o.wobble_frequency).sin() * o.wobble_amplitude,
        }
    }
}

impl Default for IdleMotion {
    fn default() -> Self {
        Self::new(IdleOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn starts_at_rest() {
        assert_eq!(IdleMotion::default().sample(0.0), IdleSample::REST);
    }

    #[test]
    fn peaks_match_amplitudes() {
        let idle = IdleMotion::default();
        // sin(t * 0.7) peaks at t = (PI / 2) / 0.7
        let bob = idle.sample(PI / 2.0 / 0.7).bob;
        assert!((bob - 0.15).abs() < 1e-5);

        let pulse = idle.sample(PI / 2.0 / 0.5).pulse;
        assert!((pulse - 1.02).abs() < 1e-5);

        let wobble = idle.sample(-PI / 2.0 / 0.8).wobble;
        assert!((wobble + 0.03).abs() < 1e-5);
    }

    #[test]
    fn zero_amplitude_disables_component() {
        let idle = IdleMotion::new(IdleOptions {
            pulse_amplitude: 0.0,
            wobble_amplitude: 0.0,
            ..IdleOptions::default()
        });
        for i in 0..50 {
            let s = idle.sample(i as f32 * 0.37);
            assert_eq!(s.pulse, 1.0);
            assert_eq!(s.wobble, 0.0);
            assert!(s.bob.abs() <= 0.15);
        }
    }
}
