use glam::Vec2;

use crate::options::ControllerOptions;

/// Reference point of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Whether a drag is in progress.
    pub active: bool,
    /// Screen position of the previous sample.
    pub last_position: Vec2,
    /// Host timestamp of the previous sample, in milliseconds.
    pub last_timestamp_ms: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            active: false,
            last_position: Vec2::ZERO,
            last_timestamp_ms: 0.0,
        }
    }
}

/// Angular velocity carried over after a drag is released.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationVelocity {
    /// Pitch rate in radians per second.
    pub pitch_per_second: f32,
    /// Yaw rate in radians per second.
    pub yaw_per_second: f32,
}

impl RotationVelocity {
    /// No residual motion.
    pub const ZERO: Self = Self {
        pitch_per_second: 0.0,
        yaw_per_second: 0.0,
    };

    /// Whether both components are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.pitch_per_second == 0.0 && self.yaw_per_second == 0.0
    }
}

/// Pitch and yaw of the showpiece, in radians.
///
/// Yaw is unbounded; the renderer's trigonometry wraps it. Pitch is kept
/// inside the controller's symmetric limit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Tilt about the horizontal axis.
    pub pitch: f32,
    /// Spin about the vertical axis.
    pub yaw: f32,
}

/// Whether a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture; inertia and auto-rotation apply.
    Idle,
    /// A drag is rotating the showpiece directly.
    Dragging,
}

/// Result of feeding one move sample to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// No drag in progress; the sample was not used.
    Ignored,
    /// The sample rotated the showpiece.
    Rotated,
    /// The sample looked like a vertical page scroll; the drag ended
    /// without rotating.
    ScrollIntent,
}

/// Pointer-driven rotation with post-release inertia.
///
/// Screen-space drag deltas turn into yaw (horizontal travel) and pitch
/// (vertical travel). Pitch is clamped so the showpiece never flips. While
/// dragging, each sample also records an instantaneous angular velocity that
/// keeps the object spinning after release, decaying by `friction` every
/// frame, until it drops below the rest threshold and idle auto-rotation
/// takes over.
#[derive(Debug, Clone)]
pub struct RotationController {
    orientation: Orientation,
    velocity: RotationVelocity,
    pointer: PointerState,

    rotate_speed: f32,
    pitch_limit: f32,
    scroll_ratio: f32,
    friction: f32,
    rest_epsilon: f32,
    auto_rotate_speed: f32,
    auto_rotate_threshold: f32,
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(&ControllerOptions::default())
    }
}

impl RotationController {
    /// Create a controller at rest with the given tuning.
    #[must_use]
    pub fn new(options: &ControllerOptions) -> Self {
        let mut controller = Self {
            orientation: Orientation::default(),
            velocity: RotationVelocity::ZERO,
            pointer: PointerState::default(),
            rotate_speed: 0.0,
            pitch_limit: 0.0,
            scroll_ratio: 0.0,
            friction: 0.0,
            rest_epsilon: 0.0,
            auto_rotate_speed: 0.0,
            auto_rotate_threshold: 0.0,
        };
        controller.apply_options(options);
        controller
    }

    /// Replace the tuning parameters, keeping the current motion.
    ///
    /// Non-finite values fall back to their defaults.
    pub fn apply_options(&mut self, options: &ControllerOptions) {
        let defaults = ControllerOptions::default();
        let pick = |value: f32, default: f32| {
            if value.is_finite() {
                value
            } else {
                default
            }
        };
        self.rotate_speed = pick(options.rotate_speed, defaults.rotate_speed);
        self.pitch_limit =
            pick(options.pitch_limit, defaults.pitch_limit).abs();
        self.scroll_ratio =
            pick(options.scroll_ratio, defaults.scroll_ratio).max(0.0);
        self.friction =
            pick(options.friction, defaults.friction).clamp(0.0, 1.0);
        self.rest_epsilon = pick(options.rest_epsilon, defaults.rest_epsilon);
        self.auto_rotate_speed =
            pick(options.auto_rotate_speed, defaults.auto_rotate_speed);
        self.auto_rotate_threshold = pick(
            options.auto_rotate_threshold,
            defaults.auto_rotate_threshold,
        );
        self.orientation.pitch = self.clamp_pitch(self.orientation.pitch);
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Overwrite the orientation. Pitch is clamped.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Orientation {
            pitch: self.clamp_pitch(orientation.pitch),
            yaw: orientation.yaw,
        };
    }

    /// Residual angular velocity.
    #[must_use]
    pub fn velocity(&self) -> RotationVelocity {
        self.velocity
    }

    /// Gesture reference state.
    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.pointer.active {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    /// Shorthand for `phase() == GesturePhase::Dragging`.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.active
    }

    /// Start a drag at `position`. Any residual spin is cancelled.
    pub fn pointer_down(&mut self, position: Vec2, time_ms: f64) {
        self.pointer = PointerState {
            active: true,
            last_position: position,
            last_timestamp_ms: time_ms,
        };
        self.velocity = RotationVelocity::ZERO;
    }

    /// Feed one move sample of the current drag.
    pub fn pointer_move(&mut self, position: Vec2, time_ms: f64) -> DragOutcome {
        if !self.pointer.active {
            return DragOutcome::Ignored;
        }

        let delta = position - self.pointer.last_position;
        if !delta.is_finite() {
            return DragOutcome::Ignored;
        }

        // Mostly-vertical travel is the user scrolling the page
        if delta.y.abs() > self.scroll_ratio * delta.x.abs() {
            self.pointer.active = false;
            self.velocity = RotationVelocity::ZERO;
            log::debug!("drag released to page scroll (delta {delta})");
            return DragOutcome::ScrollIntent;
        }

        self.rotate(delta);

        let dt = ((time_ms - self.pointer.last_timestamp_ms) / 1000.0) as f32;
        if dt > 0.0 {
            self.velocity = RotationVelocity {
                pitch_per_second: delta.y * self.rotate_speed / dt,
                yaw_per_second: delta.x * self.rotate_speed / dt,
            };
        }

        self.pointer.last_position = position;
        self.pointer.last_timestamp_ms = time_ms;
        DragOutcome::Rotated
    }

    /// End the drag, keeping the velocity of the last sample.
    ///
    /// Returns whether a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.pointer.active;
        self.pointer.active = false;
        was_dragging
    }

    /// Abandon the drag without imparting any spin.
    pub fn cancel(&mut self) {
        self.pointer.active = false;
        self.velocity = RotationVelocity::ZERO;
    }

    /// Advance inertia and auto-rotation by `dt` seconds.
    ///
    /// Does nothing while dragging: the pointer owns the orientation.
    pub fn tick(&mut self, dt: f32) {
        if self.pointer.active {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.velocity.pitch_per_second *= self.friction;
        self.velocity.yaw_per_second *= self.friction;

        self.orientation.pitch = self.clamp_pitch(
            self.orientation.pitch + self.velocity.pitch_per_second * dt,
        );
        self.orientation.yaw += self.velocity.yaw_per_second * dt;

        if self.velocity.pitch_per_second.abs() < self.rest_epsilon
            && self.velocity.yaw_per_second.abs() < self.rest_epsilon
        {
            self.velocity = RotationVelocity::ZERO;
        }

        // Manual spin and auto-spin must not fight
        if self.velocity.yaw_per_second.abs() < self.auto_rotate_threshold {
            self.orientation.yaw += self.auto_rotate_speed * dt;
        }
    }

    fn rotate(&mut self, delta: Vec2) {
        self.orientation.yaw += delta.x * self.rotate_speed;
        self.orientation.pitch = self
            .clamp_pitch(self.orientation.pitch + delta.y * self.rotate_speed);
    }

    fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(-self.pitch_limit, self.pitch_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn drag(controller: &mut RotationController, samples: &[(f32, f32)]) {
        let mut t = 0.0;
        let (x0, y0) = samples[0];
        controller.pointer_down(Vec2::new(x0, y0), t);
        for &(x, y) in &samples[1..] {
            t += 16.0;
            let _ = controller.pointer_move(Vec2::new(x, y), t);
        }
    }

    #[test]
    fn shallow_drag_rotates_yaw_and_pitch() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::new(100.0, 100.0), 0.0);
        let outcome = c.pointer_move(Vec2::new(150.0, 120.0), 16.0);

        assert_eq!(outcome, DragOutcome::Rotated);
        assert!((c.orientation().yaw - 0.5).abs() < EPS);
        assert!((c.orientation().pitch - 0.2).abs() < EPS);
        assert_eq!(c.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn steep_drag_aborts_without_rotating() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::new(100.0, 100.0), 0.0);
        let outcome = c.pointer_move(Vec2::new(110.0, 140.0), 16.0);

        assert_eq!(outcome, DragOutcome::ScrollIntent);
        assert_eq!(c.orientation(), Orientation::default());
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert!(c.velocity().is_zero());

        // Later samples belong to the page scroll
        assert_eq!(
            c.pointer_move(Vec2::new(200.0, 140.0), 32.0),
            DragOutcome::Ignored
        );
    }

    #[test]
    fn exactly_twice_vertical_still_rotates() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        assert_eq!(
            c.pointer_move(Vec2::new(10.0, 20.0), 16.0),
            DragOutcome::Rotated
        );
    }

    #[test]
    fn drag_sum_matches_accumulated_deltas() {
        let mut c = RotationController::default();
        let samples = [
            (0.0, 0.0),
            (10.0, 5.0),
            (25.0, 12.0),
            (20.0, 10.0),
            (60.0, 20.0),
            (90.0, 30.0),
        ];
        drag(&mut c, &samples);

        // Σdx = 90, Σdy = 30
        assert!((c.orientation().yaw - 0.9).abs() < EPS);
        assert!((c.orientation().pitch - 0.3).abs() < EPS);
    }

    #[test]
    fn pitch_is_clamped_both_ways() {
        let mut c = RotationController::default();
        drag(&mut c, &[(0.0, 0.0), (100.0, 50.0), (200.0, 100.0)]);
        assert_eq!(c.orientation().pitch, 0.5);
        assert!((c.orientation().yaw - 2.0).abs() < EPS);

        drag(&mut c, &[(0.0, 0.0), (200.0, -100.0), (400.0, -200.0)]);
        assert_eq!(c.orientation().pitch, -0.5);

        c.set_orientation(Orientation {
            pitch: 3.0,
            yaw: 0.0,
        });
        assert_eq!(c.orientation().pitch, 0.5);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut c = RotationController::default();
        assert_eq!(
            c.pointer_move(Vec2::new(50.0, 0.0), 16.0),
            DragOutcome::Ignored
        );
        assert_eq!(c.orientation(), Orientation::default());
    }

    #[test]
    fn release_keeps_velocity_of_last_sample() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::new(0.0, 0.0), 0.0);
        let _ = c.pointer_move(Vec2::new(50.0, 20.0), 100.0);

        assert!(c.pointer_up());
        let v = c.velocity();
        // 50px * 0.01 / 0.1s
        assert!((v.yaw_per_second - 5.0).abs() < 1e-4);
        assert!((v.pitch_per_second - 2.0).abs() < 1e-4);
        assert!(!c.pointer_up());
    }

    #[test]
    fn zero_dt_sample_keeps_previous_velocity() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(10.0, 0.0), 10.0);
        let before = c.velocity();
        let _ = c.pointer_move(Vec2::new(20.0, 0.0), 10.0);
        assert_eq!(c.velocity(), before);
        assert!((c.orientation().yaw - 0.2).abs() < EPS);
    }

    #[test]
    fn new_press_zeroes_residual_velocity() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(50.0, 0.0), 10.0);
        let _ = c.pointer_up();
        assert!(!c.velocity().is_zero());

        c.pointer_down(Vec2::new(5.0, 5.0), 500.0);
        assert!(c.velocity().is_zero());
        assert_eq!(c.pointer().last_position, Vec2::new(5.0, 5.0));
        assert_eq!(c.pointer().last_timestamp_ms, 500.0);
    }

    #[test]
    fn cancel_drops_spin() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(50.0, 0.0), 10.0);
        c.cancel();
        assert!(!c.is_dragging());
        assert!(c.velocity().is_zero());
    }

    #[test]
    fn velocity_decays_geometrically() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(50.0, 20.0), 100.0);
        let _ = c.pointer_up();
        let v0 = c.velocity();

        for n in 1..=10 {
            c.tick(1.0 / 60.0);
            let expected = v0.yaw_per_second * 0.95_f32.powi(n);
            assert!((c.velocity().yaw_per_second - expected).abs() < 1e-4);
            let expected = v0.pitch_per_second * 0.95_f32.powi(n);
            assert!((c.velocity().pitch_per_second - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn velocity_snaps_to_exact_zero() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(50.0, 20.0), 100.0);
        let _ = c.pointer_up();

        // 5.0 * 0.95^n < 0.001 needs n > 166
        for _ in 0..200 {
            c.tick(1.0 / 60.0);
        }
        assert!(c.velocity().is_zero());
    }

    #[test]
    fn auto_rotation_resumes_after_spin_dies_down() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(50.0, 0.0), 100.0);
        let _ = c.pointer_up();
        assert!((c.velocity().yaw_per_second - 5.0).abs() < 1e-4);

        // 5.0 * 0.95^77 ≈ 0.096
        for _ in 0..77 {
            c.tick(1.0 / 60.0);
        }
        assert!(c.velocity().yaw_per_second < 0.1);

        // Remaining manual spin is dwarfed by the constant auto rate
        let before = c.orientation().yaw;
        c.tick(0.5);
        let step = c.orientation().yaw - before;
        let manual = c.velocity().yaw_per_second * 0.5;
        assert!((step - manual - 0.1).abs() < 1e-4);
    }

    #[test]
    fn auto_rotation_is_suppressed_during_fast_spin() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(50.0, 0.0), 100.0);
        let _ = c.pointer_up();

        let before = c.orientation().yaw;
        c.tick(0.1);
        let expected = 5.0 * 0.95 * 0.1;
        assert!((c.orientation().yaw - before - expected).abs() < 1e-4);
    }

    #[test]
    fn at_rest_idle_spin_is_exactly_auto_rate() {
        let mut c = RotationController::default();
        c.tick(1.0);
        assert!((c.orientation().yaw - 0.2).abs() < EPS);
        c.tick(0.5);
        assert!((c.orientation().yaw - 0.3).abs() < EPS);
    }

    #[test]
    fn tick_while_dragging_is_a_no_op() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(30.0, 0.0), 100.0);
        let before = (c.orientation(), c.velocity());
        c.tick(1.0);
        assert_eq!((c.orientation(), c.velocity()), before);
    }

    #[test]
    fn bad_dt_is_treated_as_zero() {
        let mut c = RotationController::default();
        c.tick(f32::NAN);
        c.tick(-1.0);
        c.tick(f32::INFINITY);
        assert_eq!(c.orientation(), Orientation::default());
    }

    #[test]
    fn inertia_respects_pitch_clamp() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(40.0, 40.0), 10.0);
        let _ = c.pointer_up();
        for _ in 0..300 {
            c.tick(1.0 / 60.0);
            let pitch = c.orientation().pitch;
            assert!((-0.5..=0.5).contains(&pitch));
        }
        assert_eq!(c.orientation().pitch, 0.5);
    }

    #[test]
    fn options_change_pitch_limit_and_reclamp() {
        let mut c = RotationController::default();
        c.set_orientation(Orientation {
            pitch: 0.4,
            yaw: 1.0,
        });
        c.apply_options(&ControllerOptions {
            pitch_limit: 0.25,
            ..ControllerOptions::default()
        });
        assert_eq!(c.orientation().pitch, 0.25);
        assert_eq!(c.orientation().yaw, 1.0);
    }

    #[test]
    fn non_finite_options_fall_back_to_defaults() {
        let mut c = RotationController::new(&ControllerOptions {
            pitch_limit: f32::NAN,
            friction: f32::NAN,
            rotate_speed: f32::INFINITY,
            ..ControllerOptions::default()
        });
        c.pointer_down(Vec2::ZERO, 0.0);
        let _ = c.pointer_move(Vec2::new(50.0, 80.0), 100.0);
        let _ = c.pointer_up();
        c.tick(1.0 / 60.0);

        let o = c.orientation();
        assert!(o.yaw.is_finite());
        assert_eq!(o.pitch, 0.5);
        assert!((c.velocity().yaw_per_second - 5.0 * 0.95).abs() < 1e-4);
    }

    #[test]
    fn pitch_spin_alone_does_not_block_auto_rotation() {
        let mut c = RotationController::default();
        c.pointer_down(Vec2::ZERO, 0.0);
        // yaw 0.05 rad/s (between rest and auto thresholds), pitch 0.08 rad/s
        let _ = c.pointer_move(Vec2::new(0.5, 0.8), 100.0);
        let _ = c.pointer_up();
        assert!((c.velocity().yaw_per_second - 0.05).abs() < 1e-5);

        let before = c.orientation().yaw;
        c.tick(0.5);
        let v = c.velocity();
        assert!(v.pitch_per_second > 0.001);
        assert!(v.yaw_per_second > 0.001 && v.yaw_per_second < 0.1);

        let step = c.orientation().yaw - before;
        let manual = v.yaw_per_second * 0.5;
        assert!((step - manual - 0.1).abs() < 1e-5);
    }
}
