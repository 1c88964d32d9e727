//! Showpiece motion: drag rotation with inertia, and idle floating.

/// Sinusoidal bob, pulse and wobble.
pub mod idle;
/// Pointer-driven rotation state machine with post-release inertia.
pub mod rotation;

pub use idle::{IdleMotion, IdleSample};
pub use rotation::{
    DragOutcome, GesturePhase, Orientation, PointerState, RotationController,
    RotationVelocity,
};
