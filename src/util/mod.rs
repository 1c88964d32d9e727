//! Shared utilities.

/// Frame delta timing for hosts without their own frame timestamps.
pub mod frame_timing;

pub use frame_timing::FrameClock;
