//! Input handling: platform-agnostic event types and the processor that
//! turns pointer and touch events into showpiece rotation.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into controller calls.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{EventResponse, InputProcessor, PointerSource};
