//! Routes raw pointer and touch events into the rotation controller.
//!
//! The `InputProcessor` owns the transient gesture bookkeeping that the
//! controller does not care about: which device started the drag and
//! whether the host should suppress its native default for an event.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::controller::{DragOutcome, RotationController};

/// What the host should do with the native event after processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The event drove the showpiece; suppress the native default
    /// (`preventDefault`).
    Consumed,
    /// Let the page handle the event normally (scrolling, selection).
    PassThrough,
}

impl EventResponse {
    /// Whether the host should call `preventDefault`.
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Device that started the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse or pen.
    Mouse,
    /// A single finger.
    Touch,
}

/// Converts raw window events into [`RotationController`] calls.
///
/// # Usage
///
/// ```
/// use toque::controller::RotationController;
/// use toque::input::{InputEvent, InputProcessor, MouseButton};
///
/// let mut controller = RotationController::default();
/// let mut input = InputProcessor::new();
/// let down = InputEvent::PointerDown {
///     x: 100.0,
///     y: 100.0,
///     button: MouseButton::Left,
///     time_ms: 0.0,
/// };
/// assert!(input.handle_event(down, &mut controller).is_consumed());
/// assert!(controller.is_dragging());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    source: Option<PointerSource>,
}

impl InputProcessor {
    /// Create a processor with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Device driving the current drag, if any.
    #[must_use]
    pub fn source(&self) -> Option<PointerSource> {
        self.source
    }

    /// Process one event against `controller`.
    ///
    /// Viewport events (`Resize`, `Bounds`) are not pointer input and pass
    /// through untouched.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        controller: &mut RotationController,
    ) -> EventResponse {
        // The controller may have ended the drag itself (scroll intent)
        if !controller.is_dragging() {
            self.source = None;
        }

        match event {
            InputEvent::PointerDown {
                x,
                y,
                button,
                time_ms,
            } => self.handle_pointer_down(x, y, button, time_ms, controller),
            InputEvent::PointerMove { x, y, time_ms } => self.handle_move(
                PointerSource::Mouse,
                x,
                y,
                time_ms,
                controller,
            ),
            InputEvent::PointerUp => {
                self.release(PointerSource::Mouse, controller);
                EventResponse::PassThrough
            }
            InputEvent::TouchStart {
                touches,
                x,
                y,
                time_ms,
            } => self.handle_touch_start(touches, x, y, time_ms, controller),
            InputEvent::TouchMove {
                touches,
                x,
                y,
                time_ms,
            } => {
                if touches != 1 {
                    return EventResponse::PassThrough;
                }
                self.handle_move(PointerSource::Touch, x, y, time_ms, controller)
            }
            InputEvent::TouchEnd { remaining } => {
                if remaining == 0 {
                    self.release(PointerSource::Touch, controller);
                }
                EventResponse::PassThrough
            }
            InputEvent::TouchCancel => {
                if self.source == Some(PointerSource::Touch) {
                    controller.cancel();
                    self.source = None;
                }
                EventResponse::PassThrough
            }
            InputEvent::Resize { .. } | InputEvent::Bounds { .. } => {
                EventResponse::PassThrough
            }
        }
    }

    fn handle_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        button: MouseButton,
        time_ms: f64,
        controller: &mut RotationController,
    ) -> EventResponse {
        if button != MouseButton::Left || !x.is_finite() || !y.is_finite() {
            return EventResponse::PassThrough;
        }
        controller.pointer_down(Vec2::new(x, y), time_ms);
        self.source = Some(PointerSource::Mouse);
        EventResponse::Consumed
    }

    fn handle_touch_start(
        &mut self,
        touches: u32,
        x: f32,
        y: f32,
        time_ms: f64,
        controller: &mut RotationController,
    ) -> EventResponse {
        if touches != 1 {
            // A second finger turns the gesture into a pinch/zoom
            if self.source == Some(PointerSource::Touch) {
                controller.cancel();
                self.source = None;
            }
            return EventResponse::PassThrough;
        }
        if !x.is_finite() || !y.is_finite() {
            return EventResponse::PassThrough;
        }
        controller.pointer_down(Vec2::new(x, y), time_ms);
        self.source = Some(PointerSource::Touch);
        // Not consumed: the browser decides on scrolling at touch start
        EventResponse::PassThrough
    }

    fn handle_move(
        &mut self,
        source: PointerSource,
        x: f32,
        y: f32,
        time_ms: f64,
        controller: &mut RotationController,
    ) -> EventResponse {
        if self.source != Some(source) {
            return EventResponse::PassThrough;
        }
        match controller.pointer_move(Vec2::new(x, y), time_ms) {
            DragOutcome::Rotated => EventResponse::Consumed,
            DragOutcome::ScrollIntent => {
                self.source = None;
                EventResponse::PassThrough
            }
            DragOutcome::Ignored => EventResponse::PassThrough,
        }
    }

    fn release(
        &mut self,
        source: PointerSource,
        controller: &mut RotationController,
    ) {
        if self.source == Some(source) {
            let _ = controller.pointer_up();
            self.source = None;
        }
    }
}
