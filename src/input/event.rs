use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into a [`Stage`](crate::stage::Stage), which routes pointer
/// and touch events through its [`InputProcessor`](super::InputProcessor)
/// and handles viewport notifications itself. Coordinates are CSS pixels
/// relative to the viewport; timestamps are host milliseconds.
///
/// Serde tags events by `kind` so replay scripts stay readable:
/// ```toml
/// [[steps]]
/// kind = "pointer_down"
/// x = 100.0
/// y = 100.0
/// time_ms = 0.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Mouse button pressed over the showpiece.
    PointerDown {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
        /// Which button changed.
        #[serde(default)]
        button: MouseButton,
        /// Event timestamp.
        time_ms: f64,
    },
    /// Mouse moved anywhere in the window.
    PointerMove {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
        /// Event timestamp.
        time_ms: f64,
    },
    /// Mouse button released anywhere in the window.
    PointerUp,
    /// Finger(s) touched the showpiece.
    TouchStart {
        /// Number of touch points now on the surface.
        touches: u32,
        /// Horizontal position of the first touch point.
        x: f32,
        /// Vertical position of the first touch point.
        y: f32,
        /// Event timestamp.
        time_ms: f64,
    },
    /// Touch point(s) moved.
    TouchMove {
        /// Number of touch points on the surface.
        touches: u32,
        /// Horizontal position of the first touch point.
        x: f32,
        /// Vertical position of the first touch point.
        y: f32,
        /// Event timestamp.
        time_ms: f64,
    },
    /// Touch point(s) lifted.
    TouchEnd {
        /// Number of touch points still on the surface.
        #[serde(default)]
        remaining: u32,
    },
    /// The host lost track of the touch (e.g. a system gesture took over).
    TouchCancel,
    /// Viewport resized.
    Resize {
        /// New viewport width.
        width: f32,
        /// New viewport height.
        height: f32,
    },
    /// Screen rectangle of the showpiece's container changed.
    Bounds {
        /// Left edge.
        left: f32,
        /// Top edge.
        top: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    #[default]
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index. Unknown buttons map to `Middle`
    /// so they never start a drag.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Left,
            2 => Self::Right,
            _ => Self::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_button_mapping() {
        assert_eq!(MouseButton::from_dom(0), MouseButton::Left);
        assert_eq!(MouseButton::from_dom(1), MouseButton::Middle);
        assert_eq!(MouseButton::from_dom(2), MouseButton::Right);
        assert_eq!(MouseButton::from_dom(4), MouseButton::Middle);
    }

    #[test]
    fn tagged_toml_event() {
        #[derive(Deserialize)]
        struct Wrapper {
            event: InputEvent,
        }
        let parsed: Wrapper = toml::from_str(
            r#"
[event]
kind = "pointer_down"
x = 100.0
y = 80.0
time_ms = 12.5
"#,
        )
        .unwrap();
        assert_eq!(
            parsed.event,
            InputEvent::PointerDown {
                x: 100.0,
                y: 80.0,
                button: MouseButton::Left,
                time_ms: 12.5,
            }
        );
    }
}
