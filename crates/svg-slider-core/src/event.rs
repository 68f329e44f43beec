//! Input events delivered to widgets.
//!
//! Pointer positions are client-space coordinates (the same space the host
//! reports the drawing surface's bounding box in).

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer button pressed over the widget
    PointerDown {
        /// Client-space position
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Pointer moved (delivered document-wide while a gesture is active)
    PointerMove {
        /// Client-space position
        position: Point,
    },
    /// Pointer button released
    PointerUp {
        /// Client-space position
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse wheel turned over the widget
    Wheel {
        /// Horizontal delta, in whatever unit the device reports
        delta_x: f64,
        /// Vertical delta, in whatever unit the device reports
        delta_y: f64,
    },
}

impl Event {
    /// Client-space position for pointer events.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position, .. }
            | Self::PointerMove { position }
            | Self::PointerUp { position, .. } => Some(*position),
            Self::Wheel { .. } => None,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Extra button (back)
    Button4,
    /// Extra button (forward)
    Button5,
}

impl From<i16> for MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    fn from(code: i16) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            3 => Self::Button4,
            _ => Self::Button5,
        }
    }
}
