//! Input events delivered by the host.
//!
//! Positions are in container-local coordinates: the container's top-left
//! corner is the origin. Events outside the container carry coordinates
//! outside `[0, width] x [0, height]`.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Key name that deletes the current selection.
pub const DELETE_KEY: &str = "Backspace";

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

impl PointerEvent {
    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => position,
        }
    }
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    /// Whether this is a key-down for the delete key.
    pub fn is_delete(&self) -> bool {
        matches!(self, KeyEvent::Pressed(key) if key == DELETE_KEY)
    }
}
