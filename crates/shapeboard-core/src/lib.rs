//! ShapeBoard Core Library
//!
//! Platform-agnostic model and interaction logic for the ShapeBoard widget:
//! a bounded container of circles that can be added, toggled into a
//! selection, dragged together, and deleted.

pub mod board;
pub mod circle;
pub mod config;
pub mod error;
pub mod gesture;
pub mod input;
pub mod listener;
pub mod rng;
pub mod selection;
pub mod store;

pub use board::{BoardEvent, ShapeBoard};
pub use circle::{Circle, CircleId};
pub use config::{BoardConfig, CirclePalette, SerializableColor};
pub use error::{BoardError, BoardResult};
pub use gesture::DragGesture;
pub use input::{KeyEvent, MouseButton, PointerEvent};
pub use listener::{Channel, ListenerRegistry, Subscription};
pub use rng::{RandomSource, SeededRng};
pub use selection::SelectionSet;
pub use store::ShapeStore;
