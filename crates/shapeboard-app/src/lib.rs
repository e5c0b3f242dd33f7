//! ShapeBoard Application
//!
//! The application shell providing windowing, GPU presentation, egui
//! integration, and input translation for the ShapeBoard core.

mod app;
mod config;
mod error;
mod gpu;
mod input;
mod shortcuts;
mod ui;

pub use app::App;
pub use config::AppConfig;
pub use error::AppError;
pub use input::{BoardInput, translate_events};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{render_ui, UiAction, UiOutput, UiState};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
