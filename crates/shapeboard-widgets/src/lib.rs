//! Reusable egui widget components for ShapeBoard.
//!
//! - **Buttons**: accent action button
//! - **Frames**: toolbar and container frames
//! - **Layout**: section labels, separators, count badges

pub mod buttons;
pub mod frames;
pub mod layout;

pub use buttons::ActionButton;
pub use frames::{container_frame, toolbar_frame};
pub use layout::{count_badge, section_label, vertical_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Action button height
    pub const BUTTON_HEIGHT: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Accent when hovered
    pub const ACCENT_HOVER: Color32 = Color32::from_rgb(37, 99, 235);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
