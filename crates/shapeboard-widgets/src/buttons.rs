//! Button components.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Ui};

use crate::{sizing, theme};

/// A filled accent button with a text label.
pub struct ActionButton<'a> {
    label: &'a str,
    tooltip: Option<&'a str>,
    enabled: bool,
}

impl<'a> ActionButton<'a> {
    /// Create a new action button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            tooltip: None,
            enabled: true,
        }
    }

    /// Hover text.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font = egui::FontId::proportional(13.0);
        let text_width = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font.clone(), Color32::WHITE)
            .size()
            .x;
        let size = vec2(text_width + 24.0, sizing::BUTTON_HEIGHT);
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(size, sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if !self.enabled {
                Color32::from_gray(200)
            } else if response.hovered() {
                theme::ACCENT_HOVER
            } else {
                theme::ACCENT
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().text(
                Pos2::new(rect.center().x, rect.center().y),
                egui::Align2::CENTER_CENTER,
                self.label,
                font,
                Color32::WHITE,
            );
        }

        let clicked = self.enabled && response.clicked();
        let response = if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand)
        } else {
            response
        };
        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip);
        }
        clicked
    }
}
