//! Layout helpers: separators, section labels, badges.

use egui::{Color32, CornerRadius, Stroke, Ui};

use crate::{sizing, theme};

/// Draw a vertical separator line (small height).
pub fn vertical_separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let height = 14.0;
    let x = rect.left() + 1.0;
    let top = rect.center().y - height / 2.0;
    ui.painter().line_segment(
        [egui::Pos2::new(x, top), egui::Pos2::new(x, top + height)],
        Stroke::new(1.0, Color32::from_gray(210)),
    );
    ui.add_space(3.0);
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(11.0).color(theme::TEXT_MUTED));
}

/// Draw a rounded badge showing a count, highlighted when non-zero.
pub fn count_badge(ui: &mut Ui, label: &str, count: usize) {
    let (fill, text) = if count > 0 {
        (theme::ACCENT, Color32::WHITE)
    } else {
        (Color32::from_gray(235), theme::TEXT)
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("{label}: {count}"))
                    .size(12.0)
                    .color(text),
            );
        });
}
