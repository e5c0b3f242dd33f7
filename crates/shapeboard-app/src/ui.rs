//! UI components using egui.

use egui::{Align2, Color32, Context, Pos2, Sense, Stroke, Vec2};
use kurbo::Size;
use peniko::Color;
use shapeboard_core::{Circle, CirclePalette, ShapeBoard};
use shapeboard_widgets::{
    container_frame, count_badge, section_label, toolbar_frame, vertical_separator, ActionButton,
};

use crate::config::AppConfig;
use crate::input::{translate_events, BoardInput};
use crate::shortcuts::ShortcutRegistry;

/// Actions triggered by UI controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    AddCircle,
}

/// UI state that persists between frames.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Last rejected operation, shown in the toolbar.
    pub status: Option<String>,
}

/// Everything one UI pass produced, applied to the board afterwards.
#[derive(Debug, Default)]
pub struct UiOutput {
    pub action: Option<UiAction>,
    pub inputs: Vec<BoardInput>,
    /// Measured container size this frame.
    pub container: Option<Size>,
}

/// Convert a peniko color to egui.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Render the whole UI for one frame.
///
/// The board is only read here; the returned output is applied by the
/// caller once the pass is over.
pub fn render_ui(
    ctx: &Context,
    board: &ShapeBoard,
    ui_state: &UiState,
    config: &AppConfig,
) -> UiOutput {
    let mut output = UiOutput::default();

    egui::TopBottomPanel::top("toolbar")
        .frame(egui::Frame::new().inner_margin(egui::Margin::same(12)))
        .show_separator_line(false)
        .show(ctx, |ui| {
            toolbar_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ActionButton::new("Add circle")
                        .tooltip("Place a circle at a random position")
                        .enabled(board.is_mounted())
                        .show(ui)
                    {
                        output.action = Some(UiAction::AddCircle);
                    }
                    vertical_separator(ui);
                    count_badge(ui, "Circles", board.len());
                    count_badge(ui, "Selected", board.selection().len());
                    vertical_separator(ui);
                    section_label(ui, &ShortcutRegistry::hint());
                    if let Some(status) = &ui_state.status {
                        vertical_separator(ui);
                        ui.colored_label(Color32::from_rgb(220, 38, 38), status);
                    }
                });
            });
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(to_color32(config.background_color.into())))
        .show(ctx, |ui| {
            let available = ui.available_size();
            let size = Vec2::new(
                config.container_width.min(available.x - 24.0).max(1.0),
                config.container_height.min(available.y - 24.0).max(1.0),
            );

            ui.vertical_centered(|ui| {
                container_frame(to_color32(config.container_color.into())).show(ui, |ui| {
                    let (rect, _response) = ui.allocate_exact_size(size, Sense::click_and_drag());
                    let painter = ui.painter_at(rect);

                    for circle in board.circles() {
                        paint_circle(
                            &painter,
                            rect.min,
                            circle,
                            board.is_selected(circle.id()),
                            &config.board.palette,
                        );
                    }

                    if board.is_empty() {
                        painter.text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            "Press \"Add circle\" to start",
                            egui::FontId::proportional(14.0),
                            Color32::from_gray(170),
                        );
                    }

                    let keyboard_free = !ui.ctx().wants_keyboard_input();
                    let events = ui.ctx().input(|i| i.events.clone());
                    output.inputs = translate_events(&events, rect, keyboard_free);
                    output.container = Some(Size::new(rect.width() as f64, rect.height() as f64));
                });
            });
        });

    output
}

/// Paint one circle; `origin` is the container's top-left in screen space.
fn paint_circle(
    painter: &egui::Painter,
    origin: Pos2,
    circle: &Circle,
    selected: bool,
    palette: &CirclePalette,
) {
    let center = circle.center();
    let center = Pos2::new(origin.x + center.x as f32, origin.y + center.y as f32);
    let radius = circle.radius() as f32;

    painter.circle_filled(center, radius, to_color32(palette.fill_for(selected)));
    if let Some((color, width)) = palette.stroke_for(selected) {
        // Inset so the outline stays inside the clamped bounds
        let inset = width as f32 / 2.0;
        painter.circle_stroke(
            center,
            (radius - inset).max(0.0),
            Stroke::new(width as f32, to_color32(color)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32() {
        let color = Color::from_rgba8(10, 20, 30, 255);
        assert_eq!(to_color32(color), Color32::from_rgb(10, 20, 30));
    }
}
