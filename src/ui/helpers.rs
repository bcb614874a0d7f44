// src/ui/helpers.rs
use crate::model::HomeworkStatus;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: impl Into<String>, width: f32, height: f32, enabled: bool) -> bool {
    let label = RichText::new(label.into()).size(18.0);
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Two equal buttons centered in `panel_width`.
/// Returns (left clicked, right clicked).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui.add_sized([btn_w, 40.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 40.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}

pub fn status_chip(status: HomeworkStatus) -> RichText {
    let color = match status {
        HomeworkStatus::NotStarted => Color32::GRAY,
        HomeworkStatus::InProgress => Color32::from_rgb(230, 160, 20),
        HomeworkStatus::Completed => Color32::from_rgb(40, 160, 70),
    };
    RichText::new(status.label()).color(color).small()
}
