use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 120.0, 360.0, |ui| {
        ui.add(Spinner::new().size(48.0));
        ui.add_space(12.0);
        ui.label(RichText::new("Loading your adventure...").heading());
    });
}
