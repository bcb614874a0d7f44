use crate::app::DashboardApp;
use crate::store::SnapshotStore;
use crate::ui::helpers::two_button_row;
use crate::ui::layout::centered_panel;
use egui::{Context, ProgressBar, RichText};
use std::time::Duration;

pub fn ui_video_transition<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    let elapsed = app.route_elapsed(ctx.input(|i| i.time));
    let delay = app.config.transition_delay_ms as f64 / 1000.0;
    let (mut start, mut back) = (false, false);

    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.label(RichText::new("🤸").size(56.0));
        if let Some(video) = app.router.selected_video() {
            ui.heading(format!("Get ready for {}!", video.title));
        }
        ui.label("Stand where the camera can see you.");
        ui.add_space(12.0);
        let fraction = if delay > 0.0 { (elapsed / delay).min(1.0) } else { 1.0 };
        let remaining = (delay - elapsed).max(0.0).ceil();
        ui.add(ProgressBar::new(fraction as f32).text(format!("Starting in {remaining}...")));
        ui.add_space(12.0);
        (start, back) = two_button_row(ui, 300.0, "Start now", "Back");
    });

    if back {
        app.go_home();
    } else if start || elapsed >= delay {
        app.enter_player();
    } else {
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
