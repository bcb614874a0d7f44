use crate::app::DashboardApp;
use crate::store::SnapshotStore;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_help<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    let mut back = false;

    centered_panel(ctx, 280.0, 460.0, |ui| {
        ui.heading("❓ How to play");
        ui.add_space(10.0);
        ui.label("1. Pick a video or a mission on the dashboard.");
        ui.label("2. Stand in front of the camera and copy the moves.");
        ui.label("3. When the video stops, tap the right answer.");
        ui.label("4. Finish the video to earn a badge and grow your streak!");
        ui.add_space(16.0);
        back = ui.button("⬅ Back").clicked();
    });

    if back {
        app.go_back();
    }
}
