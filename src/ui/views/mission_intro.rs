use crate::app::DashboardApp;
use crate::store::SnapshotStore;
use crate::ui::helpers::two_button_row;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_mission_intro<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    let mut go = false;
    let mut later = false;

    centered_panel(ctx, 240.0, 460.0, |ui| {
        if let Some(hw) = app.router.selected_homework() {
            ui.label(RichText::new(&hw.icon).size(48.0));
            ui.heading(format!("Mission: {}", hw.title));
            if !hw.assigned_by.is_empty() {
                ui.label(format!("Sent by {}", hw.assigned_by));
            }
        }
        if let Some(video) = app.router.selected_video() {
            ui.add_space(8.0);
            ui.label(format!("You will play \"{}\" and answer {} question(s).", video.title, video.questions.len()));
        }
        ui.add_space(18.0);
        (go, later) = two_button_row(ui, 320.0, "🚀 Let's go!", "Not now");
    });

    if go {
        app.finish_mission_intro();
    } else if later {
        app.go_home();
    }
}
