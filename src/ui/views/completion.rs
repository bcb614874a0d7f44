use crate::app::DashboardApp;
use crate::store::SnapshotStore;
use crate::ui::helpers::two_button_row;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_completion<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    let (mut home, mut badges) = (false, false);

    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.label(RichText::new("🎉").size(56.0));
        ui.heading("Great job!");
        ui.label(RichText::new(format!("Score: {}", app.router.completion_score().value())).size(24.0));

        let reward = app
            .router
            .selected_video()
            .and_then(|v| v.completion_reward.as_ref());
        if let Some(reward) = reward {
            ui.add_space(8.0);
            ui.label(format!("New badge: {} {}", reward.icon, reward.name));
        }
        ui.label(format!("🔥 Streak: {}", app.store.user().streak));
        ui.add_space(18.0);
        (home, badges) = two_button_row(ui, 320.0, "🏠 Home", "🏅 My badges");
    });

    if home {
        app.go_home();
    } else if badges {
        app.show_badges();
    }
}
