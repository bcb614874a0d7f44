use crate::app::DashboardApp;
use crate::store::SnapshotStore;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_badges<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    let mut back = false;

    CentralPanel::default().show(ctx, |ui| {
        let width = ui.available_width().min(480.0);
        let now = chrono::Utc::now();
        let recent: Vec<&str> = app
            .store
            .recent_badges(now)
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();

        ui.vertical_centered(|ui| {
            ui.set_width(width);
            ui.heading("🏅 My badges");
            ui.add_space(12.0);

            let badges = &app.store.user().badges;
            if badges.is_empty() {
                ui.label("No badges yet. Finish a video to earn one!");
            }
            ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                for badge in badges {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&badge.icon).size(28.0));
                        ui.label(RichText::new(&badge.name).strong());
                        ui.small(badge.earned_at.format("%b %d").to_string());
                        if recent.contains(&badge.id.as_str()) {
                            ui.small("✨ new");
                        }
                    });
                }
            });

            ui.add_space(16.0);
            back = ui.button("⬅ Back").clicked();
        });
    });

    if back {
        app.go_back();
    }
}
