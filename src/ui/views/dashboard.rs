use crate::app::DashboardApp;
use crate::model::HomeworkStatus;
use crate::store::SnapshotStore;
use crate::ui::helpers::{big_button, status_chip};
use egui::{CentralPanel, Context, RichText, ScrollArea};

enum Pick {
    Video(String),
    Homework(String),
}

pub fn ui_dashboard<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    let mut pick = None;

    CentralPanel::default().show(ctx, |ui| {
        let content_width = ui.available_width().min(560.0);
        let user = app.store.user();
        let recent = app.store.recent_badges(chrono::Utc::now()).len();

        ui.vertical_centered(|ui| {
            ui.set_width(content_width);
            ui.heading(format!("Hi {}! 👋", user.name));
            if recent > 0 {
                ui.label(format!("You earned {recent} new badge(s) today!"));
            }
            ui.add_space(16.0);

            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                ui.label(RichText::new("🎬 Pick a video").strong().size(20.0));
                ui.add_space(6.0);
                for video in &app.store.content().preset_videos {
                    let label = format!("▶ {}  ({} min)", video.title, video.duration_secs.div_ceil(60));
                    if big_button(ui, label, content_width, 44.0, true) {
                        pick = Some(Pick::Video(video.id.clone()));
                    }
                    ui.add_space(4.0);
                }

                ui.add_space(18.0);
                ui.label(RichText::new("📚 Missions").strong().size(20.0));
                ui.add_space(6.0);
                let pending = app.store.homework_by_status(HomeworkStatus::NotStarted).len()
                    + app.store.homework_by_status(HomeworkStatus::InProgress).len();
                ui.label(format!("{pending} mission(s) waiting"));

                for hw in &app.store.content().homework {
                    ui.horizontal(|ui| {
                        let label = format!("{} {}", hw.icon, hw.title);
                        let playable = hw.video.is_some();
                        if big_button(ui, label, content_width * 0.75, 44.0, playable) {
                            pick = Some(Pick::Homework(hw.id.clone()));
                        }
                        ui.vertical(|ui| {
                            ui.label(status_chip(hw.status));
                            if !hw.assigned_by.is_empty() {
                                ui.small(format!("from {}", hw.assigned_by));
                            }
                        });
                    });
                    ui.add_space(4.0);
                }

                if !app.message.is_empty() {
                    ui.add_space(10.0);
                    ui.label(&app.message);
                }
            });
        });
    });

    match pick {
        Some(Pick::Video(id)) => app.pick_video(&id),
        Some(Pick::Homework(id)) => app.pick_homework(&id),
        None => {}
    }
}
