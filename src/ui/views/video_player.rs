use crate::app::DashboardApp;
use crate::model::AnswerOption;
use crate::store::SnapshotStore;
use egui::{Button, CentralPanel, Color32, Context, ProgressBar, RichText};

enum PlayerInput {
    Answer(AnswerOption),
    Finish,
    Quit,
}

pub fn ui_video_player<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    let dt = ctx.input(|i| i.stable_dt);
    let camera_on = app.camera_on();
    let mut input = None;

    CentralPanel::default().show(ctx, |ui| {
        let width = ui.available_width().min(640.0);
        ui.vertical_centered(|ui| {
            ui.set_width(width);
            let Some(player) = app.player.as_mut() else {
                ui.heading("Nothing is playing");
                if ui.button("🏠 Back to dashboard").clicked() {
                    input = Some(PlayerInput::Quit);
                }
                return;
            };

            player.tick(dt);

            ui.heading(&player.video().title);
            let camera = if camera_on {
                RichText::new("📷 Camera on").color(Color32::from_rgb(40, 160, 70))
            } else {
                RichText::new("📷 Camera off").color(Color32::GRAY)
            };
            ui.label(camera);
            ui.add_space(8.0);
            ui.add(ProgressBar::new(player.progress()).text(format!(
                "{:.0}s / {:.0}s",
                player.position(),
                player.duration()
            )));
            ui.add_space(16.0);

            if let Some(question) = player.pending_question() {
                ui.label(RichText::new(&question.question).size(22.0).strong());
                ui.add_space(8.0);
                for option in [AnswerOption::A, AnswerOption::B, AnswerOption::C] {
                    let button = Button::new(RichText::new(question.option(option)).size(18.0));
                    if ui.add_sized([width * 0.8, 44.0], button).clicked() {
                        input = Some(PlayerInput::Answer(option));
                    }
                    ui.add_space(4.0);
                }
            } else if player.is_finished() {
                input = Some(PlayerInput::Finish);
            } else {
                ui.label("Keep moving! 💪");
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }

            ui.add_space(16.0);
            if ui.button("⏹ Quit").clicked() {
                input = Some(PlayerInput::Quit);
            }
        });
    });

    match input {
        Some(PlayerInput::Answer(option)) => app.answer(option),
        Some(PlayerInput::Finish) => app.finish_video(),
        Some(PlayerInput::Quit) => app.quit_video(),
        None => ctx.request_repaint(),
    }
}
