use crate::app::DashboardApp;
use crate::model::{BackgroundTheme, Route};
use crate::store::SnapshotStore;
use egui::{Align, CentralPanel, Color32, Context, Frame, Layout, RichText, Ui, Visuals};

pub fn theme_visuals(theme: BackgroundTheme) -> Visuals {
    let mut visuals = match theme {
        BackgroundTheme::Space => Visuals::dark(),
        BackgroundTheme::Sky | BackgroundTheme::Forest => Visuals::light(),
    };
    visuals.panel_fill = match theme {
        BackgroundTheme::Sky => Color32::from_rgb(214, 236, 255),
        BackgroundTheme::Forest => Color32::from_rgb(220, 242, 214),
        BackgroundTheme::Space => Color32::from_rgb(20, 22, 48),
    };
    visuals
}

pub fn apply_theme(ctx: &Context, theme: BackgroundTheme) {
    let visuals = theme_visuals(theme);
    if ctx.style().visuals != visuals {
        ctx.set_visuals(visuals);
    }
}

pub fn top_panel<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let user = app.store.user();
            ui.label(RichText::new(format!("🧒 {}", user.name)).strong());
            ui.label(format!("🔥 {}", user.streak));
            ui.label(format!("🏅 {}", user.badges.len()));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("❓ Help").clicked() && !app.router.is_current_route(Route::Help) {
                    app.show_help();
                }
                if ui.button("🏅 Badges").clicked() && !app.router.is_current_route(Route::Badges)
                {
                    app.show_badges();
                }
                if ui.button("🏠 Home").clicked() {
                    app.go_home();
                }
            });
        });
    });
}

pub fn bottom_panel<S: SnapshotStore>(app: &mut DashboardApp<S>, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("🐻 {}", app.store.ui().mascot_message));

            // ----------- theme buttons -----------
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                for theme in BackgroundTheme::ALL.into_iter().rev() {
                    let selected = app.store.ui().background_theme == theme;
                    if ui.selectable_label(selected, theme.label()).clicked() && !selected {
                        app.store.change_background_theme(theme);
                    }
                }
            });
        });
    });
}

/// Framed column centered both ways, at most `max_width` wide.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    ui.with_layout(Layout::top_down(Align::Center), inner);
                });
        });
        ui.add_space(extra);
    });
}
