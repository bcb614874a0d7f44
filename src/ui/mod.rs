mod helpers;
pub mod layout;
pub mod views;

use crate::app::DashboardApp;
use crate::model::Route;
use crate::store::SnapshotStore;
use eframe::{App, Frame};
use egui::Context;
use layout::{apply_theme, bottom_panel, top_panel};
use std::time::Duration;

impl<S: SnapshotStore> App for DashboardApp<S> {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        if !self.poll_initialize(now) {
            views::loading::ui_loading(ctx);
            ctx.request_repaint_after(Duration::from_millis(100));
            return;
        }

        apply_theme(ctx, self.store.ui().background_theme);

        // top and bottom bars stay hidden while a video is playing
        if !self.router.is_current_route(Route::VideoPlayer) {
            top_panel(self, ctx);
            bottom_panel(self, ctx);
        }

        // one view per route
        match self.router.current_route() {
            Route::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            Route::MissionIntro => views::mission_intro::ui_mission_intro(self, ctx),
            Route::VideoTransition => views::video_transition::ui_video_transition(self, ctx),
            Route::VideoPlayer => views::video_player::ui_video_player(self, ctx),
            Route::Completion => views::completion::ui_completion(self, ctx),
            Route::Badges => views::badges::ui_badges(self, ctx),
            Route::Help => views::help::ui_help(self, ctx),
        }

        self.sync_router_events();
    }
}
