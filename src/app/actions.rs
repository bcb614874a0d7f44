use super::*;
use crate::model::AnswerOption;
use crate::router::NavigationError;

impl<S: SnapshotStore> DashboardApp<S> {
    pub fn pick_video(&mut self, video_id: &str) {
        let Some(video) = self.store.find_video(video_id).cloned() else {
            log::warn!("unknown video {video_id}");
            return;
        };
        self.message.clear();
        self.router.start_video(video);
        self.sync_router_events();
    }

    pub fn pick_homework(&mut self, homework_id: &str) {
        let Some(homework) = self.store.find_homework(homework_id).cloned() else {
            log::warn!("unknown homework {homework_id}");
            return;
        };
        let result = self.router.start_homework(homework);
        self.after(result);
    }

    pub fn finish_mission_intro(&mut self) {
        let result = self.router.complete_mission_intro();
        self.after(result);
    }

    /// Leaves the transition screen and starts playback, holding the camera
    /// until the video ends or is quit.
    pub fn enter_player(&mut self) {
        if let Err(e) = self.router.complete_transition() {
            self.after(Err(e));
            return;
        }
        self.player = self.router.selected_video().cloned().map(PlayerSession::new);

        let camera = self.camera_on.clone();
        match self
            .router
            .register_cleanup("camera", move || camera.set(false))
        {
            Ok(lease) => {
                self.camera_on.set(true);
                self.camera_lease = Some(lease);
            }
            Err(e) => log::warn!("camera not acquired: {e}"),
        }
        self.sync_router_events();
    }

    pub fn answer(&mut self, option: AnswerOption) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        self.message = match player.answer(option) {
            Some(true) => "Correct! Keep moving!".to_owned(),
            Some(false) => "Nice try! Let's keep going.".to_owned(),
            None => return,
        };
    }

    /// Playback reached the end: release the camera, then show the score.
    pub fn finish_video(&mut self) {
        let score = self.player.take().map(|p| p.score()).unwrap_or_default();
        self.release_camera();
        let result = self.router.complete_video(score);
        self.after(result);
    }

    pub fn quit_video(&mut self) {
        self.player = None;
        self.router.quit_video();
        // the router already ran the teardown
        self.camera_lease = None;
        self.sync_router_events();
    }

    pub fn go_home(&mut self) {
        self.player = None;
        self.router.go_home();
        self.camera_lease = None;
        self.message.clear();
        self.sync_router_events();
    }

    pub fn go_back(&mut self) {
        self.router.go_back();
        self.sync_router_events();
    }

    pub fn show_badges(&mut self) {
        self.router.show_badges();
        self.sync_router_events();
    }

    pub fn show_help(&mut self) {
        self.router.show_help();
        self.sync_router_events();
    }

    fn release_camera(&mut self) {
        if let Some(lease) = self.camera_lease.take() {
            if let Err(e) = self.router.release(lease) {
                log::debug!("camera lease already gone: {e}");
            }
        }
    }

    fn after(&mut self, result: Result<(), NavigationError>) {
        match result {
            Ok(()) => self.message.clear(),
            Err(e) => {
                log::warn!("navigation refused: {e}");
                self.message = e.to_string();
            }
        }
        self.sync_router_events();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DashboardView, HomeworkStatus};
    use crate::store::MemorySnapshotStore;

    fn app() -> DashboardApp<MemorySnapshotStore> {
        let catalog = crate::data::read_catalog_embedded().unwrap();
        let config = DashboardConfig {
            loading_delay_ms: 0,
            ..DashboardConfig::default()
        };
        let store = DashboardStore::new(MemorySnapshotStore::new(), catalog);
        let mut app = DashboardApp::new(config, store, SessionSeed::default());
        assert!(app.poll_initialize(0.0));
        app
    }

    fn play_through(app: &mut DashboardApp<MemorySnapshotStore>) {
        while let Some(player) = app.player.as_mut() {
            player.tick(1000.0);
            if let Some(q) = player.pending_question() {
                let right = q.correct_answer.unwrap_or(AnswerOption::A);
                app.answer(right);
            } else if player.is_finished() {
                app.finish_video();
            }
        }
    }

    #[test]
    fn loading_waits_for_delay() {
        let store = DashboardStore::new(MemorySnapshotStore::new(), Default::default());
        let mut app = DashboardApp::new(DashboardConfig::default(), store, SessionSeed::default());
        assert!(!app.poll_initialize(10.0));
        assert!(!app.poll_initialize(10.5));
        assert!(app.poll_initialize(11.0));
        assert_eq!(app.store.user().name, "Alex");
    }

    #[test]
    fn homework_flow_updates_store() {
        let mut app = app();
        app.pick_homework("h1");
        assert_eq!(app.router.current_route(), Route::MissionIntro);
        assert_eq!(
            app.store.find_homework("h1").unwrap().status,
            HomeworkStatus::InProgress
        );

        app.finish_mission_intro();
        app.enter_player();
        assert!(app.camera_on());
        play_through(&mut app);

        assert_eq!(app.router.current_route(), Route::Completion);
        assert_eq!(app.router.completion_score().value(), 100);
        assert!(!app.camera_on());
        assert!(!app.router.has_cleanup());
        assert_eq!(
            app.store.find_homework("h1").unwrap().status,
            HomeworkStatus::Completed
        );
        assert_eq!(app.store.user().streak, 1);
        assert_eq!(app.store.user().badges.len(), 1);
        assert_eq!(app.store.user().badges[0].id, "reward-jump-count");
    }

    #[test]
    fn quitting_releases_camera() {
        let mut app = app();
        app.pick_video("v1");
        app.enter_player();
        assert!(app.camera_on());
        app.quit_video();
        assert!(!app.camera_on());
        assert_eq!(app.router.current_route(), Route::Dashboard);
        assert!(app.player.is_none());
        assert_eq!(app.store.user().streak, 0);
    }

    #[test]
    fn section_routes_mirror_into_store() {
        let mut app = app();
        app.show_badges();
        assert_eq!(app.store.ui().current_view, DashboardView::Badges);
        app.go_back();
        assert_eq!(app.store.ui().current_view, DashboardView::Dashboard);
    }

    #[test]
    fn refused_navigation_is_reported() {
        let mut app = app();
        app.enter_player();
        assert_eq!(app.router.current_route(), Route::Dashboard);
        assert!(!app.message.is_empty());
        assert!(app.player.is_none());
    }

    #[test]
    fn second_video_gets_its_own_countdown() {
        let mut app = app();
        app.pick_video("v1");
        assert_eq!(app.route_elapsed(1.0), 0.0);
        app.go_home();
        app.pick_video("v2");
        assert_eq!(app.route_elapsed(61.0), 0.0);
        assert_eq!(app.route_elapsed(62.0), 1.0);
    }

    #[test]
    fn saved_session_skips_loading_delay() {
        let mut first = DashboardStore::new(MemorySnapshotStore::new(), Default::default());
        first.initialize(&SessionSeed::default());
        first.increment_streak();
        let saved = first.snapshot_store().stored().cloned().unwrap();

        let store = DashboardStore::new(MemorySnapshotStore::with_snapshot(saved), Default::default());
        let mut app = DashboardApp::new(DashboardConfig::default(), store, SessionSeed::default());
        assert!(app.poll_initialize(10.0));
        assert_eq!(app.store.user().streak, 1);
    }

    #[test]
    fn route_elapsed_resets_on_change() {
        let mut app = app();
        assert_eq!(app.route_elapsed(5.0), 0.0);
        assert_eq!(app.route_elapsed(7.5), 2.5);
        app.pick_video("v2");
        assert_eq!(app.route_elapsed(8.0), 0.0);
        assert_eq!(app.route_elapsed(9.0), 1.0);
    }
}
