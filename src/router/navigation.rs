use super::*;

impl DashboardRouter {
    /// Generic transition. Keeps the active content when `route` can carry it.
    pub fn navigate_to(&mut self, route: Route) -> Result<(), NavigationError> {
        let next = RouterState::enter(route, self.state.content().cloned())
            .ok_or(NavigationError::NoActiveContent(route))?;
        self.transition(next);
        Ok(())
    }

    /// Back to the previous route, or the dashboard at session start.
    /// Content routes whose content is gone also fall back to the dashboard.
    pub fn go_back(&mut self) {
        let target = self.previous_route().unwrap_or(Route::Dashboard);
        let next = RouterState::enter(target, self.state.content().cloned()).unwrap_or_else(|| {
            log::debug!("cannot resume {target} without content, going home");
            RouterState::Dashboard
        });
        self.transition(next);
    }

    /// Tears down the registered resource first, then shows the dashboard
    /// with no selection.
    pub fn go_home(&mut self) {
        self.run_cleanup();
        self.transition(RouterState::Dashboard);
    }

    pub fn quit_video(&mut self) {
        self.go_home();
    }

    pub fn start_video(&mut self, video: Video) {
        self.emit(RouterEvent::VideoStarted(video.clone()));
        self.transition(RouterState::VideoTransition(ActiveContent::video(video)));
    }

    /// Opens the mission intro. A mission without a video cannot be started.
    pub fn start_homework(&mut self, homework: HomeworkItem) -> Result<(), NavigationError> {
        let video = homework
            .video
            .clone()
            .ok_or_else(|| NavigationError::MissingVideo(homework.id.clone()))?;
        self.emit(RouterEvent::HomeworkStarted(homework.clone()));
        self.transition(RouterState::MissionIntro(ActiveContent::mission(
            homework, video,
        )));
        Ok(())
    }

    pub fn complete_transition(&mut self) -> Result<(), NavigationError> {
        let content = self.active_content(Route::VideoPlayer)?;
        self.transition(RouterState::VideoPlayer(content));
        Ok(())
    }

    pub fn complete_mission_intro(&mut self) -> Result<(), NavigationError> {
        let content = self.active_content(Route::VideoTransition)?;
        self.transition(RouterState::VideoTransition(content));
        Ok(())
    }

    pub fn complete_video(&mut self, score: impl Into<Score>) -> Result<(), NavigationError> {
        let mut content = self.active_content(Route::Completion)?;
        content.score = score.into();
        self.emit(RouterEvent::VideoCompleted(content.score));
        self.transition(RouterState::Completion(content));
        Ok(())
    }

    pub fn show_badges(&mut self) {
        self.transition(RouterState::Badges(self.state.content().cloned()));
    }

    pub fn show_help(&mut self) {
        self.transition(RouterState::Help(self.state.content().cloned()));
    }

    fn active_content(&self, target: Route) -> Result<ActiveContent, NavigationError> {
        self.state
            .content()
            .cloned()
            .ok_or(NavigationError::NoActiveContent(target))
    }

    fn transition(&mut self, next: RouterState) {
        let previous = self.state.route();
        let route = next.route();
        self.state = next;
        self.history.push(route);
        log::debug!("route: {previous} -> {route}");
        self.emit(RouterEvent::RouteChanged { route, previous });
    }
}
