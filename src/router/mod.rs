use crate::model::{HomeworkItem, Route, Video};
use std::fmt;

// Submodules
pub mod cleanup;
pub mod events;
pub mod navigation;
pub mod state;

pub use cleanup::ResourceLease;
pub use events::RouterEvent;
pub use state::{ActiveContent, RouterState, Score};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("homework `{0}` has no video to play")]
    MissingVideo(String),
    #[error("cannot open {0}: no video selected")]
    NoActiveContent(Route),
    #[error("resource `{0}` is still registered")]
    ResourceBusy(String),
    #[error("resource lease is no longer active")]
    StaleLease,
}

/// Navigation state of the kids dashboard: which screen is up, what content
/// is active, and every route visited this session.
///
/// Lives in memory only; a new router starts on the dashboard.
pub struct DashboardRouter {
    state: RouterState,
    /// Append-only; always ends with the current route.
    history: Vec<Route>,
    observers: Vec<events::Observer>,
    cleanup: cleanup::CleanupSlot,
}

impl Default for DashboardRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DashboardRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardRouter")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .field("cleanup", &self.cleanup.label())
            .finish()
    }
}

impl DashboardRouter {
    pub fn new() -> Self {
        Self {
            state: RouterState::Dashboard,
            history: vec![Route::Dashboard],
            observers: Vec::new(),
            cleanup: cleanup::CleanupSlot::default(),
        }
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn current_route(&self) -> Route {
        self.state.route()
    }

    /// Second-to-last history entry.
    pub fn previous_route(&self) -> Option<Route> {
        self.history
            .len()
            .checked_sub(2)
            .map(|idx| self.history[idx])
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.state.content().map(|c| &c.video)
    }

    pub fn selected_homework(&self) -> Option<&HomeworkItem> {
        self.state.content().and_then(|c| c.homework.as_ref())
    }

    pub fn completion_score(&self) -> Score {
        self.state.content().map(|c| c.score).unwrap_or_default()
    }

    pub fn route_history(&self) -> &[Route] {
        &self.history
    }

    pub fn is_current_route(&self, route: Route) -> bool {
        self.current_route() == route
    }

    pub fn can_go_back(&self) -> bool {
        self.previous_route().is_some()
    }

    /// Resets history to the current route only.
    pub fn clear_history(&mut self) {
        let current = self.current_route();
        self.history.clear();
        self.history.push(current);
    }
}
