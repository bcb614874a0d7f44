use super::*;
use crate::model::{DashboardView, HomeworkStatus};

impl<S: SnapshotStore> DashboardApp<S> {
    /// Applies queued router events to the store.
    pub fn sync_router_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: RouterEvent) {
        match event {
            RouterEvent::VideoStarted(video) => {
                self.store
                    .update_mascot_message(format!("Get ready to move with {}!", video.title));
            }
            RouterEvent::HomeworkStarted(homework) => {
                self.store
                    .update_homework_status(&homework.id, HomeworkStatus::InProgress);
                self.store
                    .update_mascot_message(format!("Mission time: {}!", homework.title));
            }
            RouterEvent::VideoCompleted(score) => {
                let now = chrono::Utc::now();
                let reward = self
                    .router
                    .selected_video()
                    .and_then(|v| v.completion_reward.as_ref())
                    .map(|r| r.award(now));
                if let Some(badge) = reward {
                    self.store.add_badge(badge);
                }
                self.store.increment_streak();
                if let Some(id) = self.router.selected_homework().map(|hw| hw.id.clone()) {
                    self.store.update_homework_status(&id, HomeworkStatus::Completed);
                }
                self.store
                    .update_mascot_message(format!("Amazing! You scored {}!", score.value()));
            }
            RouterEvent::RouteChanged { route, .. } => {
                // the next frame starts the clock for the new route
                self.seen_route = None;
                let view = match route {
                    Route::Dashboard => Some(DashboardView::Dashboard),
                    Route::Badges => Some(DashboardView::Badges),
                    Route::Help => Some(DashboardView::Help),
                    _ => None,
                };
                if let Some(view) = view {
                    self.store.navigate_to_section(view);
                }
            }
        }
    }
}
