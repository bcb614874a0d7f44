use super::*;
use crate::model::{Badge, HomeworkItem, HomeworkStatus, Video};
use chrono::{DateTime, Duration, Utc};

impl<S: SnapshotStore> DashboardStore<S> {
    pub fn state(&self) -> &KidsDashboardState {
        &self.state
    }

    pub fn user(&self) -> &UserProfile {
        &self.state.user
    }

    pub fn content(&self) -> &ContentCatalog {
        &self.state.content
    }

    pub fn ui(&self) -> &UiState {
        &self.state.ui
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.is_some()
    }

    pub fn snapshot_store(&self) -> &S {
        &self.port
    }

    pub fn homework_by_status(&self, status: HomeworkStatus) -> Vec<&HomeworkItem> {
        self.state
            .content
            .homework
            .iter()
            .filter(|hw| hw.status == status)
            .collect()
    }

    /// Badges earned in the 24 hours before `now`.
    pub fn recent_badges(&self, now: DateTime<Utc>) -> Vec<&Badge> {
        self.state
            .user
            .badges
            .iter()
            .filter(|b| b.earned_within(now, Duration::hours(24)))
            .collect()
    }

    pub fn find_homework(&self, id: &str) -> Option<&HomeworkItem> {
        self.state.content.homework.iter().find(|hw| hw.id == id)
    }

    pub fn find_video(&self, id: &str) -> Option<&Video> {
        self.state.content.preset_videos.iter().find(|v| v.id == id)
    }
}
