use super::*;
use crate::model::{BackgroundTheme, Badge, DashboardView, HomeworkStatus};
use chrono::NaiveDate;

impl<S: SnapshotStore> DashboardStore<S> {
    /// Appends in earn order. Duplicates are kept.
    pub fn add_badge(&mut self, badge: Badge) {
        log::info!("badge earned: {} ({})", badge.name, badge.id);
        self.update(|s| s.user.badges.push(badge));
    }

    /// Sets the status of the matching homework; unknown ids are ignored.
    /// Any status may follow any other.
    pub fn update_homework_status(&mut self, homework_id: &str, status: HomeworkStatus) {
        self.update(|s| {
            if let Some(hw) = s.content.homework.iter_mut().find(|hw| hw.id == homework_id) {
                hw.status = status;
            }
        });
    }

    /// Unconditional `+1`, several calls a day count several times.
    pub fn increment_streak(&mut self) {
        self.update(|s| s.user.streak += 1);
    }

    /// Counts at most one increment per calendar day. Returns whether it did.
    pub fn increment_streak_on(&mut self, day: NaiveDate) -> bool {
        if self.state.user.last_streak_day == Some(day) {
            return false;
        }
        self.update(|s| {
            s.user.streak += 1;
            s.user.last_streak_day = Some(day);
        });
        true
    }

    pub fn navigate_to_section(&mut self, view: DashboardView) {
        self.update(|s| s.ui.current_view = view);
    }

    pub fn update_mascot_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.update(|s| s.ui.mascot_message = message);
    }

    pub fn change_background_theme(&mut self, theme: BackgroundTheme) {
        self.update(|s| s.ui.background_theme = theme);
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.update(|s| s.ui.is_loading = is_loading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BadgeCategory, HomeworkItem};
    use chrono::Utc;

    fn store() -> DashboardStore<MemorySnapshotStore> {
        let catalog = ContentCatalog {
            preset_videos: vec![],
            homework: vec![HomeworkItem {
                id: "h1".into(),
                title: "Counting Jumps".into(),
                icon: String::new(),
                status: HomeworkStatus::NotStarted,
                assigned_by: "Mom".into(),
                video: None,
            }],
        };
        let mut store = DashboardStore::new(MemorySnapshotStore::new(), catalog);
        store.initialize(&SessionSeed::default());
        store
    }

    fn badge(id: &str) -> Badge {
        Badge {
            id: id.into(),
            name: format!("Badge {id}"),
            icon: "⭐".into(),
            earned_at: Utc::now(),
            category: BadgeCategory::Video,
        }
    }

    #[test]
    fn badges_append_in_order_without_dedup() {
        let mut store = store();
        store.add_badge(badge("a"));
        store.add_badge(badge("b"));
        store.add_badge(badge("a"));
        let ids: Vec<&str> = store.user().badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a"]);
    }

    #[test]
    fn homework_status_is_unordered() {
        let mut store = store();
        store.update_homework_status("h1", HomeworkStatus::Completed);
        store.update_homework_status("h1", HomeworkStatus::NotStarted);
        assert_eq!(store.content().homework[0].status, HomeworkStatus::NotStarted);
    }

    #[test]
    fn unknown_homework_is_a_noop_without_write() {
        let mut store = store();
        let before = store.snapshot_store().writes();
        store.update_homework_status("missing", HomeworkStatus::Completed);
        assert_eq!(store.snapshot_store().writes(), before);
    }

    #[test]
    fn streak_counts_every_call() {
        let mut store = store();
        store.increment_streak();
        store.increment_streak();
        assert_eq!(store.user().streak, 2);
    }

    #[test]
    fn dated_streak_counts_once_per_day() {
        let mut store = store();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        let tuesday = monday.succ_opt().unwrap();
        assert!(store.increment_streak_on(monday));
        assert!(!store.increment_streak_on(monday));
        assert!(store.increment_streak_on(tuesday));
        assert_eq!(store.user().streak, 2);
    }

    #[test]
    fn ui_setters_replace_fields() {
        let mut store = store();
        store.navigate_to_section(DashboardView::Badges);
        store.update_mascot_message("Great job!");
        store.change_background_theme(BackgroundTheme::Space);
        store.set_loading(true);
        let ui = store.ui();
        assert_eq!(ui.current_view, DashboardView::Badges);
        assert_eq!(ui.mascot_message, "Great job!");
        assert_eq!(ui.background_theme, BackgroundTheme::Space);
        assert!(ui.is_loading);
    }
}
