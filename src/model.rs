use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screens of the kids dashboard navigation flow.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Dashboard,
    VideoTransition,
    VideoPlayer,
    MissionIntro,
    Completion,
    Badges,
    Help,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Dashboard,
        Route::VideoTransition,
        Route::VideoPlayer,
        Route::MissionIntro,
        Route::Completion,
        Route::Badges,
        Route::Help,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::VideoTransition => "video-transition",
            Route::VideoPlayer => "video-player",
            Route::MissionIntro => "mission-intro",
            Route::Completion => "completion",
            Route::Badges => "badges",
            Route::Help => "help",
        }
    }

    /// Routes that can only be shown while a video is selected.
    pub fn needs_content(self) -> bool {
        matches!(
            self,
            Route::VideoTransition | Route::VideoPlayer | Route::MissionIntro | Route::Completion
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AnswerOption {
    A,
    B,
    C,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub opt_a: String,
    pub opt_b: String,
    pub opt_c: String,
    /// Seconds into the video where playback pauses for this question.
    pub time_to_stop: f32,
    #[serde(default)]
    pub correct_answer: Option<AnswerOption>,
}

impl Question {
    pub fn option(&self, opt: AnswerOption) -> &str {
        match opt {
            AnswerOption::A => &self.opt_a,
            AnswerOption::B => &self.opt_b,
            AnswerOption::C => &self.opt_c,
        }
    }

    /// Questions without an answer key accept any option.
    pub fn is_correct(&self, opt: AnswerOption) -> bool {
        self.correct_answer.is_none_or(|c| c == opt)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    Video,
    Homework,
    Streak,
    Special,
}

/// Earned award. Never mutated once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub earned_at: DateTime<Utc>,
    pub category: BadgeCategory,
}

impl Badge {
    pub fn earned_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.earned_at > now - window
    }
}

/// Badge granted when a video is finished; stamped when awarded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardTemplate {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: BadgeCategory,
}

impl RewardTemplate {
    pub fn award(&self, now: DateTime<Utc>) -> Badge {
        Badge {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            earned_at: now,
            category: self.category,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub duration_secs: u32,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub completion_reward: Option<RewardTemplate>,
}

impl Video {
    /// Questions ordered by their stop offset.
    pub fn stops(&self) -> Vec<&Question> {
        let mut stops: Vec<&Question> = self.questions.iter().collect();
        stops.sort_by(|a, b| a.time_to_stop.total_cmp(&b.time_to_stop));
        stops
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum HomeworkStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::NotStarted,
        HomeworkStatus::InProgress,
        HomeworkStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HomeworkStatus::NotStarted => "Not started",
            HomeworkStatus::InProgress => "In progress",
            HomeworkStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown homework status `{0}`")]
pub struct UnknownStatus(pub String);

/// Accepts the backend's status vocabulary as well as our own tags.
impl FromStr for HomeworkStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NOT_STARTED" | "PENDING" => Ok(HomeworkStatus::NotStarted),
            "IN_PROGRESS" | "ACTIVE" => Ok(HomeworkStatus::InProgress),
            "DONE" | "COMPLETED" => Ok(HomeworkStatus::Completed),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

fn status_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HomeworkStatus, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// A mission: a video plus its quiz, tracked by status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeworkItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    /// Written as our snake_case tag; read in either vocabulary.
    #[serde(default, deserialize_with = "status_from_any")]
    pub status: HomeworkStatus,
    #[serde(default)]
    pub assigned_by: String,
    #[serde(default)]
    pub video: Option<Video>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
    pub streak: u32,
    /// Earn order.
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub last_streak_day: Option<chrono::NaiveDate>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    #[default]
    Dashboard,
    Badges,
    Help,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundTheme {
    #[default]
    Sky,
    Forest,
    Space,
}

impl BackgroundTheme {
    pub const ALL: [BackgroundTheme; 3] = [
        BackgroundTheme::Sky,
        BackgroundTheme::Forest,
        BackgroundTheme::Space,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BackgroundTheme::Sky => "Sky",
            BackgroundTheme::Forest => "Forest",
            BackgroundTheme::Space => "Space",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    pub preset_videos: Vec<Video>,
    pub homework: Vec<HomeworkItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub current_view: DashboardView,
    pub is_loading: bool,
    pub mascot_message: String,
    pub background_theme: BackgroundTheme,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            current_view: DashboardView::Dashboard,
            is_loading: true,
            mascot_message: "Welcome back! Ready for some fun learning?".to_owned(),
            background_theme: BackgroundTheme::Sky,
        }
    }
}

/// The whole persisted document: profile, catalog and UI flags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KidsDashboardState {
    pub user: UserProfile,
    pub content: ContentCatalog,
    pub ui: UiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_status_vocabulary_maps_onto_three_states() {
        assert_eq!("PENDING".parse(), Ok(HomeworkStatus::NotStarted));
        assert_eq!("active".parse(), Ok(HomeworkStatus::InProgress));
        assert_eq!("DONE".parse(), Ok(HomeworkStatus::Completed));
        assert_eq!("completed".parse(), Ok(HomeworkStatus::Completed));
        assert!("archived".parse::<HomeworkStatus>().is_err());
    }

    #[test]
    fn homework_status_reads_both_vocabularies() {
        let item: HomeworkItem =
            serde_json::from_str(r#"{"id":"h1","title":"Jumps","status":"ACTIVE"}"#).unwrap();
        assert_eq!(item.status, HomeworkStatus::InProgress);

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""status":"in_progress""#));
        let back: HomeworkItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);

        let missing: HomeworkItem = serde_json::from_str(r#"{"id":"h2","title":"Shapes"}"#).unwrap();
        assert_eq!(missing.status, HomeworkStatus::NotStarted);

        let bad = serde_json::from_str::<HomeworkItem>(r#"{"id":"h3","title":"x","status":"archived"}"#);
        assert!(bad.unwrap_err().to_string().contains("unknown homework status"));
    }

    #[test]
    fn route_tags_serialize_kebab_case() {
        let json = serde_json::to_string(&Route::VideoTransition).unwrap();
        assert_eq!(json, "\"video-transition\"");
        for route in Route::ALL {
            assert_eq!(serde_json::to_string(&route).unwrap(), format!("\"{route}\""));
        }
    }

    #[test]
    fn question_without_key_accepts_any_option() {
        let mut q = Question {
            id: 1,
            question: "Jump!".into(),
            opt_a: "up".into(),
            opt_b: "down".into(),
            opt_c: "left".into(),
            time_to_stop: 3.0,
            correct_answer: None,
        };
        assert!(q.is_correct(AnswerOption::B));
        q.correct_answer = Some(AnswerOption::A);
        assert!(!q.is_correct(AnswerOption::B));
        assert_eq!(q.option(AnswerOption::C), "left");
    }

    #[test]
    fn reward_award_stamps_time() {
        let now = Utc::now();
        let reward = RewardTemplate {
            id: "r1".into(),
            name: "Star Mover".into(),
            icon: "⭐".into(),
            category: BadgeCategory::Video,
        };
        let badge = reward.award(now);
        assert_eq!(badge.earned_at, now);
        assert_eq!(badge.category, BadgeCategory::Video);
        assert!(badge.earned_within(now, Duration::hours(24)));
    }
}
