use crate::model::{HomeworkItem, Route, Video};
use serde::{Deserialize, Serialize};

/// Completion score, always within 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(u8);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: u8 = 100;

    /// Clamps anything above 100.
    pub fn new(value: u32) -> Self {
        Score(value.min(u32::from(Self::MAX)) as u8)
    }

    /// Percentage of `correct` answers out of `total`; an empty quiz scores 100.
    pub fn from_answers(correct: usize, total: usize) -> Self {
        if total == 0 {
            return Score(Self::MAX);
        }
        let pct = (correct.min(total) * 100 + total / 2) / total;
        Score::new(pct as u32)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Score::new(u32::from(value))
    }
}

impl From<u32> for Score {
    fn from(value: u32) -> Self {
        Score::new(value)
    }
}

/// What is being watched: the video, the mission it belongs to (if any)
/// and the score of the last completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveContent {
    pub video: Video,
    pub homework: Option<HomeworkItem>,
    pub score: Score,
}

impl ActiveContent {
    pub fn video(video: Video) -> Self {
        Self {
            video,
            homework: None,
            score: Score::ZERO,
        }
    }

    pub fn mission(homework: HomeworkItem, video: Video) -> Self {
        Self {
            video,
            homework: Some(homework),
            score: Score::ZERO,
        }
    }
}

/// One variant per route, each carrying only what that screen needs.
///
/// Content routes cannot exist without a video. `Badges` and `Help` keep the
/// content of an interrupted flow so going back resumes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RouterState {
    #[default]
    Dashboard,
    MissionIntro(ActiveContent),
    VideoTransition(ActiveContent),
    VideoPlayer(ActiveContent),
    Completion(ActiveContent),
    Badges(Option<ActiveContent>),
    Help(Option<ActiveContent>),
}

impl RouterState {
    pub fn route(&self) -> Route {
        match self {
            RouterState::Dashboard => Route::Dashboard,
            RouterState::MissionIntro(_) => Route::MissionIntro,
            RouterState::VideoTransition(_) => Route::VideoTransition,
            RouterState::VideoPlayer(_) => Route::VideoPlayer,
            RouterState::Completion(_) => Route::Completion,
            RouterState::Badges(_) => Route::Badges,
            RouterState::Help(_) => Route::Help,
        }
    }

    pub fn content(&self) -> Option<&ActiveContent> {
        match self {
            RouterState::Dashboard => None,
            RouterState::MissionIntro(c)
            | RouterState::VideoTransition(c)
            | RouterState::VideoPlayer(c)
            | RouterState::Completion(c) => Some(c),
            RouterState::Badges(c) | RouterState::Help(c) => c.as_ref(),
        }
    }

    /// State for `route` given the content at hand; `None` if the route
    /// needs content that isn't there. The dashboard drops any content.
    pub fn enter(route: Route, content: Option<ActiveContent>) -> Option<RouterState> {
        match route {
            Route::Dashboard => Some(RouterState::Dashboard),
            Route::Badges => Some(RouterState::Badges(content)),
            Route::Help => Some(RouterState::Help(content)),
            Route::MissionIntro => content
                .filter(|c| c.homework.is_some())
                .map(RouterState::MissionIntro),
            Route::VideoTransition => content.map(RouterState::VideoTransition),
            Route::VideoPlayer => content.map(RouterState::VideoPlayer),
            Route::Completion => content.map(RouterState::Completion),
        }
    }
}
