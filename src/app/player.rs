use crate::model::{AnswerOption, Question, Video};
use crate::router::Score;

/// Playback of one video with its quiz stops.
///
/// Position advances with the frame clock and halts at each question's
/// `time_to_stop` until it is answered.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    video: Video,
    position: f32,
    /// Question ids with whether the answer was right, in answer order.
    answered: Vec<(u32, bool)>,
}

impl PlayerSession {
    pub fn new(video: Video) -> Self {
        Self {
            video,
            position: 0.0,
            answered: Vec::new(),
        }
    }

    pub fn video(&self) -> &Video {
        &self.video
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn duration(&self) -> f32 {
        self.video.duration_secs as f32
    }

    pub fn progress(&self) -> f32 {
        if self.video.duration_secs == 0 {
            return 1.0;
        }
        (self.position / self.duration()).clamp(0.0, 1.0)
    }

    /// First unanswered question whose stop has been reached.
    pub fn pending_question(&self) -> Option<&Question> {
        self.video
            .stops()
            .into_iter()
            .find(|q| q.time_to_stop <= self.position && !self.is_answered(q.id))
    }

    pub fn tick(&mut self, dt: f32) {
        if self.pending_question().is_some() {
            return;
        }
        let next_stop = self
            .video
            .stops()
            .into_iter()
            .find(|q| !self.is_answered(q.id))
            .map(|q| q.time_to_stop);
        let mut target = self.position + dt.max(0.0);
        if let Some(stop) = next_stop {
            target = target.min(stop.max(self.position));
        }
        self.position = target.min(self.duration());
    }

    /// Records the answer to the pending question. Returns whether it was right,
    /// `None` if nothing was waiting.
    pub fn answer(&mut self, option: AnswerOption) -> Option<bool> {
        let question = self.pending_question()?;
        let (id, correct) = (question.id, question.is_correct(option));
        self.answered.push((id, correct));
        Some(correct)
    }

    fn is_answered(&self, id: u32) -> bool {
        self.answered.iter().any(|(q, _)| *q == id)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.duration() && self.pending_question().is_none()
    }

    pub fn score(&self) -> Score {
        let correct = self.answered.iter().filter(|(_, ok)| *ok).count();
        Score::from_answers(correct, self.video.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, at: f32, correct: AnswerOption) -> Question {
        Question {
            id,
            question: format!("Q{id}"),
            opt_a: "a".into(),
            opt_b: "b".into(),
            opt_c: "c".into(),
            time_to_stop: at,
            correct_answer: Some(correct),
        }
    }

    fn video() -> Video {
        Video {
            id: "v1".into(),
            title: "Animal Moves".into(),
            url: "/v1.mp4".into(),
            thumbnail: String::new(),
            duration_secs: 10,
            // deliberately out of order
            questions: vec![
                question(2, 6.0, AnswerOption::B),
                question(1, 3.0, AnswerOption::A),
            ],
            completion_reward: None,
        }
    }

    #[test]
    fn halts_at_each_stop_until_answered() {
        let mut player = PlayerSession::new(video());
        player.tick(5.0);
        assert_eq!(player.position(), 3.0);
        assert_eq!(player.pending_question().map(|q| q.id), Some(1));

        player.tick(1.0);
        assert_eq!(player.position(), 3.0);

        assert_eq!(player.answer(AnswerOption::A), Some(true));
        player.tick(10.0);
        assert_eq!(player.pending_question().map(|q| q.id), Some(2));
        assert_eq!(player.answer(AnswerOption::C), Some(false));

        player.tick(10.0);
        assert!(player.is_finished());
        assert_eq!(player.score().value(), 50);
        assert_eq!(player.answer(AnswerOption::A), None);
    }

    #[test]
    fn video_without_questions_scores_full() {
        let mut v = video();
        v.questions.clear();
        let mut player = PlayerSession::new(v);
        player.tick(20.0);
        assert!(player.is_finished());
        assert_eq!(player.progress(), 1.0);
        assert_eq!(player.score().value(), 100);
    }
}
