//! Time-bonused scoring
//!
//! A correct answer earns its base points plus a bonus proportional to the time
//! left on the clock: instant answers pay double, last-instant answers pay base.

use crate::consts::QUESTION_TIME;
use crate::quiz::Question;

/// Points for a correct answer worth `base_points` with `time_remaining` of `limit` seconds left.
///
/// Negative remaining time (timer overshoot) earns no bonus. A non-positive
/// limit also earns no bonus.
pub fn points_for(base_points: u32, time_remaining: f32, limit: f32) -> u32 {
    if limit <= 0.0 {
        return base_points;
    }
    let time_factor = f64::from(time_remaining.max(0.0)) / f64::from(limit);
    (f64::from(base_points) * (1.0 + time_factor)).floor() as u32
}

/// Result of judging one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Points added to the running total (0 when wrong)
    pub points: u32,
}

/// Running score for the current round
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    question_time_limit: f32,
    score: u32,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(QUESTION_TIME)
    }
}

impl ScoringEngine {
    pub fn new(question_time_limit: f32) -> Self {
        Self {
            question_time_limit,
            score: 0,
        }
    }

    pub fn question_time_limit(&self) -> f32 {
        self.question_time_limit
    }

    /// Zero the running total (start of every round)
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Points a correct answer to `question` would earn now. Pure; does not touch the total.
    pub fn calculate_points(&self, question: &Question, time_remaining: f32) -> u32 {
        points_for(question.base_points, time_remaining, self.question_time_limit)
    }

    pub fn add_to_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn get_score(&self) -> u32 {
        self.score
    }

    /// Judge `chosen` against `question`, crediting points only when correct
    pub fn record_answer(
        &mut self,
        question: &Question,
        chosen: Option<usize>,
        time_remaining: f32,
    ) -> AnswerOutcome {
        let correct = chosen.is_some_and(|option| question.is_correct(option));
        let points = if correct {
            self.calculate_points(question, time_remaining)
        } else {
            0
        };
        self.add_to_score(points);
        log::debug!(
            "Answer {:?} to {:?} question: correct={correct}, +{points} (total {})",
            chosen,
            question.difficulty,
            self.score
        );
        AnswerOutcome { correct, points }
    }
}
