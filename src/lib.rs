//! Tide Quiz - A timed ocean-conservation trivia game
//!
//! Core modules:
//! - `quiz`: Question catalog, difficulty buckets and per-round draws
//! - `scoring`: Time-bonused points and the running round score
//! - `highscores`: Ranked, persisted leaderboard
//! - `persistence`: Fixed-record leaderboard file format and storage backends
//! - `settings`: Data-driven game configuration
//! - `session`: Fixed-step round driver tying the pieces together

pub mod highscores;
pub mod persistence;
pub mod quiz;
pub mod scoring;
pub mod session;
pub mod settings;

pub use highscores::{Leaderboard, PlayerScore, UpdatePolicy};
pub use quiz::{Difficulty, Question, QuestionBank, QuizDraw, QuizMix, QuizSelector};
pub use scoring::ScoringEngine;
pub use session::{QuizRound, RoundEvent, RoundInput, RoundPhase};
pub use settings::QuizSettings;

/// Game configuration constants
pub mod consts {
    /// Seconds allowed to answer each question
    pub const QUESTION_TIME: f32 = 15.0;
    /// Seconds the correct answer stays on screen before moving on
    pub const ANSWER_REVEAL_SECS: f32 = 2.0;
    /// Seconds a "+N points" notification stays visible
    pub const NOTIFICATION_SECS: f32 = 2.0;

    /// Questions drawn from each difficulty tier per round
    pub const NUM_EASY: usize = 8;
    pub const NUM_MEDIUM: usize = 8;
    pub const NUM_HARD: usize = 4;
    /// Total questions in a round
    pub const QUIZ_QUESTION_COUNT: usize = NUM_EASY + NUM_MEDIUM + NUM_HARD;

    /// Number of answer options on every question
    pub const OPTION_COUNT: usize = 4;

    /// Leaderboard rows
    pub const LEADERBOARD_SIZE: usize = 6;
    /// Player initials length
    pub const MAX_NAME_LENGTH: usize = 3;
    /// Name written into empty leaderboard rows
    pub const PLACEHOLDER_NAME: &str = "AAA";
    /// Default leaderboard save file
    pub const LEADERBOARD_FILE: &str = "leaderboard.dat";
    /// Default settings file read by the terminal front-end
    pub const SETTINGS_FILE: &str = "tide-quiz.json";
}
