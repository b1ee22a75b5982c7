//! Question and difficulty types

use serde::{Deserialize, Serialize};

use crate::consts::OPTION_COUNT;

/// Difficulty tier of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Conventional base points for this tier (10/25/50)
    pub fn default_points(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 25,
            Difficulty::Hard => 50,
        }
    }

    /// Position in `ALL`, used for per-tier bookkeeping
    pub(crate) fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

/// A single multiple-choice catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt shown to the player
    pub prompt: String,
    /// Answer options, displayed as A-D
    pub options: [String; OPTION_COUNT],
    /// Index into `options` of the right answer
    pub correct_option: usize,
    pub difficulty: Difficulty,
    /// Points awarded before the time bonus
    pub base_points: u32,
}

impl Question {
    /// Build a question; panics if `correct_option` is not a valid option index
    pub fn new(
        prompt: &str,
        options: [&str; OPTION_COUNT],
        correct_option: usize,
        difficulty: Difficulty,
        base_points: u32,
    ) -> Self {
        assert!(
            correct_option < OPTION_COUNT,
            "correct option {correct_option} out of range for a {OPTION_COUNT}-option question"
        );
        Self {
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct_option,
            difficulty,
            base_points,
        }
    }

    /// Build a question worth the tier's conventional points
    pub fn with_default_points(
        prompt: &str,
        options: [&str; OPTION_COUNT],
        correct_option: usize,
        difficulty: Difficulty,
    ) -> Self {
        Self::new(prompt, options, correct_option, difficulty, difficulty.default_points())
    }

    /// Whether `option` is the right answer
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }

    /// Text of the right answer
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_option]
    }
}

/// Letter label (A-D) for an option index
pub fn option_label(option: usize) -> char {
    (b'A' + option as u8) as char
}

/// Parse an option letter (case-insensitive) back to its index
pub fn parse_option(label: char) -> Option<usize> {
    let upper = label.to_ascii_uppercase();
    if ('A'..='D').contains(&upper) {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}
