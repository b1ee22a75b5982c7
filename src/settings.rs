//! Game settings
//!
//! Persisted as JSON next to the leaderboard file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::highscores::UpdatePolicy;
use crate::quiz::QuizMix;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    // === Round ===
    /// Seconds per question
    pub question_time: f32,
    /// Questions drawn per tier
    pub mix: QuizMix,
    /// Seconds the correct answer is revealed before the next question
    pub answer_reveal_secs: f32,

    // === Leaderboard ===
    /// Rows kept on the board
    pub leaderboard_capacity: usize,
    /// Initials length
    pub name_length: usize,
    /// Leaderboard save file
    pub leaderboard_path: PathBuf,
    /// How repeat names are merged
    pub update_policy: UpdatePolicy,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_time: QUESTION_TIME,
            mix: QuizMix::default(),
            answer_reveal_secs: ANSWER_REVEAL_SECS,

            leaderboard_capacity: LEADERBOARD_SIZE,
            name_length: MAX_NAME_LENGTH,
            leaderboard_path: PathBuf::from(LEADERBOARD_FILE),
            update_policy: UpdatePolicy::DisplaceByRank,
        }
    }
}

impl QuizSettings {
    /// Replace values the game cannot run with
    pub fn validate(&mut self) {
        let defaults = Self::default();
        if !(self.question_time > 0.0) {
            log::warn!(
                "question_time {} is not positive, using {}",
                self.question_time,
                defaults.question_time
            );
            self.question_time = defaults.question_time;
        }
        if !(self.answer_reveal_secs >= 0.0) {
            log::warn!("answer_reveal_secs {} is negative, using 0", self.answer_reveal_secs);
            self.answer_reveal_secs = 0.0;
        }
        if self.leaderboard_capacity == 0 {
            log::warn!("leaderboard_capacity is 0, using 1");
            self.leaderboard_capacity = 1;
        }
        if self.name_length == 0 {
            log::warn!("name_length is 0, using {}", defaults.name_length);
            self.name_length = defaults.name_length;
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<QuizSettings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        };
        settings.validate();
        settings
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
