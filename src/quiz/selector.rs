//! Per-round question draw
//!
//! A draw shuffles each difficulty bucket, takes the requested count from each
//! tier, then shuffles the combined order so position carries no difficulty signal.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bank::QuestionBank;
use super::question::Difficulty;
use crate::consts::{NUM_EASY, NUM_HARD, NUM_MEDIUM};

/// How many questions to draw from each tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizMix {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl Default for QuizMix {
    fn default() -> Self {
        Self {
            easy: NUM_EASY,
            medium: NUM_MEDIUM,
            hard: NUM_HARD,
        }
    }
}

impl QuizMix {
    pub fn new(easy: usize, medium: usize, hard: usize) -> Self {
        Self { easy, medium, hard }
    }

    /// Requested round length
    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Question order for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraw {
    /// Catalog indices in presentation order
    pub order: Vec<usize>,
    /// Length that was asked for
    pub requested: usize,
}

impl QuizDraw {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when every tier had enough questions
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.requested
    }

    /// Questions missing because a bucket ran short
    pub fn shortfall(&self) -> usize {
        self.requested - self.order.len()
    }
}

/// Draws rounds from a bank using a generator seeded once at construction
#[derive(Debug, Clone)]
pub struct QuizSelector {
    rng: Pcg32,
}

impl QuizSelector {
    /// Deterministic selector for a given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Selector seeded from OS entropy; create one per process
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }

    /// Draw a round of `easy + medium + hard` questions.
    ///
    /// A tier smaller than its count contributes all it has; the draw is then
    /// shorter than requested (see `QuizDraw::shortfall`).
    pub fn select_and_shuffle(
        &mut self,
        bank: &mut QuestionBank,
        easy_count: usize,
        medium_count: usize,
        hard_count: usize,
    ) -> QuizDraw {
        self.draw(bank, QuizMix::new(easy_count, medium_count, hard_count))
    }

    /// Same as `select_and_shuffle`, taking the counts as a `QuizMix`
    pub fn draw(&mut self, bank: &mut QuestionBank, mix: QuizMix) -> QuizDraw {
        assert!(
            bank.is_initialized(),
            "question bank must be initialized before drawing a round"
        );

        for difficulty in Difficulty::ALL {
            bank.bucket_mut(difficulty).shuffle(&mut self.rng);
        }

        let mut order = Vec::with_capacity(mix.total());
        for difficulty in Difficulty::ALL {
            let bucket = bank.bucket(difficulty);
            let take = mix.count(difficulty).min(bucket.len());
            order.extend_from_slice(&bucket[..take]);
        }

        order.shuffle(&mut self.rng);

        let draw = QuizDraw {
            order,
            requested: mix.total(),
        };
        if !draw.is_complete() {
            log::warn!(
                "Question draw short by {} ({} of {} requested)",
                draw.shortfall(),
                draw.len(),
                draw.requested
            );
        }
        draw
    }
}
