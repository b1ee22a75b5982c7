//! Question catalog with per-difficulty index buckets

use super::catalog::builtin_questions;
use super::question::{Difficulty, Question};

/// Owns the question catalog and the difficulty partition of its indices
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    /// Catalog indices per tier, indexed by `Difficulty::index`
    buckets: [Vec<usize>; 3],
    initialized: bool,
}

impl QuestionBank {
    /// Create an empty, uninitialized bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bank already populated with the built-in catalog
    pub fn builtin() -> Self {
        let mut bank = Self::new();
        bank.initialize();
        bank
    }

    /// Create a bank populated with a caller-supplied catalog
    pub fn from_questions(questions: Vec<Question>) -> Self {
        let mut bank = Self::new();
        bank.populate(questions);
        bank
    }

    /// Populate with the built-in catalog and rebuild the buckets.
    ///
    /// Calling this again replaces the catalog; buckets are rebuilt from scratch.
    pub fn initialize(&mut self) {
        self.populate(builtin_questions());
    }

    fn populate(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        for (i, q) in self.questions.iter().enumerate() {
            self.buckets[q.difficulty.index()].push(i);
        }
        self.initialized = true;
        log::info!(
            "Question bank ready: {} questions ({} easy, {} medium, {} hard)",
            self.questions.len(),
            self.buckets[0].len(),
            self.buckets[1].len(),
            self.buckets[2].len()
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Copy of the question at `catalog_index`.
    ///
    /// Panics on an out-of-range index: indices only come from draws over this bank.
    pub fn get_question(&self, catalog_index: usize) -> Question {
        self.question(catalog_index).clone()
    }

    /// Borrow the question at `catalog_index` (panics when out of range)
    pub fn question(&self, catalog_index: usize) -> &Question {
        assert!(
            catalog_index < self.questions.len(),
            "catalog index {catalog_index} out of range (bank holds {})",
            self.questions.len()
        );
        &self.questions[catalog_index]
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Catalog indices of one tier (order changes as draws shuffle it)
    pub fn bucket(&self, difficulty: Difficulty) -> &[usize] {
        &self.buckets[difficulty.index()]
    }

    pub fn bucket_len(&self, difficulty: Difficulty) -> usize {
        self.buckets[difficulty.index()].len()
    }

    pub(crate) fn bucket_mut(&mut self, difficulty: Difficulty) -> &mut Vec<usize> {
        &mut self.buckets[difficulty.index()]
    }
}
