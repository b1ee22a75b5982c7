//! Question bank and round selection
//!
//! The bank is populated once at startup; each round draws a difficulty-balanced,
//! fully shuffled order of catalog indices from it.

pub mod bank;
pub mod catalog;
pub mod question;
pub mod selector;

pub use bank::QuestionBank;
pub use catalog::builtin_questions;
pub use question::{Difficulty, Question, option_label, parse_option};
pub use selector::{QuizDraw, QuizMix, QuizSelector};
