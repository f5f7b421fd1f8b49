//! Core domain types for Wordle
//!
//! Words and the feedback evaluator. Everything here is pure and has no
//! knowledge of word lists or game state.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
