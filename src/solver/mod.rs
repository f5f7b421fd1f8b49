//! Candidate filtering and ranking
//!
//! The engine owns one round's candidate set and the constraints learned from
//! feedback, and ranks candidates by positional letter frequency.

mod constraints;
mod engine;
mod frequency;

pub use constraints::{Constraints, LetterSet};
pub use engine::{CandidateEngine, EngineError, Ranked};
pub use frequency::LetterFrequencies;
