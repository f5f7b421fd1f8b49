//! Wordle Challenger
//!
//! Plays Wordle by keeping only the solution words consistent with the
//! feedback so far and guessing the one built from the most common letters in
//! each position.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_challenger::core::{Feedback, Word};
//! use wordle_challenger::solver::CandidateEngine;
//! use wordle_challenger::wordlists::{SOLUTIONS, loader::words_from_slice};
//!
//! let solutions = words_from_slice(SOLUTIONS);
//! let mut engine = CandidateEngine::new(&solutions);
//!
//! let target = Word::new("crane").unwrap();
//! let guess = engine.best_guess().unwrap().clone();
//! let feedback = Feedback::evaluate(&target, &guess);
//! engine.apply_feedback(&guess, &feedback);
//!
//! assert!(engine.contains(&target));
//! ```

// Core domain types
pub mod core;

// Candidate filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
