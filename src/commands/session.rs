//! Interactive round state
//!
//! A session wraps a candidate engine for a round played against an unknown
//! target: the player reports feedback for each suggested (or chosen) guess,
//! and can undo any number of turns.

use crate::core::{Feedback, Word};
use crate::solver::CandidateEngine;
use crate::wordlists::WordLists;
use thiserror::Error;
use tracing::debug;

/// A guess about to be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: Word,
    pub score: u32,
    /// Chosen by the player rather than the engine
    pub manual: bool,
}

/// A turn already played
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: Feedback,
    pub score: u32,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// What a submitted feedback did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { guesses: usize },
    Narrowed { remaining: usize },
    /// No candidate is consistent with the feedback
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no candidates remain to suggest a guess")]
    NoSuggestion,
    #[error("'{0}' is not in the guess list")]
    UnknownGuess(String),
}

pub struct Session<'a> {
    lists: &'a WordLists,
    engine: CandidateEngine<'a>,
    history: Vec<HistoryEntry>,
    snapshots: Vec<CandidateEngine<'a>>,
    manual: Option<Word>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(lists: &'a WordLists) -> Self {
        Self {
            lists,
            engine: CandidateEngine::new(lists.solutions()),
            history: Vec::new(),
            snapshots: Vec::new(),
            manual: None,
        }
    }

    #[must_use]
    pub const fn lists(&self) -> &'a WordLists {
        self.lists
    }

    #[must_use]
    pub const fn engine(&self) -> &CandidateEngine<'a> {
        &self.engine
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// 1-based number of the turn about to be played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    /// The player's chosen guess if any, else the engine's best
    #[must_use]
    pub fn suggestion(&self) -> Option<Suggestion> {
        if let Some(word) = &self.manual {
            return Some(Suggestion {
                score: self.engine.score(word),
                word: word.clone(),
                manual: true,
            });
        }
        self.engine.rank().first().map(|ranked| Suggestion {
            word: ranked.word.clone(),
            score: ranked.score,
            manual: false,
        })
    }

    /// Play `text` instead of the engine's suggestion this turn
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownGuess` if `text` is not an accepted guess.
    pub fn choose_guess(&mut self, text: &str) -> Result<Suggestion, SessionError> {
        let word = self
            .lists
            .find_guess(text)
            .ok_or_else(|| SessionError::UnknownGuess(text.to_ascii_uppercase()))?;
        self.manual = Some(word.clone());
        self.suggestion().ok_or(SessionError::NoSuggestion)
    }

    /// Drop a chosen guess and go back to the engine's suggestion
    pub fn clear_choice(&mut self) {
        self.manual = None;
    }

    /// Record the feedback for the current suggestion
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSuggestion` if there is nothing to play.
    pub fn submit(&mut self, feedback: Feedback) -> Result<Outcome, SessionError> {
        let suggestion = self.suggestion().ok_or(SessionError::NoSuggestion)?;
        let candidates_before = self.engine.candidate_count();

        self.snapshots.push(self.engine.clone());
        self.manual = None;

        let outcome = if feedback.is_solved() {
            Outcome::Solved {
                guesses: self.turn(),
            }
        } else {
            self.engine.apply_feedback(&suggestion.word, &feedback);
            match self.engine.candidate_count() {
                0 => Outcome::Exhausted,
                remaining => Outcome::Narrowed { remaining },
            }
        };

        self.history.push(HistoryEntry {
            guess: suggestion.word,
            feedback,
            score: suggestion.score,
            candidates_before,
            candidates_after: if feedback.is_solved() {
                1
            } else {
                self.engine.candidate_count()
            },
        });
        debug!(turn = self.history.len(), ?outcome, "feedback submitted");

        Ok(outcome)
    }

    /// Restore the state before the last submitted feedback
    ///
    /// Returns `false` if nothing has been played.
    pub fn undo(&mut self) -> bool {
        let Some(engine) = self.snapshots.pop() else {
            return false;
        };
        self.engine = engine;
        self.history.pop();
        self.manual = None;
        true
    }

    /// Start a new round
    pub fn reset(&mut self) {
        self.engine = CandidateEngine::new(self.lists.solutions());
        self.history.clear();
        self.snapshots.clear();
        self.manual = None;
    }
}
