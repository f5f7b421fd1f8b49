//! Round driver
//!
//! Plays one round against a known target: ask the engine for its best guess,
//! evaluate it, feed the verdicts back, repeat until solved or out of turns.

use crate::core::{Feedback, Word, WordError};
use crate::solver::CandidateEngine;
use rand::prelude::IndexedRandom;
use tracing::{debug, info};

/// Configuration shared by every round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_turns: usize,
}

impl GameConfig {
    /// Turns allowed by the standard game
    pub const DEFAULT_MAX_TURNS: usize = 6;

    #[must_use]
    pub const fn new(max_turns: usize) -> Self {
        Self { max_turns }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_TURNS)
    }
}

/// Result of playing one round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub target: Word,
    pub success: bool,
    /// Candidates ran out before the round ended
    pub exhausted: bool,
    pub turns: Vec<TurnRecord>,
}

impl RoundResult {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }
}

/// A single turn of a round
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub guess: Word,
    pub feedback: Feedback,
    pub score: u32,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play a round against `target` with a fresh engine over `solutions`
#[must_use]
pub fn play_round(config: &GameConfig, solutions: &[Word], target: &Word) -> RoundResult {
    let mut engine = CandidateEngine::new(solutions);
    let mut turns = Vec::new();

    for turn in 1..=config.max_turns {
        let candidates_before = engine.candidate_count();
        let Some(best) = engine.rank().first().copied() else {
            debug!(word = %target, turn, "no candidates left");
            return RoundResult {
                target: target.clone(),
                success: false,
                exhausted: true,
                turns,
            };
        };

        let feedback = Feedback::evaluate(target, best.word);
        let solved = feedback.is_solved();
        if !solved {
            engine.apply_feedback(best.word, &feedback);
        }

        turns.push(TurnRecord {
            guess: best.word.clone(),
            feedback,
            score: best.score,
            candidates_before,
            candidates_after: if solved { 1 } else { engine.candidate_count() },
        });

        if solved {
            debug!(word = %target, turns = turn, "solved");
            return RoundResult {
                target: target.clone(),
                success: true,
                exhausted: false,
                turns,
            };
        }
    }

    debug!(word = %target, "out of turns");
    RoundResult {
        target: target.clone(),
        success: false,
        exhausted: engine.is_exhausted(),
        turns,
    }
}

/// Parse `target` and play a round against it
///
/// # Errors
///
/// Returns `WordError` if the target is not a five-letter word.
pub fn solve_word(
    config: &GameConfig,
    solutions: &[Word],
    target: &str,
) -> Result<RoundResult, WordError> {
    let target = Word::new(target)?;
    if !solutions.contains(&target) {
        info!(word = %target, "target is not in the solution list");
    }
    Ok(play_round(config, solutions, &target))
}

/// Pick a random target from `solutions`
#[must_use]
pub fn random_target(solutions: &[Word]) -> Option<&Word> {
    solutions.choose(&mut rand::rng())
}
