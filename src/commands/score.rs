//! Word scoring command
//!
//! Scores a word against the letter frequencies of the full solution list.

use crate::core::{WORD_LENGTH, Word, WordError};
use crate::solver::CandidateEngine;
use crate::wordlists::WordLists;

/// Result of scoring a word
pub struct ScoreReport {
    pub word: Word,
    /// Count of the word's letter at each position
    pub breakdown: [u32; WORD_LENGTH],
    pub score: u32,
    /// 1 + number of solutions that score strictly higher
    pub rank: usize,
    pub total_candidates: usize,
    pub best: Option<(Word, u32)>,
    pub is_solution: bool,
    pub is_valid_guess: bool,
}

/// Score `word` against a fresh engine over the solution list
///
/// Words outside both lists are still scored; the report records membership.
///
/// # Errors
///
/// Returns `WordError` if the word is not five ASCII letters.
pub fn score_word(word: &str, lists: &WordLists) -> Result<ScoreReport, WordError> {
    let word = Word::new(word)?;
    let engine = CandidateEngine::new(lists.solutions());
    let frequencies = engine.frequencies();

    let breakdown = frequencies.breakdown(&word);
    let score: u32 = breakdown.iter().sum();
    let ranked = engine.rank();
    let rank = 1 + ranked.iter().take_while(|r| r.score > score).count();
    let best = ranked.first().map(|r| (r.word.clone(), r.score));

    Ok(ScoreReport {
        is_solution: lists.is_solution(&word),
        is_valid_guess: lists.is_valid_guess(&word),
        word,
        breakdown,
        score,
        rank,
        total_candidates: engine.candidate_count(),
        best,
    })
}
