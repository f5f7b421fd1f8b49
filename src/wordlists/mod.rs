//! Word lists for Wordle rounds
//!
//! Embedded solution and guess lists, plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use loader::words_from_slice;
use rustc_hash::FxHashSet;

/// The two lists a round needs
///
/// `solutions` seeds every candidate engine; `guesses` is only used to
/// validate words a player types in. Every solution is also a valid guess.
pub struct WordLists {
    solutions: Vec<Word>,
    guesses: Vec<Word>,
    guess_set: FxHashSet<Word>,
}

impl WordLists {
    /// Build from explicit lists, appending any solution missing from `guesses`
    #[must_use]
    pub fn new(solutions: Vec<Word>, mut guesses: Vec<Word>) -> Self {
        let mut guess_set: FxHashSet<Word> = guesses.iter().cloned().collect();
        for solution in &solutions {
            if guess_set.insert(solution.clone()) {
                guesses.push(solution.clone());
            }
        }

        Self {
            solutions,
            guesses,
            guess_set,
        }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(SOLUTIONS), words_from_slice(GUESSES))
    }

    /// Initial candidate list for a round
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Every accepted guess
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.guess_set.contains(word)
    }

    #[must_use]
    pub fn is_solution(&self, word: &Word) -> bool {
        self.solutions.contains(word)
    }

    /// Look up an accepted guess by its text, in any case
    #[must_use]
    pub fn find_guess(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.guesses.iter().find(|&candidate| *candidate == word)
    }
}
