//! Wordle feedback evaluation and representation
//!
//! Feedback is one verdict per position:
//! - Correct: right letter, right position (🟩)
//! - Present: letter is in the word, elsewhere (🟨)
//! - Absent: no further occurrence of the letter (⬜)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Colored square used when displaying this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII letter form (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback must have exactly 5 verdicts, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback symbol '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidSymbol(char),
}

/// Feedback for a whole guess, one verdict per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All correct (solved)
    pub const SOLVED: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Wrap five verdicts
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's duplicate-letter rules: exact matches consume their
    /// target letter first, then the remaining guess letters are matched left
    /// to right against what is left of the target, so surplus duplicates come
    /// out absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_challenger::core::{Feedback, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    ///
    /// assert_eq!(feedback.to_string(), "-GGYG");
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut remaining = target.char_counts();

        // Allow: Index needed to access guess[i], target[i], and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                verdicts[i] = Verdict::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(verdicts)
    }

    /// The verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Verdict at a position (0-4)
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly five symbols or
    /// contains an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_challenger::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Feedback::parse("GYG").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, &symbol) in verdicts.iter_mut().zip(&symbols) {
            *slot = Verdict::from_symbol(symbol).ok_or(FeedbackError::InvalidSymbol(symbol))?;
        }

        Ok(Self(verdicts))
    }

    /// Convert feedback to emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl TryFrom<&[Verdict]> for Feedback {
    type Error = FeedbackError;

    fn try_from(verdicts: &[Verdict]) -> Result<Self, Self::Error> {
        let array: [Verdict; WORD_LENGTH] = verdicts
            .try_into()
            .map_err(|_| FeedbackError::InvalidLength(verdicts.len()))?;
        Ok(Self(array))
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}
