//! Positional letter frequencies
//!
//! Counts how often each letter appears at each position across a set of
//! words. A word's score is the sum of the counts of its own letters at their
//! positions, so words built from common letters in common places score high.

use crate::core::{WORD_LENGTH, Word};

const ALPHABET_SIZE: usize = 26;

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

/// Letter counts for each of the five positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies {
    counts: [[u32; ALPHABET_SIZE]; WORD_LENGTH],
    total: usize,
}

impl LetterFrequencies {
    /// Tally letters per position over `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_challenger::core::Word;
    /// use wordle_challenger::solver::LetterFrequencies;
    ///
    /// let words = vec![
    ///     Word::new("crane").unwrap(),
    ///     Word::new("crate").unwrap(),
    ///     Word::new("slate").unwrap(),
    /// ];
    /// let frequencies = LetterFrequencies::from_words(&words);
    ///
    /// assert_eq!(frequencies.count(0, b'C'), 2);
    /// assert_eq!(frequencies.count(4, b'E'), 3);
    /// // C2 + R2 + A3 + T2 + E3
    /// assert_eq!(frequencies.score(&Word::new("crate").unwrap()), 12);
    /// ```
    #[must_use]
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut counts = [[0u32; ALPHABET_SIZE]; WORD_LENGTH];
        let mut total = 0;

        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                counts[position][letter_index(letter)] += 1;
            }
            total += 1;
        }

        Self { counts, total }
    }

    /// Number of words tallied
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// How many words have `letter` at `position`
    #[inline]
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][letter_index(letter)]
    }

    /// Per-position counts for the letters of `word`
    #[must_use]
    pub fn breakdown(&self, word: &Word) -> [u32; WORD_LENGTH] {
        let mut parts = [0; WORD_LENGTH];
        for (position, part) in parts.iter_mut().enumerate() {
            *part = self.count(position, word.char_at(position));
        }
        parts
    }

    /// Sum of the word's letter counts at their positions
    ///
    /// Repeated letters contribute once per occurrence.
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        self.breakdown(word).iter().sum()
    }

    /// Most frequent letter at `position`, earliest letter on ties
    #[must_use]
    pub fn most_common(&self, position: usize) -> Option<(u8, u32)> {
        (b'A'..=b'Z')
            .map(|letter| (letter, self.count(position, letter)))
            .filter(|&(_, count)| count > 0)
            .fold(None, |best, candidate| match best {
                Some((_, count)) if count >= candidate.1 => best,
                _ => Some(candidate),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn empty_set_scores_zero() {
        let none: Vec<Word> = Vec::new();
        let frequencies = LetterFrequencies::from_words(&none);
        assert_eq!(frequencies.total(), 0);
        assert_eq!(frequencies.score(&Word::new("crane").unwrap()), 0);
        assert_eq!(frequencies.most_common(0), None);
    }

    #[test]
    fn counts_are_positional() {
        let list = words(&["abcde", "bacde", "abxyz"]);
        let frequencies = LetterFrequencies::from_words(&list);

        assert_eq!(frequencies.total(), 3);
        assert_eq!(frequencies.count(0, b'A'), 2);
        assert_eq!(frequencies.count(0, b'B'), 1);
        assert_eq!(frequencies.count(1, b'A'), 1);
        assert_eq!(frequencies.count(4, b'Z'), 1);
        assert_eq!(frequencies.count(4, b'Q'), 0);
    }

    #[test]
    fn duplicates_count_per_occurrence() {
        let list = words(&["aaaab", "aaaac", "zzzzz"]);
        let frequencies = LetterFrequencies::from_words(&list);

        assert_eq!(frequencies.breakdown(&list[0]), [2, 2, 2, 2, 1]);
        assert_eq!(frequencies.score(&list[0]), 9);
        assert_eq!(frequencies.score(&list[2]), 5);
    }

    #[test]
    fn scores_words_outside_the_set() {
        let list = words(&["crane", "crate"]);
        let frequencies = LetterFrequencies::from_words(&list);

        // C2 + R2 + 0 + 0 + E2
        assert_eq!(frequencies.score(&Word::new("croze").unwrap()), 6);
    }

    #[test]
    fn most_common_prefers_earliest_letter_on_ties() {
        let list = words(&["crane", "brine", "crone"]);
        let frequencies = LetterFrequencies::from_words(&list);

        assert_eq!(frequencies.most_common(0), Some((b'C', 2)));
        // A, I, O once each
        assert_eq!(frequencies.most_common(2), Some((b'A', 1)));
        assert_eq!(frequencies.most_common(4), Some((b'E', 3)));
    }
}
