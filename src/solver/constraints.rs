//! Knowledge accumulated from feedback during one round
//!
//! Tracks which positions are resolved, how many copies of a letter must still
//! appear among the unresolved positions, and which letters remain allowed
//! there.

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// A set of uppercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// A-Z
    pub const ALL: Self = Self((1 << 26) - 1);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_uppercase());
        1 << (letter - b'A')
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Remove a letter, returning whether it was present
    #[inline]
    pub fn remove(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 &= !Self::bit(letter);
        present
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in the set, alphabetically
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }

    /// Letters of `ALL` not in this set
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Constraints derived from all feedback seen so far in a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    fixed: [Option<u8>; WORD_LENGTH],
    misplaced: FxHashMap<u8, u8>,
    allowed: LetterSet,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraints {
    /// Nothing known: every position unresolved, every letter allowed
    #[must_use]
    pub fn new() -> Self {
        Self {
            fixed: [None; WORD_LENGTH],
            misplaced: FxHashMap::default(),
            allowed: LetterSet::ALL,
        }
    }

    /// Resolved letter per position
    #[must_use]
    pub const fn fixed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.fixed
    }

    #[must_use]
    pub const fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// Positions not yet resolved, in order
    pub fn unresolved_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WORD_LENGTH).filter(|&i| self.fixed[i].is_none())
    }

    #[must_use]
    pub fn is_fully_resolved(&self) -> bool {
        self.fixed.iter().all(Option::is_some)
    }

    /// Minimum copies of `letter` required among unresolved positions
    #[must_use]
    pub fn requirement(&self, letter: u8) -> u8 {
        self.misplaced.get(&letter).copied().unwrap_or(0)
    }

    /// Non-zero misplaced requirements, alphabetically
    #[must_use]
    pub fn requirements(&self) -> Vec<(u8, u8)> {
        let mut required: Vec<(u8, u8)> = self
            .misplaced
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, &count)| (letter, count))
            .collect();
        required.sort_unstable();
        required
    }

    /// Letters still allowed at unresolved positions
    #[must_use]
    pub const fn allowed(&self) -> LetterSet {
        self.allowed
    }

    /// Letters confirmed absent from the unresolved positions
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.allowed.complement()
    }

    /// Resolve `position` to `letter`
    ///
    /// Returns `false` without changing anything if the position was already
    /// resolved. A newly located letter consumes one outstanding misplaced
    /// requirement for that letter.
    pub fn fix(&mut self, position: usize, letter: u8) -> bool {
        if self.fixed[position].is_some() {
            return false;
        }
        self.fixed[position] = Some(letter);
        if let Some(count) = self.misplaced.get_mut(&letter) {
            *count = count.saturating_sub(1);
        }
        true
    }

    /// Set the misplaced requirement for `letter`, replacing any earlier value
    pub fn require(&mut self, letter: u8, count: u8) {
        self.misplaced.insert(letter, count);
    }

    /// Exclude `letter` unless a misplaced requirement still holds it
    ///
    /// Returns whether the letter was newly excluded.
    pub fn exclude_if_unrequired(&mut self, letter: u8) -> bool {
        if self.requirement(letter) != 0 {
            return false;
        }
        self.allowed.remove(letter)
    }

    /// Whether `word` has at least the required count of every misplaced
    /// letter among the unresolved positions
    #[must_use]
    pub fn satisfies_requirements(&self, word: &Word) -> bool {
        self.misplaced.iter().all(|(&letter, &count)| {
            word.count_at(letter, self.unresolved_positions()) >= usize::from(count)
        })
    }

    /// Whether every unresolved position of `word` holds an allowed letter
    #[must_use]
    pub fn admits_unresolved(&self, word: &Word) -> bool {
        self.unresolved_positions()
            .all(|i| self.allowed.contains(word.char_at(i)))
    }

    /// Resolved positions as a mask like `_R_NE`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.fixed
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'Q');
        set.insert(b'A');
        assert!(set.contains(b'A'));
        assert!(!set.contains(b'B'));
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "AQ");

        assert!(set.remove(b'A'));
        assert!(!set.remove(b'A'));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'Q']);
    }

    #[test]
    fn letter_set_complement() {
        assert_eq!(LetterSet::ALL.len(), 26);
        assert_eq!(LetterSet::ALL.complement(), LetterSet::EMPTY);

        let vowels: LetterSet = b"AEIOU".iter().copied().collect();
        let consonants = vowels.complement();
        assert_eq!(consonants.len(), 21);
        assert!(!consonants.contains(b'E'));
        assert!(consonants.contains(b'Z'));
    }

    #[test]
    fn fresh_constraints_admit_everything() {
        let constraints = Constraints::new();
        assert_eq!(constraints.pattern(), "_____");
        assert_eq!(constraints.unresolved_positions().count(), 5);
        assert!(constraints.excluded().is_empty());
        assert!(constraints.requirements().is_empty());
        assert!(constraints.admits_unresolved(&word("zzzzz")));
        assert!(constraints.satisfies_requirements(&word("crane")));
    }

    #[test]
    fn fix_never_reverts() {
        let mut constraints = Constraints::new();
        assert!(constraints.fix(1, b'R'));
        assert!(!constraints.fix(1, b'T'));
        assert_eq!(constraints.fixed_at(1), Some(b'R'));
        assert_eq!(constraints.pattern(), "_R___");
        assert_eq!(
            constraints.unresolved_positions().collect::<Vec<_>>(),
            vec![0, 2, 3, 4]
        );
    }

    #[test]
    fn fix_consumes_one_requirement() {
        let mut constraints = Constraints::new();
        constraints.require(b'E', 2);
        constraints.fix(4, b'E');
        assert_eq!(constraints.requirement(b'E'), 1);
        constraints.fix(1, b'E');
        assert_eq!(constraints.requirement(b'E'), 0);
        // saturates rather than going negative
        constraints.fix(2, b'E');
        assert_eq!(constraints.requirement(b'E'), 0);
        assert!(constraints.requirements().is_empty());
    }

    #[test]
    fn require_overwrites_previous_count() {
        let mut constraints = Constraints::new();
        constraints.require(b'S', 2);
        constraints.require(b'S', 1);
        assert_eq!(constraints.requirement(b'S'), 1);
        assert_eq!(constraints.requirements(), vec![(b'S', 1)]);
    }

    #[test]
    fn required_letters_are_not_excluded() {
        let mut constraints = Constraints::new();
        constraints.require(b'E', 1);

        assert!(!constraints.exclude_if_unrequired(b'E'));
        assert!(constraints.exclude_if_unrequired(b'T'));
        assert!(!constraints.exclude_if_unrequired(b'T'));

        assert!(constraints.allowed().contains(b'E'));
        assert_eq!(constraints.excluded().to_string(), "T");
    }

    #[test]
    fn requirements_only_count_unresolved_positions() {
        let mut constraints = Constraints::new();
        constraints.fix(0, b'E');
        constraints.require(b'E', 1);

        // EERIE still has Es at unresolved positions 1 and 4
        assert!(constraints.satisfies_requirements(&word("eerie")));
        // EXTRA's only E sits at the resolved position
        assert!(!constraints.satisfies_requirements(&word("extra")));
    }

    #[test]
    fn excluded_letters_only_apply_to_unresolved_positions() {
        let mut constraints = Constraints::new();
        constraints.fix(0, b'T');
        constraints.exclude_if_unrequired(b'T');

        assert!(!constraints.admits_unresolved(&word("toast")));
        assert!(constraints.admits_unresolved(&word("tubal")));
    }
}
