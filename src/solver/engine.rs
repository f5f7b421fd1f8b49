//! Candidate engine: prunes the candidate set from feedback and ranks it

use super::constraints::Constraints;
use super::frequency::LetterFrequencies;
use crate::core::{Feedback, FeedbackError, Verdict, WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace};

/// A candidate together with its frequency score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub word: &'a Word,
    pub score: u32,
}

/// Error type for feedback given as raw strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid guess: {0}")]
    Guess(#[from] WordError),
    #[error("invalid feedback: {0}")]
    Feedback(#[from] FeedbackError),
}

/// Candidate set and constraints for one round
///
/// Created fresh from the solution list at the start of a round and dropped
/// when the round ends. Candidates keep the order of the solution list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEngine<'a> {
    candidates: Vec<&'a Word>,
    constraints: Constraints,
}

impl<'a> CandidateEngine<'a> {
    /// Start a round with every solution as a candidate
    #[must_use]
    pub fn new(solutions: &'a [Word]) -> Self {
        debug!(candidates = solutions.len(), "starting round");
        Self {
            candidates: solutions.iter().collect(),
            constraints: Constraints::new(),
        }
    }

    /// Remaining candidates in solution-list order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// No candidate is consistent with the feedback seen so far
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.candidates.iter().any(|&candidate| candidate == word)
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Positional letter counts over the current candidates
    #[must_use]
    pub fn frequencies(&self) -> LetterFrequencies {
        LetterFrequencies::from_words(self.candidates.iter().copied())
    }

    /// Score any word against the current candidates
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        self.frequencies().score(word)
    }

    /// Candidates ordered by descending frequency score
    ///
    /// Frequencies are recomputed from the current candidates on every call.
    /// Equal scores keep solution-list order.
    ///
    /// # Examples
    /// ```
    /// use wordle_challenger::core::Word;
    /// use wordle_challenger::solver::CandidateEngine;
    ///
    /// let solutions = vec![
    ///     Word::new("xyzde").unwrap(),
    ///     Word::new("abcdf").unwrap(),
    ///     Word::new("abcde").unwrap(),
    /// ];
    /// let engine = CandidateEngine::new(&solutions);
    /// let ranked = engine.rank();
    ///
    /// let order: Vec<&str> = ranked.iter().map(|r| r.word.text()).collect();
    /// assert_eq!(order, vec!["ABCDE", "ABCDF", "XYZDE"]);
    /// assert_eq!(ranked[0].score, 11);
    /// ```
    #[must_use]
    pub fn rank(&self) -> Vec<Ranked<'a>> {
        let frequencies = self.frequencies();

        let mut ranked: Vec<Ranked<'a>> = self
            .candidates
            .iter()
            .map(|&word| Ranked {
                word,
                score: frequencies.score(word),
            })
            .collect();
        ranked.sort_by_key(|r| std::cmp::Reverse(r.score));

        if let Some(best) = ranked.first() {
            trace!(best = %best.word, score = best.score, candidates = ranked.len(), "ranked candidates");
        }

        ranked
    }

    /// Highest-ranked candidate, if any remain
    #[must_use]
    pub fn best_guess(&self) -> Option<&'a Word> {
        self.rank().first().map(|r| r.word)
    }

    /// Narrow the candidates using one guess and its feedback
    ///
    /// Steps run in a fixed order:
    /// 1. Correct letters resolve their position (consuming one misplaced
    ///    requirement for that letter) and filter on it.
    /// 2. Present letters drop candidates with that letter at that position,
    ///    set the letter's requirement to this turn's present count, then
    ///    filter on every requirement among unresolved positions.
    /// 3. Absent letters are excluded unless still required.
    /// 4. Candidates with an excluded letter at any unresolved position go.
    ///
    /// # Examples
    /// ```
    /// use wordle_challenger::core::{Feedback, Word};
    /// use wordle_challenger::solver::CandidateEngine;
    ///
    /// let solutions: Vec<Word> = ["crane", "trace", "crate", "grate"]
    ///     .into_iter()
    ///     .map(|s| Word::new(s).unwrap())
    ///     .collect();
    /// let mut engine = CandidateEngine::new(&solutions);
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::evaluate(&solutions[0], &guess);
    /// engine.apply_feedback(&guess, &feedback);
    ///
    /// assert_eq!(engine.candidates(), &[&solutions[0]]);
    /// ```
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        let before = self.candidates.len();

        for position in positions_with(feedback, Verdict::Correct) {
            let letter = guess.char_at(position);
            if self.constraints.fix(position, letter) {
                self.candidates
                    .retain(|word| word.char_at(position) == letter);
            }
        }

        let mut present_counts: FxHashMap<u8, u8> = FxHashMap::default();
        for position in positions_with(feedback, Verdict::Present) {
            let letter = guess.char_at(position);
            self.candidates
                .retain(|word| word.char_at(position) != letter);
            *present_counts.entry(letter).or_insert(0) += 1;
        }
        if !present_counts.is_empty() {
            for (letter, count) in present_counts {
                self.constraints.require(letter, count);
            }
            let constraints = &self.constraints;
            self.candidates
                .retain(|word| constraints.satisfies_requirements(word));
        }

        for position in positions_with(feedback, Verdict::Absent) {
            self.constraints
                .exclude_if_unrequired(guess.char_at(position));
        }

        let constraints = &self.constraints;
        self.candidates
            .retain(|word| constraints.admits_unresolved(word));

        debug!(
            guess = %guess,
            feedback = %feedback,
            before,
            after = self.candidates.len(),
            pattern = %self.constraints.pattern(),
            excluded = %self.constraints.excluded(),
            "applied feedback"
        );
    }

    /// Parse a guess and feedback string, then apply them
    ///
    /// Both inputs are validated before anything changes, so a rejected call
    /// leaves the engine untouched.
    ///
    /// # Errors
    /// Returns `EngineError` if the guess is not a five-letter word or the
    /// feedback is not five valid symbols.
    pub fn apply_feedback_str(&mut self, guess: &str, feedback: &str) -> Result<(), EngineError> {
        let guess = Word::new(guess)?;
        let feedback = Feedback::parse(feedback)?;
        self.apply_feedback(&guess, &feedback);
        Ok(())
    }
}

fn positions_with(feedback: &Feedback, verdict: Verdict) -> impl Iterator<Item = usize> + '_ {
    (0..WORD_LENGTH).filter(move |&i| feedback.at(i) == verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn texts(engine: &CandidateEngine) -> Vec<String> {
        engine
            .candidates()
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    #[test]
    fn new_engine_holds_every_solution() {
        let solutions = words(&["crane", "slate", "irate"]);
        let engine = CandidateEngine::new(&solutions);

        assert_eq!(engine.candidate_count(), 3);
        assert!(!engine.is_exhausted());
        assert_eq!(engine.constraints().pattern(), "_____");
    }

    #[test]
    fn rank_orders_by_positional_frequency() {
        let solutions = words(&["xyzde", "abcdf", "abcde"]);
        let engine = CandidateEngine::new(&solutions);

        let ranked = engine.rank();
        let scores: Vec<(&str, u32)> = ranked.iter().map(|r| (r.word.text(), r.score)).collect();
        assert_eq!(
            scores,
            vec![("ABCDE", 11), ("ABCDF", 10), ("XYZDE", 8)]
        );
        assert_eq!(engine.best_guess(), Some(&solutions[2]));
    }

    #[test]
    fn rank_counts_repeated_letters_per_occurrence() {
        let solutions = words(&["zzzzz", "aaaab", "aaaac"]);
        let engine = CandidateEngine::new(&solutions);

        let ranked = engine.rank();
        assert_eq!(ranked[0].word.text(), "AAAAB");
        assert_eq!(ranked[0].score, 9);
        assert_eq!(ranked[2].word.text(), "ZZZZZ");
        assert_eq!(ranked[2].score, 5);
    }

    #[test]
    fn rank_ties_keep_solution_order() {
        let solutions = words(&["bbbbb", "aaaaa", "ccccc"]);
        let engine = CandidateEngine::new(&solutions);

        let order: Vec<&str> = engine.rank().iter().map(|r| r.word.text()).collect();
        assert_eq!(order, vec!["BBBBB", "AAAAA", "CCCCC"]);
    }

    #[test]
    fn rank_is_idempotent() {
        let solutions = words_from_slice(SOLUTIONS);
        let engine = CandidateEngine::new(&solutions);

        assert_eq!(engine.rank(), engine.rank());
    }

    #[test]
    fn rank_uses_current_candidates() {
        let solutions = words(&["crane", "crate", "slate", "slant"]);
        let mut engine = CandidateEngine::new(&solutions);
        assert_eq!(engine.score(&word("slate")), 2 + 2 + 4 + 2 + 3);

        let feedback = Feedback::evaluate(&word("slant"), &word("slate"));
        assert_eq!(feedback.to_string(), "GGGY-");
        engine.apply_feedback(&word("slate"), &feedback);

        assert_eq!(texts(&engine), vec!["SLANT"]);
        // S, L, A still match; T and E are now at the wrong positions
        assert_eq!(engine.score(&word("slate")), 3);
        assert_eq!(engine.rank()[0].score, 5);
    }

    #[test]
    fn empty_engine_ranks_nothing() {
        let solutions: Vec<Word> = Vec::new();
        let engine = CandidateEngine::new(&solutions);

        assert!(engine.is_exhausted());
        assert!(engine.rank().is_empty());
        assert_eq!(engine.best_guess(), None);
    }

    #[test]
    fn crane_target_with_trace_guess() {
        let solutions = words(&["crane", "trace", "crate", "grate", "irate", "slate"]);
        let mut engine = CandidateEngine::new(&solutions);

        let feedback = Feedback::evaluate(&word("crane"), &word("trace"));
        assert_eq!(feedback.to_string(), "-GGYG");
        engine.apply_feedback(&word("trace"), &feedback);

        assert_eq!(texts(&engine), vec!["CRANE"]);
        let constraints = engine.constraints();
        assert_eq!(constraints.pattern(), "_RA_E");
        assert_eq!(constraints.requirement(b'C'), 1);
        assert_eq!(constraints.excluded().to_string(), "T");
    }

    #[test]
    fn absent_duplicate_of_required_letter_is_not_excluded() {
        let solutions = words(&["level", "rebel", "bevel", "hello", "fever", "eerie", "seven"]);
        let mut engine = CandidateEngine::new(&solutions);

        let feedback = Feedback::evaluate(&word("level"), &word("eerie"));
        assert_eq!(feedback.to_string(), "YG---");
        engine.apply_feedback(&word("eerie"), &feedback);

        assert_eq!(texts(&engine), vec!["LEVEL", "BEVEL", "SEVEN"]);
        let constraints = engine.constraints();
        assert_eq!(constraints.pattern(), "_E___");
        assert_eq!(constraints.requirement(b'E'), 1);
        assert!(constraints.allowed().contains(b'E'));
        assert_eq!(constraints.excluded().to_string(), "IR");
    }

    #[test]
    fn located_letter_consumes_requirement() {
        let solutions = words(&["level", "rebel", "bevel", "hello", "fever", "eerie", "seven"]);
        let mut engine = CandidateEngine::new(&solutions);
        let target = word("level");

        for guess in ["eerie", "bevel"] {
            let guess = word(guess);
            let feedback = Feedback::evaluate(&target, &guess);
            engine.apply_feedback(&guess, &feedback);
        }

        assert_eq!(texts(&engine), vec!["LEVEL"]);
        let constraints = engine.constraints();
        assert_eq!(constraints.pattern(), "_EVEL");
        assert_eq!(constraints.requirement(b'E'), 0);
        assert!(constraints.excluded().contains(b'B'));
    }

    #[test]
    fn all_correct_leaves_only_the_guess() {
        let solutions = words_from_slice(SOLUTIONS);
        let mut engine = CandidateEngine::new(&solutions);

        engine.apply_feedback(&word("crane"), &Feedback::SOLVED);

        assert_eq!(texts(&engine), vec!["CRANE"]);
        assert!(engine.constraints().is_fully_resolved());
    }

    #[test]
    fn fixed_positions_are_not_refiltered() {
        let solutions = words(&["crane", "crate"]);
        let mut engine = CandidateEngine::new(&solutions);

        engine.apply_feedback(&word("crxxx"), &Feedback::parse("GG---").unwrap());
        // Contradictory green at a resolved position is ignored
        engine.apply_feedback(&word("zzaaa"), &Feedback::parse("GG---").unwrap());

        assert_eq!(engine.constraints().pattern(), "CR___");
    }

    #[test]
    fn requirement_is_overwritten_by_later_turns() {
        let solutions = words(&["sassy", "asset", "oasis"]);
        let mut engine = CandidateEngine::new(&solutions);

        engine.apply_feedback(&word("xssxx"), &Feedback::parse("-YY--").unwrap());
        assert_eq!(engine.constraints().requirement(b'S'), 2);

        engine.apply_feedback(&word("sxxxx"), &Feedback::parse("Y----").unwrap());
        assert_eq!(engine.constraints().requirement(b'S'), 1);
    }

    #[test]
    fn string_feedback_is_all_or_nothing() {
        let solutions = words(&["crane", "slate", "irate"]);
        let mut engine = CandidateEngine::new(&solutions);
        let untouched = engine.clone();

        assert!(matches!(
            engine.apply_feedback_str("crane", "GGG"),
            Err(EngineError::Feedback(FeedbackError::InvalidLength(3)))
        ));
        assert!(matches!(
            engine.apply_feedback_str("crane", "GGXGG"),
            Err(EngineError::Feedback(FeedbackError::InvalidSymbol('X')))
        ));
        assert!(matches!(
            engine.apply_feedback_str("cranes", "GGGGG"),
            Err(EngineError::Guess(WordError::InvalidLength(6)))
        ));
        assert_eq!(engine, untouched);

        engine.apply_feedback_str("slate", "--G-G").unwrap();
        assert_eq!(texts(&engine), vec!["CRANE"]);
    }

    proptest! {
        #[test]
        fn target_survives_candidate_guesses(
            target_index in 0..SOLUTIONS.len(),
            picks in proptest::collection::vec(any::<proptest::sample::Index>(), 1..8),
        ) {
            let solutions = words_from_slice(SOLUTIONS);
            let target = &solutions[target_index];
            let mut engine = CandidateEngine::new(&solutions);

            for pick in picks {
                let before = engine.candidate_count();
                let guess = *pick.get(engine.candidates());
                let feedback = Feedback::evaluate(target, guess);
                engine.apply_feedback(guess, &feedback);

                prop_assert!(engine.candidate_count() <= before);
                prop_assert!(engine.contains(target), "{} pruned after {}", target, guess);
                if feedback.is_solved() {
                    prop_assert_eq!(engine.candidate_count(), 1);
                    break;
                }
            }
        }

        #[test]
        fn rank_is_a_permutation_of_candidates(
            target_index in 0..SOLUTIONS.len(),
            guess_index in 0..SOLUTIONS.len(),
        ) {
            let solutions = words_from_slice(SOLUTIONS);
            let mut engine = CandidateEngine::new(&solutions);
            let feedback = Feedback::evaluate(&solutions[target_index], &solutions[guess_index]);
            engine.apply_feedback(&solutions[guess_index], &feedback);

            let ranked = engine.rank();
            prop_assert_eq!(ranked.len(), engine.candidate_count());
            prop_assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
            prop_assert!(ranked.iter().all(|r| engine.contains(r.word)));
        }
    }
}
