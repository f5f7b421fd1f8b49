//! Benchmark command
//!
//! Plays rounds against a sample of targets and reports guess statistics.

use super::solve::{GameConfig, play_round};
use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess counts of solved rounds
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from `solutions` at random
///
/// Returns every solution, shuffled, when `count` exceeds the list.
#[must_use]
pub fn sample_targets(solutions: &[Word], count: usize) -> Vec<Word> {
    solutions
        .choose_multiple(&mut rand::rng(), count)
        .cloned()
        .collect()
}

/// Play a round for each target and collect statistics
///
/// Averages and extremes cover solved rounds only.
#[allow(clippy::cast_precision_loss)]
pub fn run_benchmark(config: &GameConfig, solutions: &[Word], targets: &[Word]) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for target in targets {
        let result = play_round(config, solutions, target);
        if !result.success {
            failures.push(target.clone());
            continue;
        }

        let guesses = result.guess_count();
        solved += 1;
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    info!(total_words, solved, ?duration, "benchmark finished");

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let solutions = words_from_slice(SOLUTIONS);
        let targets = words_from_slice(&SOLUTIONS[..10]);

        let result = run_benchmark(&GameConfig::default(), &solutions, &targets);

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved + result.failures.len(), 10);
        assert!(result.solved > 0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let solutions = words_from_slice(SOLUTIONS);
        let targets = words_from_slice(&SOLUTIONS[..20]);

        let result = run_benchmark(&GameConfig::default(), &solutions, &targets);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let solutions = words_from_slice(SOLUTIONS);
        let targets = words_from_slice(&SOLUTIONS[..20]);

        let result = run_benchmark(&GameConfig::default(), &solutions, &targets);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn benchmark_counts_failures() {
        let solutions = words_from_slice(&["crane", "trace", "crate"]);
        let targets = words_from_slice(&["crate", "zzzzz"]);

        let result = run_benchmark(&GameConfig::default(), &solutions, &targets);

        assert_eq!(result.solved, 1);
        assert_eq!(result.failures, words_from_slice(&["zzzzz"]));
        assert_eq!(result.total_guesses, 2);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let solutions = words_from_slice(SOLUTIONS);
        let result = run_benchmark(&GameConfig::default(), &solutions, &[]);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn sample_targets_are_distinct_solutions() {
        let solutions = words_from_slice(SOLUTIONS);
        let sample = sample_targets(&solutions, 25);

        assert_eq!(sample.len(), 25);
        let unique: rustc_hash::FxHashSet<&Word> = sample.iter().collect();
        assert_eq!(unique.len(), 25);
        assert!(sample.iter().all(|w| solutions.contains(w)));
    }

    #[test]
    fn sample_targets_caps_at_list_size() {
        let solutions = words_from_slice(&["crane", "trace"]);
        assert_eq!(sample_targets(&solutions, 10).len(), 2);
    }
}
