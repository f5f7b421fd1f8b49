//! Test all solutions - exhaustive engine evaluation
//!
//! Plays a round against every solution word in parallel and summarizes the
//! outcome.

use super::solve::{GameConfig, RoundResult, play_round};
use crate::core::Word;
use crate::output::formatters::create_progress_bar;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Solved in the most guesses, hardest first
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    /// The opening guess; always the same since the engine is deterministic
    pub first_guess: Option<String>,
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Play every solution (or the first `limit`) as a target
pub fn run_test_all(
    config: &GameConfig,
    solutions: &[Word],
    limit: Option<usize>,
) -> TestAllStatistics {
    let targets = &solutions[..limit.unwrap_or(solutions.len()).min(solutions.len())];

    println!("🎯 Testing {} words...", targets.len());
    let pb = progress_bar(targets.len());
    pb.set_message("Solving");

    let total_start = Instant::now();
    let results: Vec<RoundResult> = targets
        .par_iter()
        .map(|target| {
            let result = play_round(config, solutions, target);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let stats = summarize(&results, total_start.elapsed());
    info!(
        total = stats.total_words,
        solved = stats.solved,
        average = stats.average_guesses,
        "test-all finished"
    );
    stats
}

#[allow(clippy::cast_precision_loss)]
fn summarize(results: &[RoundResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut worst_words = Vec::new();
    let mut failed_words = Vec::new();

    for result in results {
        if result.success {
            let guesses = result.guess_count();
            *guess_distribution.entry(guesses).or_insert(0) += 1;
            if guesses >= 5 {
                worst_words.push((result.target.text().to_string(), guesses));
            }
        } else {
            failed_words.push(result.target.text().to_string());
        }
    }
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    let solved_counts = || {
        results
            .iter()
            .filter(|r| r.success)
            .map(RoundResult::guess_count)
    };
    let solved = solved_counts().count();
    let total_guesses: usize = solved_counts().sum();

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed: results.len() - solved,
        guess_distribution,
        total_time,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        max_guesses: solved_counts().max().unwrap_or(0),
        min_guesses: solved_counts().min().unwrap_or(0),
        worst_words,
        failed_words,
        first_guess: results
            .first()
            .and_then(|r| r.turns.first())
            .map(|turn| turn.guess.text().to_string()),
    }
}

/// Print test-all statistics
#[allow(clippy::cast_precision_loss)]
pub fn print_test_all_statistics(stats: &TestAllStatistics, config: &GameConfig) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );
    if let Some(first) = &stats.first_guess {
        println!("  Opening guess:       {}", first.bright_white().bold());
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=config.max_turns {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved Words".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.red());
        }
        if stats.failed_words.len() > 10 {
            println!("  ... and {} more", stats.failed_words.len() - 10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn test_all_with_limit() {
        let solutions = words_from_slice(SOLUTIONS);
        let stats = run_test_all(&GameConfig::default(), &solutions, Some(15));

        assert_eq!(stats.total_words, 15);
        assert_eq!(stats.solved + stats.failed, 15);
        assert_eq!(stats.failed_words.len(), stats.failed);
        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }

    #[test]
    fn limit_larger_than_list_is_capped() {
        let solutions = words_from_slice(&["crane", "trace", "crate"]);
        let stats = run_test_all(&GameConfig::default(), &solutions, Some(100));

        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.first_guess.as_deref(), Some("CRANE"));
    }

    #[test]
    fn summary_of_small_list() {
        let solutions = words_from_slice(&["crane", "trace", "crate"]);
        let config = GameConfig::default();
        let results: Vec<RoundResult> = solutions
            .iter()
            .map(|target| play_round(&config, &solutions, target))
            .collect();
        let stats = summarize(&results, Duration::ZERO);

        // CRANE in one; CRATE and TRACE after CRANE
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.max_guesses, 2);
        assert_eq!(stats.guess_distribution.get(&2), Some(&2));
        assert!((stats.average_guesses - 5.0 / 3.0).abs() < 1e-9);
        assert!(stats.worst_words.is_empty());
    }

    #[test]
    fn empty_summary() {
        let stats = summarize(&[], Duration::ZERO);
        assert_eq!(stats.total_words, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert_eq!(stats.first_guess, None);
    }
}
