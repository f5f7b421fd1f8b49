//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{BenchmarkResult, GameConfig, RoundResult, ScoreReport};
use crate::core::Word;
use colored::Colorize;

/// Print the result of playing a round
pub fn print_round_result(result: &RoundResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!("  Score:      {}", step.score);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guess_count())
                .green()
                .bold()
        );
    } else if result.exhausted {
        println!(
            "{}",
            format!(
                "❌ Ran out of candidates after {} guesses (is {} in the solution list?)",
                result.guess_count(),
                result.target
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guess_count())
                .red()
                .bold()
        );
    }
}

/// Print the frequency breakdown of a word
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER FREQUENCY SCORE:".bright_cyan().bold(),
        report.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} possible solutions:",
        report.total_candidates
    );
    let max = report.total_candidates as f64;
    for (position, (&letter, &count)) in report
        .word
        .chars()
        .iter()
        .zip(&report.breakdown)
        .enumerate()
    {
        println!(
            "   {} {}: [{}] {count}",
            position + 1,
            char::from(letter),
            create_progress_bar(f64::from(count), max, 30).green()
        );
    }

    println!(
        "\n   Score:       {}",
        report.score.to_string().bright_yellow().bold()
    );
    println!("   Rank:        #{}", report.rank);
    if let Some((best, score)) = &report.best {
        println!("   Best word:   {} ({score})", best.text().bright_green());
    }
    if !report.is_solution {
        let note = if report.is_valid_guess {
            "accepted guess, never a solution"
        } else {
            "not in either word list"
        };
        println!("   Note:        {}", note.yellow());
    }
}

/// Print the result of a benchmark
#[allow(clippy::cast_precision_loss)]
pub fn print_benchmark_result(result: &BenchmarkResult, config: &GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.total_words.max(1) as f64;
    for guess_count in 1..=config.max_turns {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = count as f64 / total * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failures:".red().bold(),
            result
                .failures
                .iter()
                .map(Word::text)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}
