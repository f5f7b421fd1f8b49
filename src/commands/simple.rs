//! Simple interactive CLI mode
//!
//! Text-based assistant without TUI

use super::session::{Outcome, Session};
use super::solve::GameConfig;
use crate::core::{Feedback, FeedbackError};
use crate::output::formatters::{colored_guess, requirements_summary};
use crate::wordlists::WordLists;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed once no more than this many remain
const SHOW_CANDIDATES: usize = 10;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Undo,
    Auto,
    Win,
    Guess(String),
    Feedback(Feedback),
}

fn parse_input(input: &str) -> Result<Input, FeedbackError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    Ok(match lower.as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        "auto" | "a" => Input::Auto,
        "win" | "correct" | "yes" | "solved" => Input::Win,
        _ => match lower.strip_prefix("guess ") {
            Some(word) => Input::Guess(word.trim().to_string()),
            None => Input::Feedback(trimmed.parse()?),
        },
    })
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(lists: &WordLists, config: &GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    run_with(lists, config, &mut stdin.lock())
}

fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Challenger - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses built from the most common letters in each position.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'guess WORD' to play your own word, 'auto' to go back to the suggestion, 'undo', 'new', 'quit'\n");
}

fn print_turn(session: &Session<'_>, config: &GameConfig) {
    let engine = session.engine();
    let constraints = engine.constraints();

    println!("────────────────────────────────────────────────────────────");
    println!(
        "Turn {} of {}: {} candidates remaining",
        session.turn(),
        config.max_turns,
        engine.candidate_count()
    );
    println!("────────────────────────────────────────────────────────────");

    if !session.history().is_empty() {
        println!("   Pattern:   {}", constraints.pattern().bright_green());
        println!(
            "   Misplaced: {}",
            requirements_summary(&constraints.requirements()).yellow()
        );
        println!("   Excluded:  {}", constraints.excluded().to_string().bright_black());
    }

    if let Some(suggestion) = session.suggestion() {
        let label = if suggestion.manual { "Your guess" } else { "Suggested guess" };
        println!(
            "\n📊 {label}: {} (score {})",
            suggestion.word.text().bright_white().bold(),
            suggestion.score
        );
    }

    if (1..=SHOW_CANDIDATES).contains(&engine.candidate_count()) {
        println!("\nRemaining candidates:");
        for ranked in engine.rank() {
            println!("  • {} ({})", ranked.word.text(), ranked.score);
        }
    }
    println!();
}

fn print_win(session: &Session<'_>, guesses: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, entry) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(&entry.guess, &entry.feedback),
            entry.feedback.to_emoji()
        );
    }
    println!("\n{}\n", "═".repeat(70).bright_cyan());
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead>(reader: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn run_with<R: BufRead>(lists: &WordLists, config: &GameConfig, reader: &mut R) -> io::Result<()> {
    print_banner();
    let mut session = Session::new(lists);
    let mut show_turn = true;

    loop {
        if show_turn {
            if session.engine().is_exhausted() && session.suggestion().is_none() {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");
            } else {
                print_turn(&session, config);
            }
        }
        show_turn = true;

        let Some(line) = get_user_input(reader, "Enter feedback (G/Y/-, 'win', or command)")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let input = match parse_input(&line) {
            Ok(input) => input,
            Err(e) => {
                println!("❌ {e}. Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n");
                show_turn = false;
                continue;
            }
        };

        let feedback = match input {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => {
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            Input::Undo => {
                if session.undo() {
                    println!("✓ Undone! Back to turn {}\n", session.turn());
                } else {
                    println!("Nothing to undo!\n");
                    show_turn = false;
                }
                continue;
            }
            Input::Auto => {
                session.clear_choice();
                continue;
            }
            Input::Guess(word) => {
                if let Err(e) = session.choose_guess(&word) {
                    println!("❌ {e}\n");
                    show_turn = false;
                }
                continue;
            }
            Input::Win => Feedback::SOLVED,
            Input::Feedback(feedback) => feedback,
        };

        match session.submit(feedback) {
            Ok(Outcome::Solved { guesses }) => {
                print_win(&session, guesses);
                let again = get_user_input(reader, "Play again? (yes/no)")?.unwrap_or_default();
                if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session.reset();
                println!("\n🔄 New game started!\n");
            }
            Ok(Outcome::Narrowed { remaining }) => {
                if session.turn() > config.max_turns {
                    println!("⚠ Past turn {} with {remaining} candidates left\n", config.max_turns);
                }
            }
            Ok(Outcome::Exhausted) => {}
            Err(e) => {
                println!("❌ {e}\n");
                show_turn = false;
            }
        }
    }
}
