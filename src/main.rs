//! Wordle Challenger - CLI
//!
//! Candidate-filtering Wordle player with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_challenger::{
    commands::{
        GameConfig, print_test_all_statistics, random_target, run_benchmark, run_simple,
        run_test_all, sample_targets, score_word, solve_word,
    },
    core::Word,
    output::{print_benchmark_result, print_round_result, print_score_report},
    wordlists::{GUESSES, SOLUTIONS, WordLists, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_challenger",
    about = "Wordle player that prunes candidates from feedback and ranks them by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solution list, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    solutions: Option<PathBuf>,

    /// Accepted guess list, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    guesses: Option<PathBuf>,

    /// Turns allowed per round
    #[arg(long, global = true, default_value_t = GameConfig::DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive assistant without TUI)
    Simple,

    /// Play a round against a target word
    Solve {
        /// The target word (default: a random solution)
        word: Option<String>,

        /// Show the score and candidate counts of each turn
        #[arg(long)]
        details: bool,
    },

    /// Show a word's letter-frequency score against the solution list
    Score {
        /// Word to score
        word: String,
    },

    /// Play rounds against random solutions
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Play a round against every solution
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_list(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display())),
        None => Ok(loader::words_from_slice(embedded)),
    }
}

/// Load word lists from the `--solutions` and `--guesses` flags
fn load_wordlists(solutions: Option<&Path>, guesses: Option<&Path>) -> Result<WordLists> {
    let solutions = load_list(solutions, SOLUTIONS)?;
    if solutions.is_empty() {
        bail!("solution list is empty");
    }
    let guesses = load_list(guesses, GUESSES)?;

    let lists = WordLists::new(solutions, guesses);
    info!(
        solutions = lists.solutions().len(),
        guesses = lists.guesses().len(),
        "word lists loaded"
    );
    Ok(lists)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.max_turns == 0 {
        bail!("--max-turns must be at least 1");
    }
    let config = GameConfig::new(cli.max_turns);
    let lists = load_wordlists(cli.solutions.as_deref(), cli.guesses.as_deref())?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&lists, config),
        Commands::Simple => run_simple(&lists, &config).context("interactive session failed"),
        Commands::Solve { word, details } => {
            run_solve_command(word.as_deref(), details, &lists, &config)
        }
        Commands::Score { word } => {
            let report = score_word(&word, &lists)?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random words...");
            let targets = sample_targets(lists.solutions(), count);
            let result = run_benchmark(&config, lists.solutions(), &targets);
            print_benchmark_result(&result, &config);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(limit, &lists, &config);
            Ok(())
        }
    }
}

fn run_solve_command(
    word: Option<&str>,
    details: bool,
    lists: &WordLists,
    config: &GameConfig,
) -> Result<()> {
    let target = match word {
        Some(word) => word.to_string(),
        None => random_target(lists.solutions())
            .context("solution list is empty")?
            .text()
            .to_string(),
    };

    let result = solve_word(config, lists.solutions(), &target)
        .with_context(|| format!("invalid target word '{target}'"))?;
    if !lists.is_solution(&result.target) {
        println!("Note: {} is not in the solution list", result.target);
    }
    print_round_result(&result, details);
    Ok(())
}

fn run_test_all_command(limit: Option<usize>, lists: &WordLists, config: &GameConfig) {
    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Wordle Challenger Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible solutions",
        lists.solutions().len()
    );
    println!("Turns per round: {}\n", config.max_turns);

    let stats = run_test_all(config, lists.solutions(), limit);
    print_test_all_statistics(&stats, config);
}

fn run_play_command(lists: &WordLists, config: GameConfig) -> Result<()> {
    use wordle_challenger::interactive::{App, run_tui};

    let app = App::new(lists, config);
    run_tui(app)
}
