//! Command implementations

pub mod benchmark;
pub mod score;
pub mod session;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use score::{ScoreReport, score_word};
pub use session::{HistoryEntry, Outcome, Session, SessionError, Suggestion};
pub use simple::run_simple;
pub use solve::{GameConfig, RoundResult, TurnRecord, play_round, random_target, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
