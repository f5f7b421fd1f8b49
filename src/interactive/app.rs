//! TUI application state and logic

use crate::commands::{GameConfig, Outcome, Session, Suggestion};
use crate::core::{Feedback, WORD_LENGTH};
use crate::solver::Ranked;
use crate::wordlists::WordLists;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use tracing::debug;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub config: GameConfig,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Per-session results
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(lists: &'a WordLists, config: GameConfig) -> Self {
        let mut app = Self {
            session: Session::new(lists),
            config,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        };
        app.add_message(
            "Welcome! I'll suggest guesses built from the most common letters.",
            MessageStyle::Info,
        );
        app.add_message(
            "Enter feedback pattern (e.g., 'GY-GY' or '🟩🟨⬜🟩🟨')",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<Suggestion> {
        self.session.suggestion()
    }

    #[must_use]
    pub fn ranked(&self) -> Vec<Ranked<'a>> {
        self.session.engine().rank()
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.engine().candidate_count()
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let feedback = match input.trim().parse::<Feedback>() {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.session.submit(feedback) {
            Ok(Outcome::Solved { guesses }) => {
                self.stats.games_won += 1;
                self.stats.total_games += 1;
                *self.stats.guess_distribution.entry(guesses).or_insert(0) += 1;
                self.input_mode = InputMode::WinCelebration;

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(Outcome::Exhausted) => {
                self.add_message(
                    "No candidates remain - pattern may be incorrect. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            Ok(Outcome::Narrowed { remaining }) => {
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
                if self.session.turn() > self.config.max_turns {
                    self.add_message(
                        &format!("Past turn {} - keep going or press 'n'", self.config.max_turns),
                        MessageStyle::Error,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }

        self.input_buffer.clear();
    }

    pub fn new_game(&mut self) {
        let abandoned =
            self.input_mode != InputMode::WinCelebration && !self.session.history().is_empty();
        if abandoned {
            self.stats.total_games += 1;
        }

        self.session.reset();
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        debug!(games = self.stats.total_games, "new game");
    }

    pub fn undo_last(&mut self) {
        if self.session.undo() {
            self.add_message(
                &format!("Undone! Back to turn {}", self.session.turn()),
                MessageStyle::Info,
            );
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn use_manual_word(&mut self) {
        let engine_best = self.session.suggestion().filter(|s| !s.manual);

        match self.session.choose_guess(&self.manual_word) {
            Ok(chosen) => {
                if let Some(best) = engine_best
                    && best.score > chosen.score
                {
                    self.add_message(
                        &format!(
                            "Note: {} scores {} ({} more)",
                            best.word,
                            best.score,
                            best.score - chosen.score
                        ),
                        MessageStyle::Info,
                    );
                }
                self.add_message(
                    &format!("Using: {} (score {})", chosen.word, chosen.score),
                    MessageStyle::Success,
                );
                self.input_mode = InputMode::Feedback;
                self.manual_word.clear();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Esc => {
                    self.session.clear_choice();
                    self.input_buffer.clear();
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::ManualWord;
                    self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = std::mem::take(&mut self.input_buffer);
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                    self.add_message("Cancelled manual word entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_word.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                        self.manual_word.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => {
                    if self.manual_word.len() == WORD_LENGTH {
                        self.use_manual_word();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(&["crane", "trace", "crate"]),
            words_from_slice(&["slate"]),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn feedback_narrows_candidates() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        type_str(&mut app, "GGG-G");
        press(&mut app, KeyCode::Enter);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.candidates_count(), 1);
        assert_eq!(app.suggestion().unwrap().word.text(), "CRATE");
    }

    #[test]
    fn win_updates_statistics() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        app.handle_feedback("GGGGG");

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution.get(&1), Some(&1));
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);

        // other keys are ignored until a new game
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn abandoned_game_counts_as_played() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        app.handle_feedback("GGG-G");
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.candidates_count(), 3);
    }

    #[test]
    fn invalid_feedback_reports_error() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        app.handle_feedback("GGX");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.candidates_count(), 3);
    }

    #[test]
    fn undo_key_restores_candidates() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        app.handle_feedback("-----");
        assert_eq!(app.candidates_count(), 0);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.candidates_count(), 3);
    }

    #[test]
    fn manual_word_entry() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::ManualWord);

        type_str(&mut app, "sl4ates");
        assert_eq!(app.manual_word, "SLATE");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Feedback);
        let suggestion = app.suggestion().unwrap();
        assert!(suggestion.manual);
        assert_eq!(suggestion.word.text(), "SLATE");

        press(&mut app, KeyCode::Esc);
        assert!(!app.suggestion().unwrap().manual);
    }

    #[test]
    fn unknown_manual_word_stays_in_entry_mode() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "qqqqq");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::ManualWord);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn messages_are_capped() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "9");
    }

    #[test]
    fn ctrl_c_quits() {
        let lists = lists();
        let mut app = App::new(&lists, GameConfig::default());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
