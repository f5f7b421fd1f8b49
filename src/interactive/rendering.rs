//! TUI rendering with ratatui
//!
//! Panels for the suggestion, ranked candidates, constraints and history.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, Verdict, Word};
use crate::output::formatters::requirements_summary;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Ranked candidates listed in the candidates panel
const SHOW_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE CHALLENGER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25), // Current guess
            Constraint::Percentage(45), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = app.suggestion() else {
        f.render_widget(Paragraph::new("No suggestion available").block(block), area);
        return;
    };

    let label = if guess.manual { "Your word: " } else { "Suggested: " };
    let content = vec![
        Line::from(vec![
            Span::raw(label),
            Span::styled(
                guess.word.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Score:     {}", guess.score)),
        Line::from(format!("Turn:      {} of {}", app.session.turn(), app.config.max_turns)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let ranked = app.ranked();

    let mut lines = if ranked.is_empty() {
        vec![Line::from("No candidates remain")]
    } else {
        vec![Line::from(format!("{} candidates, best first:", ranked.len()))]
    };

    for (i, candidate) in ranked.iter().take(SHOW_CANDIDATES).enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:<5}", candidate.word.text()),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!(" {:>5}", candidate.score),
                Style::default().fg(Color::Cyan),
            ),
        ]));
    }
    if ranked.len() > SHOW_CANDIDATES {
        lines.push(Line::from(format!(
            "     ... {} more",
            ranked.len() - SHOW_CANDIDATES
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    let background = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(background)
        .add_modifier(Modifier::BOLD)
}

fn guess_spans(word: &Word, feedback: &Feedback) -> Vec<Span<'static>> {
    word.chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| {
            Span::styled(format!(" {} ", char::from(letter)), verdict_style(verdict))
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .take(5)
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(guess_spans(&entry.guess, &entry.feedback));
            spans.push(Span::raw(format!(
                " {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Length(6), // Constraints
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_constraints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

#[allow(clippy::cast_precision_loss)]
fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let initial = app.session.lists().solutions().len();
    let remaining = app.candidates_count();
    let eliminated = initial.saturating_sub(remaining);
    let ratio = if initial == 0 {
        0.0
    } else {
        eliminated as f64 / initial as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Candidates Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{eliminated}/{initial} | {remaining} remain"));
    f.render_widget(gauge, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session.engine().constraints();
    let excluded = constraints.excluded();

    let content = vec![
        Line::from(vec![
            Span::raw("Pattern:   "),
            Span::styled(
                constraints.pattern(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Misplaced: "),
            Span::styled(
                requirements_summary(&constraints.requirements()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Excluded:  "),
            Span::styled(
                if excluded.is_empty() {
                    "none".to_string()
                } else {
                    excluded.to_string()
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Constraints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (" Solved! | n: next round  q: quit ", "", Color::Green),
        InputMode::Feedback => (
            " Feedback for this guess: G / Y / - (or 🟩🟨⬜) | TAB: play another word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Word to play instead | Enter: use it  ESC: back ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));
    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(input, area);
}

fn distribution_text(app: &App) -> String {
    let mut distribution: Vec<(usize, usize)> = app
        .stats
        .guess_distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    if distribution.is_empty() {
        return "No wins yet".to_string();
    }
    distribution.sort_unstable();
    distribution
        .iter()
        .map(|(guesses, count)| format!("{guesses}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let exhausted = app.candidates_count() == 0;
    let help_text = if exhausted && !app.session.history().is_empty() {
        "u: undo  n: new round  q: quit"
    } else {
        "Enter: submit  Tab: own word  Esc: suggested  u: undo  q: quit"
    };

    let cells = [
        (
            format!(
                "Rounds: {}  Won: {:.0}%",
                app.stats.total_games,
                app.stats.win_rate()
            ),
            Style::default(),
        ),
        (distribution_text(app), Style::default()),
        (
            format!("Candidates: {}", app.candidates_count()),
            if exhausted {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            },
        ),
        (help_text.to_string(), Style::default().fg(Color::DarkGray)),
    ];

    for ((text, style), column) in cells.into_iter().zip(columns.iter()) {
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).style(style),
            *column,
        );
    }
}
