//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::Colorize;

/// Render each letter of a guess on its verdict colour
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, verdict)| {
            let cell = format!(" {} ", char::from(letter));
            match verdict {
                Verdict::Correct => cell.black().on_green().bold().to_string(),
                Verdict::Present => cell.black().on_yellow().bold().to_string(),
                Verdict::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Misplaced requirements as `E, S×2`, or `none`
#[must_use]
pub fn requirements_summary(requirements: &[(u8, u8)]) -> String {
    if requirements.is_empty() {
        return "none".to_string();
    }
    requirements
        .iter()
        .map(|&(letter, count)| {
            if count > 1 {
                format!("{}×{count}", char::from(letter))
            } else {
                char::from(letter).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
