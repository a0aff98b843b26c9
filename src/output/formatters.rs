//! Formatting utilities for terminal output

use crate::core::ScoredGuess;

/// Format a sequence of guesses as emoji rows, one per line
#[must_use]
pub fn guesses_to_emoji(guesses: &[ScoredGuess]) -> String {
    guesses
        .iter()
        .map(ScoredGuess::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
