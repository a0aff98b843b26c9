//! Display functions for the end-of-run summary

use super::formatters::{create_progress_bar, guesses_to_emoji};
use crate::core::{GameSession, GameState, MAX_GUESSES, Statistics};
use colored::Colorize;

/// Print the statistics gathered over a run
///
/// `last` is the session on screen when the player quit; its board is shown
/// only if it was finished.
pub fn print_session_summary(stats: &Statistics, last: &GameSession) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORDY SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    if stats.games_played == 0 {
        println!("\nNo games finished. Thanks for playing!");
        return;
    }

    println!("\n   Games played:  {}", stats.games_played);
    println!(
        "   Games won:     {}",
        stats.games_won.to_string().green().bold()
    );
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );

    if stats.games_won > 0 {
        println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
        for guesses in 1..=MAX_GUESSES {
            let count = stats.guess_distribution[guesses];
            let bar = create_progress_bar(count, stats.games_won, 20);
            println!("   {guesses}: {} {count}", bar.green());
        }
    }

    let verdict = match last.state() {
        GameState::InProgress => return,
        GameState::Won => format!("{}/{MAX_GUESSES}", last.guesses().len()).green(),
        GameState::Lost => format!("X/{MAX_GUESSES}").red(),
    };
    println!(
        "\nLast game: {} {}",
        last.secret().text().to_uppercase().bold(),
        verdict
    );
    println!("{}", guesses_to_emoji(last.guesses()));
}
