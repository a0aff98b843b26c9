//! Per-process tally of finished sessions

use super::session::{GameSession, GameState, MAX_GUESSES};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses taken; index 0 is unused
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    /// Record a finished session
    ///
    /// Sessions still in progress are ignored. Returns whether anything was
    /// recorded.
    pub fn record(&mut self, session: &GameSession) -> bool {
        match session.state() {
            GameState::InProgress => return false,
            GameState::Won => {
                self.games_won += 1;
                self.guess_distribution[session.guesses().len()] += 1;
            }
            GameState::Lost => {}
        }
        self.games_played += 1;
        true
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
