//! Core domain types for the game
//!
//! Words, feedback scoring and the session state machine. Nothing here
//! touches the terminal or the file system.

mod feedback;
mod session;
mod stats;
mod word;

pub use feedback::{ScoredGuess, Tag, score_guess};
pub use session::{GameSession, GameState, MAX_GUESSES, Submission};
pub use stats::Statistics;
pub use word::{Word, WordError, is_alpha};

/// Length of every secret and guess
pub const WORD_LENGTH: usize = 5;
