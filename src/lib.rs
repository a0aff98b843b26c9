//! Wordy
//!
//! A terminal word-guessing game: six attempts to find a hidden five-letter
//! word, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordy::core::{GameSession, GameState, Word};
//!
//! let mut session = GameSession::new(Word::new("crane").unwrap());
//! for c in "crane".chars() {
//!     session.append_char(c);
//! }
//! let submission = session.submit_guess().unwrap();
//! assert_eq!(submission.state, GameState::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// File-backed tracing
pub mod logging;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
