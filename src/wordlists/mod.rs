//! Word lists for the game
//!
//! The pool of legal words is read once from a newline-delimited dictionary
//! and never changes afterwards.

mod error;
pub mod loader;

pub use error::WordSourceError;
pub use loader::{DEFAULT_DICTIONARY, WordList, load_from_file, pick_secret};
