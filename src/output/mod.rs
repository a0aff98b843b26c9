//! Terminal output formatting
//!
//! Plain-terminal summary printed once the TUI has closed.

pub mod display;
pub mod formatters;

pub use display::print_session_summary;
