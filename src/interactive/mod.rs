//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, GameEvent, event_from_key, run_tui};
