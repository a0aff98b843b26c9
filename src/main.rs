//! Wordy - CLI
//!
//! Loads the dictionary, then hands the terminal to the game until the
//! player quits.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use wordy::{
    config::GameConfig,
    core::WORD_LENGTH,
    interactive::{App, run_tui},
    logging::init_logging,
    output::print_session_summary,
    wordlists::{DEFAULT_DICTIONARY, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordy",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    /// Newline-delimited dictionary to draw words from
    #[arg(short, long, env = "WORDY_DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Fixed seed for reproducible secrets
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with WORDY_LOG, e.g. WORDY_LOG=debug)
    #[arg(long, env = "WORDY_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            dictionary: cli.dictionary,
            seed: cli.seed,
            log_file: cli.log_file,
        }
    }
}

fn main() -> Result<()> {
    let config = GameConfig::from(Cli::parse());
    init_logging(config.log_file.as_deref())?;

    let words = load_from_file(&config.dictionary, WORD_LENGTH)
        .context("cannot build the word list")?;

    let seed = config.effective_seed();
    info!(seed, "starting");
    let app = App::new(words, GameConfig { seed: Some(seed), ..config }.rng())?;

    let app = run_tui(app)?;
    print_session_summary(&app.stats, &app.session);
    Ok(())
}
