//! Runtime configuration

use crate::wordlists::DEFAULT_DICTIONARY;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings gathered from the command line and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Newline-delimited dictionary file
    pub dictionary: PathBuf,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Destination for tracing output; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Seed actually used: the configured one, or nanoseconds since the epoch
    #[must_use]
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_nanos() as u64)
        })
    }

    /// RNG used for picking secrets
    ///
    /// Not cryptographic, and not reproducible unless a seed is configured.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.effective_seed())
    }
}
