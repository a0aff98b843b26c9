use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Startup failures while building the word pool
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("cannot read dictionary {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no {length}-letter lowercase words available")]
    EmptyWordList { length: usize },
}
