use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid transcript: {0}")]
    Transcript(#[from] serde_json::Error),
    #[error("invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid source reference {0:?}, expected <message index>:<url>")]
    SourceRef(String),
}
