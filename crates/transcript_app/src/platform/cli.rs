//! Command-line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use super::{AppError, LogDestination};

/// Render a chat transcript together with its article enrichment.
#[derive(Debug, Parser)]
#[command(name = "transcript_app")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Transcript JSON file
    pub transcript: PathBuf,

    /// Configuration file path (RON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where log output goes; overrides the config file
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Open a finished source in the detail view, as `<message index>:<url>`
    #[arg(long)]
    pub select: Option<SourceRef>,

    /// Press "Open full" on the selected source
    #[arg(long, requires = "select")]
    pub open_full: bool,

    /// Type and submit a prompt after loading
    #[arg(long)]
    pub prompt: Option<String>,
}

/// A finished source link addressed by message position and article URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub message_index: usize,
    pub url: String,
}

impl FromStr for SourceRef {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (index, url) = raw
            .split_once(':')
            .ok_or_else(|| AppError::SourceRef(raw.to_string()))?;
        let message_index = index
            .trim()
            .parse()
            .map_err(|_| AppError::SourceRef(raw.to_string()))?;
        if url.is_empty() {
            return Err(AppError::SourceRef(raw.to_string()));
        }
        Ok(Self {
            message_index,
            url: url.to_string(),
        })
    }
}
