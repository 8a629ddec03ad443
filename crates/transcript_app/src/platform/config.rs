use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AppError, LogDestination};

pub const CONFIG_FILENAME: &str = "transcript_app.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_destination: LogDestination,
    /// Print the source domain line in the detail view.
    pub show_modal_source: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_destination: LogDestination::default(),
            show_modal_source: true,
        }
    }
}

/// Loads the RON config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(AppError::Read {
                path: PathBuf::from(path),
                source,
            })
        }
    };
    ron::from_str(&content).map_err(|source| AppError::Config {
        path: PathBuf::from(path),
        source,
    })
}
