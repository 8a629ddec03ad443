mod app;
mod cli;
mod config;
mod effects;
mod error;
mod logging;
mod transcript;
pub mod ui;

pub use app::{drive, run_app, Session};
pub use cli::{Cli, SourceRef};
pub use config::{load_config, AppConfig, CONFIG_FILENAME};
pub use effects::EffectRunner;
pub use error::AppError;
pub use logging::{initialize, LogDestination};
pub use transcript::{load_transcript, parse_transcript};
