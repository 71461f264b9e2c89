use crate::{Error, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where and how verbosely to log.
///
/// The TUI owns the terminal, so logs always go to a file.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Default directive, e.g. "info"; `RUST_LOG` overrides it
    pub level: String,
    pub file: PathBuf,
}

impl LogOptions {
    pub fn new(level: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            file: file.into(),
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(options: &LogOptions) -> Result<()> {
    if let Some(parent) = options.file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&options.file)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&options.level))
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
