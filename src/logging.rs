//! Log backend setup.
//!
//! Call sites use the `log` macros; records are bridged into a
//! `tracing-subscriber` fmt subscriber. While the terminal UI is active the
//! subscriber writes to a file, since stderr shares the screen.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid log filter '{directive}': {message}")]
    Filter { directive: String, message: String },

    #[error("Failed to install logger: {0}")]
    Init(String),
}

/// Default log file: `<data_local_dir>/quad-looper/quad-looper.log`.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("quad-looper")
        .join("quad-looper.log")
}

/// Pick the filter directive: each `-v` raises the level above the
/// configured one (`-v` debug, `-vv` trace).
pub fn filter_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// `RUST_LOG` wins over the directive.
fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|e| LoggingError::Filter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

/// Log to `path` (appending, no ANSI colours).
pub fn init_file_logging(path: &Path, directive: &str) -> Result<(), LoggingError> {
    let io_err = |e: std::io::Error| LoggingError::Io {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

/// Log to stderr, for subcommands that don't draw the UI.
pub fn init_stderr_logging(directive: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
