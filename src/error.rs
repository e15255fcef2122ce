//! Top-level application error.

use thiserror::Error;

use crate::camera::CameraError;
use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Anything that can end the application with a non-zero exit status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Failed to capture frame: camera stream stopped")]
    CaptureStopped,
}
