//! Configuration file handling for quad-looper.
//!
//! Loads configuration from `<config_dir>/quad-looper/config.toml` or a custom
//! path. Every key is optional; missing keys take their built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ascii::CharSet;
use crate::router::{OverflowPolicy, DEFAULT_MAX_FRAMES};

/// Default main loop tick rate.
pub const DEFAULT_FPS: u32 = 30;

/// Configuration file structure for quad-looper.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub camera: CameraConfig,
    pub recording: RecordingConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub device: u32,
    pub mirror: bool,
    /// Requested capture resolution as `WIDTHxHEIGHT`
    pub resolution: Option<String>,
    /// Requested capture frame rate
    pub fps: Option<u32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: 0,
            mirror: true,
            resolution: None,
            fps: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RecordingConfig {
    /// Per-stream capacity; 0 means unbounded
    pub max_frames: usize,
    pub overflow: OverflowPolicy,
    pub skip_duplicate_frames: bool,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            overflow: OverflowPolicy::default(),
            skip_duplicate_frames: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub charset: CharSet,
    pub invert: bool,
    /// Main loop tick rate
    pub fps: u32,
    pub status_bar: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            charset: CharSet::default(),
            invert: false,
            fps: DEFAULT_FPS,
            status_bar: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `quad_looper=debug`
    pub level: String,
    /// Log file; defaults to [`crate::logging::default_log_path`]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| ConfigError::Parse { path, source: e })
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },

    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("quad-looper").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/quad-looper/config.toml")
        })
}

/// Contents written by `quad-looper config init`.
pub const DEFAULT_CONFIG: &str = r#"# quad-looper configuration

[camera]
# Camera device index (see `quad-looper list-cameras`)
device = 0
# Mirror horizontally (selfie mode)
mirror = true
# Requested capture resolution (lower = faster)
# resolution = "640x480"
# Requested capture frame rate
# fps = 30

[recording]
# Frames kept per stream (0 = unbounded)
max_frames = 900
# What to do when a stream is full: drop-oldest, reject
overflow = "drop-oldest"
# Record each captured frame at most once (playback then runs faster than
# real time when the camera is slower than the display fps)
skip_duplicate_frames = false

[display]
# Character set: standard, blocks, minimal
charset = "blocks"
# Invert brightness (for light themes)
invert = false
# Main loop ticks per second (1-120)
fps = 30
# Show status bar
status_bar = true

[log]
# Log filter (RUST_LOG overrides)
level = "info"
# file = "/tmp/quad-looper.log"
"#;

/// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
/// Refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    let io_err = |e: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.camera.mirror);
        assert_eq!(config.recording.max_frames, 900);
        assert_eq!(config.recording.overflow, OverflowPolicy::DropOldest);
        assert!(!config.recording.skip_duplicate_frames);
        assert_eq!(config.display.charset, CharSet::Blocks);
        assert_eq!(config.display.fps, 30);
        assert!(config.display.status_bar);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::parse("[camera]\ndevice = 2\n").unwrap();
        assert_eq!(config.camera.device, 2);
        assert!(config.camera.mirror);
        assert!(config.camera.resolution.is_none());
    }

    #[test]
    fn test_parse_all_sections() {
        let config = Config::parse(
            r#"
            [camera]
            device = 1
            mirror = false
            resolution = "1280x720"
            fps = 60

            [recording]
            max_frames = 0
            overflow = "reject"
            skip_duplicate_frames = true

            [display]
            charset = "minimal"
            invert = true
            fps = 15
            status_bar = false

            [log]
            level = "debug"
            file = "/tmp/looper.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.camera.device, 1);
        assert!(!config.camera.mirror);
        assert_eq!(config.camera.resolution.as_deref(), Some("1280x720"));
        assert_eq!(config.camera.fps, Some(60));
        assert_eq!(config.recording.max_frames, 0);
        assert_eq!(config.recording.overflow, OverflowPolicy::Reject);
        assert!(config.recording.skip_duplicate_frames);
        assert_eq!(config.display.charset, CharSet::Minimal);
        assert!(config.display.invert);
        assert_eq!(config.display.fps, 15);
        assert!(!config.display.status_bar);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/looper.log")));
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(Config::parse("[display]\ncharset = \"braille\"\n").is_err());
        assert!(Config::parse("[recording]\noverflow = \"wrap\"\n").is_err());
        assert!(Config::parse("[camera]\ncolour = true\n").is_err());
    }

    #[test]
    fn test_default_config_text_parses_to_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_path_file_name() {
        let path = default_path();
        assert!(path.ends_with("quad-looper/config.toml"));
    }
}
