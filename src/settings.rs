//! Effective run settings: command-line flags layered over the config file.

use std::path::PathBuf;
use std::time::Duration;

use crate::ascii::AsciiStyle;
use crate::camera::{CameraSettings, Resolution};
use crate::cli::Args;
use crate::config::{Config, ConfigError};
use crate::logging;
use crate::renderer::DisplayOptions;
use crate::router::BufferLimits;
use crate::session::SessionConfig;

const FPS_RANGE: std::ops::RangeInclusive<u32> = 1..=120;

/// Everything `main` needs to start a session.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub camera: CameraSettings,
    pub session: SessionConfig,
    pub display: DisplayOptions,
    /// Main loop ticks per second
    pub fps: u32,
    pub log_file: PathBuf,
    pub log_filter: String,
}

impl RunSettings {
    /// Merge `args` over `config`. Flags that were not given keep the config value.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, ConfigError> {
        let resolution = match &config.camera.resolution {
            Some(text) => text.parse::<Resolution>().map_err(|message| ConfigError::Invalid {
                field: "camera.resolution",
                message,
            })?,
            None => Resolution::default(),
        };

        let camera_fps = config.camera.fps.unwrap_or(CameraSettings::default().fps);
        check_fps("camera.fps", camera_fps)?;
        // The CLI value is range-checked by clap
        let fps = match args.fps {
            Some(fps) => fps,
            None => {
                check_fps("display.fps", config.display.fps)?;
                config.display.fps
            }
        };

        let camera = CameraSettings {
            device_index: args.camera.unwrap_or(config.camera.device),
            resolution,
            fps: camera_fps,
            mirror: args.mirror_override().unwrap_or(config.camera.mirror),
        };

        let session = SessionConfig {
            limits: BufferLimits {
                max_frames: args.max_frames.unwrap_or(config.recording.max_frames),
                overflow: args
                    .overflow
                    .map(Into::into)
                    .unwrap_or(config.recording.overflow),
            },
            skip_duplicate_frames: config.recording.skip_duplicate_frames,
        };

        let display = DisplayOptions {
            style: AsciiStyle {
                charset: args
                    .charset
                    .map(Into::into)
                    .unwrap_or(config.display.charset),
                invert: args.invert || config.display.invert,
            },
            status_bar: !args.no_status && config.display.status_bar,
        };

        let log_file = args
            .log_file
            .clone()
            .or_else(|| config.log.file.clone())
            .unwrap_or_else(logging::default_log_path);
        let log_filter = logging::filter_directive(args.verbose, &config.log.level);

        Ok(Self {
            camera,
            session,
            display,
            fps,
            log_file,
            log_filter,
        })
    }

    /// Interval between main loop ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }
}

fn check_fps(field: &'static str, fps: u32) -> Result<(), ConfigError> {
    if FPS_RANGE.contains(&fps) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            message: format!("must be between 1 and 120 fps, got {}", fps),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::CharSet;
    use crate::router::OverflowPolicy;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["quad-looper"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let settings = RunSettings::resolve(&args(&[]), &Config::default()).unwrap();
        assert_eq!(settings.camera.device_index, 0);
        assert!(settings.camera.mirror);
        assert_eq!(settings.camera.resolution, Resolution::MEDIUM);
        assert_eq!(settings.session, SessionConfig::default());
        assert_eq!(settings.display, DisplayOptions::default());
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.log_file, logging::default_log_path());
    }

    #[test]
    fn test_config_values_used() {
        let config = Config::parse(
            r#"
            [camera]
            device = 3
            mirror = false
            resolution = "320x240"
            [recording]
            max_frames = 10
            overflow = "reject"
            skip_duplicate_frames = true
            [display]
            charset = "minimal"
            invert = true
            fps = 12
            status_bar = false
            [log]
            level = "warn"
            file = "/tmp/looper.log"
            "#,
        )
        .unwrap();

        let settings = RunSettings::resolve(&args(&[]), &config).unwrap();
        assert_eq!(settings.camera.device_index, 3);
        assert!(!settings.camera.mirror);
        assert_eq!(settings.camera.resolution, Resolution::LOW);
        assert_eq!(settings.session.limits.max_frames, 10);
        assert_eq!(settings.session.limits.overflow, OverflowPolicy::Reject);
        assert!(settings.session.skip_duplicate_frames);
        assert_eq!(settings.display.style.charset, CharSet::Minimal);
        assert!(settings.display.style.invert);
        assert!(!settings.display.status_bar);
        assert_eq!(settings.fps, 12);
        assert_eq!(settings.log_filter, "warn");
        assert_eq!(settings.log_file, PathBuf::from("/tmp/looper.log"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::parse("[camera]\ndevice = 3\nmirror = false\n[display]\nfps = 12\n").unwrap();
        let settings = RunSettings::resolve(
            &args(&[
                "--camera",
                "1",
                "--mirror",
                "--fps",
                "60",
                "--max-frames",
                "0",
                "--overflow",
                "reject",
                "--charset",
                "standard",
                "--no-status",
                "-v",
                "--log-file",
                "/tmp/other.log",
            ]),
            &config,
        )
        .unwrap();

        assert_eq!(settings.camera.device_index, 1);
        assert!(settings.camera.mirror);
        assert_eq!(settings.fps, 60);
        assert_eq!(
            settings.session.limits,
            BufferLimits {
                max_frames: 0,
                overflow: OverflowPolicy::Reject,
            }
        );
        assert_eq!(settings.display.style.charset, CharSet::Standard);
        assert!(!settings.display.status_bar);
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.log_file, PathBuf::from("/tmp/other.log"));
    }

    #[test]
    fn test_invalid_config_values() {
        let config = Config::parse("[camera]\nresolution = \"wide\"\n").unwrap();
        let err = RunSettings::resolve(&args(&[]), &config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "camera.resolution", .. }));

        let config = Config::parse("[display]\nfps = 0\n").unwrap();
        let err = RunSettings::resolve(&args(&[]), &config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "display.fps", .. }));

        // A valid CLI value replaces the bad config value
        assert!(RunSettings::resolve(&args(&["--fps", "10"]), &config).is_ok());
    }

    #[test]
    fn test_tick_interval() {
        let mut settings = RunSettings::resolve(&args(&[]), &Config::default()).unwrap();
        settings.fps = 20;
        assert_eq!(settings.tick_interval(), Duration::from_millis(50));
    }
}
