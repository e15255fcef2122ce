//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Overflow};

/// Parse and validate the main loop tick rate (1-120 fps)
fn parse_fps(s: &str) -> Result<u32, String> {
    let fps: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid frame rate", s))?;
    if !(1..=120).contains(&fps) {
        return Err(format!("Frame rate must be between 1 and 120 fps, got {}", fps));
    }
    Ok(fps)
}

/// Record webcam frames into four loop buffers and play them back as a 2x2 grid
#[derive(Parser, Debug)]
#[command(name = "quad-looper")]
#[command(version, about = "Four-stream webcam looper for the terminal", long_about = None)]
#[command(after_help = "KEYS:
    1-4   record into stream 1-4
    s     stop recording
    q     quit (also Ctrl+C)")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera device index (from list-cameras)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Mirror camera horizontally
    #[arg(long, overrides_with = "no_mirror")]
    pub mirror: bool,

    /// Don't mirror the camera
    #[arg(long, overrides_with = "mirror")]
    pub no_mirror: bool,

    /// Frames kept per stream (0 = unbounded)
    #[arg(long)]
    pub max_frames: Option<usize>,

    /// What to do when a stream is full
    #[arg(long)]
    pub overflow: Option<Overflow>,

    /// Main loop ticks per second (1-120)
    #[arg(long, value_parser = parse_fps)]
    pub fps: Option<u32>,

    /// ASCII character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Hide status bar
    #[arg(long)]
    pub no_status: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Mirror override from the command line, if any.
    pub fn mirror_override(&self) -> Option<bool> {
        if self.no_mirror {
            Some(false)
        } else if self.mirror {
            Some(true)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["quad-looper"]);
        assert!(args.camera.is_none());
        assert_eq!(args.mirror_override(), None);
        assert!(args.max_frames.is_none());
        assert!(args.overflow.is_none());
        assert!(args.fps.is_none());
        assert!(args.charset.is_none());
        assert!(!args.invert);
        assert!(!args.no_status);
        assert!(args.config.is_none());
        assert!(args.log_file.is_none());
        assert_eq!(args.verbose, 0);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_mirror_flags() {
        let args = Args::parse_from(["quad-looper", "--mirror"]);
        assert_eq!(args.mirror_override(), Some(true));

        let args = Args::parse_from(["quad-looper", "--no-mirror"]);
        assert_eq!(args.mirror_override(), Some(false));

        // Last one wins
        let args = Args::parse_from(["quad-looper", "--no-mirror", "--mirror"]);
        assert_eq!(args.mirror_override(), Some(true));
    }

    #[test]
    fn test_args_camera_index() {
        let args = Args::parse_from(["quad-looper", "--camera", "2"]);
        assert_eq!(args.camera, Some(2));
    }

    #[test]
    fn test_args_recording_limits() {
        let args = Args::parse_from(["quad-looper", "--max-frames", "0", "--overflow", "reject"]);
        assert_eq!(args.max_frames, Some(0));
        assert_eq!(args.overflow, Some(Overflow::Reject));

        let args = Args::parse_from(["quad-looper", "--overflow", "drop-oldest"]);
        assert_eq!(args.overflow, Some(Overflow::DropOldest));
    }

    #[test]
    fn test_args_fps_range() {
        let args = Args::parse_from(["quad-looper", "--fps", "60"]);
        assert_eq!(args.fps, Some(60));

        assert!(Args::try_parse_from(["quad-looper", "--fps", "0"]).is_err());
        assert!(Args::try_parse_from(["quad-looper", "--fps", "121"]).is_err());
        assert!(Args::try_parse_from(["quad-looper", "--fps", "fast"]).is_err());
    }

    #[test]
    fn test_args_charset_values() {
        let args = Args::parse_from(["quad-looper", "--charset", "standard"]);
        assert_eq!(args.charset, Some(CharacterSet::Standard));

        let args = Args::parse_from(["quad-looper", "--charset", "blocks"]);
        assert_eq!(args.charset, Some(CharacterSet::Blocks));

        let args = Args::parse_from(["quad-looper", "--charset", "minimal"]);
        assert_eq!(args.charset, Some(CharacterSet::Minimal));

        assert!(Args::try_parse_from(["quad-looper", "--charset", "braille"]).is_err());
    }

    #[test]
    fn test_args_verbosity() {
        let args = Args::parse_from(["quad-looper", "-vv"]);
        assert_eq!(args.verbose, 2);

        let args = Args::parse_from(["quad-looper", "--verbose"]);
        assert_eq!(args.verbose, 1);
    }

    #[test]
    fn test_args_config_and_log_paths() {
        let args = Args::parse_from(["quad-looper", "-c", "/tmp/test.toml", "--log-file", "/tmp/q.log"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/q.log")));
    }

    #[test]
    fn test_args_list_cameras_subcommand() {
        let args = Args::parse_from(["quad-looper", "list-cameras"]);
        assert!(matches!(args.command, Some(Command::ListCameras)));
    }

    #[test]
    fn test_args_config_subcommands() {
        let args = Args::parse_from(["quad-looper", "config", "show"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));

        let args = Args::parse_from(["quad-looper", "config", "init"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
    }
}
