//! Subcommand handlers for list-cameras and config actions.

use super::args::{Args, ConfigAction};
use crate::camera::{self, CameraError};
use crate::config::{self, Config};
use crate::error::AppError;
use crate::settings::RunSettings;

/// List available cameras and print them to stdout.
pub fn list_cameras() -> Result<(), CameraError> {
    let devices = camera::list_devices()?;
    if devices.is_empty() {
        println!("No cameras found.");
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
        println!("On macOS, grant access in System Settings > Privacy & Security > Camera.");
    } else {
        println!("Available cameras:");
        for device in devices {
            println!("  {}", device);
        }
        println!();
        println!("Use --camera <index> to select a camera.");
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: &ConfigAction, args: &Args) -> Result<(), AppError> {
    let config_path = args.config.clone().unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&config_path))?;
            let settings = RunSettings::resolve(args, &config)?;
            print!("{}", describe(&settings));
            println!();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            config::write_default(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

/// Human-readable summary of the effective settings.
fn describe(settings: &RunSettings) -> String {
    let limits = settings.session.limits;
    let max_frames = if limits.max_frames == 0 {
        "unbounded".to_string()
    } else {
        limits.max_frames.to_string()
    };
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    format!(
        "Current configuration:\n  \
         Camera: {}\n  \
         Resolution: {}\n  \
         Camera FPS: {}\n  \
         Mirror: {}\n  \
         Max frames per stream: {}\n  \
         Overflow: {}\n  \
         Skip duplicate frames: {}\n  \
         Charset: {}\n  \
         Invert: {}\n  \
         Display FPS: {}\n  \
         Status bar: {}\n  \
         Log filter: {}\n  \
         Log file: {}\n",
        settings.camera.device_index,
        settings.camera.resolution,
        settings.camera.fps,
        yes_no(settings.camera.mirror),
        max_frames,
        limits.overflow.name(),
        yes_no(settings.session.skip_duplicate_frames),
        settings.display.style.charset.name(),
        yes_no(settings.display.style.invert),
        settings.fps,
        yes_no(settings.display.status_bar),
        settings.log_filter,
        settings.log_file.display(),
    )
}
