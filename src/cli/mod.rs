//! Command line: run flags, the `list-cameras` and `config` subcommands, and
//! the value enums shared with the config file.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, list_cameras};
pub use enums::{CharacterSet, Overflow};
