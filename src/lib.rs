//! quad-looper library crate.
//!
//! Captures camera frames, records them into four looping streams on key
//! presses and plays the streams back as a 2x2 grid in the terminal.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod router;
pub mod session;
pub mod settings;
pub mod terminal;
