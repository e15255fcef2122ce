//! Keyboard command mapping.
//!
//! Keys handled:
//! - `1`-`4`: arm recording on that stream
//! - `s`: stop recording
//! - `q` / Ctrl+C: quit (raw mode delivers Ctrl+C as a key, not a signal)

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::router::StreamId;

/// A user command produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start recording into the stream
    Arm(StreamId),
    /// Stop recording
    Disarm,
    /// Stop capture and exit
    Quit,
}

/// Map a key event to a command. Unbound keys, releases and repeats map to `None`.
pub fn map_key(event: KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Disarm),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char(c) => StreamId::from_key(c).map(Command::Arm),
        _ => None,
    }
}
