//! Terminal management: raw mode guard, layout, ASCII frames and status bar.

mod frame;
mod guard;
mod layout;
mod status_bar;

pub use frame::AsciiFrame;
pub use guard::TerminalGuard;
pub use layout::{centered, content_area, PaneLayout};
pub use status_bar::StatusBar;
