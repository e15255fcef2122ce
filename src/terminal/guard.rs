//! Raw mode and alternate screen management with panic-safe cleanup.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether the terminal is in UI mode (for the panic hook)
pub(crate) static UI_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Guard that puts the terminal into raw mode on the alternate screen and
/// restores it on drop, including when the app panics.
pub struct TerminalGuard {
    /// Whether this guard is responsible for cleanup
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, hiding the cursor.
    ///
    /// # Errors
    /// Returns an error if the terminal refuses raw mode (e.g. not a TTY).
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        UI_MODE_ACTIVE.store(true, Ordering::SeqCst);

        if let Err(e) = crossterm::execute!(io::stdout(), EnterAlternateScreen, Hide) {
            restore_terminal();
            return Err(e);
        }

        Ok(Self { active: true })
    }

    /// Restore the terminal now. After this, drop is a no-op.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            UI_MODE_ACTIVE.store(false, Ordering::SeqCst);
            crossterm::execute!(io::stdout(), Show, LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            restore_terminal();
        }
    }
}

/// Best-effort restore; errors are ignored because there is nowhere to report them.
fn restore_terminal() {
    UI_MODE_ACTIVE.store(false, Ordering::SeqCst);
    let _ = crossterm::execute!(io::stdout(), Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Install a panic hook that restores terminal state before panicking.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if UI_MODE_ACTIVE.load(Ordering::SeqCst) {
            restore_terminal();
        }
        original_hook(panic_info);
    }));
}
