//! Async main loop.
//!
//! Two concurrent concerns are handled with `tokio::select!`:
//! 1. Terminal events (key presses, resize) from a crossterm event stream
//! 2. The tick interval: record or play back, then redraw
//!
//! The event stream is generic so tests can drive the loop without a TTY.

use crossterm::event::Event;
use futures_util::{Stream, StreamExt};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::camera::FrameSource;
use crate::error::AppError;
use crate::input::map_key;
use crate::renderer::{Renderer, StatusInfo};
use crate::session::{Flow, Session};

/// Set by the SIGINT/SIGTERM handler, polled every tick.
pub static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Install a handler that sets [`SHUTDOWN_REQUESTED`] on SIGINT/SIGTERM.
pub fn install_signal_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
    })
}

/// Why the main loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `q` or Ctrl+C pressed
    UserQuit,
    /// Termination signal received
    Signal,
    /// The terminal event stream ended
    InputClosed,
    /// The frame source stopped producing frames
    CameraStopped,
}

/// Run the main loop until the user quits, a signal arrives, input closes or
/// the frame source stops.
pub async fn run<W, E>(
    session: &mut Session,
    source: &dyn FrameSource,
    renderer: &mut Renderer<W>,
    mut events: E,
    tick: Duration,
    shutdown: &AtomicBool,
) -> Result<ExitReason, AppError>
where
    W: Write,
    E: Stream<Item = io::Result<Event>> + Unpin,
{
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(command) = map_key(key_event) {
                            log::debug!("Key command: {:?}", command);
                            if session.apply(command) == Flow::Quit {
                                return Ok(ExitReason::UserQuit);
                            }
                        }
                    }
                    Some(Ok(Event::Resize(cols, rows))) => {
                        log::debug!("Terminal resized to {}x{}", cols, rows);
                        renderer.resize(cols, rows);
                    }
                    Some(Ok(_)) => {
                        // Mouse, focus and paste events are ignored
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(ExitReason::InputClosed),
                }
            }

            _ = interval.tick() => {
                if shutdown.load(Ordering::SeqCst) {
                    log::info!("Shutdown signal received");
                    return Ok(ExitReason::Signal);
                }

                if !source.is_running() {
                    log::error!("Camera stream stopped");
                    return Ok(ExitReason::CameraStopped);
                }

                let output = session.tick(source);
                let router = session.router();
                let status = StatusInfo {
                    state: router.state(),
                    lens: router.buffer_lens(),
                    camera_running: source.is_running(),
                };
                renderer.draw(&output, &status)?;
            }
        }
    }
}
