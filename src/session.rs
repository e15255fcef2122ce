//! Main-loop state: the router plus the bookkeeping around each tick.

use image::RgbImage;
use std::sync::Arc;

use crate::camera::{Frame, FrameSource};
use crate::input::Command;
use crate::router::{BufferLimits, FrameRouter, RecordOutcome};

/// Recording behaviour of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Capacity of each stream
    pub limits: BufferLimits,
    /// Record each captured frame at most once. Off by default: every tick
    /// appends the latest frame, so playback keeps the recording's pace.
    pub skip_duplicate_frames: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            limits: BufferLimits::default(),
            skip_duplicate_frames: false,
        }
    }
}

/// Whether the main loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What one tick produced for the display.
#[derive(Debug, Default)]
pub struct TickOutput {
    /// Latest camera frame for the live pane
    pub live: Option<Arc<Frame>>,
    /// Composite grid; only produced while idle
    pub grid: Option<RgbImage>,
    /// What happened to the live frame, if one was offered for recording
    pub recorded: Option<RecordOutcome>,
}

/// Owns the frame router and drives it from commands and ticks.
#[derive(Debug)]
pub struct Session {
    router: FrameRouter,
    skip_duplicate_frames: bool,
    /// Sequence of the last frame recorded since the stream was armed
    last_recorded: Option<u64>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            router: FrameRouter::new(config.limits),
            skip_duplicate_frames: config.skip_duplicate_frames,
            last_recorded: None,
        }
    }

    /// Apply a user command.
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Arm(id) => {
                self.router.arm_recording(id);
                self.last_recorded = None;
                Flow::Continue
            }
            Command::Disarm => {
                self.router.disarm_recording();
                Flow::Continue
            }
            Command::Quit => {
                self.router.disarm_recording();
                Flow::Quit
            }
        }
    }

    /// Run one main-loop tick against `source`.
    ///
    /// While armed, the latest frame is recorded on every tick (once per
    /// capture when duplicate skipping is on). While idle, all streams advance and the
    /// grid is composed.
    pub fn tick(&mut self, source: &dyn FrameSource) -> TickOutput {
        let live = source.current_frame();
        let mut output = TickOutput::default();

        if self.router.is_recording() {
            if let Some(frame) = &live {
                let seen = self.skip_duplicate_frames && self.last_recorded == Some(frame.sequence);
                if !seen {
                    self.last_recorded = Some(frame.sequence);
                    output.recorded = Some(self.router.record(Arc::clone(frame)));
                }
            }
        } else {
            output.grid = Some(self.router.render_grid());
        }

        output.live = live;
        output
    }

    /// Read access to the router.
    pub fn router(&self) -> &FrameRouter {
        &self.router
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FrameSlot;
    use crate::router::{RecordingState, StreamId};

    fn publish(slot: &FrameSlot, seq: u64) {
        slot.publish(Arc::new(Frame::filled(32, 24, [seq as u8, 0, 0]).with_sequence(seq)));
    }

    #[test]
    fn test_apply_commands() {
        let mut session = Session::default();
        assert_eq!(session.apply(Command::Arm(StreamId::TWO)), Flow::Continue);
        assert_eq!(session.router().state(), RecordingState::Armed(StreamId::TWO));
        assert_eq!(session.apply(Command::Disarm), Flow::Continue);
        assert_eq!(session.router().state(), RecordingState::Idle);
        assert_eq!(session.apply(Command::Quit), Flow::Quit);
    }

    #[test]
    fn test_idle_tick_produces_grid() {
        let slot = FrameSlot::new();
        publish(&slot, 1);
        let mut session = Session::default();
        let output = session.tick(&slot);
        assert_eq!(output.grid.map(|g| g.dimensions()), Some((640, 480)));
        assert_eq!(output.live.map(|f| f.sequence), Some(1));
        assert!(output.recorded.is_none());
        assert_eq!(session.router().buffer_lens(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_recording_tick_records_without_grid() {
        let slot = FrameSlot::new();
        let mut session = Session::default();
        session.apply(Command::Arm(StreamId::ONE));

        // Nothing captured yet
        let output = session.tick(&slot);
        assert!(output.grid.is_none());
        assert!(output.recorded.is_none());

        publish(&slot, 1);
        let output = session.tick(&slot);
        assert!(output.grid.is_none());
        assert_eq!(output.recorded, Some(RecordOutcome::Appended(StreamId::ONE)));
        assert_eq!(session.router().buffer_lens(), [1, 0, 0, 0]);
    }

    #[test]
    fn test_duplicate_frames_skipped() {
        let slot = FrameSlot::new();
        let mut session = Session::new(SessionConfig {
            skip_duplicate_frames: true,
            ..SessionConfig::default()
        });
        session.apply(Command::Arm(StreamId::ONE));

        publish(&slot, 1);
        session.tick(&slot);
        session.tick(&slot);
        publish(&slot, 2);
        session.tick(&slot);
        assert_eq!(session.router().buffer_lens(), [2, 0, 0, 0]);

        // Re-arming allows the current frame into the new stream
        session.apply(Command::Arm(StreamId::THREE));
        session.tick(&slot);
        assert_eq!(session.router().buffer_lens(), [2, 0, 1, 0]);
    }

    #[test]
    fn test_every_tick_records_by_default() {
        let slot = FrameSlot::new();
        let mut session = Session::default();
        session.apply(Command::Arm(StreamId::FOUR));
        publish(&slot, 1);
        for _ in 0..3 {
            session.tick(&slot);
        }
        assert_eq!(session.router().buffer_lens(), [0, 0, 0, 3]);
    }

    #[test]
    fn test_slow_camera_records_one_frame_per_tick() {
        // Camera delivers a new frame every second tick
        let slot = FrameSlot::new();
        let mut session = Session::default();
        session.apply(Command::Arm(StreamId::ONE));
        for tick in 0..10u64 {
            if tick % 2 == 0 {
                publish(&slot, tick / 2 + 1);
            }
            session.tick(&slot);
        }
        assert_eq!(session.router().buffer_lens(), [10, 0, 0, 0]);

        // Playback shows each captured frame for two ticks, like the recording
        let sequences: Vec<u64> = (0..10)
            .map(|_| session.router.next_playback_frame(StreamId::ONE).sequence)
            .collect();
        assert_eq!(sequences, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
    }

    #[test]
    fn test_quit_disarms() {
        let mut session = Session::default();
        session.apply(Command::Arm(StreamId::ONE));
        session.apply(Command::Quit);
        assert!(!session.router().is_recording());
    }
}
