//! Frame router: four recording buffers, the recording state and playback.
//!
//! While a stream is armed, every recorded frame goes to that stream's
//! buffer. While idle, each buffer loops through its frames independently and
//! [`FrameRouter::render_grid`] composes the current playback frames into the
//! 2x2 grid.

mod buffer;
mod stream;

pub use buffer::{BufferLimits, OverflowPolicy, PushOutcome, RecordingBuffer, DEFAULT_MAX_FRAMES};
pub use stream::{StreamId, StreamIdError, STREAM_COUNT};

use image::RgbImage;
use std::sync::Arc;

use crate::camera::Frame;
use crate::grid::{self, CELL_HEIGHT, CELL_WIDTH};

/// Whether frames are currently being recorded, and where to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    /// Not recording; buffers are played back
    #[default]
    Idle,
    /// Recording into the given stream
    Armed(StreamId),
}

/// Result of [`FrameRouter::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Not armed; nothing was recorded
    Idle,
    /// Frame appended to the stream
    Appended(StreamId),
    /// Frame appended after evicting the stream's oldest frame
    Evicted(StreamId),
    /// The stream was full and the frame was discarded
    Rejected(StreamId),
}

/// Routes captured frames into four recording buffers and plays them back.
#[derive(Debug, Clone)]
pub struct FrameRouter {
    buffers: [RecordingBuffer; STREAM_COUNT],
    state: RecordingState,
    /// Returned by playback of an empty stream
    placeholder: Arc<Frame>,
}

impl Default for FrameRouter {
    fn default() -> Self {
        Self::new(BufferLimits::default())
    }
}

impl FrameRouter {
    /// Create a router with four empty buffers sharing the same limits.
    pub fn new(limits: BufferLimits) -> Self {
        Self {
            buffers: std::array::from_fn(|_| RecordingBuffer::new(limits)),
            state: RecordingState::Idle,
            placeholder: Arc::new(Frame::blank(CELL_WIDTH, CELL_HEIGHT)),
        }
    }

    /// Start recording into `id`. Re-arming switches the target stream.
    pub fn arm_recording(&mut self, id: StreamId) {
        self.state = RecordingState::Armed(id);
        log::info!("Recording started on stream {}", id);
    }

    /// Stop recording. No-op when already idle.
    pub fn disarm_recording(&mut self) {
        if let RecordingState::Armed(id) = self.state {
            log::info!(
                "Recording stopped on stream {} ({} frames)",
                id,
                self.buffers[id.index()].len()
            );
        }
        self.state = RecordingState::Idle;
    }

    /// Append `frame` to the armed stream; no-op while idle.
    pub fn record(&mut self, frame: Arc<Frame>) -> RecordOutcome {
        let RecordingState::Armed(id) = self.state else {
            return RecordOutcome::Idle;
        };

        match self.buffers[id.index()].push(frame) {
            PushOutcome::Appended => RecordOutcome::Appended(id),
            PushOutcome::Evicted => RecordOutcome::Evicted(id),
            PushOutcome::Rejected => {
                log::debug!("Stream {} is full, frame discarded", id);
                RecordOutcome::Rejected(id)
            }
        }
    }

    /// Next playback frame for `id`, advancing that stream's cursor.
    ///
    /// An empty stream yields the 320x240 black placeholder and keeps its
    /// cursor untouched.
    pub fn next_playback_frame(&mut self, id: StreamId) -> Arc<Frame> {
        self.buffers[id.index()]
            .next_frame()
            .unwrap_or_else(|| Arc::clone(&self.placeholder))
    }

    /// Advance all four streams and compose their frames into a 640x480 grid.
    pub fn render_grid(&mut self) -> RgbImage {
        let frames = StreamId::ALL.map(|id| self.next_playback_frame(id));
        grid::compose_grid([&*frames[0], &*frames[1], &*frames[2], &*frames[3]])
    }

    /// Current recording state.
    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// Whether a stream is armed.
    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecordingState::Armed(_))
    }

    /// The armed stream, if any.
    pub fn selected(&self) -> Option<StreamId> {
        match self.state {
            RecordingState::Armed(id) => Some(id),
            RecordingState::Idle => None,
        }
    }

    /// Read access to one stream's buffer.
    pub fn buffer(&self, id: StreamId) -> &RecordingBuffer {
        &self.buffers[id.index()]
    }

    /// Frame counts of all four streams in stream order.
    pub fn buffer_lens(&self) -> [usize; STREAM_COUNT] {
        StreamId::ALL.map(|id| self.buffers[id.index()].len())
    }
}
