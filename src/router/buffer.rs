//! A single recording buffer with a looping playback cursor.

use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::camera::Frame;

/// Default per-stream capacity: ~30 seconds at 30 fps.
pub const DEFAULT_MAX_FRAMES: usize = 900;

/// What to do when a frame arrives at a full buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    /// Evict the oldest frame to make room
    #[default]
    DropOldest,
    /// Discard the incoming frame
    Reject,
}

impl OverflowPolicy {
    /// Get a human-readable name for the policy.
    pub fn name(&self) -> &'static str {
        match self {
            OverflowPolicy::DropOldest => "drop-oldest",
            OverflowPolicy::Reject => "reject",
        }
    }
}

/// Capacity settings shared by all four buffers.
///
/// With [`OverflowPolicy::DropOldest`], eviction keeps the cursor on the
/// frame it pointed at, unless that frame was the evicted oldest one; then
/// the cursor moves to the new oldest frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLimits {
    /// Maximum frames per buffer; 0 means unbounded
    pub max_frames: usize,
    /// Behaviour when `max_frames` is reached
    pub overflow: OverflowPolicy,
}

impl BufferLimits {
    /// No capacity limit.
    pub const UNBOUNDED: BufferLimits = BufferLimits {
        max_frames: 0,
        overflow: OverflowPolicy::DropOldest,
    };

    fn is_full(&self, len: usize) -> bool {
        self.max_frames != 0 && len >= self.max_frames
    }
}

impl Default for BufferLimits {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            overflow: OverflowPolicy::default(),
        }
    }
}

/// Result of pushing a frame into a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The frame was appended
    Appended,
    /// The frame was appended after evicting the oldest one
    Evicted,
    /// The buffer was full and the frame was discarded
    Rejected,
}

/// Ordered frames plus a playback cursor.
///
/// The cursor is always in `[0, len)` while the buffer is non-empty and 0
/// while it is empty.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuffer {
    frames: VecDeque<Arc<Frame>>,
    cursor: usize,
    limits: BufferLimits,
}

impl RecordingBuffer {
    /// Create an empty buffer with the given limits.
    pub fn new(limits: BufferLimits) -> Self {
        Self {
            frames: VecDeque::new(),
            cursor: 0,
            limits,
        }
    }

    /// Append a frame, applying the overflow policy if the buffer is full.
    pub fn push(&mut self, frame: Arc<Frame>) -> PushOutcome {
        if !self.limits.is_full(self.frames.len()) {
            self.frames.push_back(frame);
            return PushOutcome::Appended;
        }

        match self.limits.overflow {
            OverflowPolicy::Reject => PushOutcome::Rejected,
            OverflowPolicy::DropOldest => {
                self.frames.pop_front();
                // Cursor 0 was on the evicted frame and stays at 0, which is
                // now the next-oldest frame.
                self.cursor = self.cursor.saturating_sub(1);
                self.frames.push_back(frame);
                PushOutcome::Evicted
            }
        }
    }

    /// Return the frame under the cursor and advance the cursor cyclically.
    ///
    /// Returns `None` (and leaves the cursor alone) when the buffer is empty.
    pub fn next_frame(&mut self) -> Option<Arc<Frame>> {
        let frame = self.frames.get(self.cursor).cloned()?;
        self.cursor = (self.cursor + 1) % self.frames.len();
        Some(frame)
    }

    /// Number of stored frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Current playback cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Stored frames in insertion order.
    pub fn frames(&self) -> impl Iterator<Item = &Arc<Frame>> {
        self.frames.iter()
    }
}
