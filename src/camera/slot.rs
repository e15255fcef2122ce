//! Single-slot latest-value channel between the capture thread and the main loop.
//!
//! The producer overwrites the slot on every captured frame; readers clone the
//! `Arc` of whatever frame is currently held. Frames the reader never saw are
//! simply dropped, so a reader may observe a frame up to one tick stale but
//! never a partially written one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::types::Frame;

#[derive(Debug, Default)]
struct SlotState {
    frame: Option<Arc<Frame>>,
    closed: bool,
}

/// Holds the most recently captured frame.
#[derive(Debug, Default)]
pub struct FrameSlot {
    state: Mutex<SlotState>,
}

impl FrameSlot {
    /// Create an empty, open slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held frame. Ignored once the slot is closed.
    ///
    /// Returns `false` if the frame was ignored.
    pub fn publish(&self, frame: Arc<Frame>) -> bool {
        let mut state = self.lock();
        if state.closed {
            return false;
        }
        state.frame = Some(frame);
        true
    }

    /// The most recently published frame, if any.
    pub fn latest(&self) -> Option<Arc<Frame>> {
        self.lock().frame.clone()
    }

    /// Mark the producer as finished. The last frame stays readable.
    pub fn close(&self) {
        self.lock().closed = true;
    }

    /// Whether the producer has finished.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    // The critical sections never panic midway, so a poisoned lock still
    // holds a consistent value.
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
