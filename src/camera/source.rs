//! Frame source abstraction consumed by the main loop.

use std::sync::Arc;

use super::slot::FrameSlot;
use super::types::Frame;

/// Something that can hand out the most recently captured frame.
pub trait FrameSource {
    /// The most recent frame, or `None` if nothing has been captured yet.
    fn current_frame(&self) -> Option<Arc<Frame>>;

    /// Whether new frames may still arrive.
    fn is_running(&self) -> bool;
}

impl FrameSource for FrameSlot {
    fn current_frame(&self) -> Option<Arc<Frame>> {
        self.latest()
    }

    fn is_running(&self) -> bool {
        !self.is_closed()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Arc<S> {
    fn current_frame(&self) -> Option<Arc<Frame>> {
        (**self).current_frame()
    }

    fn is_running(&self) -> bool {
        (**self).is_running()
    }
}
