//! Camera capture: device enumeration, the capture thread and the frame
//! handoff to the main loop.
//!
//! - Device enumeration via [`list_devices`]
//! - Camera capture via [`CameraCapture`]
//! - Latest-frame handoff via [`FrameSlot`] and the [`FrameSource`] trait

mod capture;
mod capture_loop;
mod device;
mod frame_utils;
mod slot;
mod source;
mod types;

pub use capture::CameraCapture;
pub use device::list_devices;
pub use frame_utils::mirror_horizontal;
pub use slot::FrameSlot;
pub use source::FrameSource;
pub use types::{CameraError, CameraInfo, CameraSettings, Frame, Resolution};
