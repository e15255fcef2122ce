//! Camera capture handle and public API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use super::capture_loop::{run_capture_loop, CaptureCommand};
use super::device::find_device;
use super::slot::FrameSlot;
use super::source::FrameSource;
use super::types::{CameraError, CameraSettings, Frame, Resolution};

/// Camera capture handle.
///
/// The camera runs a background thread that continuously captures frames
/// and publishes the latest one into a [`FrameSlot`]. Call `start()` to begin
/// capturing and `current_frame()` to retrieve the latest frame.
pub struct CameraCapture {
    /// Latest captured frame (shared with capture thread)
    frame_slot: Arc<FrameSlot>,
    /// Capture thread handle
    capture_thread: Option<JoinHandle<()>>,
    /// Channel to send commands to capture thread
    command_tx: Option<Sender<CaptureCommand>>,
    /// Signal to stop capture thread
    stop_signal: Arc<AtomicBool>,
    /// Current settings
    settings: CameraSettings,
    /// Actual resolution (set after camera opens)
    actual_resolution: Option<Resolution>,
    /// Actual FPS (set after camera opens)
    actual_fps: Option<u32>,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Open a camera with the specified settings.
    ///
    /// This validates that the camera exists but doesn't open the stream
    /// until `start()` is called.
    ///
    /// # Errors
    /// * `CameraError::DeviceNotFound` - If the device index doesn't exist
    /// * `CameraError::QueryFailed` - If devices cannot be enumerated
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        let device = find_device(settings.device_index)?;
        log::info!("Using camera {}", device);

        Ok(Self {
            frame_slot: Arc::new(FrameSlot::new()),
            capture_thread: None,
            command_tx: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
            settings,
            actual_resolution: None,
            actual_fps: None,
        })
    }

    /// Get the actual resolution the camera is using.
    ///
    /// Returns `None` if the camera hasn't been started yet.
    pub fn actual_resolution(&self) -> Option<Resolution> {
        self.actual_resolution
    }

    /// Get the actual frame rate the camera is using.
    pub fn actual_fps(&self) -> Option<u32> {
        self.actual_fps
    }

    /// Start capturing frames in a background thread.
    ///
    /// Blocks until the thread reports that the stream is open (or failed).
    ///
    /// # Errors
    /// * `CameraError::AlreadyRunning` - If capture is already running
    /// * `CameraError::StreamFailed` - If the camera stream fails to start
    /// * `CameraError::PermissionDenied` - If camera access is denied (macOS)
    /// * `CameraError::OpenFailed` - If camera fails to open for other reasons
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.is_running() {
            return Err(CameraError::AlreadyRunning);
        }

        self.stop_signal.store(false, Ordering::SeqCst);
        // A closed slot stays closed, so every run gets a fresh one
        self.frame_slot = Arc::new(FrameSlot::new());

        let (tx, rx) = mpsc::channel();
        self.command_tx = Some(tx);

        let slot = Arc::clone(&self.frame_slot);
        let stop = Arc::clone(&self.stop_signal);
        let settings = self.settings.clone();

        let (info_tx, info_rx) = mpsc::channel::<Result<(Resolution, u32), CameraError>>();

        let handle = std::thread::Builder::new()
            .name("camera-capture".to_string())
            .spawn(move || {
                run_capture_loop(settings, slot, stop, rx, info_tx);
            })
            .map_err(|e| CameraError::StreamFailed(e.to_string()))?;

        self.capture_thread = Some(handle);

        match info_rx.recv() {
            Ok(Ok((res, fps))) => {
                self.actual_resolution = Some(res);
                self.actual_fps = Some(fps);
                Ok(())
            }
            Ok(Err(e)) => {
                self.join_thread();
                Err(e)
            }
            Err(_) => {
                self.join_thread();
                Err(CameraError::StreamFailed(
                    "Capture thread terminated unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Stop the capture thread and release the device.
    ///
    /// Signals the background thread to stop and waits for it to finish.
    pub fn stop(&mut self) {
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(CaptureCommand::Stop);
        }
        self.join_thread();
    }

    /// Get the latest captured frame.
    ///
    /// Returns `None` if no frame has been captured yet.
    pub fn current_frame(&self) -> Option<Arc<Frame>> {
        self.frame_slot.latest()
    }

    /// Check if the capture thread is currently producing frames.
    pub fn is_running(&self) -> bool {
        self.capture_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
            && !self.frame_slot.is_closed()
    }

    fn join_thread(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);
        if let Some(handle) = self.capture_thread.take() {
            if handle.join().is_err() {
                log::error!("Camera capture thread panicked");
            }
        }
    }
}

impl FrameSource for CameraCapture {
    fn current_frame(&self) -> Option<Arc<Frame>> {
        CameraCapture::current_frame(self)
    }

    fn is_running(&self) -> bool {
        CameraCapture::is_running(self)
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}
