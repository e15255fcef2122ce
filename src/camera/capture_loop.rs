//! Background capture thread implementation.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::frame_utils::{convert_to_rgb, mirror_horizontal};
use super::slot::FrameSlot;
use super::types::{CameraError, CameraSettings, Resolution};

/// Commands sent to the capture thread.
pub enum CaptureCommand {
    Stop,
}

/// Run the capture loop in a background thread.
///
/// The camera is opened here rather than on the caller's thread because
/// nokhwa cameras are not `Send` on every backend. Once the stream is open,
/// the actual resolution and fps are reported through `info_tx`.
///
/// A failed frame read ends the loop: no retries, the slot is closed and the
/// device released.
pub fn run_capture_loop(
    settings: CameraSettings,
    slot: Arc<FrameSlot>,
    stop: Arc<AtomicBool>,
    rx: Receiver<CaptureCommand>,
    info_tx: Sender<Result<(Resolution, u32), CameraError>>,
) {
    let index = CameraIndex::Index(settings.device_index);

    let mut camera = match open_camera_with_fallback(&index, &settings) {
        Ok(cam) => cam,
        Err(e) => {
            slot.close();
            let _ = info_tx.send(Err(e));
            return;
        }
    };

    if let Err(e) = camera.open_stream() {
        slot.close();
        let _ = info_tx.send(Err(CameraError::StreamFailed(e.to_string())));
        return;
    }

    let res = camera.resolution();
    let actual_res = Resolution {
        width: res.width(),
        height: res.height(),
    };
    let actual_fps = camera.frame_rate();
    log::info!(
        "Camera {} streaming at {} @ {} fps",
        settings.device_index,
        actual_res,
        actual_fps
    );
    let _ = info_tx.send(Ok((actual_res, actual_fps)));

    let mut sequence: u64 = 0;

    while !stop.load(Ordering::Relaxed) {
        if let Ok(CaptureCommand::Stop) = rx.try_recv() {
            break;
        }

        match camera.frame() {
            Ok(raw_frame) => match convert_to_rgb(&raw_frame, sequence + 1) {
                Some(mut frame) => {
                    sequence += 1;
                    if settings.mirror {
                        mirror_horizontal(&mut frame);
                    }
                    slot.publish(Arc::new(frame));
                }
                None => {
                    log::debug!("Skipping frame that could not be decoded to RGB");
                }
            },
            Err(e) => {
                log::error!("Could not read frame from the camera: {}", e);
                break;
            }
        }

        // Small sleep to allow checking stop signal
        thread::sleep(Duration::from_millis(1));
    }

    slot.close();
    if let Err(e) = camera.stop_stream() {
        log::warn!("Failed to stop camera stream cleanly: {}", e);
    }
    log::info!("Capture loop exited after {} frames", sequence);
}

/// Try to open a camera with multiple format fallback strategies.
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    let requested_resolution =
        nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height);

    // In order of preference: NV12 (native on macOS), MJPEG (widely
    // supported), then whatever the camera offers at its highest resolution.
    let format_attempts: Vec<RequestedFormat> = vec![
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            requested_resolution,
            NokhwaFrameFormat::NV12,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            requested_resolution,
            NokhwaFrameFormat::MJPEG,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = None;

    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("Camera format attempt failed: {}", e);
                last_error = Some(e);
            }
        }
    }

    let msg = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "no camera format could be negotiated".to_string());
    let lower = msg.to_lowercase();
    if lower.contains("permission")
        || lower.contains("denied")
        || lower.contains("authorization")
        || lower.contains("access")
    {
        Err(CameraError::PermissionDenied)
    } else {
        Err(CameraError::OpenFailed(msg))
    }
}
