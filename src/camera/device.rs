//! Camera device enumeration.

use nokhwa::query;
use nokhwa::utils::{ApiBackend, CameraInfo as DeviceInfo};

use super::types::{CameraError, CameraInfo};

/// Cameras on this system, ordered by index. An empty list is not an error.
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    let devices = query(ApiBackend::Auto).map_err(|e| CameraError::QueryFailed(e.to_string()))?;
    Ok(to_camera_infos(devices))
}

/// Look up the camera selected with `--camera` / `[camera] device`.
pub fn find_device(index: u32) -> Result<CameraInfo, CameraError> {
    list_devices()?
        .into_iter()
        .find(|d| d.index == index)
        .ok_or(CameraError::DeviceNotFound(index))
}

/// Keep devices addressable by a numeric index; others cannot be selected.
fn to_camera_infos(devices: Vec<DeviceInfo>) -> Vec<CameraInfo> {
    let mut infos: Vec<CameraInfo> = devices
        .into_iter()
        .filter_map(|d| match d.index().as_index() {
            Ok(index) => Some(CameraInfo {
                index,
                name: d.human_name(),
                description: d.description().to_string(),
            }),
            Err(e) => {
                log::debug!("Skipping camera {:?} without a numeric index: {}", d.human_name(), e);
                None
            }
        })
        .collect();
    infos.sort_by_key(|d| d.index);
    infos
}
