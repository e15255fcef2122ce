//! Camera types and data structures.

use std::fmt;
use std::str::FromStr;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Camera resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Low resolution (320x240), the size of one grid cell
    pub const LOW: Resolution = Resolution {
        width: 320,
        height: 240,
    };

    /// Medium resolution (640x480) - balanced, recommended
    pub const MEDIUM: Resolution = Resolution {
        width: 640,
        height: 480,
    };

    /// High resolution (1280x720)
    pub const HIGH: Resolution = Resolution {
        width: 1280,
        height: 720,
    };
}

impl Default for Resolution {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = String;

    /// Parse `WIDTHxHEIGHT`, e.g. `640x480`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid resolution format '{}'. Use WIDTHxHEIGHT (e.g., 640x480)",
                s
            ));
        }
        let width: u32 = parts[0]
            .trim()
            .parse()
            .map_err(|_| format!("Invalid width '{}' in resolution", parts[0]))?;
        let height: u32 = parts[1]
            .trim()
            .parse()
            .map_err(|_| format!("Invalid height '{}' in resolution", parts[1]))?;
        if width == 0 || height == 0 {
            return Err("Resolution width and height must be greater than 0".to_string());
        }
        if width > 7680 || height > 4320 {
            return Err("Resolution exceeds maximum supported (7680x4320)".to_string());
        }
        Ok(Resolution { width, height })
    }
}

/// A captured camera frame: tightly packed RGB, 3 bytes per pixel, row-major.
///
/// Frames are immutable once captured and are shared as `Arc<Frame>` between
/// the capture thread, the live pane and the recording buffers.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data in RGB format
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Capture order, assigned by the capture thread (starts at 1)
    pub sequence: u64,
}

impl Frame {
    /// Number of bytes per RGB pixel.
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Create a frame from raw RGB data.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            sequence: 0,
        }
    }

    /// Create a frame where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(pixels * Self::BYTES_PER_PIXEL);
        for _ in 0..pixels {
            data.extend_from_slice(&rgb);
        }
        Self::new(data, width, height)
    }

    /// Create an all-black frame.
    pub fn blank(width: u32, height: u32) -> Self {
        Self::new(
            vec![0; (width as usize) * (height as usize) * Self::BYTES_PER_PIXEL],
            width,
            height,
        )
    }

    /// Set the capture sequence number.
    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Whether the pixel buffer holds exactly `width * height` RGB pixels.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == (self.width as usize) * (self.height as usize) * Self::BYTES_PER_PIXEL
    }

    /// Whether every byte of the frame is zero.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }
}

/// Settings for camera capture.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Camera device index
    pub device_index: u32,
    /// Capture resolution
    pub resolution: Resolution,
    /// Target FPS (actual may vary)
    pub fps: u32,
    /// Mirror horizontally (selfie mode)
    pub mirror: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: Resolution::default(),
            fps: 30,
            mirror: true,
        }
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    /// Failed to query camera devices
    #[error("Failed to query cameras: {0}")]
    QueryFailed(String),
    /// Failed to open camera
    #[error("Failed to open camera: {0}")]
    OpenFailed(String),
    /// Camera permission denied (macOS)
    #[error(
        "Camera permission denied. On macOS, grant access in System Settings > Privacy & Security > Camera"
    )]
    PermissionDenied,
    /// Camera device not found at specified index
    #[error("Camera device {0} not found. Run 'quad-looper list-cameras' to see available devices")]
    DeviceNotFound(u32),
    /// Failed to start video stream
    #[error("Failed to start camera stream: {0}")]
    StreamFailed(String),
    /// Capture thread is already running
    #[error("Capture thread is already running")]
    AlreadyRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "Built-in".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (Built-in)");
    }

    #[test]
    fn test_resolution_default() {
        assert_eq!(Resolution::default(), Resolution::MEDIUM);
        assert_eq!(Resolution::LOW.to_string(), "320x240");
    }

    #[test]
    fn test_resolution_from_str() {
        assert_eq!("1280x720".parse::<Resolution>(), Ok(Resolution::HIGH));
        assert_eq!(" 640 x 480 ".trim().parse::<Resolution>(), Ok(Resolution::MEDIUM));
        assert!("640".parse::<Resolution>().is_err());
        assert!("0x480".parse::<Resolution>().is_err());
        assert!("abcx480".parse::<Resolution>().is_err());
        assert!("8000x480".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_camera_settings_default() {
        let settings = CameraSettings::default();
        assert_eq!(settings.device_index, 0);
        assert_eq!(settings.resolution, Resolution::MEDIUM);
        assert_eq!(settings.fps, 30);
        assert!(settings.mirror);
    }

    #[test]
    fn test_camera_error_display() {
        assert_eq!(
            CameraError::QueryFailed("test".to_string()).to_string(),
            "Failed to query cameras: test"
        );
        assert_eq!(
            CameraError::StreamFailed("test".to_string()).to_string(),
            "Failed to start camera stream: test"
        );
        assert!(CameraError::PermissionDenied.to_string().contains("permission denied"));
        assert!(CameraError::DeviceNotFound(5).to_string().contains('5'));
    }

    #[test]
    fn test_frame_blank_and_filled() {
        let blank = Frame::blank(4, 2);
        assert_eq!(blank.data.len(), 4 * 2 * 3);
        assert!(blank.is_blank());
        assert!(blank.is_well_formed());

        let red = Frame::filled(2, 2, [255, 0, 0]);
        assert_eq!(red.data, vec![255, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0]);
        assert!(!red.is_blank());
    }

    #[test]
    fn test_frame_well_formed() {
        let frame = Frame::new(vec![0; 5], 2, 1);
        assert!(!frame.is_well_formed());
        assert_eq!(Frame::blank(1, 1).with_sequence(7).sequence, 7);
    }
}
