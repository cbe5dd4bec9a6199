//! Core camera types: frames, settings, and errors.

use std::fmt;
use std::time::Instant;

use thiserror::Error;

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
    /// Low resolution (320x240) - fast, plenty for small terminals
    pub const LOW: Resolution = Resolution {
        width: 320,
        height: 240,
    };

    /// Medium resolution (640x480) - balanced, recommended
    pub const MEDIUM: Resolution = Resolution {
        width: 640,
        height: 480,
    };

    /// High resolution (1280x720) - for very large terminals
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

/// Channel order of a captured frame's pixel data.
///
/// Frames always carry three 8-bit channels per pixel; this tag records
/// which order they are in so the render pipeline can reorder to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// Red, green, blue
    Rgb,
    /// Blue, green, red (native order of some capture backends)
    Bgr,
}

/// A captured camera frame.
///
/// Invariant: `data.len() == width * height * 3`, no ragged rows.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data, three bytes per pixel in `format` order
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Channel order of `data`
    pub format: FrameFormat,
    /// Timestamp when the frame was captured
    pub timestamp: Instant,
}

impl Frame {
    /// Number of bytes per pixel (3 for both supported orders).
    pub fn bytes_per_pixel(&self) -> usize {
        match self.format {
            FrameFormat::Rgb | FrameFormat::Bgr => 3,
        }
    }
}

/// Settings for camera capture.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Camera device index
    pub device_index: u32,
    /// Requested capture resolution (actual may differ)
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
            mirror: false,
        }
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    /// No cameras found on the system
    #[error("No cameras found")]
    NoDevices,
    /// Failed to query camera devices
    #[error("Failed to query cameras: {0}")]
    QueryFailed(String),
    /// Failed to open the camera
    #[error("Failed to open camera: {0}")]
    OpenFailed(String),
    /// Camera permission denied (macOS/iOS)
    #[error("Camera permission denied. On macOS, grant access in System Settings > Privacy & Security > Camera")]
    PermissionDenied,
    /// Camera device not found at the specified index
    #[error("Camera device {0} not found. Run 'camview list-devices' to see available devices")]
    DeviceNotFound(u32),
    /// Failed to start the video stream
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
    fn test_resolution_constants() {
        assert_eq!(Resolution::LOW.width, 320);
        assert_eq!(Resolution::LOW.height, 240);
        assert_eq!(Resolution::MEDIUM.width, 640);
        assert_eq!(Resolution::MEDIUM.height, 480);
        assert_eq!(Resolution::HIGH.width, 1280);
        assert_eq!(Resolution::HIGH.height, 720);
    }

    #[test]
    fn test_camera_settings_default() {
        let settings = CameraSettings::default();
        assert_eq!(settings.device_index, 0);
        assert_eq!(settings.resolution, Resolution::MEDIUM);
        assert_eq!(settings.fps, 30);
        assert!(!settings.mirror);
    }

    #[test]
    fn test_camera_error_display() {
        assert_eq!(format!("{}", CameraError::NoDevices), "No cameras found");
        assert_eq!(
            format!("{}", CameraError::QueryFailed("test".to_string())),
            "Failed to query cameras: test"
        );
        assert!(format!("{}", CameraError::PermissionDenied).contains("permission denied"));
        assert!(format!("{}", CameraError::DeviceNotFound(5)).contains("5"));
    }

    #[test]
    fn test_frame_bytes_per_pixel() {
        let frame = Frame {
            data: vec![0; 6], // 2 pixels
            width: 2,
            height: 1,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        };
        assert_eq!(frame.bytes_per_pixel(), 3);
        let frame = Frame {
            format: FrameFormat::Bgr,
            ..frame
        };
        assert_eq!(frame.bytes_per_pixel(), 3);
    }
}
