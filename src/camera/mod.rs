//! Camera capture module for webcam access and frame acquisition.
//!
//! This module provides a high-level API for camera operations:
//! - Device enumeration via [`list_devices`]
//! - Continuous capture via [`CameraCapture`]
//! - The [`FrameSource`] contract consumed by the display session
//! - Configuration via [`CameraSettings`] and [`Resolution`]

mod capture;
mod device;
mod frame_utils;
mod source;
mod types;

pub use capture::CameraCapture;
pub use device::list_devices;
pub use source::{CameraSource, FrameSource};
pub use types::{CameraError, CameraInfo, CameraSettings, Frame, FrameFormat, Resolution};
