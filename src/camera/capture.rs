//! Camera capture handle and its background capture thread.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use super::device::list_devices;
use super::frame_utils::{decode_frame, mirror_horizontal};
use super::types::{CameraError, CameraSettings, Frame, Resolution};

/// Commands sent to the capture thread.
enum CaptureCommand {
    Stop,
}

/// Camera capture handle.
///
/// Owns a background thread that continuously reads frames from the
/// device and keeps only the most recent one in a shared buffer. The
/// `nokhwa::Camera` itself lives inside the thread because it is not
/// `Send`. Call [`CameraCapture::start`] to begin capturing and
/// [`CameraCapture::latest_frame`] to fetch the newest frame.
pub struct CameraCapture {
    /// Latest captured frame (shared with the capture thread)
    frame_buffer: Arc<Mutex<Option<Frame>>>,
    /// Capture thread handle
    capture_thread: Option<JoinHandle<()>>,
    /// Channel to send commands to the capture thread
    command_tx: Option<Sender<CaptureCommand>>,
    /// Signal to stop the capture thread
    stop_signal: Arc<AtomicBool>,
    /// Current settings
    settings: CameraSettings,
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
    /// Validates that the device exists but does not open the stream;
    /// that happens in [`CameraCapture::start`], inside the background
    /// thread.
    ///
    /// # Errors
    /// * `CameraError::DeviceNotFound` - if the device index doesn't exist
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        let devices = list_devices()?;
        if !devices.iter().any(|d| d.index == settings.device_index) {
            return Err(CameraError::DeviceNotFound(settings.device_index));
        }

        Ok(Self {
            frame_buffer: Arc::new(Mutex::new(None)),
            capture_thread: None,
            command_tx: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
            settings,
        })
    }

    /// Start capturing frames in a background thread.
    ///
    /// Blocks until the thread reports that the stream is open (or failed
    /// to open), so errors from the device surface here.
    ///
    /// # Errors
    /// * `CameraError::AlreadyRunning` - if capture is already running
    /// * `CameraError::StreamFailed` - if the stream fails to start
    /// * `CameraError::PermissionDenied` - if camera access is denied
    /// * `CameraError::OpenFailed` - if the camera fails to open otherwise
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.is_running() {
            return Err(CameraError::AlreadyRunning);
        }

        self.stop_signal.store(false, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel();
        self.command_tx = Some(tx);

        let buffer = Arc::clone(&self.frame_buffer);
        let stop = Arc::clone(&self.stop_signal);
        let settings = self.settings.clone();

        // Channel for the thread to report the negotiated format
        let (info_tx, info_rx) = mpsc::channel::<Result<(Resolution, u32), CameraError>>();

        let handle = std::thread::spawn(move || {
            run_capture_loop(settings, buffer, stop, rx, info_tx);
        });
        self.capture_thread = Some(handle);

        match info_rx.recv() {
            Ok(Ok((res, fps))) => {
                log::info!("camera streaming at {}x{} @ {} fps", res.width, res.height, fps);
                Ok(())
            }
            Ok(Err(e)) => {
                self.join_thread();
                Err(e)
            }
            Err(_) => {
                self.join_thread();
                Err(CameraError::StreamFailed(
                    "capture thread terminated unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Stop the capture thread and wait for it to finish.
    pub fn stop(&mut self) {
        // Also send a stop command in case the thread is blocked on a read
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(CaptureCommand::Stop);
        }
        self.join_thread();
    }

    fn join_thread(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);
        if let Some(handle) = self.capture_thread.take() {
            let _ = handle.join();
        }
    }

    /// Get the latest captured frame.
    ///
    /// Returns `None` if no frame has been captured yet or if capturing
    /// is not running.
    pub fn latest_frame(&self) -> Option<Frame> {
        let buffer = self.frame_buffer.lock().ok()?;
        buffer.clone()
    }

    /// Check if the capture thread is currently running.
    pub fn is_running(&self) -> bool {
        self.capture_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Body of the background capture thread.
fn run_capture_loop(
    settings: CameraSettings,
    buffer: Arc<Mutex<Option<Frame>>>,
    stop: Arc<AtomicBool>,
    rx: Receiver<CaptureCommand>,
    info_tx: Sender<Result<(Resolution, u32), CameraError>>,
) {
    let index = CameraIndex::Index(settings.device_index);

    let mut camera = match open_with_fallback(&index, &settings) {
        Ok(cam) => cam,
        Err(e) => {
            let _ = info_tx.send(Err(e));
            return;
        }
    };

    if let Err(e) = camera.open_stream() {
        let _ = info_tx.send(Err(CameraError::StreamFailed(e.to_string())));
        return;
    }

    let res = camera.resolution();
    let actual = Resolution {
        width: res.width(),
        height: res.height(),
    };
    let _ = info_tx.send(Ok((actual, camera.frame_rate())));

    while !stop.load(Ordering::Relaxed) {
        if let Ok(CaptureCommand::Stop) = rx.try_recv() {
            break;
        }

        if let Ok(raw) = camera.frame() {
            // Decode failures are skipped; the next frame usually succeeds
            if let Some(mut frame) = decode_frame(&raw) {
                if settings.mirror {
                    mirror_horizontal(&mut frame);
                }
                if let Ok(mut buf) = buffer.lock() {
                    *buf = Some(frame);
                }
            }
        }

        // camera.frame() already blocks for the next frame; this sleep just
        // keeps the stop check responsive when reads fail fast
        std::thread::sleep(Duration::from_millis(1));
    }

    let _ = camera.stop_stream();
}

/// Try to open a camera with multiple format fallback strategies.
///
/// Preference order: NV12 (native on macOS), then MJPEG (widely
/// supported), then whatever the camera offers at its highest resolution.
fn open_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    let requested_resolution =
        nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height);

    let attempts: Vec<RequestedFormat> = vec![
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
    for requested in attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => last_error = Some(e),
        }
    }

    let e = last_error.expect("at least one format attempt");
    let msg = e.to_string().to_lowercase();
    if msg.contains("permission")
        || msg.contains("denied")
        || msg.contains("authorization")
        || msg.contains("access")
    {
        Err(CameraError::PermissionDenied)
    } else {
        Err(CameraError::OpenFailed(e.to_string()))
    }
}
