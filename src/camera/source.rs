//! The frame source contract consumed by the display session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::capture::CameraCapture;
use super::types::Frame;

/// How long a read waits for a fresh frame before giving up.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll interval while waiting for the capture thread to publish a frame.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// A sequential supplier of video frames.
///
/// `read_frame` blocks until the next frame is available and returns
/// `None` on end-of-stream or acquisition failure; both are treated by
/// the session as natural termination, not errors. `release` frees the
/// underlying device and must be safe to call more than once.
pub trait FrameSource {
    /// Read the next frame, blocking until one is available.
    fn read_frame(&mut self) -> Option<Frame>;

    /// Release the underlying resource. Idempotent.
    fn release(&mut self);
}

/// [`FrameSource`] backed by a running [`CameraCapture`].
///
/// The capture thread only ever publishes the most recent frame, so this
/// adapter tracks the timestamp of the last frame it handed out and waits
/// for a newer one. A camera that stops producing frames therefore reads
/// as an acquisition failure after [`READ_TIMEOUT`] rather than replaying
/// a stale image forever.
pub struct CameraSource {
    capture: CameraCapture,
    /// Shared interrupt flag; a pending interrupt aborts a blocking read
    interrupt: Arc<AtomicBool>,
    /// Timestamp of the last frame delivered to the caller
    last_delivered: Option<Instant>,
}

impl CameraSource {
    /// Wrap a started capture. `interrupt` is the session's interrupt
    /// flag; setting it makes an in-flight `read_frame` return promptly.
    pub fn new(capture: CameraCapture, interrupt: Arc<AtomicBool>) -> Self {
        Self {
            capture,
            interrupt,
            last_delivered: None,
        }
    }
}

impl FrameSource for CameraSource {
    fn read_frame(&mut self) -> Option<Frame> {
        let deadline = Instant::now() + READ_TIMEOUT;

        while Instant::now() < deadline {
            if self.interrupt.load(Ordering::SeqCst) {
                return None;
            }
            if !self.capture.is_running() {
                return None;
            }

            if let Some(frame) = self.capture.latest_frame() {
                let fresh = self
                    .last_delivered
                    .map_or(true, |seen| frame.timestamp > seen);
                if fresh {
                    self.last_delivered = Some(frame.timestamp);
                    return Some(frame);
                }
            }

            std::thread::sleep(POLL_INTERVAL);
        }

        log::warn!("no fresh frame within {:?}, treating as end of stream", READ_TIMEOUT);
        None
    }

    fn release(&mut self) {
        self.capture.stop();
    }
}
