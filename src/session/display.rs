//! The display session state machine and render loop.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::camera::FrameSource;
use crate::render::{encode_into, resample_into, reorder_to_rgb, target_dimensions, PixelGrid};

use super::screen::{self, CURSOR_HOME, ENTER_ALT_SCREEN, EXIT_ALT_SCREEN};

/// Fixed pacing delay between frames. A deliberate throughput cap to
/// avoid overwhelming the terminal, not a precision timer.
const FRAME_INTERVAL: Duration = Duration::from_millis(30);

/// Lifecycle state of a [`DisplaySession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, alternate screen not yet entered
    Inactive,
    /// Alternate screen entered, render loop may run
    Active,
    /// Teardown has run; terminal restored. Terminal state.
    TearingDown,
}

/// Owns the terminal for the duration of a viewing session.
///
/// Drives the whole pipeline: pulls frames from the source, re-probes the
/// terminal size each iteration, resamples and encodes, and writes each
/// frame as one logical write after a cursor-home. Teardown (release the
/// source, then restore the screen) runs exactly once on every exit path;
/// `run` invokes it unconditionally and `Drop` backstops it.
///
/// Generic over its collaborators so tests can drive it with an
/// in-memory writer, a scripted frame source, and a scripted size probe.
pub struct DisplaySession<S, W, F>
where
    S: FrameSource,
    W: Write,
    F: FnMut() -> (u16, u16),
{
    source: S,
    out: W,
    probe_size: F,
    /// Set asynchronously (e.g. by the Ctrl+C handler) to request stop
    interrupt: Arc<AtomicBool>,
    state: SessionState,
    /// Reused across frames to avoid per-frame allocation
    grid: PixelGrid,
    /// Reused encoded-frame buffer
    render_buf: String,
}

impl<S, W, F> DisplaySession<S, W, F>
where
    S: FrameSource,
    W: Write,
    F: FnMut() -> (u16, u16),
{
    pub fn new(source: S, out: W, probe_size: F, interrupt: Arc<AtomicBool>) -> Self {
        Self {
            source,
            out,
            probe_size,
            interrupt,
            state: SessionState::Inactive,
            grid: PixelGrid::new(0, 0),
            render_buf: String::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Enter the alternate screen and hide the cursor.
    ///
    /// Transitions Inactive to Active; emits the control sequence exactly
    /// once. Fails only if the output stream is unwritable.
    pub fn start(&mut self) -> io::Result<()> {
        if self.state != SessionState::Inactive {
            return Ok(());
        }

        self.out.write_all(ENTER_ALT_SCREEN.as_bytes())?;
        self.out.flush()?;
        screen::mark_alt_screen(true);
        self.state = SessionState::Active;
        Ok(())
    }

    /// Run the render loop until end-of-stream or interrupt, then tear
    /// down.
    ///
    /// End-of-stream and interrupt are natural termination and return
    /// `Ok`. A write failure is fatal and propagates, but teardown is
    /// still attempted best-effort first.
    pub fn run(&mut self) -> io::Result<()> {
        let result = self.render_loop();
        let teardown = self.stop();
        result.and(teardown)
    }

    fn render_loop(&mut self) -> io::Result<()> {
        while self.state == SessionState::Active {
            if self.interrupt.load(Ordering::SeqCst) {
                log::debug!("interrupt observed, leaving render loop");
                break;
            }

            // None means end-of-stream or acquisition failure; both end
            // the session without error
            let Some(frame) = self.source.read_frame() else {
                log::debug!("frame source exhausted, leaving render loop");
                break;
            };

            // Re-probe every iteration; the terminal may have been resized
            let (columns, rows) = (self.probe_size)();
            let (width, height) = target_dimensions(columns, rows);

            resample_into(&frame, width, height, &mut self.grid);
            reorder_to_rgb(&mut self.grid, frame.format);
            encode_into(&self.grid, &mut self.render_buf);

            // Home plus frame body land in the writer's buffer and reach
            // the terminal in one flush, minimizing visible tearing
            self.out.write_all(CURSOR_HOME.as_bytes())?;
            self.out.write_all(self.render_buf.as_bytes())?;
            self.out.flush()?;

            std::thread::sleep(FRAME_INTERVAL);
        }
        Ok(())
    }

    /// Tear the session down: release the frame source, then restore the
    /// screen.
    ///
    /// Idempotent, and safe to call from any state. If the session never
    /// entered the alternate screen, no restore sequence is emitted.
    pub fn stop(&mut self) -> io::Result<()> {
        match self.state {
            SessionState::TearingDown => Ok(()),
            SessionState::Inactive => {
                self.state = SessionState::TearingDown;
                self.source.release();
                Ok(())
            }
            SessionState::Active => {
                self.state = SessionState::TearingDown;
                self.source.release();
                let restored = self
                    .out
                    .write_all(EXIT_ALT_SCREEN.as_bytes())
                    .and_then(|()| self.out.flush());
                screen::mark_alt_screen(false);
                restored
            }
        }
    }
}

impl<S, W, F> Drop for DisplaySession<S, W, F>
where
    S: FrameSource,
    W: Write,
    F: FnMut() -> (u16, u16),
{
    fn drop(&mut self) {
        // Best-effort teardown on paths that skipped stop()
        let _ = self.stop();
    }
}
