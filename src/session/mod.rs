//! Display session: terminal mode lifecycle, the render loop, and
//! signal-safe teardown.

mod display;
mod screen;
mod size;

pub use display::{DisplaySession, SessionState};
pub use screen::{install_panic_hook, CURSOR_HOME, ENTER_ALT_SCREEN, EXIT_ALT_SCREEN};
pub use size::terminal_size;
