//! Terminal control sequences and panic-safe screen restoration.

use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Enter the alternate screen buffer and hide the cursor.
pub const ENTER_ALT_SCREEN: &str = "\x1b[?1049h\x1b[?25l";

/// Leave the alternate screen buffer and show the cursor again.
pub const EXIT_ALT_SCREEN: &str = "\x1b[?1049l\x1b[?25h";

/// Move the cursor to row 1, column 1 without clearing the screen.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Tracks whether the alternate screen is active, for the panic handler.
static ALT_SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Record whether the alternate screen is currently active.
pub(crate) fn mark_alt_screen(active: bool) {
    ALT_SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Install a panic hook that restores the terminal before the panic
/// message prints. Without this, a panic inside the render loop would
/// leave the user on a hidden-cursor alternate screen.
pub fn install_panic_hook() {
    // Only install once
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if ALT_SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = crossterm::execute!(
                io::stdout(),
                crossterm::terminal::LeaveAlternateScreen,
                crossterm::cursor::Show,
            );
        }

        original_hook(panic_info);
    }));
}
