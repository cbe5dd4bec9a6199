//! Terminal size discovery.

/// Size assumed when the terminal size cannot be determined, e.g. when
/// output is piped.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Query the current terminal size as `(columns, rows)`.
///
/// Queried fresh every frame; the result is never cached because the
/// user may resize the terminal at any time.
pub fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or(FALLBACK_SIZE)
}
