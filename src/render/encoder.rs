//! Half-block cell encoder.
//!
//! Turns an RGB pixel grid into the exact byte sequence the terminal
//! needs: one character row per vertical pixel pair, where each cell is
//! an upper-half-block glyph with the top pixel as foreground and the
//! bottom pixel as background.

use std::fmt::Write;

use super::grid::PixelGrid;

/// The glyph drawn for every cell (U+2580 UPPER HALF BLOCK).
pub const HALF_BLOCK: char = '\u{2580}';

/// Style reset emitted at the end of every line so trailing color state
/// never leaks into the next line or the surrounding terminal content.
pub const RESET: &str = "\x1b[0m";

/// Rough encoded size of one cell, used to pre-size the output buffer.
/// Two truecolor sequences at up to 19 bytes each plus the 3-byte glyph.
const CELL_CAPACITY: usize = 41;

/// Encode a pixel grid into terminal escape sequences.
///
/// Allocating convenience wrapper around [`encode_into`].
pub fn encode(grid: &PixelGrid) -> String {
    let mut out = String::new();
    encode_into(grid, &mut out);
    out
}

/// Encode a pixel grid into an existing buffer.
///
/// Produces `height / 2` lines. Each line holds `width` cells of the form
/// `ESC[38;2;R;G;Bm ESC[48;2;R;G;Bm ▀` (foreground = top pixel,
/// background = bottom pixel), terminated by `ESC[0m` and a newline.
///
/// Pure: identical grids produce byte-identical output. A grid with odd
/// height has its final unpaired row dropped rather than read out of
/// bounds.
pub fn encode_into(grid: &PixelGrid, out: &mut String) {
    out.clear();

    let width = grid.width as usize;
    let line_pairs = (grid.height as usize) / 2;
    out.reserve(line_pairs * (width * CELL_CAPACITY + RESET.len() + 1));

    for pair in 0..line_pairs {
        let top = pair * 2;
        let bottom = top + 1;

        for x in 0..width {
            let (tr, tg, tb) = grid.pixel(x, top);
            let (br, bg, bb) = grid.pixel(x, bottom);
            // Writing to a String cannot fail
            let _ = write!(
                out,
                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}",
                tr, tg, tb, br, bg, bb, HALF_BLOCK
            );
        }

        out.push_str(RESET);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_cell() {
        // One column, one pixel pair
        let grid = PixelGrid::from_raw(vec![255, 0, 0, 0, 0, 255], 1, 2);
        assert_eq!(
            encode(&grid),
            "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m\u{2580}\x1b[0m\n"
        );
    }

    #[test]
    fn test_encode_line_and_cell_counts() {
        let grid = PixelGrid::new(5, 6);
        let out = encode(&grid);
        assert_eq!(out.lines().count(), 3);
        for line in out.lines() {
            assert_eq!(line.matches(HALF_BLOCK).count(), 5);
            assert!(line.ends_with(RESET));
        }
    }

    #[test]
    fn test_encode_deterministic() {
        let grid = PixelGrid::from_raw((0u8..36).collect(), 3, 4);
        assert_eq!(encode(&grid), encode(&grid));
    }

    #[test]
    fn test_encode_odd_height_drops_last_row() {
        // Height 5: two pairs encoded, the fifth row ignored
        let grid = PixelGrid::new(4, 5);
        let out = encode(&grid);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_encode_into_clears_previous_contents() {
        let grid = PixelGrid::new(1, 2);
        let mut buf = String::from("stale");
        encode_into(&grid, &mut buf);
        assert!(buf.starts_with("\x1b[38;2;"));
    }
}
