//! Pixel grid type and the terminal-to-pixel dimension law.

/// A dense RGB pixel grid sized for the terminal.
///
/// Invariant: `data.len() == width * height * 3`, row-major, no ragged
/// rows. Produced by the resampler, consumed by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// RGB bytes, three per pixel
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl PixelGrid {
    /// Create a black grid of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize) * 3;
        Self {
            data: vec![0; size],
            width,
            height,
        }
    }

    /// Create a grid from raw RGB bytes.
    ///
    /// # Panics
    /// Panics if `data.len()` doesn't match `width * height * 3`.
    pub fn from_raw(data: Vec<u8>, width: u16, height: u16) -> Self {
        assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * 3,
            "pixel data length must match dimensions"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Resize in place, zeroing the contents.
    pub fn reset(&mut self, width: u16, height: u16) {
        let size = (width as usize) * (height as usize) * 3;
        self.data.clear();
        self.data.resize(size, 0);
        self.width = width;
        self.height = height;
    }

    /// Read the pixel at (x, y) as an (r, g, b) triple.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let i = (y * self.width as usize + x) * 3;
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }
}

/// Derive the target pixel grid dimensions from the terminal's character
/// grid.
///
/// Width is one pixel per column. One terminal row is reserved so the
/// final newline never scrolls the screen, and every remaining row shows
/// two pixels (top half and bottom half of the cell), so the pixel height
/// is `2 * (rows - 1)` with a floor of 2. The height is therefore always
/// even.
pub fn target_dimensions(columns: u16, rows: u16) -> (u16, u16) {
    let width = columns.max(1);
    let height = 2 * rows.saturating_sub(1).max(1);
    (width, height)
}
