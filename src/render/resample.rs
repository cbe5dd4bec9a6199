//! Area-averaging resampler and channel reordering.

use crate::camera::{Frame, FrameFormat};

use super::grid::PixelGrid;

/// Resample a frame to the given pixel grid dimensions.
///
/// Allocating convenience wrapper around [`resample_into`].
pub fn resample(frame: &Frame, width: u16, height: u16) -> PixelGrid {
    let mut grid = PixelGrid::new(width, height);
    resample_into(frame, width, height, &mut grid);
    grid
}

/// Resample a frame into an existing grid to avoid allocation.
///
/// Each destination pixel is the average of all source pixels falling
/// within its footprint (area averaging). When the source is smaller
/// than the destination the footprint may cover a single pixel, which
/// degenerates to nearest-neighbor sampling. Channel order is preserved
/// positionally; apply [`reorder_to_rgb`] afterwards for non-RGB frames.
///
/// An empty or zero-sized source leaves the grid black at the requested
/// dimensions, so the encoder downstream always sees a well-formed grid.
pub fn resample_into(frame: &Frame, width: u16, height: u16, grid: &mut PixelGrid) {
    grid.reset(width, height);

    let img_width = frame.width;
    let img_height = frame.height;
    if img_width == 0 || img_height == 0 || frame.data.is_empty() {
        return;
    }

    // Footprint of one destination pixel in source pixels
    let cell_w = img_width as f32 / width as f32;
    let cell_h = img_height as f32 / height as f32;

    for cy in 0..height {
        for cx in 0..width {
            let start_x = (cx as f32 * cell_w) as u32;
            let start_y = (cy as f32 * cell_h) as u32;
            // Cover at least one source pixel even when upscaling, and
            // never run past the source edge on float rounding
            let end_x = (((cx + 1) as f32 * cell_w) as u32).clamp(start_x + 1, img_width);
            let end_y = (((cy + 1) as f32 * cell_h) as u32).clamp(start_y + 1, img_height);

            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = ((py * img_width + px) * 3) as usize;
                    if idx + 2 < frame.data.len() {
                        sum[0] += frame.data[idx] as u32;
                        sum[1] += frame.data[idx + 1] as u32;
                        sum[2] += frame.data[idx + 2] as u32;
                        count += 1;
                    }
                }
            }

            if count > 0 {
                let out = ((cy as usize) * (width as usize) + cx as usize) * 3;
                grid.data[out] = (sum[0] / count) as u8;
                grid.data[out + 1] = (sum[1] / count) as u8;
                grid.data[out + 2] = (sum[2] / count) as u8;
            }
        }
    }
}

/// Reorder a grid's channels to RGB.
///
/// Pure and total: BGR input gets its first and third channels swapped in
/// place, RGB input is untouched.
pub fn reorder_to_rgb(grid: &mut PixelGrid, order: FrameFormat) {
    if order == FrameFormat::Bgr {
        for px in grid.data.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn frame(data: Vec<u8>, width: u32, height: u32, format: FrameFormat) -> Frame {
        Frame {
            data,
            width,
            height,
            format,
            timestamp: Instant::now(),
        }
    }

    #[test]
    fn test_resample_identity() {
        // Same dimensions in and out: pixels pass through unchanged
        let src = frame(vec![10, 20, 30, 40, 50, 60], 2, 1, FrameFormat::Rgb);
        let grid = resample(&src, 2, 1);
        assert_eq!(grid.data, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_resample_averages_footprint() {
        // 4x2 source down to 2x1: each cell averages a 2x2 block
        let src = frame(
            vec![
                0, 0, 0, 100, 0, 0, 200, 0, 0, 0, 0, 0, // row 0
                100, 0, 0, 200, 0, 0, 0, 0, 0, 200, 0, 0, // row 1
            ],
            4,
            2,
            FrameFormat::Rgb,
        );
        let grid = resample(&src, 2, 1);
        // Left cell: (0 + 100 + 100 + 200) / 4 = 100
        // Right cell: (200 + 0 + 0 + 200) / 4 = 100
        assert_eq!(grid.pixel(0, 0), (100, 0, 0));
        assert_eq!(grid.pixel(1, 0), (100, 0, 0));
    }

    #[test]
    fn test_resample_upscale_replicates() {
        // 1x1 source up to 2x2: every destination pixel samples the pixel
        let src = frame(vec![7, 8, 9], 1, 1, FrameFormat::Rgb);
        let grid = resample(&src, 2, 2);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(grid.pixel(x, y), (7, 8, 9));
            }
        }
    }

    #[test]
    fn test_resample_empty_source_yields_black_grid() {
        let src = frame(Vec::new(), 0, 0, FrameFormat::Rgb);
        let grid = resample(&src, 3, 2);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 2);
        assert!(grid.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_reorder_to_rgb_swaps_bgr() {
        let mut grid = PixelGrid::from_raw(vec![1, 2, 3, 4, 5, 6], 2, 1);
        reorder_to_rgb(&mut grid, FrameFormat::Bgr);
        assert_eq!(grid.data, vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_reorder_to_rgb_keeps_rgb() {
        let mut grid = PixelGrid::from_raw(vec![1, 2, 3], 1, 1);
        reorder_to_rgb(&mut grid, FrameFormat::Rgb);
        assert_eq!(grid.data, vec![1, 2, 3]);
    }
}
