//! Frame conversion and transformation utilities.

use nokhwa::pixel_format::RgbFormat;
use std::time::Instant;

use super::types::{Frame, FrameFormat};

/// Decode a nokhwa buffer into an RGB [`Frame`].
///
/// Handles the camera's native formats (MJPEG, YUYV, NV12, ...) through
/// nokhwa's built-in decoder. Returns `None` if decoding fails, in which
/// case the caller should skip the frame and read the next one.
pub fn decode_frame(buffer: &nokhwa::Buffer) -> Option<Frame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let resolution = buffer.resolution();

    Some(Frame {
        data: decoded.into_raw(),
        width: resolution.width(),
        height: resolution.height(),
        format: FrameFormat::Rgb,
        timestamp: Instant::now(),
    })
}

/// Mirror a frame horizontally (flip left-right) for selfie mode.
pub fn mirror_horizontal(frame: &mut Frame) {
    let width = frame.width as usize;
    let height = frame.height as usize;
    let bpp = frame.bytes_per_pixel();

    for y in 0..height {
        let row_start = y * width * bpp;
        let row = &mut frame.data[row_start..row_start + width * bpp];

        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_frame(data: Vec<u8>, width: u32, height: u32) -> Frame {
        Frame {
            data,
            width,
            height,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        }
    }

    #[test]
    fn test_mirror_horizontal_2x1() {
        // Pixel A (1,2,3) and pixel B (4,5,6) swap places
        let mut frame = rgb_frame(vec![1, 2, 3, 4, 5, 6], 2, 1);
        mirror_horizontal(&mut frame);
        assert_eq!(frame.data, vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_mirror_horizontal_3x2() {
        // Row 0: [A, B, C], Row 1: [D, E, F]
        let mut frame = rgb_frame(
            vec![
                1, 1, 1, 2, 2, 2, 3, 3, 3, // Row 0
                4, 4, 4, 5, 5, 5, 6, 6, 6, // Row 1
            ],
            3,
            2,
        );
        mirror_horizontal(&mut frame);
        // Middle pixel of each row stays put
        assert_eq!(
            frame.data,
            vec![
                3, 3, 3, 2, 2, 2, 1, 1, 1, // Row 0: C, B, A
                6, 6, 6, 5, 5, 5, 4, 4, 4, // Row 1: F, E, D
            ]
        );
    }

    #[test]
    fn test_mirror_horizontal_single_pixel() {
        let mut frame = rgb_frame(vec![1, 2, 3], 1, 1);
        mirror_horizontal(&mut frame);
        assert_eq!(frame.data, vec![1, 2, 3]);
    }
}
