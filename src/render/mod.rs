//! Frame-to-terminal rendering pipeline.
//!
//! A captured frame becomes terminal output in three steps:
//! 1. [`grid::target_dimensions`] derives the pixel grid size from the
//!    terminal's character grid (two pixels per character row).
//! 2. [`resample`] area-averages the frame down (or up) to that grid and
//!    reorders channels to RGB.
//! 3. [`encoder`] turns each vertical pixel pair into one truecolor
//!    half-block cell.

pub mod encoder;
pub mod grid;
pub mod resample;

pub use encoder::{encode, encode_into};
pub use grid::{target_dimensions, PixelGrid};
pub use resample::{reorder_to_rgb, resample, resample_into};
