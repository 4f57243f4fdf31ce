//! Loading and writing real image files.
//!
//! Sources of any color layout are reduced to a single intensity channel with
//! ITU-R BT.601 luma weights, and oversized images are downsampled so the
//! text codec and the downstream filtering stage stay tractable.

use std::path::Path;

use rgb::{FromSlice, RGB8};

use crate::error::{Error, Result};
use crate::grid::PixelGrid;

/// Ceiling on `rows * cols` for a loaded grid; larger sources are downsampled.
pub const MAX_SAMPLES: usize = 262_144;

/// Decode an image file into an intensity grid.
///
/// Multi-channel sources are converted with BT.601 luma weights. If the pixel
/// count exceeds [`MAX_SAMPLES`] the grid is downsampled uniformly in both
/// dimensions, preserving aspect ratio.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] when the file is missing or cannot be
/// decoded.
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| Error::ImageLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let samples: Vec<u8> = rgb.as_raw().as_rgb().iter().map(|p| bt601_luma(*p)).collect();
    let grid = PixelGrid::from_samples(samples, height as usize, width as usize)?;
    Ok(grid.downsample_to(MAX_SAMPLES))
}

/// Write a grid as a grayscale image; the format is chosen by the output
/// extension (`.png`, `.jpg`, ...).
///
/// # Errors
///
/// Returns [`Error::ImageWrite`] when encoding fails or the extension is
/// unsupported.
pub fn write_image(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let buffer = image::GrayImage::from_raw(
        grid.cols() as u32,
        grid.rows() as u32,
        grid.samples().to_vec(),
    )
    .ok_or_else(|| Error::ImageWrite {
        path: path.to_path_buf(),
        reason: "grid does not fit an image buffer".to_string(),
    })?;
    buffer.save(path).map_err(|e| Error::ImageWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// BT.601 intensity of an RGB pixel, rounded to the nearest integer.
fn bt601_luma(p: RGB8) -> u8 {
    let y = 0.299 * f32::from(p.r) + 0.587 * f32::from(p.g) + 0.114 * f32::from(p.b);
    y.round() as u8
}
