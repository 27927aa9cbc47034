//! RGB to brightness conversion using a flat channel average.

use super::grid::{BrightnessGrid, PixelGrid, Rgb};

/// Brightness of a single pixel: the unweighted mean of R, G and B.
///
/// No gamma correction or perceptual weighting is applied, so pure red,
/// green and blue all have the same brightness (85.0).
#[inline]
pub fn pixel_brightness(rgb: Rgb) -> f64 {
    (rgb.r as u32 + rgb.g as u32 + rgb.b as u32) as f64 / 3.0
}

/// Compute the brightness of every pixel in `grid`.
///
/// # Returns
/// A [`BrightnessGrid`] with the same dimensions as `grid`, every value in
/// `[0, 255]`.
pub fn compute_brightness(grid: &PixelGrid) -> BrightnessGrid {
    let values = grid.pixels().iter().map(|&p| pixel_brightness(p)).collect();

    BrightnessGrid {
        width: grid.width(),
        height: grid.height(),
        values,
    }
}
