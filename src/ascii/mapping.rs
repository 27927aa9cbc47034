//! Brightness to glyph mapping.

use super::charset::GlyphRamp;
use super::grid::{BrightnessGrid, CharGrid};

impl GlyphRamp {
    /// Ramp index for a brightness value.
    ///
    /// Computes `round(len * b / max_brightness)` with ties rounded away
    /// from zero, then clamps to the last glyph. Brightness outside
    /// `[0, max_brightness]` (or NaN) is clamped first, so the result is
    /// always a valid index.
    pub fn index_for(&self, brightness: f64) -> usize {
        let levels = self.len();
        let max = self.max_brightness();
        let b = if brightness.is_nan() {
            0.0
        } else {
            brightness.clamp(0.0, max)
        };

        let idx = (levels as f64 * (b / max)).round() as usize;
        // b == max lands exactly on `levels`
        idx.min(levels - 1)
    }

    /// Glyph for a brightness value.
    #[inline]
    pub fn glyph_for(&self, brightness: f64) -> char {
        self.glyphs()[self.index_for(brightness)]
    }
}

/// Map every brightness value in `brightness` to a glyph from `ramp`.
///
/// Lower brightness maps to earlier glyphs, higher brightness to later
/// ones.
///
/// # Returns
/// A [`CharGrid`] with the same dimensions as `brightness`.
///
/// # Example
/// ```ignore
/// // Black and white pixels with a 4-glyph ramp
/// let chars = map_brightness(&brightness, &GlyphRamp::new("AB#@".chars())?);
/// // chars.get(0, 0) == 'A', chars.get(1, 0) == '@'
/// ```
pub fn map_brightness(brightness: &BrightnessGrid, ramp: &GlyphRamp) -> CharGrid {
    let chars = brightness
        .values()
        .iter()
        .map(|&b| ramp.glyph_for(b))
        .collect();

    CharGrid {
        width: brightness.width(),
        height: brightness.height(),
        chars,
    }
}
