//! Fixed-canvas bilinear scaling.
//!
//! Scaling zooms the image content about the top-left corner while the
//! canvas keeps its original size. Factors above 1 crop the right and
//! bottom of the image; factors below 1 leave a blank margin there.

use std::fmt;
use std::str::FromStr;

use super::error::AsciiError;
use super::grid::{PixelGrid, Rgb};

/// A validated scale factor: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Identity scale.
    pub const ONE: ScaleFactor = ScaleFactor(1.0);

    pub fn new(factor: f64) -> Result<Self, AsciiError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(AsciiError::InvalidScaleFactor(factor))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for ScaleFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let factor: f64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid number", s))?;
        ScaleFactor::new(factor).map_err(|e| e.to_string())
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scale the content of `grid` by `factor` within an unchanged canvas.
///
/// Each destination pixel samples the source at its inverse-mapped centre
/// using bilinear interpolation. Neighbour lookups clamp to the grid edge.
/// Destination pixels whose centre maps outside the source are blank.
///
/// # Returns
/// A new grid with the same width and height as `grid`.
pub fn scale(grid: &PixelGrid, factor: ScaleFactor) -> PixelGrid {
    let width = grid.width();
    let height = grid.height();
    let s = factor.get();

    if grid.is_empty() || s == 1.0 {
        return grid.clone();
    }

    let mut pixels = Vec::with_capacity(grid.pixels().len());
    for y in 0..height {
        for x in 0..width {
            // Destination pixel centre mapped back into source space
            let cx = (x as f64 + 0.5) / s;
            let cy = (y as f64 + 0.5) / s;

            if cx < 0.0 || cy < 0.0 || cx >= width as f64 || cy >= height as f64 {
                pixels.push(Rgb::BLANK);
                continue;
            }

            pixels.push(sample_bilinear(grid, cx - 0.5, cy - 0.5));
        }
    }

    log::debug!("Scaled {}x{} canvas by {}", width, height, s);

    PixelGrid::new(width, height, pixels).unwrap_or_else(|| grid.clone())
}

/// Bilinear sample at continuous pixel coordinates (pixel centres at integers).
fn sample_bilinear(grid: &PixelGrid, sx: f64, sy: f64) -> Rgb {
    let max_x = grid.width() as i64 - 1;
    let max_y = grid.height() as i64 - 1;

    let x0f = sx.floor();
    let y0f = sy.floor();
    let fx = sx - x0f;
    let fy = sy - y0f;

    let x0 = (x0f as i64).clamp(0, max_x) as u32;
    let x1 = (x0f as i64 + 1).clamp(0, max_x) as u32;
    let y0 = (y0f as i64).clamp(0, max_y) as u32;
    let y1 = (y0f as i64 + 1).clamp(0, max_y) as u32;

    let p00 = grid.get(x0, y0);
    let p10 = grid.get(x1, y0);
    let p01 = grid.get(x0, y1);
    let p11 = grid.get(x1, y1);

    let lerp = |c00: u8, c10: u8, c01: u8, c11: u8| -> u8 {
        let top = c00 as f64 * (1.0 - fx) + c10 as f64 * fx;
        let bottom = c01 as f64 * (1.0 - fx) + c11 as f64 * fx;
        let value = top * (1.0 - fy) + bottom * fy;
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: lerp(p00.r, p10.r, p01.r, p11.r),
        g: lerp(p00.g, p10.g, p01.g, p11.g),
        b: lerp(p00.b, p10.b, p01.b, p11.b),
    }
}
