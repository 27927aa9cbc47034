//! Image to ASCII art conversion.
//!
//! This module provides the full pipeline for turning a raster image into
//! text:
//!
//! 1. **Loading** - decode an image file into a [`PixelGrid`]
//! 2. **Scaling** - optional bilinear zoom inside a fixed canvas
//! 3. **Brightness** - flat RGB average per pixel
//! 4. **Glyph mapping** - quantize brightness onto a [`GlyphRamp`]
//! 5. **Rendering** - write rows with each glyph repeated horizontally
//!
//! # Character Sets
//!
//! Ramps are passed to the mapper as values. Presets are available via
//! [`CharSet`]:
//! - `Reference` - 65-glyph ramp (default)
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod brightness;
mod charset;
mod error;
mod grid;
mod loader;
mod mapping;
mod render;
mod scale;

pub use brightness::{compute_brightness, pixel_brightness};
pub use charset::{
    CharSet, GlyphRamp, BLOCKS_CHARSET, MAX_BRIGHTNESS, MINIMAL_CHARSET, REFERENCE_RAMP,
    STANDARD_CHARSET,
};
pub use error::AsciiError;
pub use grid::{BrightnessGrid, CharGrid, PixelGrid, Rgb};
pub use loader::{from_dynamic_image, load_image};
pub use mapping::map_brightness;
pub use render::{render_lines, write_ascii, DEFAULT_REPEAT};
pub use scale::{scale, ScaleFactor};
