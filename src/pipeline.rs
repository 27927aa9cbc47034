//! Conversion pipeline wiring the ASCII stages together.
//!
//! Loader -> [Scaler] -> Brightness -> Glyph mapping -> Renderer. Each
//! stage runs to completion before the next; a failure aborts the whole
//! conversion and nothing is written.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::ascii::{
    compute_brightness, load_image, map_brightness, scale, write_ascii, AsciiError, CharGrid,
    GlyphRamp, PixelGrid, ScaleFactor, DEFAULT_REPEAT,
};

/// Options controlling a single conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Scale applied before conversion; `None` skips the scaler
    pub scale: Option<ScaleFactor>,
    /// Glyph ramp used for mapping
    pub ramp: GlyphRamp,
    /// Horizontal repetitions of each glyph
    pub repeat: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            scale: None,
            ramp: GlyphRamp::reference(),
            repeat: DEFAULT_REPEAT,
        }
    }
}

/// Convert an already-loaded pixel grid into a character grid.
pub fn convert(pixels: &PixelGrid, options: &ConvertOptions) -> CharGrid {
    let start = Instant::now();

    let scaled;
    let pixels = match options.scale {
        Some(factor) => {
            scaled = scale(pixels, factor);
            &scaled
        }
        None => pixels,
    };

    let brightness = compute_brightness(pixels);
    let chars = map_brightness(&brightness, &options.ramp);

    log::debug!(
        "Converted {}x{} grid with {}-glyph ramp in {:?}",
        chars.width(),
        chars.height(),
        options.ramp.len(),
        start.elapsed()
    );
    chars
}

/// Load `path`, convert it, and write the rendered text to `out`.
///
/// # Errors
/// Any [`AsciiError`] from loading, option validation, or writing. Nothing
/// is written to `out` unless loading and conversion succeeded.
pub fn convert_file<W: Write>(
    path: &Path,
    options: &ConvertOptions,
    out: &mut W,
) -> Result<(), AsciiError> {
    if options.repeat == 0 {
        return Err(AsciiError::InvalidRepeat(options.repeat));
    }

    let pixels = load_image(path)?;
    let chars = convert(&pixels, options);
    write_ascii(&chars, options.repeat, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::Rgb;

    #[test]
    fn test_convert_black_and_white() {
        let pixels = PixelGrid::new(
            2,
            1,
            vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)],
        )
        .unwrap();
        let options = ConvertOptions {
            ramp: GlyphRamp::new("AB#@".chars()).unwrap(),
            ..Default::default()
        };

        let chars = convert(&pixels, &options);
        assert_eq!(chars.get(0, 0), 'A');
        assert_eq!(chars.get(1, 0), '@');
    }

    #[test]
    fn test_convert_with_scale_keeps_dimensions() {
        let pixels = PixelGrid::filled(8, 5, Rgb::new(40, 80, 120));
        let options = ConvertOptions {
            scale: Some(ScaleFactor::new(0.3).unwrap()),
            ..Default::default()
        };

        let chars = convert(&pixels, &options);
        assert_eq!((chars.width(), chars.height()), (8, 5));
    }

    #[test]
    fn test_convert_file_missing_writes_nothing() {
        let mut out = Vec::new();
        let err = convert_file(
            Path::new("/no/such/image.png"),
            &ConvertOptions::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, AsciiError::FileNotFound { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_convert_file_zero_repeat_rejected() {
        let options = ConvertOptions {
            repeat: 0,
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = convert_file(Path::new("whatever.png"), &options, &mut out).unwrap_err();
        assert!(matches!(err, AsciiError::InvalidRepeat(0)));
    }
}
