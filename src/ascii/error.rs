//! Error types for image-to-ASCII conversion.

use std::path::PathBuf;

/// Errors that can occur while converting an image to ASCII art.
///
/// Per-pixel stages cannot fail; every variant here comes from loading
/// the input, validating options, or writing the output.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// The supplied path does not exist
    #[error("No image found at '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// The path exists but could not be decoded as an image
    #[error("Failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Scale factor was zero, negative, or not finite
    #[error("Invalid scale factor {0}: must be a positive, finite number")]
    InvalidScaleFactor(f64),

    /// A glyph ramp needs at least one character
    #[error("Glyph ramp must contain at least one character")]
    EmptyRamp,

    /// Glyph repetition count must be at least 1
    #[error("Invalid repeat count {0}: must be at least 1")]
    InvalidRepeat(usize),

    /// Failed to write the rendered output
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
