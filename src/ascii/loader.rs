//! Decoding image files into pixel grids.

use std::path::Path;

use super::error::AsciiError;
use super::grid::PixelGrid;

/// Load an image file into a [`PixelGrid`].
///
/// Any format enabled on the `image` crate is accepted; animated formats
/// yield their first frame. Alpha is discarded while the colour channels
/// are kept unchanged.
///
/// # Errors
/// * [`AsciiError::FileNotFound`] if `path` does not exist
/// * [`AsciiError::Decode`] if the file exists but is not a decodable image
pub fn load_image(path: &Path) -> Result<PixelGrid, AsciiError> {
    if !path.exists() {
        return Err(AsciiError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::ImageReader::open(path)
        .map_err(|e| AsciiError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .with_guessed_format()
        .map_err(|e| AsciiError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| AsciiError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

    let grid = from_dynamic_image(&decoded);
    log::info!(
        "Successfully loaded {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// Convert an already-decoded image into a [`PixelGrid`].
pub fn from_dynamic_image(img: &image::DynamicImage) -> PixelGrid {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    // to_rgb8 always yields width * height * 3 bytes
    PixelGrid::from_rgb_bytes(width, height, rgb.as_raw())
        .unwrap_or_else(|| PixelGrid::filled(width, height, Default::default()))
}
