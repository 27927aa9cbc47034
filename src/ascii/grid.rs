//! Grid types flowing through the conversion pipeline.

/// A single decoded RGB sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Blank pixel used for canvas areas with no source content.
    pub const BLANK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A decoded image as RGB pixels.
///
/// Pixels are stored in row-major order, so `(x, y)` lives at
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build a grid from row-major pixels.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from packed RGB bytes (3 bytes per pixel).
    pub fn from_rgb_bytes(width: u32, height: u32, data: &[u8]) -> Option<Self> {
        if data.len() != width as usize * height as usize * 3 {
            return None;
        }
        let pixels = data
            .chunks_exact(3)
            .map(|rgb| Rgb::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// A grid of the given size filled with one colour.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

/// Per-pixel brightness values in `[0, 255]`, same layout as [`PixelGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct BrightnessGrid {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) values: Vec<f64>,
}

impl BrightnessGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Glyphs chosen for each pixel, same layout as [`PixelGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) chars: Vec<char>,
}

impl CharGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> char {
        self.chars[y as usize * self.width as usize + x as usize]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.chars[y * width..(y + 1) * width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_length() {
        assert!(PixelGrid::new(2, 2, vec![Rgb::BLANK; 3]).is_none());
        assert!(PixelGrid::new(2, 2, vec![Rgb::BLANK; 4]).is_some());
    }

    #[test]
    fn test_from_rgb_bytes_row_major() {
        let grid = PixelGrid::from_rgb_bytes(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get(0, 0), Rgb::new(1, 2, 3));
        assert_eq!(grid.get(1, 0), Rgb::new(4, 5, 6));
    }

    #[test]
    fn test_from_rgb_bytes_rejects_partial_pixel() {
        assert!(PixelGrid::from_rgb_bytes(1, 1, &[1, 2]).is_none());
    }

    #[test]
    fn test_char_grid_rows() {
        let grid = CharGrid {
            width: 2,
            height: 2,
            chars: vec!['a', 'b', 'c', 'd'],
        };
        let rows: Vec<&[char]> = grid.rows().collect();
        assert_eq!(rows, vec![&['a', 'b'][..], &['c', 'd'][..]]);
    }

    #[test]
    fn test_char_grid_rows_zero_width() {
        let grid = CharGrid {
            width: 0,
            height: 3,
            chars: vec![],
        };
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.is_empty()));
    }
}
