//! Text output for character grids.

use std::io::Write;

use super::error::AsciiError;
use super::grid::CharGrid;

/// How many times each glyph is written horizontally.
///
/// Terminal cells are roughly three times taller than an image pixel is
/// wide once printed, so tripling each glyph keeps the picture from
/// looking squashed.
pub const DEFAULT_REPEAT: usize = 3;

/// Render a character grid into one string per row.
///
/// Rows are produced top to bottom; within a row each glyph appears
/// `repeat` times in a row, left to right.
pub fn render_lines(grid: &CharGrid, repeat: usize) -> Vec<String> {
    grid.rows()
        .map(|row| {
            let mut line = String::with_capacity(row.len() * repeat);
            for &ch in row {
                for _ in 0..repeat {
                    line.push(ch);
                }
            }
            line
        })
        .collect()
}

/// Write a character grid to `out`.
///
/// Every row is preceded by a newline, so the output starts with a line
/// break and has no trailing one.
///
/// # Errors
/// [`AsciiError::InvalidRepeat`] if `repeat` is zero, or
/// [`AsciiError::Io`] if writing fails.
pub fn write_ascii<W: Write>(grid: &CharGrid, repeat: usize, out: &mut W) -> Result<(), AsciiError> {
    if repeat == 0 {
        return Err(AsciiError::InvalidRepeat(repeat));
    }

    for line in render_lines(grid, repeat) {
        writeln!(out)?;
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: u32, height: u32, chars: &str) -> CharGrid {
        CharGrid {
            width,
            height,
            chars: chars.chars().collect(),
        }
    }

    #[test]
    fn test_render_lines_triples_glyphs() {
        let lines = render_lines(&grid(2, 1, "A@"), DEFAULT_REPEAT);
        assert_eq!(lines, vec!["AAA@@@".to_string()]);
    }

    #[test]
    fn test_render_lines_row_order() {
        let lines = render_lines(&grid(2, 2, "abcd"), 1);
        assert_eq!(lines, vec!["ab".to_string(), "cd".to_string()]);
    }

    #[test]
    fn test_write_ascii_leading_newlines() {
        let mut out = Vec::new();
        write_ascii(&grid(1, 2, "xy"), 3, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nxxx\nyyy");
    }

    #[test]
    fn test_write_ascii_zero_repeat_rejected() {
        let mut out = Vec::new();
        let err = write_ascii(&grid(1, 1, "x"), 0, &mut out).unwrap_err();
        assert!(matches!(err, AsciiError::InvalidRepeat(0)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_multibyte_glyphs() {
        let lines = render_lines(&grid(2, 1, "░█"), 2);
        assert_eq!(lines, vec!["░░██".to_string()]);
    }
}
