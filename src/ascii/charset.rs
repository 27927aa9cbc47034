//! Glyph ramps and built-in character set presets.

use super::error::AsciiError;

/// Reference ramp, ordered from darkest-appearing to brightest-appearing.
///
/// Output compatibility depends on this exact sequence.
pub const REFERENCE_RAMP: &str =
    "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Brightness denominator used when quantizing.
pub const MAX_BRIGHTNESS: f64 = 255.0;

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels).
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// An ordered glyph ramp together with the brightness ceiling it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    max_brightness: f64,
}

impl GlyphRamp {
    /// Build a ramp from characters ordered darkest to brightest.
    ///
    /// # Errors
    /// [`AsciiError::EmptyRamp`] if `glyphs` yields no characters.
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self, AsciiError> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();
        if glyphs.is_empty() {
            return Err(AsciiError::EmptyRamp);
        }
        Ok(Self {
            glyphs,
            max_brightness: MAX_BRIGHTNESS,
        })
    }

    /// The 65-glyph reference ramp.
    pub fn reference() -> Self {
        Self {
            glyphs: REFERENCE_RAMP.chars().collect(),
            max_brightness: MAX_BRIGHTNESS,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; a ramp holds at least one glyph.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn max_brightness(&self) -> f64 {
        self.max_brightness
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::reference()
    }
}

/// Built-in character set presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// The 65-glyph reference ramp
    #[default]
    Reference,
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Block character set (5 levels) using Unicode blocks
    Blocks,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
}

impl CharSet {
    /// Every preset, in cycling order.
    pub const ALL: [CharSet; 4] = [
        CharSet::Reference,
        CharSet::Standard,
        CharSet::Blocks,
        CharSet::Minimal,
    ];

    /// Build the glyph ramp for this preset.
    pub fn ramp(&self) -> GlyphRamp {
        match self {
            CharSet::Reference => GlyphRamp::reference(),
            CharSet::Standard => preset(STANDARD_CHARSET),
            CharSet::Blocks => preset(BLOCKS_CHARSET),
            CharSet::Minimal => preset(MINIMAL_CHARSET),
        }
    }

    /// Cycle to the next character set.
    ///
    /// Order: Reference -> Standard -> Blocks -> Minimal -> Reference
    pub fn next(&self) -> Self {
        match self {
            CharSet::Reference => CharSet::Standard,
            CharSet::Standard => CharSet::Blocks,
            CharSet::Blocks => CharSet::Minimal,
            CharSet::Minimal => CharSet::Reference,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Reference => "reference",
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Look up a preset by its [`name`](Self::name), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

fn preset(chars: &'static [char]) -> GlyphRamp {
    GlyphRamp {
        glyphs: chars.to_vec(),
        max_brightness: MAX_BRIGHTNESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ramp_length() {
        assert_eq!(REFERENCE_RAMP.chars().count(), 65);
        assert_eq!(GlyphRamp::reference().len(), 65);
    }

    #[test]
    fn test_reference_ramp_endpoints() {
        let ramp = GlyphRamp::reference();
        assert_eq!(ramp.glyphs()[0], '`');
        assert_eq!(ramp.glyphs()[64], '$');
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(matches!(GlyphRamp::new("".chars()), Err(AsciiError::EmptyRamp)));
    }

    #[test]
    fn test_custom_ramp() {
        let ramp = GlyphRamp::new("AB#@".chars()).unwrap();
        assert_eq!(ramp.glyphs(), &['A', 'B', '#', '@']);
        assert_eq!(ramp.max_brightness(), 255.0);
    }

    #[test]
    fn test_charset_cycle_returns_to_start() {
        let mut cs = CharSet::default();
        for _ in 0..CharSet::ALL.len() {
            cs = cs.next();
        }
        assert_eq!(cs, CharSet::Reference);
    }

    #[test]
    fn test_charset_from_name() {
        assert_eq!(CharSet::from_name("blocks"), Some(CharSet::Blocks));
        assert_eq!(CharSet::from_name("MINIMAL"), Some(CharSet::Minimal));
        assert_eq!(CharSet::from_name("braille"), None);
    }

    #[test]
    fn test_preset_ramp_lengths() {
        assert_eq!(CharSet::Standard.ramp().len(), 10);
        assert_eq!(CharSet::Blocks.ramp().len(), 5);
        assert_eq!(CharSet::Minimal.ramp().len(), 4);
    }
}
