//! CLI enum types for character set options.

use clap::ValueEnum;

use crate::ascii::CharSet;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Reference,
    Standard,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Reference => CharSet::Reference,
            CharacterSet::Standard => CharSet::Standard,
            CharacterSet::Blocks => CharSet::Blocks,
            CharacterSet::Minimal => CharSet::Minimal,
        }
    }
}
