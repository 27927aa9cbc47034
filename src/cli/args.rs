//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::ascii::ScaleFactor;

/// Parse and validate a scale factor (positive, finite)
fn parse_scale(s: &str) -> Result<ScaleFactor, String> {
    s.parse()
}

/// Parse and validate glyph repetition (at least 1)
fn parse_repeat(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid count", s))?;
    if n == 0 {
        return Err("Repeat count must be at least 1".to_string());
    }
    Ok(n)
}

/// Convert an image into ASCII art using per-pixel brightness
#[derive(Parser, Debug)]
#[command(name = "img2ascii")]
#[command(version, about = "Convert an image into ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Print a photo as ASCII art
    img2ascii photo.png

    # Zoom the content to half size inside the original canvas
    img2ascii photo.png --scale 0.5

    # Use Unicode blocks, one glyph per pixel
    img2ascii photo.png --charset blocks --repeat 1")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to convert
    pub image: Option<PathBuf>,

    /// Scale the image content by this factor before converting
    #[arg(short, long, value_parser = parse_scale)]
    pub scale: Option<ScaleFactor>,

    /// Character set preset
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom glyph ramp ordered darkest to brightest (overrides --charset)
    #[arg(long)]
    pub ramp: Option<String>,

    /// Times each glyph is repeated horizontally
    #[arg(long, value_parser = parse_repeat)]
    pub repeat: Option<usize>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in character sets
    Charsets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
