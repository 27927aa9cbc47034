//! Subcommand handlers and option resolution.

use std::path::Path;

use super::args::{Args, ConfigAction};
use crate::ascii::{AsciiError, CharSet, GlyphRamp, ScaleFactor, DEFAULT_REPEAT};
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use crate::pipeline::ConvertOptions;

/// Merge settings into conversion options: CLI args > config file > built-in defaults.
///
/// # Errors
/// Returns an [`AsciiError`] when the config file names an unknown charset,
/// an empty ramp, a zero repeat count, or an invalid scale factor.
pub fn resolve_options(args: &Args, cfg: &Config) -> Result<ConvertOptions, AsciiError> {
    // Ramp: --ramp > --charset > config ramp > config charset > reference
    let ramp = if let Some(ref ramp) = args.ramp {
        GlyphRamp::new(ramp.chars())?
    } else if let Some(charset) = args.charset {
        CharSet::from(charset).ramp()
    } else if let Some(ref ramp) = cfg.render.ramp {
        GlyphRamp::new(ramp.chars())?
    } else if let Some(ref name) = cfg.render.charset {
        match CharSet::from_name(name) {
            Some(charset) => charset.ramp(),
            None => {
                log::warn!("Unknown charset '{}' in config, using reference", name);
                GlyphRamp::reference()
            }
        }
    } else {
        GlyphRamp::reference()
    };

    let repeat = args
        .repeat
        .or(cfg.render.repeat)
        .unwrap_or(DEFAULT_REPEAT);
    if repeat == 0 {
        return Err(AsciiError::InvalidRepeat(repeat));
    }

    let scale = match args.scale {
        Some(factor) => Some(factor),
        None => cfg.scale.factor.map(ScaleFactor::new).transpose()?,
    };

    Ok(ConvertOptions {
        scale,
        ramp,
        repeat,
    })
}

/// List built-in character sets and print them to stdout.
pub fn list_charsets() {
    println!("Available character sets:");
    for charset in CharSet::ALL {
        let glyphs: String = charset.ramp().glyphs().iter().collect();
        println!("  {:<10} {:>2} levels  {}", charset.name(), glyphs.chars().count(), glyphs);
    }
    println!();
    println!("Use --charset <name> to select one, or --ramp <chars> for a custom ramp.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) -> Result<(), String> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let cfg = if path.exists() {
                Config::load_from(&path).map_err(|e| e.to_string())?
            } else {
                Config::default()
            };
            let options = resolve_options(&no_args(), &cfg).map_err(|e| e.to_string())?;
            let ramp: String = options.ramp.glyphs().iter().collect();

            println!("Current configuration:");
            println!("  Ramp: {} ({} glyphs)", ramp, options.ramp.len());
            println!("  Repeat: {}", options.repeat);
            match options.scale {
                Some(factor) => println!("  Scale: {}", factor),
                None => println!("  Scale: off"),
            }
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'img2ascii config show' to view current settings.",
                    path.display()
                ));
            }

            // Create parent directories if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(&path, DEFAULT_CONFIG)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}

/// Arguments with nothing set, so only the config file and defaults apply.
fn no_args() -> Args {
    Args {
        command: None,
        image: None,
        scale: None,
        charset: None,
        ramp: None,
        repeat: None,
        config: None,
        verbose: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CharacterSet;
    use crate::config::{RenderConfig, ScaleConfig};
    use clap::Parser;

    fn cfg(charset: Option<&str>, ramp: Option<&str>, repeat: Option<usize>, factor: Option<f64>) -> Config {
        Config {
            render: RenderConfig {
                charset: charset.map(String::from),
                ramp: ramp.map(String::from),
                repeat,
            },
            scale: ScaleConfig { factor },
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let options = resolve_options(&no_args(), &Config::default()).unwrap();
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let args = Args::parse_from(["img2ascii", "--charset", "minimal", "--repeat", "1", "-s", "2"]);
        let cfg = cfg(Some("blocks"), None, Some(5), Some(0.5));
        let options = resolve_options(&args, &cfg).unwrap();
        assert_eq!(options.ramp, CharSet::Minimal.ramp());
        assert_eq!(options.repeat, 1);
        assert_eq!(options.scale.map(ScaleFactor::get), Some(2.0));
    }

    #[test]
    fn test_resolve_config_values_used() {
        let cfg = cfg(Some("blocks"), None, Some(2), Some(0.5));
        let options = resolve_options(&no_args(), &cfg).unwrap();
        assert_eq!(options.ramp, CharSet::Blocks.ramp());
        assert_eq!(options.repeat, 2);
        assert_eq!(options.scale.map(ScaleFactor::get), Some(0.5));
    }

    #[test]
    fn test_resolve_custom_ramp_beats_charset() {
        let mut args = no_args();
        args.ramp = Some("xyz".to_string());
        args.charset = Some(CharacterSet::Blocks);
        let options = resolve_options(&args, &Config::default()).unwrap();
        assert_eq!(options.ramp.glyphs(), &['x', 'y', 'z']);
    }

    #[test]
    fn test_resolve_unknown_config_charset_falls_back() {
        let cfg = cfg(Some("braille"), None, None, None);
        let options = resolve_options(&no_args(), &cfg).unwrap();
        assert_eq!(options.ramp, GlyphRamp::reference());
    }

    #[test]
    fn test_resolve_rejects_bad_config_values() {
        let bad_scale = cfg(None, None, None, Some(-2.0));
        assert!(matches!(
            resolve_options(&no_args(), &bad_scale),
            Err(AsciiError::InvalidScaleFactor(_))
        ));

        let bad_repeat = cfg(None, None, Some(0), None);
        assert!(matches!(
            resolve_options(&no_args(), &bad_repeat),
            Err(AsciiError::InvalidRepeat(0))
        ));

        let empty_ramp = cfg(None, Some(""), None, None);
        assert!(matches!(
            resolve_options(&no_args(), &empty_ramp),
            Err(AsciiError::EmptyRamp)
        ));
    }

    #[test]
    fn test_config_init_writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        handle_config_action(ConfigAction::Init, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);

        assert!(handle_config_action(ConfigAction::Init, Some(&path)).is_err());
    }

    #[test]
    fn test_config_show_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(handle_config_action(ConfigAction::Show, Some(&path)).is_err());
    }
}
