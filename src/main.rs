use clap::Parser;
use std::io::Write;

use img2ascii::cli::{self, Args, Command};
use img2ascii::config::Config;
use img2ascii::pipeline::convert_file;

/// Initialise stderr logging; RUST_LOG overrides the -v level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Some(Command::Charsets) => cli::list_charsets(),
        Some(Command::Config { ref action }) => {
            if let Err(e) = cli::handle_config_action(action.clone(), args.config.as_deref()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            let Some(ref image) = args.image else {
                eprintln!("Error: no image given. Usage: img2ascii <IMAGE> [--scale <FACTOR>]");
                std::process::exit(2);
            };

            // If --config is specified, require the file to exist
            // Otherwise, fall back to defaults if default config not found
            let cfg = if let Some(ref path) = args.config {
                match Config::load_from(path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Warning: {}", e);
                        eprintln!("Using default settings.\n");
                        Config::default()
                    }
                }
            };

            let options = match cli::resolve_options(&args, &cfg) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            let result = convert_file(image, &options, &mut out)
                .and_then(|()| writeln!(out).and_then(|()| out.flush()).map_err(Into::into));
            if let Err(e) = result {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
