//! Attrib CLI - Command-line front end for attribution combination checks.

use attrib_cli::commands;
use attrib_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

/// Exit code when the combination was decoded but rejected
const EXIT_REJECTED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_REJECTED),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Initialize tracing (log to stderr); RUST_LOG overrides the verbosity flag
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> attrib_cli::Result<bool> {
    // Load config
    let config = Config::load_or_default(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Check(args) => {
            let result = commands::execute_check(args, &config.gatekeeper, &formatter)?;
            Ok(result.is_accepted())
        }
        Command::Inspect(args) => {
            commands::execute_inspect(args, &formatter)?;
            Ok(true)
        }
        Command::Encode(args) => {
            commands::execute_encode(args, &formatter)?;
            Ok(true)
        }
    }
}
