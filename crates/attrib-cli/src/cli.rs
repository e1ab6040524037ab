//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Attrib CLI - Check package attribution sets carried in parcel form.
#[derive(Debug, Parser)]
#[command(name = "attrib")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ATTRIB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (verdict or tags only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a combination parcel and decide whether it is valid
    Check(CheckArgs),

    /// Decode a combination parcel and list its attributions
    Inspect(InspectArgs),

    /// Encode attributions from JSON into a combination parcel
    Encode(EncodeArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Parcel file, or `-` for stdin
    pub input: PathBuf,

    /// Enforce the tag length bound regardless of configuration
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the inspect command.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Parcel file, or `-` for stdin
    pub input: PathBuf,
}

/// Arguments for the encode command.
#[derive(Debug, Parser)]
pub struct EncodeArgs {
    /// JSON file holding an array of attributions, or `-` for stdin
    pub input: PathBuf,

    /// Output parcel file
    #[arg(short, long)]
    pub output: PathBuf,
}
