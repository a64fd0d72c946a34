//! CLI argument parsing for travel
//!
//! Supports global flags: --vault, --format, --quiet, --verbose, --log-level, --log-json

pub mod config;
pub mod output;
pub mod paths;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use config::ConfigCommands;
pub use output::OutputFormat;

/// Travel - walk every note reachable from a starting note
#[derive(Parser, Debug)]
#[command(name = "travel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault directory (defaults to the current directory)
    #[arg(long, global = true, env = "TRAVEL_VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (error, warn, info, debug, trace) or directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every note reachable from a note, in travel order
    Order(OrderArgs),

    /// Step through reachable notes interactively (commands read from stdin)
    Session(SessionArgs),

    /// Show or edit the vault's travel settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Starting note: id, id without extension, or file path
    pub note: String,
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Note that is active when the session starts
    pub note: Option<String>,

    /// Open each delivered note in an editor instead of printing its path
    #[arg(long)]
    pub open: bool,

    /// Editor command used with --open (defaults to settings, $VISUAL, $EDITOR)
    #[arg(long, requires = "open")]
    pub editor: Option<String>,
}
