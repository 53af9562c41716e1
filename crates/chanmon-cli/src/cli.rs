//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chanmon CLI - inspect and maintain the channel-lifecycle log.
#[derive(Debug, Parser)]
#[command(name = "chanmon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Event log state file path (overrides the configured one)
    #[arg(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every logged channel change, grouped by day
    PrintLog(PrintLogArgs),

    /// Evict aged-out log buckets now, with an explicit retention override
    Clean(CleanArgs),

    /// Run the retention janitor on its timer until Ctrl+C
    Watch,

    /// Interactively draft a new community event
    NewEvent,
}

/// Arguments for the print-log command.
#[derive(Debug, Parser)]
pub struct PrintLogArgs {
    /// Emit the raw log as JSON instead of rendered blocks
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the clean command.
#[derive(Debug, Parser)]
pub struct CleanArgs {
    /// How many days of logs to keep
    pub days: u64,
}
