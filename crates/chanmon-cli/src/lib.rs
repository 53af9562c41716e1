//! Chanmon CLI library - admin surface for the channel-action log.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{CleanArgs, Cli, Command, PrintLogArgs};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
