//! Error types for the CLI.

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file did not parse
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Event log store failure
    #[error(transparent)]
    Store(#[from] chanmon_store::StoreError),

    /// Janitor failure
    #[error(transparent)]
    Janitor(#[from] chanmon_janitor::JanitorError),

    /// Event flow failure
    #[error(transparent)]
    Flow(#[from] chanmon_events::FlowError),

    /// JSON output failure
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt failure
    #[error("Prompt error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
