//! Error types for monitor operations

use thiserror::Error;

/// Errors that can occur while handling channel events
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The event log store rejected the append
    #[error("Storage error: {0}")]
    Store(String),
}
