//! Chanmon Domain Layer
//!
//! This crate contains the core model for the channel monitor: the log
//! record, the date-bucketed event log, and the trait interfaces that the
//! storage, janitor, and monitor layers depend upon.
//!
//! ## Key Concepts
//!
//! - **LogRecord**: one channel-lifecycle change (create/archive/delete/unarchive)
//!   with a human-readable line precomputed at construction
//! - **DateKey**: a `YYYY-MM-DD` bucket key; keys order chronologically
//! - **EventLog**: the date-keyed mapping of records, insertion order
//!   preserved within a day
//! - **Trait seams**: the store, name resolution, and notification
//!   collaborators are defined here and implemented elsewhere
//!
//! ## Architecture
//!
//! Pure model and trait definitions only. Locking, persistence, and
//! scheduling live in the `chanmon-store` and `chanmon-janitor` crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod date_key;
pub mod log;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use action::ChannelAction;
pub use date_key::DateKey;
pub use log::EventLog;
pub use record::LogRecord;
