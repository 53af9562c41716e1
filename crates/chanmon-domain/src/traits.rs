//! Trait interfaces for external collaborators
//!
//! The domain defines the seams; infrastructure crates implement them.
//! `ActionLogStore` is implemented by `chanmon-store` and mocked in
//! janitor and monitor tests. Name resolution and the notification sink
//! belong to whichever chat transport embeds the monitor.

use crate::{DateKey, EventLog, LogRecord};
use std::fmt;

/// The persisted, serialized event-log store
///
/// Every method is one atomic critical section over the underlying log:
/// it acquires the store's lock, mutates, flushes to durable storage, and
/// releases. Callers compose these primitives; nothing here re-enters the
/// lock.
pub trait ActionLogStore {
    /// Store-specific error type
    type Error: fmt::Display;

    /// Append a record under today's bucket, creating it if absent
    ///
    /// Never fails on a missing bucket; the bucket is created lazily.
    fn append(&self, record: LogRecord) -> Result<(), Self::Error>;

    /// A copy of the whole log
    ///
    /// Returned by value so callers never iterate the live map while the
    /// janitor prunes it.
    fn snapshot(&self) -> Result<EventLog, Self::Error>;

    /// The oldest bucket key, or None when the store holds no buckets
    fn oldest_day(&self) -> Result<Option<DateKey>, Self::Error>;

    /// Delete a bucket outright, returning how many records it held
    fn remove_day(&self, key: &DateKey) -> Result<usize, Self::Error>;

    /// Delete every empty bucket except `keep`, returning the removed keys
    fn remove_empty_days(&self, keep: &DateKey) -> Result<Vec<DateKey>, Self::Error>;
}

/// Maps transport identifiers to display names
///
/// Implementations may hit the transport's API; any caching is their
/// concern, since the monitor calls once per event.
pub trait NameResolver: Send + Sync {
    /// Display name for a channel id, None when unknown
    fn resolve_channel_name(&self, id: &str) -> Option<String>;

    /// Display name for a user id, None when unknown
    fn resolve_user_name(&self, id: &str) -> Option<String>;
}

/// Fire-and-forget mirror for rendered log lines
///
/// Failures are reported to the caller but must never block the log
/// append; the monitor logs them and moves on.
pub trait NotificationSink: Send + Sync {
    /// Send one rendered line to the configured destination
    fn notify(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
