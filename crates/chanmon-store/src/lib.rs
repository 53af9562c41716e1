//! Chanmon Storage Layer
//!
//! Implements the `ActionLogStore` trait: one mutex-guarded [`EventLog`]
//! per store instance, written through to a durable backend on every
//! mutation.
//!
//! # Architecture
//!
//! - The in-memory log is the single source of truth, guarded by a mutex
//!   scoped to the store instance (event handlers, the janitor timer, and
//!   admin commands all serialize through it)
//! - A [`StateBackend`] persists the whole log as one named record;
//!   `load`/`save` calls explicitly bracket each mutation
//! - The flush to the backend happens before the lock is released, so a
//!   process restarting mid-write never observes a durable copy newer
//!   callers have already read past
//!
//! # Examples
//!
//! ```
//! use chanmon_domain::{ChannelAction, LogRecord};
//! use chanmon_domain::traits::ActionLogStore;
//! use chanmon_store::{EventLogStore, MemoryBackend};
//!
//! # fn main() -> Result<(), chanmon_store::StoreError> {
//! let store = EventLogStore::open(MemoryBackend::new())?;
//! store.append(LogRecord::new("#test", None, ChannelAction::Create, 1))?;
//! assert_eq!(store.snapshot()?.record_count(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod backend;

pub use backend::{JsonFileBackend, MemoryBackend, StateBackend};

use chanmon_domain::traits::ActionLogStore;
use chanmon_domain::{DateKey, EventLog, LogRecord};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend I/O failure
    #[error("State backend error: {0}")]
    Backend(#[from] std::io::Error),

    /// Persisted state could not be decoded
    #[error("State serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A previous holder panicked while holding the log lock
    #[error("Event log lock poisoned")]
    Poisoned,
}

struct Inner<B> {
    log: Mutex<EventLog>,
    backend: B,
}

/// Mutex-guarded, write-through event-log store
///
/// Cloning is cheap and every clone shares the same lock and backend, so
/// the monitor's event handlers and the janitor worker can each hold a
/// handle.
pub struct EventLogStore<B: StateBackend> {
    inner: Arc<Inner<B>>,
}

impl<B: StateBackend> Clone for EventLogStore<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: StateBackend> EventLogStore<B> {
    /// Open the store, loading persisted state from the backend
    ///
    /// Missing state is not an error: the store initializes a fresh log
    /// holding one empty bucket for today and persists it immediately.
    pub fn open(backend: B) -> Result<Self, StoreError> {
        let log = match backend.load()? {
            Some(log) => {
                tracing::debug!(days = log.day_count(), "loaded persisted event log");
                log
            }
            None => {
                let log = EventLog::with_today();
                backend.save(&log)?;
                tracing::info!("no persisted event log found, initialized fresh state");
                log
            }
        };

        Ok(Self {
            inner: Arc::new(Inner {
                log: Mutex::new(log),
                backend,
            }),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, EventLog>, StoreError> {
        self.inner.log.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Flush the current log to the backend; must be called with the
    /// guard still held
    fn flush(&self, log: &EventLog) -> Result<(), StoreError> {
        self.inner.backend.save(log)
    }
}

impl<B: StateBackend> ActionLogStore for EventLogStore<B> {
    type Error = StoreError;

    fn append(&self, record: LogRecord) -> Result<(), StoreError> {
        let mut log = self.lock()?;
        let day = log.append(record);
        self.flush(&log)?;
        tracing::debug!(day = %day, total = log.record_count(), "appended channel change");
        Ok(())
    }

    fn snapshot(&self) -> Result<EventLog, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn oldest_day(&self) -> Result<Option<DateKey>, StoreError> {
        Ok(self.lock()?.oldest_key().cloned())
    }

    fn remove_day(&self, key: &DateKey) -> Result<usize, StoreError> {
        let mut log = self.lock()?;
        let dropped = log.remove(key).map(|records| records.len()).unwrap_or(0);
        self.flush(&log)?;
        Ok(dropped)
    }

    fn remove_empty_days(&self, keep: &DateKey) -> Result<Vec<DateKey>, StoreError> {
        let mut log = self.lock()?;
        let empties = log.empty_days_except(keep);
        for key in &empties {
            log.remove(key);
        }
        self.flush(&log)?;
        Ok(empties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanmon_domain::ChannelAction;

    fn record(channel: &str, ts: i64) -> LogRecord {
        LogRecord::new(channel, Some("@tester".into()), ChannelAction::Delete, ts)
    }

    #[test]
    fn test_open_initializes_todays_bucket_when_state_absent() {
        let backend = MemoryBackend::new();
        let store = EventLogStore::open(backend).unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.day_count(), 1);
        assert_eq!(snapshot.oldest_key(), Some(&DateKey::today()));
        assert_eq!(snapshot.record_count(), 0);
    }

    #[test]
    fn test_open_reuses_persisted_state() {
        let backend = MemoryBackend::new();
        {
            let store = EventLogStore::open(backend.clone()).unwrap();
            store.append(record("#test", 12345)).unwrap();
        }

        // Fresh handle over the same backend sees the appended record.
        let store = EventLogStore::open(backend).unwrap();
        assert_eq!(store.snapshot().unwrap().record_count(), 1);
    }

    #[test]
    fn test_append_monotonicity() {
        let store = EventLogStore::open(MemoryBackend::new()).unwrap();
        for ts in 0..10 {
            store.append(record("#test", ts)).unwrap();
        }

        let snapshot = store.snapshot().unwrap();
        let today = DateKey::today();
        let records = snapshot.records(&today).unwrap();
        assert_eq!(records.len(), 10);
        let stamps: Vec<i64> = records.iter().map(|r| r.timestamp).collect();
        assert_eq!(stamps, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_roundtrip_through_backend_is_identical() {
        let backend = MemoryBackend::new();
        let store = EventLogStore::open(backend.clone()).unwrap();
        store.append(record("#test", 12345)).unwrap();
        store.append(record("#test2", 78901)).unwrap();

        let before = store.snapshot().unwrap();
        let reloaded = EventLogStore::open(backend).unwrap();
        assert_eq!(reloaded.snapshot().unwrap(), before);
    }

    #[test]
    fn test_remove_day_reports_dropped_records() {
        let store = EventLogStore::open(MemoryBackend::new()).unwrap();
        store.append(record("#a", 1)).unwrap();
        store.append(record("#b", 2)).unwrap();

        let today = DateKey::today();
        assert_eq!(store.remove_day(&today).unwrap(), 2);
        assert_eq!(store.remove_day(&today).unwrap(), 0);
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_remove_empty_days_spares_keep_key() {
        let backend = MemoryBackend::with_log({
            let mut log = EventLog::new();
            log.ensure_day(DateKey::new("2024-01-01"));
            log.ensure_day(DateKey::new("2024-01-02"));
            log.append_on(DateKey::new("2024-01-03"), record("#a", 1));
            log
        });
        let store = EventLogStore::open(backend).unwrap();

        let keep = DateKey::new("2024-01-02");
        let removed = store.remove_empty_days(&keep).unwrap();
        assert_eq!(removed, vec![DateKey::new("2024-01-01")]);

        let snapshot = store.snapshot().unwrap();
        assert!(snapshot.records(&keep).is_some());
        assert!(snapshot.records(&DateKey::new("2024-01-03")).is_some());
    }

    #[test]
    fn test_json_file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("log.json");

        {
            let store = EventLogStore::open(JsonFileBackend::new(&path)).unwrap();
            store.append(record("#test", 12345)).unwrap();
        }

        assert!(path.exists());
        let store = EventLogStore::open(JsonFileBackend::new(&path)).unwrap();
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.record_count(), 1);
        let today = DateKey::today();
        assert_eq!(snapshot.records(&today).unwrap()[0].channel, "#test");
    }
}
