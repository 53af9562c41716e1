//! State backends - durable storage for the event log
//!
//! The log persists as a single named record. `load` returns None when no
//! state exists yet (first activation), never an error.

use crate::StoreError;
use chanmon_domain::EventLog;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Durable storage for the whole event log
///
/// Implementations must make `save` visible to a later `load` from a
/// fresh process; that is the restart-recovery contract the store's
/// flush-before-unlock rule depends on.
pub trait StateBackend: Send + Sync + 'static {
    /// Read the persisted log, None when no state has been written yet
    fn load(&self) -> Result<Option<EventLog>, StoreError>;

    /// Write the log back as one record, replacing any previous state
    fn save(&self, log: &EventLog) -> Result<(), StoreError>;
}

/// JSON file on disk holding the serialized log
///
/// Parent directories are created on first save.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend persisting to `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Where the state file lives
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<EventLog>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(e)),
        }
    }

    fn save(&self, log: &EventLog) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory backend for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<Option<EventLog>>>,
}

impl MemoryBackend {
    /// Create an empty backend (no persisted state)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with a log, as if it had been saved
    pub fn with_log(log: EventLog) -> Self {
        Self {
            state: Arc::new(Mutex::new(Some(log))),
        }
    }
}

impl StateBackend for MemoryBackend {
    fn load(&self) -> Result<Option<EventLog>, StoreError> {
        let state = self.state.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(state.clone())
    }

    fn save(&self, log: &EventLog) -> Result<(), StoreError> {
        let mut state = self.state.lock().map_err(|_| StoreError::Poisoned)?;
        *state = Some(log.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_starts_empty() {
        let backend = MemoryBackend::new();
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_backend_save_then_load() {
        let backend = MemoryBackend::new();
        let log = EventLog::with_today();
        backend.save(&log).unwrap();
        assert_eq!(backend.load().unwrap(), Some(log));
    }

    #[test]
    fn test_file_backend_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("nope.json"));
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_file_backend_rejects_corrupt_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        fs::write(&path, "{ not json").unwrap();

        let backend = JsonFileBackend::new(&path);
        assert!(matches!(
            backend.load(),
            Err(StoreError::Serialization(_))
        ));
    }
}
