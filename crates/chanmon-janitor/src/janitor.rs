//! Core Janitor implementation: oldest-bucket eviction and empty-bucket sweep

use crate::{JanitorConfig, JanitorError, JanitorMetrics};
use chanmon_domain::traits::ActionLogStore;
use chanmon_domain::DateKey;
use chrono::{Duration, Local, NaiveTime};

/// Janitor service for pruning the channel-action log
///
/// Each [`Janitor::prune`] invocation runs the two-step sweep:
/// 1. Inspect the oldest bucket; if it is older than the retention
///    window, delete it outright (records and all). Only that one bucket
///    is considered, even when more have expired.
/// 2. Delete every remaining empty bucket except today's.
///
/// Both steps are separate critical sections on the store; the store's
/// own lock serializes them against concurrent appends.
///
/// # Examples
///
/// ```
/// use chanmon_janitor::{Janitor, JanitorConfig};
/// use chanmon_store::{EventLogStore, MemoryBackend};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = EventLogStore::open(MemoryBackend::new())?;
/// let mut janitor = Janitor::new(JanitorConfig::default());
///
/// let metrics = janitor.sweep(&store)?;
/// assert_eq!(metrics.sweep_count, 1);
/// # Ok(())
/// # }
/// ```
pub struct Janitor {
    config: JanitorConfig,
    metrics: JanitorMetrics,
}

impl Janitor {
    /// Create a new Janitor with the given configuration
    pub fn new(config: JanitorConfig) -> Self {
        Self {
            config,
            metrics: JanitorMetrics::new(),
        }
    }

    /// Create a Janitor with default configuration
    pub fn default_config() -> Self {
        Self::new(JanitorConfig::default())
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &JanitorMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Run one sweep using the configured retention window
    pub fn sweep<S: ActionLogStore>(&mut self, store: &S) -> Result<JanitorMetrics, JanitorError> {
        let days = self.config.retention_days;
        self.prune(store, days)
    }

    /// Run one sweep with an explicit retention override
    ///
    /// `days_to_keep` comes from the admin "clean" command; the periodic
    /// worker passes the configured value through [`Janitor::sweep`].
    pub fn prune<S: ActionLogStore>(
        &mut self,
        store: &S,
        days_to_keep: u64,
    ) -> Result<JanitorMetrics, JanitorError> {
        self.evict_oldest(store, days_to_keep)?;
        self.sweep_empty(store)?;

        self.metrics.record_sweep();
        Ok(self.metrics.clone())
    }

    /// Step 1: evict the single oldest bucket if it aged past the window
    ///
    /// An empty store skips this step: there is no oldest key to inspect.
    /// A key that fails to parse as a date is logged and left alone;
    /// crashing here would disable all future sweeps on the timer.
    fn evict_oldest<S: ActionLogStore>(
        &mut self,
        store: &S,
        days_to_keep: u64,
    ) -> Result<(), JanitorError> {
        let Some(oldest) = store
            .oldest_day()
            .map_err(|e| JanitorError::Store(e.to_string()))?
        else {
            tracing::debug!("event log holds no buckets, nothing to evict");
            return Ok(());
        };

        let date = match oldest.to_date() {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(key = %oldest, error = %e, "skipping unparseable bucket key");
                self.metrics.record_malformed_key();
                return Ok(());
            }
        };

        let Some(window) = i64::try_from(days_to_keep).ok().and_then(Duration::try_days) else {
            // Window too large to represent; nothing can have expired.
            return Ok(());
        };

        // Age is measured from local midnight of the bucket's date, so a
        // zero-day window expires today's bucket as soon as the day has
        // any elapsed time.
        let age = Local::now().naive_local() - date.and_time(NaiveTime::MIN);
        if age > window {
            let dropped = store
                .remove_day(&oldest)
                .map_err(|e| JanitorError::Store(e.to_string()))?;
            self.metrics.record_eviction(dropped);
            tracing::info!(
                day = %oldest,
                records = dropped,
                days_to_keep,
                "evicted aged-out bucket"
            );
        }

        Ok(())
    }

    /// Step 2: drop every remaining empty bucket that is not today's
    fn sweep_empty<S: ActionLogStore>(&mut self, store: &S) -> Result<(), JanitorError> {
        let removed = store
            .remove_empty_days(&DateKey::today())
            .map_err(|e| JanitorError::Store(e.to_string()))?;

        if !removed.is_empty() {
            tracing::debug!(count = removed.len(), "swept empty buckets");
        }
        self.metrics.record_empty_sweep(removed.len());
        Ok(())
    }
}
