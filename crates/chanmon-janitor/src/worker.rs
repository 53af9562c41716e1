//! Background worker for continuous Janitor operation

use crate::{Janitor, JanitorConfig, JanitorError};
use chanmon_domain::traits::ActionLogStore;
use tokio::time::{interval, Duration};

/// Background worker that runs the Janitor on a schedule
///
/// Sweeps the store at the configured interval until a shutdown signal
/// arrives. A failed sweep is logged and the timer re-arms; one bad tick
/// must not disable all future pruning.
///
/// # Examples
///
/// ```no_run
/// use chanmon_janitor::{JanitorConfig, JanitorWorker};
/// use chanmon_store::{EventLogStore, JsonFileBackend};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = EventLogStore::open(JsonFileBackend::new("chanmon.json"))?;
///     let mut worker = JanitorWorker::new(JanitorConfig::default());
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run(store).await?;
///     Ok(())
/// }
/// ```
pub struct JanitorWorker {
    janitor: Janitor,
    interval: Duration,
}

impl JanitorWorker {
    /// Create a new background worker with the given configuration
    pub fn new(config: JanitorConfig) -> Self {
        let interval = config.sweep_interval();
        Self {
            janitor: Janitor::new(config),
            interval,
        }
    }

    /// Create a worker with default configuration
    pub fn default_config() -> Self {
        Self::new(JanitorConfig::default())
    }

    /// Run the worker indefinitely
    ///
    /// Sweeps at the configured interval until Ctrl+C is received.
    pub async fn run<S>(&mut self, store: S) -> Result<(), JanitorError>
    where
        S: ActionLogStore,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(interval = ?self.interval, "janitor worker started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick(&store);
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received, stopping janitor");
                    break;
                }
            }
        }

        tracing::info!("janitor stopped. Final metrics:\n{}", self.janitor.metrics().summary());
        Ok(())
    }

    /// Run for a specific number of cycles (useful for testing)
    pub async fn run_cycles<S>(&mut self, store: S, cycles: usize) -> Result<(), JanitorError>
    where
        S: ActionLogStore,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(cycles, interval = ?self.interval, "janitor worker started");

        for cycle in 0..cycles {
            ticker.tick().await;
            tracing::debug!(cycle = cycle + 1, cycles, "starting sweep");
            self.tick(&store);
        }

        tracing::info!(cycles, "janitor finished. Final metrics:\n{}", self.janitor.metrics().summary());
        Ok(())
    }

    fn tick<S: ActionLogStore>(&mut self, store: &S) {
        match self.janitor.sweep(store) {
            Ok(metrics) => {
                tracing::debug!(
                    evicted = metrics.buckets_evicted,
                    empty_swept = metrics.empty_buckets_swept,
                    "sweep completed"
                );
            }
            Err(e) => {
                // Keep ticking; a single failed sweep must not end retention.
                tracing::error!(error = %e, "sweep failed");
            }
        }
    }

    /// Get a reference to the janitor's current metrics
    pub fn metrics(&self) -> &crate::JanitorMetrics {
        self.janitor.metrics()
    }

    /// Reset the janitor's metrics counters
    pub fn reset_metrics(&mut self) {
        self.janitor.reset_metrics();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanmon_domain::{ChannelAction, DateKey, EventLog, LogRecord};
    use chrono::Local;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockStore {
        log: Arc<Mutex<EventLog>>,
    }

    impl MockStore {
        fn with_log(log: EventLog) -> Self {
            Self {
                log: Arc::new(Mutex::new(log)),
            }
        }

        fn log(&self) -> EventLog {
            self.log.lock().unwrap().clone()
        }
    }

    impl ActionLogStore for MockStore {
        type Error = String;

        fn append(&self, record: LogRecord) -> Result<(), String> {
            self.log.lock().unwrap().append(record);
            Ok(())
        }

        fn snapshot(&self) -> Result<EventLog, String> {
            Ok(self.log())
        }

        fn oldest_day(&self) -> Result<Option<DateKey>, String> {
            Ok(self.log.lock().unwrap().oldest_key().cloned())
        }

        fn remove_day(&self, key: &DateKey) -> Result<usize, String> {
            Ok(self
                .log
                .lock()
                .unwrap()
                .remove(key)
                .map(|records| records.len())
                .unwrap_or(0))
        }

        fn remove_empty_days(&self, keep: &DateKey) -> Result<Vec<DateKey>, String> {
            let mut log = self.log.lock().unwrap();
            let empties = log.empty_days_except(keep);
            for key in &empties {
                log.remove(key);
            }
            Ok(empties)
        }
    }

    fn one_second_config() -> JanitorConfig {
        JanitorConfig {
            retention_days: 30,
            sweep_interval_seconds: 1,
        }
    }

    #[tokio::test]
    async fn test_worker_creation() {
        let worker = JanitorWorker::default_config();
        assert_eq!(worker.metrics().sweep_count, 0);
    }

    #[tokio::test]
    async fn test_run_cycles_counts_sweeps() {
        let store = MockStore::with_log(EventLog::new());
        let mut worker = JanitorWorker::new(one_second_config());

        worker.run_cycles(store, 2).await.unwrap();

        assert_eq!(worker.metrics().sweep_count, 2);
    }

    #[tokio::test]
    async fn test_run_cycles_prunes_expired_bucket() {
        let mut log = EventLog::new();
        let old = DateKey::from_date(Local::now().date_naive() - chrono::Duration::days(45));
        log.append_on(
            old.clone(),
            LogRecord::new("#old", None, ChannelAction::Delete, 1),
        );
        let store = MockStore::with_log(log);

        let mut worker = JanitorWorker::new(one_second_config());
        worker.run_cycles(store.clone(), 1).await.unwrap();

        assert!(store.log().records(&old).is_none());
        assert_eq!(worker.metrics().buckets_evicted, 1);
    }

    #[tokio::test]
    async fn test_reset_metrics() {
        let store = MockStore::with_log(EventLog::new());
        let mut worker = JanitorWorker::new(one_second_config());

        worker.run_cycles(store, 1).await.unwrap();
        assert_eq!(worker.metrics().sweep_count, 1);

        worker.reset_metrics();
        assert_eq!(worker.metrics().sweep_count, 0);
    }
}
