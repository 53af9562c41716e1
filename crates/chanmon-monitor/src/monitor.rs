//! The channel monitor service

use crate::{ChannelEvent, MonitorConfig, MonitorError};
use chanmon_domain::traits::{ActionLogStore, NameResolver, NotificationSink};
use chanmon_domain::LogRecord;
use chanmon_janitor::JanitorWorker;
use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Channel-lifecycle monitor
///
/// Plain service object: holds the store handle, configuration, the name
/// resolver, an optional notification sink, and the handle to the
/// background janitor task. `start()` arms the janitor timer; `stop()`
/// tears it down. Event handling itself is synchronous and works whether
/// or not the janitor is running.
pub struct ChannelMonitor<S> {
    store: S,
    config: MonitorConfig,
    resolver: Arc<dyn NameResolver>,
    sink: Option<Arc<dyn NotificationSink>>,
    janitor_task: Option<JoinHandle<()>>,
}

impl<S> ChannelMonitor<S>
where
    S: ActionLogStore + Clone + Send + 'static,
{
    /// Create a monitor over a store, with a transport name resolver
    pub fn new(store: S, config: MonitorConfig, resolver: Arc<dyn NameResolver>) -> Self {
        Self {
            store,
            config,
            resolver,
            sink: None,
            janitor_task: None,
        }
    }

    /// Attach a notification sink for mirroring rendered log lines
    ///
    /// The sink is only used when the configuration names a destination
    /// channel.
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The monitor's configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Handle one inbound channel event
    ///
    /// Resolves display names, stamps a timestamp when the event carries
    /// none, builds the record, mirrors the rendered line (best-effort),
    /// and appends to the store. Only the append can fail.
    pub fn handle(&self, event: ChannelEvent) -> Result<(), MonitorError> {
        let channel = format!("#{}", self.resolve_channel(&event.channel_id));
        let user = event
            .actor_id
            .as_deref()
            .map(|id| format!("@{}", self.resolve_user(id)));
        let timestamp = event.timestamp.unwrap_or_else(|| Utc::now().timestamp());

        let record = LogRecord::new(channel, user, event.action, timestamp);
        tracing::debug!(line = %record.rendered, "handling channel event");

        // Mirror first; a sink failure must never block persistence.
        if self.config.mirroring_enabled() {
            if let Some(sink) = &self.sink {
                if let Err(e) = sink.notify(&record.rendered) {
                    tracing::warn!(error = %e, "notification sink failed, logging anyway");
                }
            }
        }

        self.store
            .append(record)
            .map_err(|e| MonitorError::Store(e.to_string()))
    }

    /// Start the background janitor on the configured interval
    ///
    /// No-op when already running.
    pub fn start(&mut self) {
        if self.janitor_task.is_some() {
            return;
        }

        let config = self.config.janitor_config();
        let store = self.store.clone();
        self.janitor_task = Some(tokio::spawn(async move {
            let mut worker = JanitorWorker::new(config);
            if let Err(e) = worker.run(store).await {
                tracing::error!(error = %e, "janitor worker exited with error");
            }
        }));
        tracing::info!("channel monitor started");
    }

    /// Stop the background janitor
    ///
    /// Safe to call when not running.
    pub fn stop(&mut self) {
        if let Some(task) = self.janitor_task.take() {
            task.abort();
            tracing::info!("channel monitor stopped");
        }
    }

    /// True while the janitor task is armed
    pub fn is_running(&self) -> bool {
        self.janitor_task.is_some()
    }

    fn resolve_channel(&self, id: &str) -> String {
        self.resolver
            .resolve_channel_name(id)
            .unwrap_or_else(|| id.to_string())
    }

    fn resolve_user(&self, id: &str) -> String {
        self.resolver
            .resolve_user_name(id)
            .unwrap_or_else(|| id.to_string())
    }
}

impl<S> Drop for ChannelMonitor<S> {
    fn drop(&mut self) {
        if let Some(task) = self.janitor_task.take() {
            task.abort();
        }
    }
}
