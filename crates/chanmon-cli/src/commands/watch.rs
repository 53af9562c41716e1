//! Watch command implementation.

use crate::config::Config;
use crate::error::Result;
use chanmon_janitor::JanitorWorker;
use chanmon_store::{EventLogStore, JsonFileBackend};

/// Execute the watch command: run the janitor on its timer until Ctrl+C.
pub async fn execute_watch(store: EventLogStore<JsonFileBackend>, config: &Config) -> Result<()> {
    let mut worker = JanitorWorker::new(config.janitor_config());
    worker.run(store).await?;
    Ok(())
}
