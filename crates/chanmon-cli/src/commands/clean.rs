//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chanmon_janitor::Janitor;
use chanmon_store::{EventLogStore, JsonFileBackend};

/// Execute the clean command: one prune with an explicit retention override.
pub fn execute_clean(
    args: CleanArgs,
    store: &EventLogStore<JsonFileBackend>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "Clearing channel monitor logs, keeping {} day(s)",
            args.days
        ))
    );

    let mut janitor = Janitor::new(config.janitor_config());
    let metrics = janitor.prune(store, args.days)?;

    println!("{}", formatter.success("Log cleanup complete"));
    println!("{}", metrics.summary());
    Ok(())
}
