//! Print-log command implementation.

use crate::cli::PrintLogArgs;
use crate::error::Result;
use crate::output::Formatter;
use chanmon_domain::traits::ActionLogStore;
use chanmon_store::{EventLogStore, JsonFileBackend};

/// Execute the print-log command.
pub fn execute_print_log(
    args: PrintLogArgs,
    store: &EventLogStore<JsonFileBackend>,
    formatter: &Formatter,
) -> Result<()> {
    let snapshot = store.snapshot()?;
    tracing::debug!(days = snapshot.day_count(), records = snapshot.record_count(), "printing log");

    if args.json {
        println!("{}", formatter.format_log_json(&snapshot)?);
    } else {
        println!("{}", formatter.format_log(&snapshot));
    }
    Ok(())
}
