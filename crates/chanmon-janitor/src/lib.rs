//! Chanmon Janitor
//!
//! Background maintenance for the channel-action log: evicts the oldest
//! date bucket once it ages past the retention window and sweeps out
//! empty buckets.
//!
//! # Overview
//!
//! The Janitor is responsible for:
//! - **Retention**: deleting the oldest bucket once it exceeds the
//!   configured age, records and all
//! - **Empty-bucket sweep**: removing buckets with no records, except
//!   today's
//! - **Metrics collection**: tracking what each sweep removed
//!
//! # Eviction policy
//!
//! Only the single oldest bucket is examined per sweep, even when several
//! buckets have expired. A deployment that was offline long enough to
//! accumulate multiple expired buckets catches up one bucket per tick of
//! the recurring worker. This matches the long-standing behavior of the
//! log and is deliberate.
//!
//! # Usage
//!
//! ## One-time sweep
//!
//! ```
//! use chanmon_janitor::{Janitor, JanitorConfig};
//! use chanmon_store::{EventLogStore, MemoryBackend};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = EventLogStore::open(MemoryBackend::new())?;
//! let mut janitor = Janitor::default_config();
//!
//! let metrics = janitor.sweep(&store)?;
//! println!("{}", metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Background worker
//!
//! ```no_run
//! use chanmon_janitor::{JanitorConfig, JanitorWorker};
//! use chanmon_store::{EventLogStore, JsonFileBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = EventLogStore::open(JsonFileBackend::new("chanmon.json"))?;
//!     let mut worker = JanitorWorker::new(JanitorConfig::default());
//!
//!     // Runs until Ctrl+C
//!     worker.run(store).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The Janitor can be configured via TOML:
//!
//! ```toml
//! [janitor]
//! retention_days = 90
//! sweep_interval_seconds = 600
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod janitor;
mod metrics;
mod worker;

pub use config::JanitorConfig;
pub use error::JanitorError;
pub use janitor::Janitor;
pub use metrics::JanitorMetrics;
pub use worker::JanitorWorker;
