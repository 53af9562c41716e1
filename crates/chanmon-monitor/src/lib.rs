//! Chanmon Monitor
//!
//! The channel-lifecycle monitor: receives channel-change events from a
//! chat transport, turns them into log records, mirrors the rendered line
//! to an optional notification sink, and appends them to the persisted
//! event log. Owns the background janitor that enforces retention.
//!
//! # Architecture
//!
//! - [`ChannelEvent`] is the inbound contract: four event kinds, each
//!   carrying a channel id, optionally an actor id, optionally a timestamp
//! - [`ChannelMonitor`] is a plain service object with an explicit
//!   `start()` / `stop()` pair; no plugin base class, just a struct
//!   holding the store handle, configuration, and the janitor task
//! - Name resolution and the notification sink are trait objects supplied
//!   by whichever transport embeds the monitor
//!
//! # Ordering
//!
//! On each event the rendered line is sent to the sink *before* the log
//! mutation; sink failures are logged and swallowed so a broken mirror
//! destination can never stop the log from being written.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use chanmon_domain::traits::NameResolver;
//! use chanmon_monitor::{ChannelEvent, ChannelMonitor, MonitorConfig};
//! use chanmon_store::{EventLogStore, JsonFileBackend};
//!
//! struct PassthroughResolver;
//!
//! impl NameResolver for PassthroughResolver {
//!     fn resolve_channel_name(&self, id: &str) -> Option<String> {
//!         Some(id.to_string())
//!     }
//!     fn resolve_user_name(&self, id: &str) -> Option<String> {
//!         Some(id.to_string())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = EventLogStore::open(JsonFileBackend::new("chanmon.json"))?;
//!     let mut monitor = ChannelMonitor::new(
//!         store,
//!         MonitorConfig::default(),
//!         Arc::new(PassthroughResolver),
//!     );
//!
//!     monitor.start();
//!     monitor.handle(ChannelEvent::created("C123", "U456", 1700000000))?;
//!     monitor.stop();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod event;
mod monitor;

pub use config::MonitorConfig;
pub use error::MonitorError;
pub use event::ChannelEvent;
pub use monitor::ChannelMonitor;
