//! Configuration for the channel monitor

use chanmon_janitor::JanitorConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the channel monitor service
///
/// `destination_channel` names where rendered log lines are mirrored;
/// empty means mirroring is disabled. Retention settings feed the
/// background janitor.
///
/// # Examples
///
/// ```
/// use chanmon_monitor::MonitorConfig;
///
/// let config = MonitorConfig::default();
/// assert!(!config.mirroring_enabled());
/// assert_eq!(config.retention_days, 90);
/// assert_eq!(config.sweep_interval_seconds, 600);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Where to mirror rendered log lines; empty disables mirroring
    #[serde(default)]
    pub destination_channel: String,

    /// Age threshold (days) for evicting the oldest bucket
    #[serde(default = "default_retention_days")]
    pub retention_days: u64,

    /// Janitor timer period in seconds
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

fn default_retention_days() -> u64 {
    90
}

fn default_sweep_interval_seconds() -> u64 {
    600
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            destination_channel: String::new(),
            retention_days: 90,
            sweep_interval_seconds: 600,
        }
    }
}

impl MonitorConfig {
    /// True when a mirror destination has been configured
    pub fn mirroring_enabled(&self) -> bool {
        !self.destination_channel.is_empty()
    }

    /// The janitor configuration derived from the retention settings
    pub fn janitor_config(&self) -> JanitorConfig {
        JanitorConfig {
            retention_days: self.retention_days,
            sweep_interval_seconds: self.sweep_interval_seconds,
        }
    }
}
