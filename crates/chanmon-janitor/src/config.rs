//! Configuration for Janitor operations
//!
//! Defines the retention window and the sweep timer period.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Janitor service
///
/// # Examples
///
/// ```
/// use chanmon_janitor::JanitorConfig;
///
/// // Default configuration
/// let config = JanitorConfig::default();
/// assert_eq!(config.retention_days, 90);
///
/// // Aggressive cleanup
/// let config = JanitorConfig::aggressive();
/// assert_eq!(config.retention_days, 14);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JanitorConfig {
    /// Age threshold for evicting the oldest bucket (in days)
    /// Default: 90 days
    #[serde(default = "default_retention_days")]
    pub retention_days: u64,

    /// How often to run the sweep (in seconds)
    /// Default: every 600 seconds (10 minutes)
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

fn default_retention_days() -> u64 {
    90
}

fn default_sweep_interval_seconds() -> u64 {
    600
}

impl Default for JanitorConfig {
    /// Default configuration: keep 90 days, sweep every 10 minutes
    fn default() -> Self {
        Self {
            retention_days: 90,
            sweep_interval_seconds: 600,
        }
    }
}

impl JanitorConfig {
    /// Aggressive cleanup configuration (short retention, frequent sweeps)
    ///
    /// - Retention: 14 days
    /// - Sweep interval: 60 seconds
    pub fn aggressive() -> Self {
        Self {
            retention_days: 14,
            sweep_interval_seconds: 60,
        }
    }

    /// Lenient cleanup configuration (long retention, infrequent sweeps)
    ///
    /// - Retention: 365 days
    /// - Sweep interval: 1 hour
    pub fn lenient() -> Self {
        Self {
            retention_days: 365,
            sweep_interval_seconds: 3600,
        }
    }

    /// Get sweep interval as Duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JanitorConfig::default();
        assert_eq!(config.retention_days, 90);
        assert_eq!(config.sweep_interval_seconds, 600);
    }

    #[test]
    fn test_aggressive_config() {
        let config = JanitorConfig::aggressive();
        assert!(config.retention_days < JanitorConfig::default().retention_days);
        assert!(config.sweep_interval_seconds < JanitorConfig::default().sweep_interval_seconds);
    }

    #[test]
    fn test_lenient_config() {
        let config = JanitorConfig::lenient();
        assert!(config.retention_days > JanitorConfig::default().retention_days);
    }

    #[test]
    fn test_duration_conversion() {
        let config = JanitorConfig::default();
        assert_eq!(config.sweep_interval(), Duration::from_secs(600));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = JanitorConfig::aggressive();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: JanitorConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config.retention_days, deserialized.retention_days);
        assert_eq!(
            config.sweep_interval_seconds,
            deserialized.sweep_interval_seconds
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: JanitorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.retention_days, 90);
        assert_eq!(config.sweep_interval_seconds, 600);
    }
}
