//! Metrics collection for Janitor operations

/// Metrics collected during Janitor sweeps
///
/// Tracks buckets evicted for age, empty buckets swept, records dropped,
/// and malformed keys skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JanitorMetrics {
    /// Buckets evicted because they aged past the retention window
    pub buckets_evicted: usize,

    /// Records dropped along with evicted buckets
    pub records_dropped: usize,

    /// Empty buckets removed by the sweep step
    pub empty_buckets_swept: usize,

    /// Bucket keys that failed to parse as dates and were skipped
    pub malformed_keys_skipped: usize,

    /// Total sweep invocations completed
    pub sweep_count: usize,
}

impl JanitorMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an aged-out bucket eviction
    pub fn record_eviction(&mut self, records_dropped: usize) {
        self.buckets_evicted += 1;
        self.records_dropped += records_dropped;
    }

    /// Record empty buckets removed by one sweep step
    pub fn record_empty_sweep(&mut self, count: usize) {
        self.empty_buckets_swept += count;
    }

    /// Record a bucket key that could not be parsed as a date
    pub fn record_malformed_key(&mut self) {
        self.malformed_keys_skipped += 1;
    }

    /// Record a completed sweep invocation
    pub fn record_sweep(&mut self) {
        self.sweep_count += 1;
    }

    /// Total buckets removed for any reason
    pub fn total_removed(&self) -> usize {
        self.buckets_evicted + self.empty_buckets_swept
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Janitor Metrics Summary".to_string(),
            "======================".to_string(),
            format!("Sweeps completed: {}", self.sweep_count),
            format!("Buckets evicted (aged out): {}", self.buckets_evicted),
            format!("Records dropped: {}", self.records_dropped),
            format!("Empty buckets swept: {}", self.empty_buckets_swept),
        ];

        if self.malformed_keys_skipped > 0 {
            lines.push(format!(
                "Malformed keys skipped: {}",
                self.malformed_keys_skipped
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = JanitorMetrics::new();
        assert_eq!(metrics.total_removed(), 0);
        assert_eq!(metrics.sweep_count, 0);
    }

    #[test]
    fn test_record_eviction() {
        let mut metrics = JanitorMetrics::new();
        metrics.record_eviction(5);
        metrics.record_eviction(0);

        assert_eq!(metrics.buckets_evicted, 2);
        assert_eq!(metrics.records_dropped, 5);
    }

    #[test]
    fn test_record_empty_sweep() {
        let mut metrics = JanitorMetrics::new();
        metrics.record_empty_sweep(3);
        metrics.record_empty_sweep(1);

        assert_eq!(metrics.empty_buckets_swept, 4);
        assert_eq!(metrics.total_removed(), 4);
    }

    #[test]
    fn test_reset() {
        let mut metrics = JanitorMetrics::new();
        metrics.record_eviction(10);
        metrics.record_malformed_key();
        metrics.record_sweep();

        metrics.reset();
        assert_eq!(metrics, JanitorMetrics::new());
    }

    #[test]
    fn test_summary() {
        let mut metrics = JanitorMetrics::new();
        metrics.record_eviction(7);
        metrics.record_empty_sweep(2);
        metrics.record_sweep();

        let summary = metrics.summary();
        assert!(summary.contains("Sweeps completed: 1"));
        assert!(summary.contains("Buckets evicted (aged out): 1"));
        assert!(summary.contains("Records dropped: 7"));
        assert!(summary.contains("Empty buckets swept: 2"));
        assert!(!summary.contains("Malformed"));
    }

    #[test]
    fn test_summary_mentions_malformed_keys_when_present() {
        let mut metrics = JanitorMetrics::new();
        metrics.record_malformed_key();
        assert!(metrics.summary().contains("Malformed keys skipped: 1"));
    }
}
