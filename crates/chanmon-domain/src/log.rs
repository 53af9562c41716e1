//! Log module - the date-bucketed event log

use crate::{DateKey, LogRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date-bucketed log of channel changes
///
/// A mapping from [`DateKey`] to the ordered records appended on that day.
/// Keys are unique and iterate oldest-first; within a day, records keep
/// insertion order. Buckets are created lazily on first append for a date
/// and destroyed only by the retention janitor.
///
/// # Examples
///
/// ```
/// use chanmon_domain::{ChannelAction, EventLog, LogRecord};
///
/// let mut log = EventLog::new();
/// log.append(LogRecord::new("#test", Some("@tester".into()), ChannelAction::Delete, 12345));
/// log.append(LogRecord::new("#test2", Some("@tester".into()), ChannelAction::Archive, 78901));
///
/// assert_eq!(log.day_count(), 1);
/// let blocks = log.render();
/// assert_eq!(blocks.len(), 1);
/// assert!(blocks[0].contains("#test2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    days: BTreeMap<DateKey, Vec<LogRecord>>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log holding one empty bucket for today
    ///
    /// This is the shape the store initializes on first activation.
    pub fn with_today() -> Self {
        let mut log = Self::new();
        log.days.insert(DateKey::today(), Vec::new());
        log
    }

    /// Append a record under today's bucket, creating it if needed
    ///
    /// Returns the key the record landed under. "Today" is determined at
    /// call time, so a log kept across midnight starts a new bucket on
    /// its own.
    pub fn append(&mut self, record: LogRecord) -> DateKey {
        let today = DateKey::today();
        self.append_on(today.clone(), record);
        today
    }

    /// Append a record under an explicit key
    ///
    /// Used by tests and restore paths that need to build historical days.
    pub fn append_on(&mut self, key: DateKey, record: LogRecord) {
        self.days.entry(key).or_default().push(record);
    }

    /// Insert an empty bucket for a key if it is not present
    pub fn ensure_day(&mut self, key: DateKey) {
        self.days.entry(key).or_default();
    }

    /// The oldest bucket key, or None when the log holds no buckets
    pub fn oldest_key(&self) -> Option<&DateKey> {
        self.days.keys().next()
    }

    /// Remove a bucket outright, returning its records if it existed
    pub fn remove(&mut self, key: &DateKey) -> Option<Vec<LogRecord>> {
        self.days.remove(key)
    }

    /// Keys of every bucket that holds no records, except `keep`
    ///
    /// Today's bucket is passed as `keep` by the janitor so it survives
    /// the empty-bucket sweep.
    pub fn empty_days_except(&self, keep: &DateKey) -> Vec<DateKey> {
        self.days
            .iter()
            .filter(|(key, records)| records.is_empty() && *key != keep)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Iterate bucket keys oldest-first
    pub fn days(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    /// Records for one day, insertion order
    pub fn records(&self, key: &DateKey) -> Option<&[LogRecord]> {
        self.days.get(key).map(Vec::as_slice)
    }

    /// Number of buckets (including empty ones)
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total records across all buckets
    pub fn record_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// True when the log holds no buckets at all
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Render the log into one text block per day
    ///
    /// Each block is a bolded date header followed by that day's rendered
    /// lines joined with newlines, oldest day first. An empty log yields
    /// an empty Vec; the caller decides how to say "No logs".
    pub fn render(&self) -> Vec<String> {
        self.days
            .iter()
            .map(|(day, records)| {
                let lines: Vec<&str> = records.iter().map(|r| r.rendered.as_str()).collect();
                format!("*{}*\n{}", day, lines.join("\n"))
            })
            .collect()
    }
}
