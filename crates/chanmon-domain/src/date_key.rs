//! Date-key module - `YYYY-MM-DD` bucket keys for the event log

use chrono::{Local, NaiveDate, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format shared by every bucket key in the log
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar-date bucket key in `YYYY-MM-DD` form
///
/// Keys compare as strings, and because the format is zero-padded
/// big-endian (year, month, day) that ordering is chronological: the
/// smallest key is always the oldest bucket.
///
/// # Examples
///
/// ```
/// use chanmon_domain::DateKey;
///
/// let key = DateKey::new("2024-01-05");
/// assert_eq!(key.as_str(), "2024-01-05");
/// assert!(key < DateKey::new("2024-01-06"));
/// assert!(key.to_date().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Create a key from a raw string
    ///
    /// Not validated on construction; a corrupted key surfaces when
    /// [`DateKey::to_date`] is called during pruning.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The bucket key for the current local date
    pub fn today() -> Self {
        Self(Local::now().format(DATE_KEY_FORMAT).to_string())
    }

    /// Build a key from a civil date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_KEY_FORMAT).to_string())
    }

    /// Parse the key back into a civil date
    ///
    /// Fails on malformed keys; pruning treats that as a corrupted entry
    /// and skips it rather than crashing the sweep.
    pub fn to_date(&self) -> Result<NaiveDate, ParseError> {
        NaiveDate::parse_from_str(&self.0, DATE_KEY_FORMAT)
    }

    /// The raw key string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
