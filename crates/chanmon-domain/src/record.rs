//! Record module - one logged channel change

use crate::ChannelAction;
use serde::{Deserialize, Serialize};

/// A single channel-lifecycle change
///
/// The `rendered` line is derived from the other four fields once, at
/// construction, and never recomputed. It is what gets mirrored to the
/// notification sink and printed by the admin log listing, so it must be
/// stable across persistence round trips.
///
/// # Examples
///
/// ```
/// use chanmon_domain::{ChannelAction, LogRecord};
///
/// let record = LogRecord::new("#test", Some("@tester".into()), ChannelAction::Delete, 12345);
/// assert_eq!(record.rendered, "12345: #test was delete'd by @tester");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Channel display name or identifier
    pub channel: String,

    /// Display name of the actor; None when the event carries no actor
    /// (delete events never do)
    pub user: Option<String>,

    /// What happened to the channel
    pub action: ChannelAction,

    /// Seconds since epoch, event-provided where available
    pub timestamp: i64,

    /// Precomputed human-readable line
    pub rendered: String,
}

impl LogRecord {
    /// Build a record, rendering the display line up front
    ///
    /// Pure: no side effects beyond construction. An absent actor renders
    /// as the literal text `None`, keeping rendered lines identical to
    /// what earlier deployments wrote to their logs.
    pub fn new(
        channel: impl Into<String>,
        user: Option<String>,
        action: ChannelAction,
        timestamp: i64,
    ) -> Self {
        let channel = channel.into();
        let actor = user.as_deref().unwrap_or("None");
        let rendered = format!("{}: {} was {}'d by {}", timestamp, channel, action, actor);
        Self {
            channel,
            user,
            action,
            timestamp,
            rendered,
        }
    }
}
