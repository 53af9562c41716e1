//! Action module - the four channel-lifecycle changes we log

use serde::{Deserialize, Serialize};
use std::fmt;

/// A channel-lifecycle change reported by the chat transport
///
/// Matches the four callbacks the transport delivers:
/// - Create: a channel was created
/// - Archive: a channel was archived
/// - Delete: a channel was deleted (no actor attached)
/// - Unarchive: a channel was restored from the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelAction {
    /// Channel was created
    Create,

    /// Channel was archived
    Archive,

    /// Channel was deleted
    Delete,

    /// Channel was unarchived
    Unarchive,
}

impl ChannelAction {
    /// Get the action name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelAction::Create => "create",
            ChannelAction::Archive => "archive",
            ChannelAction::Delete => "delete",
            ChannelAction::Unarchive => "unarchive",
        }
    }

    /// Parse an action from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "create" => Some(ChannelAction::Create),
            "archive" => Some(ChannelAction::Archive),
            "delete" => Some(ChannelAction::Delete),
            "unarchive" => Some(ChannelAction::Unarchive),
            _ => None,
        }
    }
}

impl fmt::Display for ChannelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChannelAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid action: {}", s))
    }
}
