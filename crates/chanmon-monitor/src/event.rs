//! Inbound event contract from the chat transport

use chanmon_domain::ChannelAction;

/// A channel-lifecycle event as delivered by the transport
///
/// Only created events carry their own timestamp; the others are stamped
/// at handling time. Delete events never carry an actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEvent {
    /// What happened
    pub action: ChannelAction,

    /// Transport identifier of the channel
    pub channel_id: String,

    /// Transport identifier of the actor, when the event provides one
    pub actor_id: Option<String>,

    /// Event-provided timestamp (seconds since epoch), when present
    pub timestamp: Option<i64>,
}

impl ChannelEvent {
    /// A channel was created; the transport includes the creation time
    pub fn created(
        channel_id: impl Into<String>,
        creator_id: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            action: ChannelAction::Create,
            channel_id: channel_id.into(),
            actor_id: Some(creator_id.into()),
            timestamp: Some(timestamp),
        }
    }

    /// A channel was archived
    pub fn archived(channel_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            action: ChannelAction::Archive,
            channel_id: channel_id.into(),
            actor_id: Some(user_id.into()),
            timestamp: None,
        }
    }

    /// A channel was deleted; the transport does not say by whom
    pub fn deleted(channel_id: impl Into<String>) -> Self {
        Self {
            action: ChannelAction::Delete,
            channel_id: channel_id.into(),
            actor_id: None,
            timestamp: None,
        }
    }

    /// A channel was unarchived
    pub fn unarchived(channel_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            action: ChannelAction::Unarchive,
            channel_id: channel_id.into(),
            actor_id: Some(user_id.into()),
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_carries_actor_and_timestamp() {
        let event = ChannelEvent::created("C1", "U1", 1700000000);
        assert_eq!(event.action, ChannelAction::Create);
        assert_eq!(event.actor_id.as_deref(), Some("U1"));
        assert_eq!(event.timestamp, Some(1700000000));
    }

    #[test]
    fn test_deleted_has_no_actor() {
        let event = ChannelEvent::deleted("C1");
        assert_eq!(event.action, ChannelAction::Delete);
        assert_eq!(event.actor_id, None);
        assert_eq!(event.timestamp, None);
    }

    #[test]
    fn test_archive_unarchive_carry_actor_only() {
        let archived = ChannelEvent::archived("C1", "U2");
        assert_eq!(archived.action, ChannelAction::Archive);
        assert_eq!(archived.actor_id.as_deref(), Some("U2"));
        assert_eq!(archived.timestamp, None);

        let unarchived = ChannelEvent::unarchived("C1", "U2");
        assert_eq!(unarchived.action, ChannelAction::Unarchive);
    }
}
