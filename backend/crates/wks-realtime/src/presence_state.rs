use crate::ServerEvent;

use wks_core::UserId;

/// Per-user online state, derived from the number of live connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceState {
    #[default]
    Offline,
    /// Holds the live connection count, always at least one
    Online(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceTransition {
    CameOnline,
    WentOffline,
}

/// A transition of one user, to be announced to every connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceChange {
    pub user_id: UserId,
    pub transition: PresenceTransition,
}

impl PresenceState {
    /// A connection was opened. Returns the next state and the transition, if any.
    pub fn add_connection(self) -> (Self, Option<PresenceTransition>) {
        match self {
            Self::Offline => (Self::Online(1), Some(PresenceTransition::CameOnline)),
            Self::Online(count) => (Self::Online(count + 1), None),
        }
    }

    /// A connection was closed. Removing from `Offline` is a no-op.
    pub fn remove_connection(self) -> (Self, Option<PresenceTransition>) {
        match self {
            Self::Offline => (Self::Offline, None),
            Self::Online(count) if count <= 1 => {
                (Self::Offline, Some(PresenceTransition::WentOffline))
            }
            Self::Online(count) => (Self::Online(count - 1), None),
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }

    pub fn connection_count(&self) -> usize {
        match self {
            Self::Offline => 0,
            Self::Online(count) => *count,
        }
    }
}

impl PresenceChange {
    pub fn new(user_id: UserId, transition: PresenceTransition) -> Self {
        Self {
            user_id,
            transition,
        }
    }

    pub fn to_event(&self) -> ServerEvent {
        match self.transition {
            PresenceTransition::CameOnline => ServerEvent::UserOnline {
                user_id: self.user_id,
            },
            PresenceTransition::WentOffline => ServerEvent::UserOffline {
                user_id: self.user_id,
            },
        }
    }
}
