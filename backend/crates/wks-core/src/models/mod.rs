pub mod activity_entry;
pub mod live_presence;
pub mod presence_record;
pub mod user_presence;
pub mod workspace_member;
pub mod workspace_presence;

use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};

/// Identity of a user in the relational store.
pub type UserId = i64;

/// Identity of a workspace (tenant) in the relational store.
pub type WorkspaceId = i64;

/// Convert a stored Unix-millisecond value back into a timestamp.
#[track_caller]
pub fn timestamp_from_millis(value: i64) -> CoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value).ok_or_else(|| CoreError::InvalidTimestamp {
        value,
        location: ErrorLocation::from(Location::caller()),
    })
}
