//! Reconciles persisted presence with the live connection registry.
//!
//! The store is authoritative for display fields and for the last known page
//! of users without a live connection. The registry is authoritative for who
//! is online right now.

use crate::{LivePresence, UserId, WorkspacePresence};

use std::collections::HashMap;

use serde::Serialize;

/// Unified presence view for one workspace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPresence {
    pub users: Vec<WorkspacePresence>,
    pub online_count: usize,
    pub total_count: usize,
    /// Live users that had no persisted row and were left out of `users`.
    #[serde(skip)]
    pub suppressed_live: usize,
}

/// Lay live registry entries over persisted rows.
///
/// Output order is the persisted order; a live overwrite does not re-sort.
/// A live entry whose user has no persisted row is not synthesized.
pub fn merge_presence(persisted: Vec<WorkspacePresence>, live: &[LivePresence]) -> MergedPresence {
    let index: HashMap<UserId, usize> = persisted
        .iter()
        .enumerate()
        .map(|(position, row)| (row.user_id, position))
        .collect();

    let mut users = persisted;
    let mut suppressed_live = 0;

    for entry in live {
        match index.get(&entry.user_id) {
            Some(&position) => {
                let merged = &mut users[position];
                merged.current_page = entry.current_page.clone();
                merged.last_activity = entry.last_activity;
                merged.is_online = true;
            }
            None => suppressed_live += 1,
        }
    }

    let online_count = users.iter().filter(|u| u.is_online).count();
    let total_count = users.len();

    MergedPresence {
        users,
        online_count,
        total_count,
        suppressed_live,
    }
}
