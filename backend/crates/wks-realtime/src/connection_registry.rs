use crate::{ConnectionEntry, ConnectionId, PresenceChange, PresenceState, ServerEvent};

use wks_core::{LivePresence, UserId, WorkspaceId};

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use log::{debug, info};
use tokio::sync::mpsc;

/// Process-local map of online identities to their live connections.
///
/// Every operation is synchronous and takes the lock for its whole duration,
/// so no caller ever observes a half-applied mutation. Clones share state.
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

#[derive(Default)]
struct RegistryInner {
    connections: HashMap<ConnectionId, ConnectionEntry>,
    /// Only users with at least one connection are present
    users: HashMap<UserId, PresenceState>,
    next_sequence: u64,
}

impl RegistryInner {
    fn next_sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }

    fn acquire(&mut self, user_id: UserId) -> Option<PresenceChange> {
        let state = self.users.entry(user_id).or_default();
        let (next, transition) = state.add_connection();
        *state = next;
        transition.map(|t| PresenceChange::new(user_id, t))
    }

    fn release(&mut self, user_id: UserId) -> Option<PresenceChange> {
        let Entry::Occupied(mut slot) = self.users.entry(user_id) else {
            return None;
        };

        let (next, transition) = slot.get().remove_connection();
        if next.is_online() {
            slot.insert(next);
        } else {
            slot.remove();
        }
        transition.map(|t| PresenceChange::new(user_id, t))
    }
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner::default())),
        }
    }

    // A panic while holding the lock cannot leave the maps inconsistent:
    // every mutation below completes before any call that could panic.
    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Track a connection for `user_id`.
    ///
    /// Returns the transitions to announce: `CameOnline` on the user's first
    /// connection. Re-registering a known id overwrites its metadata; if the
    /// id moves to another user the old owner may also go offline.
    pub fn register(
        &self,
        connection_id: ConnectionId,
        user_id: UserId,
        sender: mpsc::Sender<ServerEvent>,
    ) -> Vec<PresenceChange> {
        let mut inner = self.write();
        let mut changes = Vec::new();

        let previous_owner = inner
            .connections
            .remove(&connection_id)
            .map(|entry| entry.user_id);

        if previous_owner != Some(user_id) {
            if let Some(owner) = previous_owner {
                changes.extend(inner.release(owner));
            }
            changes.extend(inner.acquire(user_id));
        }

        let now = Utc::now();
        let sequence = inner.next_sequence();
        inner.connections.insert(
            connection_id,
            ConnectionEntry {
                connection_id,
                user_id,
                workspace_id: None,
                current_page: None,
                connected_at: now,
                last_activity: now,
                sender,
                sequence,
            },
        );

        info!(
            "Registered connection {connection_id} for user {user_id} ({} total)",
            inner.connections.len()
        );

        changes
    }

    /// Forget a connection. Unknown ids are a no-op.
    ///
    /// Returns `WentOffline` when this was the user's last connection.
    pub fn unregister(&self, connection_id: ConnectionId) -> Option<PresenceChange> {
        let mut inner = self.write();

        let entry = inner.connections.remove(&connection_id)?;
        let change = inner.release(entry.user_id);

        info!(
            "Unregistered connection {connection_id} of user {} ({} total remaining)",
            entry.user_id,
            inner.connections.len()
        );

        change
    }

    /// Stamp every connection of `user_id` with the reported workspace and page.
    ///
    /// Returns how many connections were updated.
    pub fn update_activity(
        &self,
        user_id: UserId,
        workspace_id: WorkspaceId,
        current_page: Option<String>,
    ) -> usize {
        let mut inner = self.write();
        let now = Utc::now();
        let sequence = inner.next_sequence();

        let mut updated = 0;
        for entry in inner.connections.values_mut() {
            if entry.user_id == user_id {
                entry.workspace_id = Some(workspace_id);
                entry.current_page = current_page.clone();
                entry.last_activity = now;
                entry.sequence = sequence;
                updated += 1;
            }
        }

        debug!("Updated activity of user {user_id} on {updated} connection(s)");
        updated
    }

    /// Distinct users with at least one live connection, ascending.
    pub fn list_online(&self) -> Vec<UserId> {
        let inner = self.read();
        let mut users: Vec<UserId> = inner.users.keys().copied().collect();
        users.sort_unstable();
        users
    }

    /// One summary per online user whose most recent connection carries
    /// `workspace_id`, ordered by user id.
    pub fn list_by_workspace(&self, workspace_id: WorkspaceId) -> Vec<LivePresence> {
        let inner = self.read();

        let mut latest: HashMap<UserId, &ConnectionEntry> = HashMap::new();
        for entry in inner.connections.values() {
            latest
                .entry(entry.user_id)
                .and_modify(|current| {
                    if (entry.last_activity, entry.sequence)
                        > (current.last_activity, current.sequence)
                    {
                        *current = entry;
                    }
                })
                .or_insert(entry);
        }

        let mut live: Vec<LivePresence> = latest
            .into_values()
            .filter(|entry| entry.workspace_id == Some(workspace_id))
            .map(|entry| LivePresence {
                user_id: entry.user_id,
                workspace_id,
                current_page: entry.current_page.clone(),
                last_activity: entry.last_activity,
            })
            .collect();
        live.sort_unstable_by_key(|p| p.user_id);
        live
    }

    /// Outbound queues of every connection held by `user_id`.
    pub fn senders_for(&self, user_id: UserId) -> Vec<(ConnectionId, mpsc::Sender<ServerEvent>)> {
        let inner = self.read();
        inner
            .connections
            .values()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| (entry.connection_id, entry.sender.clone()))
            .collect()
    }

    /// Outbound queues of every registered connection.
    pub fn all_senders(&self) -> Vec<(ConnectionId, mpsc::Sender<ServerEvent>)> {
        let inner = self.read();
        inner
            .connections
            .values()
            .map(|entry| (entry.connection_id, entry.sender.clone()))
            .collect()
    }

    pub fn get(&self, connection_id: ConnectionId) -> Option<ConnectionEntry> {
        self.read().connections.get(&connection_id).cloned()
    }

    pub fn state_of(&self, user_id: UserId) -> PresenceState {
        self.read()
            .users
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn is_online(&self, user_id: UserId) -> bool {
        self.read().users.contains_key(&user_id)
    }

    pub fn connection_count(&self) -> usize {
        self.read().connections.len()
    }

    pub fn online_user_count(&self) -> usize {
        self.read().users.len()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
