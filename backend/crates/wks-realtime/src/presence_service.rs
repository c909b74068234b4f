use crate::{ConnectionRegistry, Metrics, PresenceUpdate, Result as WsErrorResult, WsError};

use wks_core::{
    MergedPresence, PresenceRecord, UserId, UserPresence, WorkspaceId, merge_presence,
    validate_current_page,
};
use wks_db::{PresenceRepository, WorkspaceMemberRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, error, warn};
use sqlx::SqlitePool;

/// Presence reads and writes over the store and the live registry
#[derive(Clone)]
pub struct PresenceService {
    pool: SqlitePool,
    registry: ConnectionRegistry,
    metrics: Metrics,
}

impl PresenceService {
    pub fn new(pool: SqlitePool, registry: ConnectionRegistry, metrics: Metrics) -> Self {
        Self {
            pool,
            registry,
            metrics,
        }
    }

    /// Persisted rows of the workspace with live registry state laid over them.
    pub async fn workspace_presence(
        &self,
        workspace_id: WorkspaceId,
    ) -> WsErrorResult<MergedPresence> {
        let persisted = PresenceRepository::new(self.pool.clone())
            .find_by_workspace(workspace_id)
            .await
            .inspect_err(|e| error!("Failed to read presence of workspace {workspace_id}: {e}"))?;

        let live = self.registry.list_by_workspace(workspace_id);
        let merged = merge_presence(persisted, &live);

        if merged.suppressed_live > 0 {
            debug!(
                "Workspace {workspace_id}: {} live user(s) without a persisted row left out",
                merged.suppressed_live
            );
        }
        self.metrics.presence_merged(merged.suppressed_live);

        Ok(merged)
    }

    /// Fails with `Forbidden` unless the user belongs to the workspace.
    pub async fn ensure_member(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserId,
    ) -> WsErrorResult<()> {
        let is_member = WorkspaceMemberRepository::new(self.pool.clone())
            .is_member(workspace_id, user_id)
            .await
            .inspect_err(|e| {
                error!("Failed to check membership of user {user_id} in workspace {workspace_id}: {e}")
            })?;
        if is_member {
            return Ok(());
        }

        warn!("User {user_id} is not a member of workspace {workspace_id}");
        Err(WsError::Forbidden {
            message: format!("User {user_id} is not a member of workspace {workspace_id}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Apply a member's presence report to the registry, then persist it.
    ///
    /// Non-members are rejected before either is touched. The registry is
    /// updated even when the store write fails.
    pub async fn update_presence(
        &self,
        user_id: UserId,
        update: &PresenceUpdate,
    ) -> WsErrorResult<PresenceRecord> {
        validate_current_page(update.current_page.as_deref())?;
        self.ensure_member(update.workspace_id, user_id).await?;

        self.registry
            .update_activity(user_id, update.workspace_id, update.current_page.clone());

        let record = PresenceRepository::new(self.pool.clone())
            .upsert_presence(
                user_id,
                update.workspace_id,
                update.current_page.as_deref(),
                update.activity.as_ref(),
            )
            .await
            .inspect_err(|e| {
                error!(
                    "Failed to persist presence of user {user_id} in workspace {}: {e}",
                    update.workspace_id
                )
            })?;

        Ok(record)
    }

    /// The user's most recently active persisted row.
    pub async fn user_presence(&self, user_id: UserId) -> WsErrorResult<UserPresence> {
        PresenceRepository::new(self.pool.clone())
            .find_by_user(user_id)
            .await
            .inspect_err(|e| error!("Failed to read presence of user {user_id}: {e}"))?
            .ok_or_else(|| WsError::NotFound {
                message: format!("No presence recorded for user {user_id}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn online_users(&self) -> Vec<UserId> {
        self.registry.list_online()
    }
}
