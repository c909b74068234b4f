use crate::Result as DbErrorResult;

use wks_core::{UserId, WorkspaceId, WorkspaceMember};

use sqlx::SqlitePool;

pub struct WorkspaceMemberRepository {
    pool: SqlitePool,
}

impl WorkspaceMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// User ids of every member of the workspace, ascending.
    pub async fn member_user_ids(&self, workspace_id: WorkspaceId) -> DbErrorResult<Vec<UserId>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT user_id FROM workspace_members WHERE workspace_id = ? ORDER BY user_id",
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn is_member(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserId,
    ) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT 1 FROM workspace_members WHERE workspace_id = ? AND user_id = ?",
        )
        .bind(workspace_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }

    /// Add a member; re-adding an existing member updates the role.
    pub async fn add(&self, member: &WorkspaceMember) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO workspace_members (workspace_id, user_id, role, joined_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT (workspace_id, user_id) DO UPDATE SET role = excluded.role
              "#,
        )
        .bind(member.workspace_id)
        .bind(member.user_id)
        .bind(&member.role)
        .bind(member.joined_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
