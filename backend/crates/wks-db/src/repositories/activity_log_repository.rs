use crate::repositories::{decode_json, decode_timestamp, encode_json};
use crate::Result as DbErrorResult;

use wks_core::{ActivityEntry, NewActivity, UserId, WorkspaceId};

const TABLE: &str = "activity_log";

pub struct ActivityLogRepository;

#[derive(sqlx::FromRow)]
struct ActivityRow {
    id: i64,
    workspace_id: i64,
    user_id: i64,
    action: String,
    details: Option<String>,
    created_at: i64,
}

impl ActivityRow {
    fn into_entry(self) -> DbErrorResult<ActivityEntry> {
        Ok(ActivityEntry {
            id: self.id,
            workspace_id: self.workspace_id,
            user_id: self.user_id,
            action: self.action,
            details: decode_json(TABLE, self.details)?,
            created_at: decode_timestamp(TABLE, self.created_at)?,
        })
    }
}

impl ActivityLogRepository {
    /// Append an entry and return it with its assigned id.
    pub async fn create<'e, E>(executor: E, activity: NewActivity) -> DbErrorResult<ActivityEntry>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = activity.created_at.timestamp_millis();
        let details = encode_json(activity.details.as_ref());

        let result = sqlx::query(
            r#"
              INSERT INTO activity_log (workspace_id, user_id, action, details, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(activity.workspace_id)
        .bind(activity.user_id)
        .bind(&activity.action)
        .bind(details)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(activity.into_entry(result.last_insert_rowid()))
    }

    /// Newest-first page of a workspace's activity.
    pub async fn find_by_workspace<'e, E>(
        executor: E,
        workspace_id: WorkspaceId,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<Vec<ActivityEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
              SELECT id, workspace_id, user_id, action, details, created_at
              FROM activity_log
              WHERE workspace_id = ?
              ORDER BY created_at DESC, id DESC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(workspace_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(ActivityRow::into_entry).collect()
    }

    pub async fn count_by_workspace<'e, E>(
        executor: E,
        workspace_id: WorkspaceId,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM activity_log WHERE workspace_id = ?")
                .bind(workspace_id)
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    /// Caller-scoped feed: activity of every workspace the user belongs to.
    pub async fn find_for_member<'e, E>(
        executor: E,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<Vec<ActivityEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
              SELECT a.id, a.workspace_id, a.user_id, a.action, a.details, a.created_at
              FROM activity_log a
              JOIN workspace_members m ON m.workspace_id = a.workspace_id
              WHERE m.user_id = ?
              ORDER BY a.created_at DESC, a.id DESC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(ActivityRow::into_entry).collect()
    }

    pub async fn count_for_member<'e, E>(executor: E, user_id: UserId) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar(
            r#"
              SELECT COUNT(*)
              FROM activity_log a
              JOIN workspace_members m ON m.workspace_id = a.workspace_id
              WHERE m.user_id = ?
              "#,
        )
        .bind(user_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }
}
