use crate::repositories::{decode_json, decode_timestamp, encode_json};
use crate::Result as DbErrorResult;

use wks_core::{PresenceRecord, UserId, UserPresence, WorkspaceId, WorkspacePresence};

use serde_json::Value;
use sqlx::SqlitePool;

const TABLE: &str = "user_presence";

pub struct PresenceRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct WorkspacePresenceRow {
    user_id: i64,
    name: String,
    avatar_url: Option<String>,
    current_page: Option<String>,
    last_activity: i64,
    is_online: bool,
    session_data: Option<String>,
}

#[derive(sqlx::FromRow)]
struct UserPresenceRow {
    user_id: i64,
    workspace_id: i64,
    workspace_name: String,
    current_page: Option<String>,
    last_activity: i64,
    is_online: bool,
    session_data: Option<String>,
}

impl PresenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or overwrite the single row for `(user_id, workspace_id)`.
    ///
    /// Always marks the row online and stamps `last_activity` with now.
    pub async fn upsert_presence(
        &self,
        user_id: UserId,
        workspace_id: WorkspaceId,
        current_page: Option<&str>,
        session_data: Option<&Value>,
    ) -> DbErrorResult<PresenceRecord> {
        let record = PresenceRecord::touched(
            user_id,
            workspace_id,
            current_page.map(str::to_string),
            session_data.cloned(),
        );
        let last_activity = record.last_activity.timestamp_millis();
        let session_json = encode_json(record.session_data.as_ref());

        sqlx::query(
            r#"
              INSERT INTO user_presence (
                  user_id, workspace_id, current_page, last_activity, is_online, session_data
              ) VALUES (?, ?, ?, ?, 1, ?)
              ON CONFLICT (user_id, workspace_id) DO UPDATE SET
                  current_page = excluded.current_page,
                  last_activity = excluded.last_activity,
                  is_online = 1,
                  session_data = excluded.session_data
              "#,
        )
        .bind(user_id)
        .bind(workspace_id)
        .bind(&record.current_page)
        .bind(last_activity)
        .bind(session_json)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    /// All persisted rows of a workspace, most recently active first.
    pub async fn find_by_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> DbErrorResult<Vec<WorkspacePresence>> {
        let rows = sqlx::query_as::<_, WorkspacePresenceRow>(
            r#"
              SELECT p.user_id, u.name, u.avatar_url, p.current_page,
                     p.last_activity, p.is_online, p.session_data
              FROM user_presence p
              JOIN users u ON u.id = p.user_id
              WHERE p.workspace_id = ?
              ORDER BY p.last_activity DESC, p.id DESC
              "#,
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| -> DbErrorResult<WorkspacePresence> {
                Ok(WorkspacePresence {
                    user_id: r.user_id,
                    name: r.name,
                    avatar_url: r.avatar_url,
                    current_page: r.current_page,
                    last_activity: decode_timestamp(TABLE, r.last_activity)?,
                    is_online: r.is_online,
                    session_data: decode_json(TABLE, r.session_data)?,
                })
            })
            .collect()
    }

    /// The user's presence row, if one was ever recorded.
    ///
    /// No workspace filter is applied: a user present in several workspaces
    /// still yields a single row, the most recently active one.
    pub async fn find_by_user(&self, user_id: UserId) -> DbErrorResult<Option<UserPresence>> {
        let row = sqlx::query_as::<_, UserPresenceRow>(
            r#"
              SELECT p.user_id, p.workspace_id, w.name AS workspace_name, p.current_page,
                     p.last_activity, p.is_online, p.session_data
              FROM user_presence p
              JOIN workspaces w ON w.id = p.workspace_id
              WHERE p.user_id = ?
              ORDER BY p.last_activity DESC, p.id DESC
              LIMIT 1
              "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<UserPresence> {
            Ok(UserPresence {
                user_id: r.user_id,
                workspace_id: r.workspace_id,
                workspace_name: r.workspace_name,
                current_page: r.current_page,
                last_activity: decode_timestamp(TABLE, r.last_activity)?,
                is_online: r.is_online,
                session_data: decode_json(TABLE, r.session_data)?,
            })
        })
        .transpose()
    }
}
