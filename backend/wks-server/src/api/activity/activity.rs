//! Activity log REST API handlers

use crate::{
    ActivityListResponse, ActivityResponse, ApiResult, CallerId, CreateActivityRequest,
    ListActivityQuery,
};

use wks_core::WorkspaceId;
use wks_db::ActivityLogRepository;
use wks_realtime::AppState;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

/// GET /activity
///
/// Feed across every workspace the caller belongs to.
pub async fn list_my_activity(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Query(query): Query<ListActivityQuery>,
) -> ApiResult<Json<ActivityListResponse>> {
    let (limit, offset) = query.page(&state.activity);

    let activities =
        ActivityLogRepository::find_for_member(&state.pool, user_id, limit, offset).await?;
    let total = ActivityLogRepository::count_for_member(&state.pool, user_id).await?;

    Ok(Json(ActivityListResponse {
        activities,
        total,
        limit,
        offset,
    }))
}

/// GET /workspaces/{workspace_id}/activity
pub async fn list_workspace_activity(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(workspace_id): Path<WorkspaceId>,
    Query(query): Query<ListActivityQuery>,
) -> ApiResult<Json<ActivityListResponse>> {
    state.presence.ensure_member(workspace_id, user_id).await?;

    let (limit, offset) = query.page(&state.activity);

    let activities =
        ActivityLogRepository::find_by_workspace(&state.pool, workspace_id, limit, offset).await?;
    let total = ActivityLogRepository::count_by_workspace(&state.pool, workspace_id).await?;

    Ok(Json(ActivityListResponse {
        activities,
        total,
        limit,
        offset,
    }))
}

/// POST /workspaces/{workspace_id}/activity
///
/// Appends the entry and pushes it to the workspace's online members.
pub async fn create_activity(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(workspace_id): Path<WorkspaceId>,
    Json(req): Json<CreateActivityRequest>,
) -> ApiResult<(StatusCode, Json<ActivityResponse>)> {
    state.presence.ensure_member(workspace_id, user_id).await?;

    let recorded = state
        .recorder
        .record(workspace_id, user_id, &req.action, req.details)
        .await?;

    log::info!(
        "Created activity {} in workspace {} via REST API ({} delivered)",
        recorded.entry.id,
        workspace_id,
        recorded.delivery.delivered
    );

    Ok((StatusCode::CREATED, Json(recorded.into())))
}
