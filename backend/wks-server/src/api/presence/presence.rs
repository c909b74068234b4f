//! Presence REST API handlers

use crate::{
    ApiResult, CallerId, OnlineUsersResponse, UpdatePresenceRequest, UpdatePresenceResponse,
    UserPresenceResponse, WorkspacePresenceResponse,
};

use wks_core::{UserId, WorkspaceId};
use wks_realtime::AppState;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /presence/workspace/{workspace_id}
///
/// Only members of the workspace may read its presence.
pub async fn get_workspace_presence(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(workspace_id): Path<WorkspaceId>,
) -> ApiResult<Json<WorkspacePresenceResponse>> {
    state.presence.ensure_member(workspace_id, user_id).await?;
    let merged = state.presence.workspace_presence(workspace_id).await?;

    Ok(Json(WorkspacePresenceResponse::new(workspace_id, merged)))
}

/// POST /presence/update
pub async fn update_presence(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Json(req): Json<UpdatePresenceRequest>,
) -> ApiResult<Json<UpdatePresenceResponse>> {
    let presence = state
        .presence
        .update_presence(user_id, &req.into())
        .await?;

    log::debug!(
        "Presence of user {} updated in workspace {} via REST API",
        user_id,
        presence.workspace_id
    );

    Ok(Json(UpdatePresenceResponse {
        success: true,
        presence,
    }))
}

/// GET /presence/users/{user_id}
pub async fn get_user_presence(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> ApiResult<Json<UserPresenceResponse>> {
    let presence = state.presence.user_presence(user_id).await?;

    Ok(Json(UserPresenceResponse { presence }))
}

/// GET /presence/online
pub async fn list_online_users(State(state): State<AppState>) -> Json<OnlineUsersResponse> {
    Json(state.presence.online_users().into())
}
