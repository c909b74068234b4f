pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    activity::{
        activity::{create_activity, list_my_activity, list_workspace_activity},
        activity_list_response::ActivityListResponse,
        activity_response::ActivityResponse,
        create_activity_request::CreateActivityRequest,
        list_activity_query::ListActivityQuery,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller_id::{CallerId, USER_ID_HEADER},
    presence::{
        online_users_response::OnlineUsersResponse,
        presence::{get_user_presence, get_workspace_presence, list_online_users, update_presence},
        update_presence_request::UpdatePresenceRequest,
        update_presence_response::UpdatePresenceResponse,
        user_presence_response::UserPresenceResponse,
        workspace_presence_response::WorkspacePresenceResponse,
    },
};

pub use crate::routes::{build_router, metrics_router};
