pub mod online_users_response;
pub mod presence;
pub mod update_presence_request;
pub mod update_presence_response;
pub mod user_presence_response;
pub mod workspace_presence_response;
