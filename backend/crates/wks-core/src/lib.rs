pub mod error;
pub mod models;
pub mod presence;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::activity_entry::{ActivityEntry, NewActivity};
pub use models::live_presence::LivePresence;
pub use models::presence_record::PresenceRecord;
pub use models::user_presence::UserPresence;
pub use models::workspace_member::WorkspaceMember;
pub use models::workspace_presence::WorkspacePresence;
pub use models::{UserId, WorkspaceId};
pub use presence::merge::{MergedPresence, merge_presence};
pub use validation::{MAX_ACTION_LENGTH, MAX_PAGE_LENGTH, validate_action, validate_current_page};
