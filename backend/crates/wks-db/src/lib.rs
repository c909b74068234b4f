pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::activity_log_repository::ActivityLogRepository;
pub use repositories::presence_repository::PresenceRepository;
pub use repositories::workspace_member_repository::WorkspaceMemberRepository;
