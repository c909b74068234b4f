mod caller_id;
mod error;
mod list_activity_query;
