pub mod activity_log_repository;
pub mod presence_repository;
pub mod workspace_member_repository;

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use serde_json::Value;

#[track_caller]
pub(crate) fn decode_timestamp(table: &'static str, millis: i64) -> DbErrorResult<DateTime<Utc>> {
    wks_core::models::timestamp_from_millis(millis)
        .map_err(|e| DbError::invalid_row(table, e.to_string()))
}

#[track_caller]
pub(crate) fn decode_json(table: &'static str, raw: Option<String>) -> DbErrorResult<Option<Value>> {
    raw.map(|text| serde_json::from_str(&text))
        .transpose()
        .map_err(|e| DbError::invalid_row(table, format!("invalid JSON: {e}")))
}

pub(crate) fn encode_json(value: Option<&Value>) -> Option<String> {
    value.map(Value::to_string)
}
