use crate::{CoreError, NewActivity};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_padded_action_when_new_activity_then_action_is_trimmed() {
    let activity = NewActivity::new(5, 7, "  task.updated ", Some(json!({"taskId": 3}))).unwrap();

    assert_that!(activity.action, eq("task.updated"));
    assert_that!(activity.workspace_id, eq(5));
    assert_that!(activity.user_id, eq(7));
}

#[test]
fn given_blank_action_when_new_activity_then_validation_error() {
    let result = NewActivity::new(5, 7, "   ", None);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_new_activity_when_into_entry_then_fields_are_carried_over() {
    let activity = NewActivity::new(1, 2, "note.created", Some(json!({"noteId": 9}))).unwrap();
    let created_at = activity.created_at;

    let entry = activity.into_entry(42);

    assert_that!(entry.id, eq(42));
    assert_that!(entry.action, eq("note.created"));
    assert_that!(entry.created_at, eq(created_at));
    assert_that!(entry.details, some(eq(&json!({"noteId": 9}))));
}

#[test]
fn given_entry_when_serialized_then_uses_camel_case_keys() {
    let entry = NewActivity::new(1, 2, "comment.added", None)
        .unwrap()
        .into_entry(3);

    let value = serde_json::to_value(&entry).unwrap();

    assert_that!(value["workspaceId"].as_i64(), some(eq(1)));
    assert_that!(value["userId"].as_i64(), some(eq(2)));
    assert!(value.get("createdAt").is_some());
}
