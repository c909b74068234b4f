use crate::{LivePresence, WorkspacePresence, merge_presence};

use chrono::{DateTime, Duration, Utc};
use googletest::prelude::*;

fn persisted(user_id: i64, page: &str, is_online: bool, at: DateTime<Utc>) -> WorkspacePresence {
    WorkspacePresence {
        user_id,
        name: format!("User {user_id}"),
        avatar_url: None,
        current_page: Some(page.to_string()),
        last_activity: at,
        is_online,
        session_data: None,
    }
}

fn live(user_id: i64, page: &str, at: DateTime<Utc>) -> LivePresence {
    LivePresence {
        user_id,
        workspace_id: 1,
        current_page: Some(page.to_string()),
        last_activity: at,
    }
}

#[test]
fn given_no_live_entries_when_merged_then_persisted_rows_are_returned_unchanged() {
    let now = Utc::now();
    let rows = vec![
        persisted(1, "/board", true, now),
        persisted(2, "/notes", false, now - Duration::minutes(5)),
    ];

    let merged = merge_presence(rows.clone(), &[]);

    assert_that!(merged.users, eq(&rows));
    assert_that!(merged.online_count, eq(1));
    assert_that!(merged.total_count, eq(2));
}

#[test]
fn given_live_entry_for_persisted_user_when_merged_then_live_state_wins() {
    let now = Utc::now();
    let earlier = now - Duration::hours(1);
    let rows = vec![persisted(2, "/old", false, earlier)];

    let merged = merge_presence(rows, &[live(2, "/tasks/7", now)]);

    assert_that!(merged.users, len(eq(1)));
    assert_that!(merged.users[0].current_page, some(eq("/tasks/7")));
    assert_that!(merged.users[0].last_activity, eq(now));
    assert_that!(merged.users[0].is_online, eq(true));
    assert_that!(merged.users[0].name, eq("User 2"));
    assert_that!(merged.online_count, eq(1));
}

#[test]
fn given_live_only_user_when_merged_then_user_is_suppressed() {
    let now = Utc::now();
    let rows = vec![persisted(1, "/board", false, now)];

    let merged = merge_presence(rows, &[live(99, "/board", now)]);

    assert_that!(merged.total_count, eq(1));
    assert_that!(merged.users[0].user_id, eq(1));
    assert_that!(merged.suppressed_live, eq(1));
    assert_that!(merged.online_count, eq(0));
}

#[test]
fn given_live_overwrite_when_merged_then_persisted_order_is_kept() {
    let now = Utc::now();
    let rows = vec![
        persisted(1, "/a", false, now),
        persisted(2, "/b", false, now - Duration::minutes(1)),
        persisted(3, "/c", false, now - Duration::minutes(2)),
    ];

    let merged = merge_presence(rows, &[live(3, "/c2", now + Duration::seconds(5))]);

    let order: Vec<i64> = merged.users.iter().map(|u| u.user_id).collect();
    assert_that!(order, eq(&vec![1_i64, 2, 3]));
    assert_that!(merged.users[2].is_online, eq(true));
}

#[test]
fn given_same_inputs_when_merged_twice_then_results_are_identical() {
    let now = Utc::now();
    let rows = vec![persisted(1, "/a", true, now), persisted(2, "/b", false, now)];
    let live_entries = vec![live(2, "/b2", now)];

    let first = merge_presence(rows.clone(), &live_entries);
    let second = merge_presence(rows, &live_entries);

    assert_that!(first, eq(&second));
}

#[test]
fn given_any_inputs_when_merged_then_online_count_never_exceeds_total() {
    let now = Utc::now();
    let rows = vec![persisted(1, "/a", true, now), persisted(2, "/b", true, now)];
    let live_entries = vec![live(1, "/x", now), live(2, "/y", now), live(3, "/z", now)];

    let merged = merge_presence(rows, &live_entries);

    assert!(merged.online_count <= merged.total_count);
    assert_that!(merged.online_count, eq(2));
}
