use crate::ListActivityQuery;

use wks_config::ActivityConfig;

use googletest::prelude::*;

fn config() -> ActivityConfig {
    ActivityConfig {
        default_page_size: 50,
        max_page_size: 200,
    }
}

#[test]
fn given_no_parameters_when_paged_then_defaults() {
    let query = ListActivityQuery::default();

    assert_that!(query.page(&config()), eq((50, 0)));
}

#[test]
fn given_oversized_limit_when_paged_then_clamped_to_max() {
    let query = ListActivityQuery {
        limit: Some(10_000),
        offset: Some(20),
    };

    assert_that!(query.page(&config()), eq((200, 20)));
}

#[test]
fn given_negative_values_when_paged_then_floor_applied() {
    let query = ListActivityQuery {
        limit: Some(-5),
        offset: Some(-3),
    };

    assert_that!(query.page(&config()), eq((1, 0)));
}
