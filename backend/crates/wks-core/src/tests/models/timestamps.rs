use crate::models::timestamp_from_millis;

use googletest::prelude::*;

#[test]
fn given_valid_millis_when_converted_then_round_trips() {
    let ts = timestamp_from_millis(1_700_000_000_123).unwrap();

    assert_that!(ts.timestamp_millis(), eq(1_700_000_000_123));
}

#[test]
fn given_out_of_range_millis_when_converted_then_error() {
    assert!(timestamp_from_millis(i64::MAX).is_err());
}
