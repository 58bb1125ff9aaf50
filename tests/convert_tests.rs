//! Unit tests for the natural transformations between Result and Maybe.

use descry::convert::{maybe_to_result, result_to_maybe};
use descry::maybe::{Maybe, just, nothing};
use descry::result::{Result, err, ok};
use rstest::rstest;

// =============================================================================
// Result -> Maybe
// =============================================================================

#[rstest]
fn ok_becomes_just() {
    let success: Result<String, i32> = ok(5);
    assert_eq!(result_to_maybe(success), just(5));
}

#[rstest]
fn err_becomes_nothing_discarding_the_error() {
    let failure: Result<String, i32> = err("some error".to_string());
    assert_eq!(result_to_maybe(failure), nothing());
}

// =============================================================================
// Maybe -> Result
// =============================================================================

#[rstest]
fn just_becomes_ok() {
    assert_eq!(maybe_to_result("absent", just(5)), ok(5));
}

#[rstest]
fn nothing_becomes_err_with_the_supplied_error() {
    let absent: Maybe<i32> = nothing();
    assert_eq!(maybe_to_result("absent", absent), err("absent"));
}

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
fn maybe_round_trip_is_lossless() {
    let present = just(5);
    assert_eq!(result_to_maybe(maybe_to_result("absent", present.clone())), present);

    let absent: Maybe<i32> = nothing();
    assert_eq!(result_to_maybe(maybe_to_result("absent", absent.clone())), absent);
}

#[rstest]
fn result_round_trip_loses_the_error_payload() {
    // Documented data loss: the original error is replaced by the supplied one.
    let failure: Result<&str, i32> = err("original");
    let back = maybe_to_result("replacement", result_to_maybe(failure));
    assert_eq!(back, err("replacement"));
}
