//! Unit tests for the Result<E, A> container.
//!
//! Result represents a recoverable success-or-failure outcome:
//! - `Ok(A)`: carries a successfully produced value
//! - `Err(E)`: carries a descriptive failure value
//!
//! Operations never mutate in place; every call produces a new value.

use descry::result::{Result, err, ok, try_catch};
use rstest::rstest;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn result_ok_is_ok() {
    let success: Result<String, i32> = ok(5);
    assert!(success.is_ok());
    assert!(!success.is_err());
    assert_eq!(success.value(), Some(5));
}

#[rstest]
fn result_err_is_err() {
    let failure: Result<String, i32> = err("some error".to_string());
    assert!(failure.is_err());
    assert!(!failure.is_ok());
    assert_eq!(failure.error(), Some("some error".to_string()));
}

#[rstest]
fn result_reference_extraction() {
    let success: Result<String, i32> = ok(5);
    assert_eq!(success.value_ref(), Some(&5));
    assert_eq!(success.error_ref(), None);

    let failure: Result<String, i32> = err("some error".to_string());
    assert_eq!(failure.value_ref(), None);
    assert_eq!(failure.error_ref(), Some(&"some error".to_string()));
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn result_map_on_ok() {
    let success: Result<String, i32> = ok(4);
    assert_eq!(success.map(|x| x + 1), ok(5));
}

#[rstest]
fn result_map_on_err() {
    let failure: Result<String, i32> = err("some error".to_string());
    assert_eq!(failure.map(|x| x + 1), err("some error".to_string()));
}

#[rstest]
fn result_map_error_on_ok() {
    let success: Result<String, i32> = ok(5);
    assert_eq!(success.map_error(|e| e.to_uppercase()), ok(5));
}

#[rstest]
fn result_map_error_on_err() {
    let failure: Result<String, i32> = err("some error".to_string());
    assert_eq!(failure.map_error(|e| e.to_uppercase()), err("SOME ERROR".to_string()));
}

// =============================================================================
// Monadic Sequencing
// =============================================================================

#[rstest]
fn result_flat_map_chains_successes() {
    let half = |n: i32| -> Result<String, i32> {
        if n % 2 == 0 { ok(n / 2) } else { err(format!("{n} is odd")) }
    };

    let start: Result<String, i32> = ok(20);
    assert_eq!(start.flat_map(half).flat_map(half), ok(5));
}

#[rstest]
fn result_flat_map_short_circuits() {
    let half = |n: i32| -> Result<String, i32> {
        if n % 2 == 0 { ok(n / 2) } else { err(format!("{n} is odd")) }
    };

    let start: Result<String, i32> = ok(10);
    // The second half never runs; the first failure passes through verbatim.
    assert_eq!(start.flat_map(half).flat_map(half), err("5 is odd".to_string()));
}

// =============================================================================
// Applicative Application
// =============================================================================

#[rstest]
fn result_apply_on_two_successes() {
    let function: Result<String, _> = ok(|n: i32| n + 1);
    assert_eq!(function.apply(ok(41)), ok(42));
}

#[rstest]
fn result_apply_function_error_wins() {
    let function: Result<String, fn(i32) -> i32> = err("function side".to_string());
    let applied: Result<String, i32> = function.apply(err("argument side".to_string()));
    assert_eq!(applied, err("function side".to_string()));
}

#[rstest]
fn result_apply_argument_error_propagates() {
    let function: Result<String, _> = ok(|n: i32| n + 1);
    assert_eq!(function.apply(err("argument side".to_string())), err("argument side".to_string()));
}

// =============================================================================
// Case Analysis and Defaults
// =============================================================================

#[rstest]
fn result_fold_handles_both_cases() {
    let success: Result<String, i32> = ok(5);
    assert_eq!(success.fold(|e| e, |n| n.to_string()), "5");

    let failure: Result<String, i32> = err("some error".to_string());
    assert_eq!(failure.fold(|e| e, |n| n.to_string()), "some error");
}

#[rstest]
fn result_with_default() {
    let success: Result<String, i32> = ok(5);
    assert_eq!(success.with_default(0), 5);

    let failure: Result<String, i32> = err("some error".to_string());
    assert_eq!(failure.with_default(0), 0);
}

// =============================================================================
// Panic Boundary
// =============================================================================

#[rstest]
fn try_catch_wraps_a_normal_return() {
    assert_eq!(try_catch(|| 6 * 7), ok(42));
}

#[rstest]
fn try_catch_converts_a_str_panic() {
    let faulted: Result<String, i32> = try_catch(|| panic!("indexing into nothing"));
    assert_eq!(faulted, err("indexing into nothing".to_string()));
}

#[rstest]
fn try_catch_converts_a_formatted_panic() {
    let faulted: Result<String, i32> = try_catch(|| panic!("{} is missing", "key"));
    assert_eq!(faulted, err("key is missing".to_string()));
}
