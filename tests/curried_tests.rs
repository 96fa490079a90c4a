//! Unit tests for the runtime curry engine.
//!
//! Exercises construction-time validation, the accumulation threshold,
//! edge cases around arity zero and empty applications, and chain
//! independence.

use currycomb::curry::{Arity, Curried, InvalidArityError, curry};
use rstest::rstest;

fn sum(arguments: Vec<i32>) -> i32 {
    arguments.into_iter().sum()
}

fn join(parts: Vec<String>) -> String {
    parts.join("-")
}

// =============================================================================
// Threshold Behavior
// =============================================================================

#[rstest]
fn one_argument_per_call_matches_direct_call() {
    let curried = curry(sum, 3).unwrap();

    let step = curried.call(1).partial().unwrap();
    let step = step.call(2).partial().unwrap();

    assert_eq!(step.call(3).complete(), Some(sum(vec![1, 2, 3])));
}

#[rstest]
fn all_arguments_in_one_call_matches_direct_call() {
    let curried = curry(sum, 3).unwrap();
    assert_eq!(curried.apply([1, 2, 3]).complete(), Some(6));
}

#[rstest]
fn uneven_partition_matches_direct_call() {
    let curried = curry(join, 3).unwrap();

    let step = curried.apply(["a".to_string(), "b".to_string()]).partial().unwrap();

    assert_eq!(step.call("c".to_string()).complete(), Some("a-b-c".to_string()));
}

#[rstest]
fn excess_arguments_pass_through() {
    let curried = curry(sum, 2).unwrap();

    // Three arguments against arity 2: all three reach the function.
    assert_eq!(curried.apply([1, 2, 3]).complete(), Some(6));
}

// =============================================================================
// Arity Zero and Empty Applications
// =============================================================================

#[rstest]
fn arity_zero_completes_on_first_application() {
    let curried = curry(|_: Vec<i32>| 42, 0).unwrap();
    assert_eq!(curried.apply([]).complete(), Some(42));
}

#[rstest]
fn arity_zero_still_forwards_supplied_arguments() {
    let curried = curry(sum, 0).unwrap();
    assert_eq!(curried.apply([5, 6]).complete(), Some(11));
}

#[rstest]
fn empty_application_never_completes_a_positive_arity_chain() {
    let curried = curry(sum, 2).unwrap();

    let step = curried.apply([]).partial().unwrap();
    let step = step.apply([]).partial().unwrap();

    assert_eq!(step.applied(), 0);
    assert_eq!(step.apply([1, 2]).complete(), Some(3));
}

// =============================================================================
// Chain Independence
// =============================================================================

#[rstest]
fn chains_from_one_wrapper_do_not_interfere() {
    let curried = curry(sum, 2).unwrap();

    let left = curried.call(1).partial().unwrap();
    let right = curried.call(10).partial().unwrap();

    assert_eq!(left.call(2).complete(), Some(3));
    assert_eq!(right.call(2).complete(), Some(12));
}

#[rstest]
fn continuation_is_reusable_after_completion() {
    let curried = curry(sum, 2).unwrap();
    let with_one = curried.call(1).partial().unwrap();

    assert_eq!(with_one.call(2).complete(), Some(3));
    assert_eq!(with_one.call(5).complete(), Some(6));
}

#[rstest]
fn cloned_continuations_stay_independent() {
    let curried = curry(sum, 3).unwrap();
    let with_one = curried.call(1).partial().unwrap();
    let cloned = with_one.clone();

    let extended = cloned.call(2).partial().unwrap();

    assert_eq!(with_one.applied(), 1);
    assert_eq!(extended.applied(), 2);
}

#[rstest]
fn construction_is_idempotent() {
    let first = curry(sum, 2).unwrap();
    let second = curry(sum, 2).unwrap();

    assert_eq!(
        first.apply([3, 4]).complete(),
        second.apply([3, 4]).complete()
    );
}

// =============================================================================
// Observers
// =============================================================================

#[rstest]
fn observers_track_accumulation() {
    let curried = curry(sum, 3).unwrap();
    assert_eq!(curried.arity(), 3);
    assert_eq!(curried.applied(), 0);
    assert_eq!(curried.remaining(), 3);

    let step = curried.call(7).partial().unwrap();
    assert_eq!(step.applied(), 1);
    assert_eq!(step.remaining(), 2);
}

#[rstest]
fn remaining_saturates_at_zero_for_arity_zero() {
    let curried: Curried<i32, i32> = Curried::new(sum, Arity::new(0));
    assert_eq!(curried.remaining(), 0);
}

// =============================================================================
// Construction-Time Validation
// =============================================================================

#[rstest]
#[case(2.0, 2)]
#[case(2.9, 2)]
#[case(0.5, 0)]
fn float_arity_is_floor_truncated(#[case] supplied: f64, #[case] expected: usize) {
    let curried = curry(sum, supplied).unwrap();
    assert_eq!(curried.arity(), expected);
}

#[rstest]
fn nan_arity_fails_fast() {
    assert!(matches!(
        curry(sum, f64::NAN),
        Err(InvalidArityError::NotFinite(value)) if value.is_nan()
    ));
}

#[rstest]
fn infinite_arity_fails_fast() {
    assert_eq!(
        curry(sum, f32::INFINITY).unwrap_err(),
        InvalidArityError::NotFinite(f64::INFINITY)
    );
}

#[rstest]
fn negative_arity_fails_fast() {
    assert_eq!(curry(sum, -1).unwrap_err(), InvalidArityError::Negative(-1.0));
}

// =============================================================================
// Error Propagation
// =============================================================================

#[rstest]
#[should_panic(expected = "wrapped function failed")]
fn wrapped_function_panics_propagate_unchanged() {
    let curried = curry(|_: Vec<i32>| -> i32 { panic!("wrapped function failed") }, 1).unwrap();
    let _ = curried.call(1);
}
