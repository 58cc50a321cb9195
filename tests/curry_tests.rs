#![cfg(feature = "curry")]
//! Integration tests for the currying engine: argument grouping,
//! placeholder substitution, and the arity bound.

use currycomb::args;
use currycomb::curry::{Applied, Curried, Slot, curry1, curry2, curry3, curry_n, n_ary};
use rstest::rstest;

fn add3(first: i32, second: i32, third: i32) -> i32 {
    first + second + third
}

fn complete(applied: Applied<i32, i32>) -> i32 {
    applied.done().expect("application should have completed")
}

fn pending(applied: Applied<i32, i32>) -> Curried<i32, i32> {
    applied.partial().expect("application should still be partial")
}

// =============================================================================
// Argument Grouping
// =============================================================================

#[test]
fn all_groupings_of_three_arguments_agree() {
    let expected = add3(1, 20, 300);

    let g = curry3(add3);
    assert_eq!(complete(g.apply(args![1, 20, 300])), expected);
    assert_eq!(
        complete(pending(pending(g.apply(args![1])).apply(args![20])).apply(args![300])),
        expected
    );
    assert_eq!(complete(pending(g.apply(args![1, 20])).apply(args![300])), expected);
    assert_eq!(complete(pending(g.apply(args![1])).apply(args![20, 300])), expected);
}

#[rstest]
#[case::gap_first(args![__, 20, 300], 1)]
#[case::gap_middle(args![1, __, 300], 20)]
#[case::gap_last(args![1, 20, __], 300)]
fn a_gap_in_any_position_defers_exactly_that_slot(
    #[case] slots: Vec<Slot<i32>>,
    #[case] deferred: i32,
) {
    let g = curry3(add3);
    let waiting = pending(g.apply(slots));
    assert_eq!(waiting.arity(), 1);
    assert_eq!(complete(waiting.apply(args![deferred])), add3(1, 20, 300));
}

#[test]
fn gaps_may_appear_more_than_once_per_call() {
    let g = curry3(add3);
    let waiting = pending(g.apply(args![__, 20, __]));
    assert_eq!(waiting.arity(), 2);
    assert_eq!(complete(waiting.apply(args![1, 300])), add3(1, 20, 300));
}

#[test]
fn gaps_accumulate_across_calls() {
    let g = curry3(add3);
    let one_gap = pending(g.apply(args![__, 20]));
    let two_gaps = pending(one_gap.apply(args![__, 300]));
    assert_eq!(two_gaps.arity(), 1);
    assert_eq!(complete(two_gaps.apply(args![1])), add3(1, 20, 300));
}

// =============================================================================
// Zero-Argument No-Op
// =============================================================================

#[test]
fn zero_argument_application_returns_an_equivalent_curried_function() {
    let g = curry2(|first: i32, second| first - second);
    let idle = pending(g.apply(args![]));
    let idle_again = pending(idle.apply(args![]));

    assert_eq!(idle_again.arity(), 2);
    assert_eq!(idle_again.apply(args![10, 4]).done(), Some(6));
    // The original is untouched by the no-op applications.
    assert_eq!(g.apply(args![10, 4]).done(), Some(6));
}

#[test]
fn curry1_no_args_and_gap_both_return_self() {
    let g = curry1(|n: i32| n * 2);
    assert_eq!(pending(g.apply(args![])).apply(args![21]).done(), Some(42));
    assert_eq!(pending(g.apply(args![__])).apply(args![21]).done(), Some(42));
}

// =============================================================================
// Variadic Targets and the Arity Bound
// =============================================================================

#[test]
fn extra_trailing_arguments_pass_through_to_the_target() {
    let counted = curry_n(2, |arguments: Vec<i32>| arguments.len()).unwrap();
    assert_eq!(counted.apply(args![1, 2, 3, 4]).done(), Some(4));
}

#[test]
fn specializations_match_the_general_engine() {
    let special = curry2(|first: i32, second| first * second);
    let general = curry_n(2, |arguments: Vec<i32>| arguments.iter().product()).unwrap();

    let special_result = pending(special.apply(args![6])).apply(args![7]).done();
    let general_result = pending(general.apply(args![6])).apply(args![7]).done();
    assert_eq!(special_result, general_result);
}

#[rstest]
#[case(11)]
#[case(99)]
fn arities_above_the_bound_are_configuration_errors(#[case] requested: usize) {
    let error = curry_n(requested, |arguments: Vec<i32>| arguments.len()).unwrap_err();
    assert_eq!(error.requested, requested);

    let wrapper_error = n_ary(requested, |arguments: Vec<i32>| arguments.len()).unwrap_err();
    assert_eq!(wrapper_error, error);
}

// =============================================================================
// Non-Copy Arguments
// =============================================================================

#[test]
fn owned_values_travel_through_gaps() {
    let join = curry2(|left: String, right: String| format!("{left}-{right}"));
    let suffixed = join.apply(args![__, String::from("tail")]).partial().unwrap();
    assert_eq!(
        suffixed.apply(args![String::from("head")]).done(),
        Some(String::from("head-tail"))
    );
}
