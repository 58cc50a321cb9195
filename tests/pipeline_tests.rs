#![cfg(feature = "pipeline")]
//! Integration tests for the composition combinators: macro and
//! value-level chaining, arity preservation, and the helpers.

use currycomb::args;
use currycomb::curry::curry3;
use currycomb::error::CompositionError;
use currycomb::pipeline::{
    UnaryFn, clamp, compose_unary, constant, flip, identity, pipe_curried, pipe_unary,
};
use currycomb::{compose, pipe};

fn increment(n: i32) -> i32 {
    n + 1
}

fn double(n: i32) -> i32 {
    n * 2
}

fn square(n: i32) -> i32 {
    n * n
}

// =============================================================================
// Macro Chaining
// =============================================================================

#[test]
fn pipe_applies_left_to_right() {
    // square(3) = 9, double(9) = 18, increment(18) = 19
    assert_eq!(pipe!(3, square, double, increment), 19);
}

#[test]
fn compose_applies_right_to_left() {
    let composed = compose!(increment, double, square);
    assert_eq!(composed(3), 19);
}

#[test]
fn pipe_converts_types_along_the_chain() {
    let length = pipe!(12345, |n: i32| n.to_string(), |s: String| s.len());
    assert_eq!(length, 5);
}

// =============================================================================
// Value-Level Chaining
// =============================================================================

#[test]
fn pipe_unary_and_compose_unary_are_reversals() {
    let stages = || {
        vec![
            UnaryFn::new(increment),
            UnaryFn::new(double),
            UnaryFn::new(square),
        ]
    };
    let mut reversed_stages = stages();
    reversed_stages.reverse();

    let piped = pipe_unary(stages()).unwrap();
    let composed = compose_unary(reversed_stages).unwrap();

    for input in [-3, 0, 7] {
        assert_eq!(piped.call(input), composed.call(input));
    }
}

#[test]
fn zero_stages_is_a_configuration_error() {
    assert_eq!(
        pipe_unary(Vec::<UnaryFn<i32>>::new()).unwrap_err(),
        CompositionError::Empty
    );
}

#[test]
fn chains_share_stages_through_clones() {
    let stage = UnaryFn::new(double);
    let twice = pipe_unary(vec![stage.clone(), stage]).unwrap();
    assert_eq!(twice.call(3), 12);
}

// =============================================================================
// Arity Preservation
// =============================================================================

#[test]
fn pipe_curried_keeps_the_first_stage_arity() {
    let add3 = curry3(|a: i32, b, c| a + b + c);
    let chained = pipe_curried(add3, vec![UnaryFn::new(double), UnaryFn::new(increment)]);

    assert_eq!(chained.arity(), 3);
    // (1 + 2 + 3) * 2 + 1
    assert_eq!(chained.apply(args![1, 2, 3]).done(), Some(13));
}

#[test]
fn pipe_curried_keeps_received_slots_and_gaps() {
    let add3 = curry3(|a: i32, b, c| a + b + c);
    let partial = add3.apply(args![__, 20, __]).partial().unwrap();
    let chained = pipe_curried(partial, vec![UnaryFn::new(double)]);

    assert_eq!(chained.arity(), 2);
    assert_eq!(chained.apply(args![1, 300]).done(), Some(642));
}

// =============================================================================
// Helpers
// =============================================================================

#[test]
fn identity_is_the_composition_unit() {
    assert_eq!(compose!(identity, double)(5), double(5));
    assert_eq!(compose!(double, identity)(5), double(5));
}

#[test]
fn constant_pins_the_result() {
    let always_one = constant::<_, i32>(1);
    assert_eq!(pipe!(99, always_one), 1);
}

#[test]
fn flip_swaps_binary_arguments() {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }
    assert_eq!(flip(subtract)(3, 10), 7);
}

#[test]
fn clamp_restricts_to_the_inclusive_range() {
    assert_eq!(clamp(0, 10, -5), Ok(0));
    assert_eq!(clamp(0, 10, 5), Ok(5));
    assert_eq!(clamp(0, 10, 15), Ok(10));
}

#[test]
fn clamp_rejects_an_inverted_range() {
    let error = clamp(10, 0, 5).unwrap_err();
    assert_eq!(
        format!("{error}"),
        "minimum 10 must not be greater than maximum 0"
    );
}
