//! Value-level composition: folding the binary composer over a runtime
//! list of stages.

use std::fmt;
use std::rc::Rc;

use crate::curry::Curried;
use crate::error::CompositionError;
use crate::transduce::{fn_step, iterated, reduce};

/// A boxed unary endofunction, the value-level unit of composition.
///
/// Cloning is cheap: clones share the underlying function.
pub struct UnaryFn<T> {
    function: Rc<dyn Fn(T) -> T>,
}

impl<T> Clone for UnaryFn<T> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for UnaryFn<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("UnaryFn").finish_non_exhaustive()
    }
}

impl<T: 'static> UnaryFn<T> {
    /// Wraps a unary function as a composable stage.
    pub fn new(function: impl Fn(T) -> T + 'static) -> Self {
        Self {
            function: Rc::new(function),
        }
    }

    /// Applies the function.
    pub fn call(&self, value: T) -> T {
        (self.function)(value)
    }

    /// The binary composer: applies `self`, then `next`.
    #[must_use]
    pub fn and_then(self, next: Self) -> Self {
        Self::new(move |value| next.call(self.call(value)))
    }
}

/// Chains unary stages left to right.
///
/// `pipe_unary(vec![f, g, h])` applies `f` first, then `g`, then `h`.
/// The chain is built by folding [`UnaryFn::and_then`] over the stages
/// with the reduce driver.
///
/// # Errors
///
/// [`CompositionError::Empty`] when no stages are supplied; a
/// composition needs at least one function.
///
/// # Examples
///
/// ```rust
/// use currycomb::pipeline::{UnaryFn, pipe_unary};
///
/// let chained = pipe_unary(vec![
///     UnaryFn::new(|n: i32| n + 1),
///     UnaryFn::new(|n: i32| n * 2),
/// ])
/// .unwrap();
/// assert_eq!(chained.call(5), 12);
/// ```
pub fn pipe_unary<T: 'static>(stages: Vec<UnaryFn<T>>) -> Result<UnaryFn<T>, CompositionError> {
    let mut stages = stages.into_iter();
    let first = stages.next().ok_or(CompositionError::Empty)?;
    Ok(reduce(fn_step(UnaryFn::and_then), first, iterated(stages)))
}

/// Chains unary stages right to left.
///
/// `compose_unary(stages)` is [`pipe_unary`] with the stage list
/// reversed beforehand.
///
/// # Errors
///
/// [`CompositionError::Empty`] when no stages are supplied.
pub fn compose_unary<T: 'static>(
    mut stages: Vec<UnaryFn<T>>,
) -> Result<UnaryFn<T>, CompositionError> {
    stages.reverse();
    pipe_unary(stages)
}

/// Chains a curried first stage with unary followers, preserving the
/// first stage's arity.
///
/// Only the first stage may be non-unary; every follower receives the
/// single value its predecessor produced. Received slots, placeholders
/// included, carry over unchanged.
///
/// # Examples
///
/// ```rust
/// use currycomb::args;
/// use currycomb::curry::curry2;
/// use currycomb::pipeline::{UnaryFn, pipe_curried};
///
/// let add = curry2(|first: i32, second| first + second);
/// let add_then_double = pipe_curried(add, vec![UnaryFn::new(|n: i32| n * 2)]);
///
/// assert_eq!(add_then_double.arity(), 2);
/// assert_eq!(add_then_double.apply(args![3, 4]).done(), Some(14));
/// ```
pub fn pipe_curried<T, R>(first: Curried<T, R>, rest: Vec<UnaryFn<R>>) -> Curried<T, R>
where
    T: Clone + 'static,
    R: 'static,
{
    match pipe_unary(rest) {
        Ok(chained) => first.then(move |value| chained.call(value)),
        // An empty follower list leaves the first stage as the whole chain.
        Err(CompositionError::Empty) => first,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_stage_pipes_unchanged() {
        let lone = pipe_unary(vec![UnaryFn::new(|n: i32| n + 1)]).unwrap();
        assert_eq!(lone.call(1), 2);
    }

    #[test]
    fn stages_apply_left_to_right() {
        let chained = pipe_unary(vec![
            UnaryFn::new(|n: i32| n * 2),
            UnaryFn::new(|n: i32| n + 1),
        ])
        .unwrap();
        // double first, then increment
        assert_eq!(chained.call(5), 11);
    }

    #[test]
    fn compose_applies_right_to_left() {
        let chained = compose_unary(vec![
            UnaryFn::new(|n: i32| n + 1),
            UnaryFn::new(|n: i32| n * 2),
        ])
        .unwrap();
        assert_eq!(chained.call(5), 11);
    }

    #[test]
    fn empty_stage_lists_are_rejected() {
        assert_eq!(
            pipe_unary(Vec::<UnaryFn<i32>>::new()).unwrap_err(),
            CompositionError::Empty
        );
        assert_eq!(
            compose_unary(Vec::<UnaryFn<i32>>::new()).unwrap_err(),
            CompositionError::Empty
        );
    }

    #[test]
    fn pipe_curried_without_followers_is_the_first_stage() {
        let add = crate::curry::curry2(|first: i32, second| first + second);
        let unchanged = pipe_curried(add, Vec::new());
        assert_eq!(unchanged.apply(crate::args![2, 3]).done(), Some(5));
    }
}
