//! The transformer protocol: the three-operation interface every
//! composable reducer implements.

use std::marker::PhantomData;

use crate::transduce::step::Step;

/// The minimal interface of a composable reducer.
///
/// A transformer owns three operations:
///
/// - [`init`](Self::init) produces a fresh accumulator,
/// - [`step`](Self::step) folds one input into the accumulator, possibly
///   signalling early termination via [`Step::Done`],
/// - [`result`](Self::result) finalizes the accumulator, flushing any
///   buffered state.
///
/// Composed transformers hold a reference to exactly one downstream
/// transformer and forward `init` and `result` unless they need to
/// adjust the final value.
pub trait Transformer {
    /// The element type this transformer consumes.
    type Input;
    /// The accumulator threaded through every step.
    type Acc;
    /// The finalized value produced by [`result`](Self::result).
    type Output;

    /// Produces a fresh accumulator.
    fn init(&self) -> Self::Acc;

    /// Folds one input into the accumulator.
    fn step(&mut self, accumulator: Self::Acc, input: Self::Input) -> Step<Self::Acc>;

    /// Finalizes the accumulator.
    fn result(&mut self, accumulator: Self::Acc) -> Self::Output;
}

impl<X: Transformer + ?Sized> Transformer for Box<X> {
    type Input = X::Input;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> Self::Acc {
        (**self).init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: Self::Input) -> Step<Self::Acc> {
        (**self).step(accumulator, input)
    }

    fn result(&mut self, accumulator: Self::Acc) -> Self::Output {
        (**self).result(accumulator)
    }
}

/// A plain binary function wrapped as a transformer.
///
/// `step` is the function itself and `result` is identity. `init` is
/// unsupported: the function carries no notion of an empty accumulator,
/// and every entry point that uses this wrapper supplies one explicitly.
///
/// # Panics
///
/// [`init`](Transformer::init) panics; it is unreachable through the
/// crate's entry points because [`reduce`](crate::transduce::reduce)
/// always takes an explicit accumulator.
pub struct FnStep<F, Acc, T> {
    function: F,
    _marker: PhantomData<fn(Acc, T) -> Acc>,
}

/// Wraps a plain binary function as a transformer.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{fn_step, reduce};
///
/// let sum = reduce(fn_step(|total: i32, value: i32| total + value), 0, vec![1, 2, 3]);
/// assert_eq!(sum, 6);
/// ```
pub fn fn_step<F, Acc, T>(function: F) -> FnStep<F, Acc, T>
where
    F: FnMut(Acc, T) -> Acc,
{
    FnStep {
        function,
        _marker: PhantomData,
    }
}

impl<F, Acc, T> Transformer for FnStep<F, Acc, T>
where
    F: FnMut(Acc, T) -> Acc,
{
    type Input = T;
    type Acc = Acc;
    type Output = Acc;

    fn init(&self) -> Acc {
        panic!("init is not supported on a bare step function; supply an accumulator explicitly")
    }

    fn step(&mut self, accumulator: Acc, input: T) -> Step<Acc> {
        Step::Continue((self.function)(accumulator, input))
    }

    fn result(&mut self, accumulator: Acc) -> Acc {
        accumulator
    }
}

/// The innermost sink of a transducer pipeline: appends every input to a
/// `Vec`.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{build_vec, map, transduce};
///
/// let doubled = transduce(map(|n: i32| n * 2, build_vec()), vec![1, 2, 3]);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub struct BuildVec<T> {
    _marker: PhantomData<fn(T)>,
}

/// Creates the `Vec`-building sink.
#[must_use]
pub fn build_vec<T>() -> BuildVec<T> {
    BuildVec {
        _marker: PhantomData,
    }
}

impl<T> Transformer for BuildVec<T> {
    type Input = T;
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn init(&self) -> Vec<T> {
        Vec::new()
    }

    fn step(&mut self, mut accumulator: Vec<T>, input: T) -> Step<Vec<T>> {
        accumulator.push(input);
        Step::Continue(accumulator)
    }

    fn result(&mut self, accumulator: Vec<T>) -> Vec<T> {
        accumulator
    }
}
