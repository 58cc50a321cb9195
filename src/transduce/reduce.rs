//! The reduce driver: walking collections under a transformer with
//! early-termination support.

use crate::transduce::step::Step;
use crate::transduce::transformer::{BuildVec, Transformer, build_vec};

/// A collection the reduce driver can walk.
///
/// `reduce_steps` threads the accumulator through the step function and
/// honors the [`Step::Done`] signal: once a step returns `Done`, the
/// implementation must stop and hand back the carried accumulator.
///
/// Two shapes are provided here: an indexable sequence ([`Vec`], walked
/// in order) and a pull-based source ([`Iterated`], drained via
/// `next()`). A type may also implement the trait directly, which is the
/// delegated-reduce case: such an implementation is itself responsible
/// for honoring `Done`, and the driver does **not** forcibly propagate
/// the signal beyond it.
pub trait Reducible<T> {
    /// Folds the step function over the collection, stopping on
    /// [`Step::Done`].
    fn reduce_steps<Acc, F>(self, init: Acc, step: F) -> Acc
    where
        F: FnMut(Acc, T) -> Step<Acc>;
}

impl<T> Reducible<T> for Vec<T> {
    fn reduce_steps<Acc, F>(self, init: Acc, mut step: F) -> Acc
    where
        F: FnMut(Acc, T) -> Step<Acc>,
    {
        let mut accumulator = init;
        for item in self {
            match step(accumulator, item) {
                Step::Continue(next) => accumulator = next,
                Step::Done(finished) => return finished,
            }
        }
        accumulator
    }
}

/// A pull-based source: the driver drains it one `next()` at a time.
///
/// Because elements are pulled lazily, a short-circuiting transformer
/// bounds how much of the source is ever consumed, so an unbounded
/// iterator is a valid source under, say, [`take`](crate::transduce::take).
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{build_vec, iterated, take, transduce};
///
/// // An endless source, cut short by the pipeline.
/// let firsts = transduce(take(3, build_vec()), iterated(1..));
/// assert_eq!(firsts, vec![1, 2, 3]);
/// ```
pub struct Iterated<I> {
    source: I,
}

/// Wraps any iterable as a pull-based [`Reducible`] source.
pub fn iterated<I>(iterable: I) -> Iterated<I::IntoIter>
where
    I: IntoIterator,
{
    Iterated {
        source: iterable.into_iter(),
    }
}

impl<I> Reducible<I::Item> for Iterated<I>
where
    I: Iterator,
{
    fn reduce_steps<Acc, F>(mut self, init: Acc, mut step: F) -> Acc
    where
        F: FnMut(Acc, I::Item) -> Step<Acc>,
    {
        let mut accumulator = init;
        loop {
            let Some(item) = self.source.next() else {
                return accumulator;
            };
            match step(accumulator, item) {
                Step::Continue(next) => accumulator = next,
                Step::Done(finished) => return finished,
            }
        }
    }
}

/// Reduces a collection under a transformer with an explicit accumulator.
///
/// The driver checks for [`Step::Done`] after every step; on the signal
/// it stops iterating and unwraps the carried accumulator. `result` is
/// called exactly once, including on the short-circuit path.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{fn_step, reduce};
///
/// let product = reduce(fn_step(|total: i32, value: i32| total * value), 1, vec![2, 3, 4]);
/// assert_eq!(product, 24);
/// ```
pub fn reduce<X, C>(mut transformer: X, init: X::Acc, collection: C) -> X::Output
where
    X: Transformer,
    C: Reducible<X::Input>,
{
    let accumulator =
        collection.reduce_steps(init, |accumulator, input| transformer.step(accumulator, input));
    transformer.result(accumulator)
}

/// Reduces a collection under a transformer, using the transformer's own
/// `init` for the starting accumulator.
pub fn transduce<X, C>(transformer: X, collection: C) -> X::Output
where
    X: Transformer,
    C: Reducible<X::Input>,
{
    let init = transformer.init();
    reduce(transformer, init, collection)
}

/// Runs a transducer over a collection, collecting into a `Vec`.
///
/// The transducer is any constructor that accepts the [`build_vec`] sink
/// as its downstream transformer.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{into_vec, map, take};
///
/// let capped = into_vec(|sink| map(|n: i32| n + 1, take(2, sink)), vec![1, 2, 3, 4]);
/// assert_eq!(capped, vec![2, 3]);
/// ```
pub fn into_vec<X, C, U>(transducer: impl FnOnce(BuildVec<U>) -> X, collection: C) -> Vec<U>
where
    X: Transformer<Acc = Vec<U>, Output = Vec<U>>,
    C: Reducible<X::Input>,
{
    transduce(transducer(build_vec()), collection)
}
