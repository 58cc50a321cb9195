//! Transducers: constructors that wrap a downstream transformer with an
//! element-wise behavior.
//!
//! Each constructor here takes its configuration plus a downstream
//! transformer and returns a new [`Transformer`]. Because the wrapping
//! happens outside any particular collection, the same pipeline runs
//! unchanged over a `Vec`, a pull-based source, or a host's own reduce.
//!
//! State such as a remaining count or a "still dropping" flag is mutable
//! per transformer instance; build a fresh pipeline per reduction.

use std::marker::PhantomData;

use crate::transduce::step::Step;
use crate::transduce::transformer::Transformer;

/// The transformer behind [`map`].
pub struct MapXf<A, F, X> {
    function: F,
    downstream: X,
    _marker: PhantomData<fn(A)>,
}

/// Applies a function to each input before stepping the downstream
/// transformer.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{build_vec, map, transduce};
///
/// let lengths = transduce(map(str::len, build_vec()), vec!["a", "bb", "ccc"]);
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
pub fn map<A, F, X>(function: F, downstream: X) -> MapXf<A, F, X>
where
    F: FnMut(A) -> X::Input,
    X: Transformer,
{
    MapXf {
        function,
        downstream,
        _marker: PhantomData,
    }
}

impl<A, F, X> Transformer for MapXf<A, F, X>
where
    F: FnMut(A) -> X::Input,
    X: Transformer,
{
    type Input = A;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: A) -> Step<X::Acc> {
        self.downstream.step(accumulator, (self.function)(input))
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        self.downstream.result(accumulator)
    }
}

/// The transformer behind [`filter`].
pub struct FilterXf<P, X> {
    predicate: P,
    downstream: X,
}

/// Forwards only the inputs the predicate accepts; rejected inputs leave
/// the accumulator unchanged.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{build_vec, filter, transduce};
///
/// let evens = transduce(filter(|n: &i32| n % 2 == 0, build_vec()), vec![1, 2, 3, 4]);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<P, X>(predicate: P, downstream: X) -> FilterXf<P, X>
where
    P: FnMut(&X::Input) -> bool,
    X: Transformer,
{
    FilterXf {
        predicate,
        downstream,
    }
}

impl<P, X> Transformer for FilterXf<P, X>
where
    P: FnMut(&X::Input) -> bool,
    X: Transformer,
{
    type Input = X::Input;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: X::Input) -> Step<X::Acc> {
        if (self.predicate)(&input) {
            self.downstream.step(accumulator, input)
        } else {
            Step::Continue(accumulator)
        }
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        self.downstream.result(accumulator)
    }
}

/// The transformer behind [`take`].
pub struct TakeXf<X> {
    remaining: usize,
    downstream: X,
}

/// Forwards the first `count` inputs, then signals early termination.
///
/// The last forwarded step's outcome is wrapped in [`Step::Done`] so the
/// driver stops immediately after it; `take(0, ..)` never forwards at
/// all and signals `Done` on the very first step.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{build_vec, iterated, take, transduce};
///
/// let capped = transduce(take(2, build_vec()), iterated(10..));
/// assert_eq!(capped, vec![10, 11]);
/// ```
pub fn take<X>(count: usize, downstream: X) -> TakeXf<X>
where
    X: Transformer,
{
    TakeXf {
        remaining: count,
        downstream,
    }
}

impl<X> Transformer for TakeXf<X>
where
    X: Transformer,
{
    type Input = X::Input;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: X::Input) -> Step<X::Acc> {
        if self.remaining == 0 {
            return Step::Done(accumulator);
        }
        self.remaining -= 1;
        let outcome = self.downstream.step(accumulator, input);
        if self.remaining == 0 {
            Step::Done(outcome.into_inner())
        } else {
            outcome
        }
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        self.downstream.result(accumulator)
    }
}

/// The transformer behind [`take_while`].
pub struct TakeWhileXf<P, X> {
    predicate: P,
    downstream: X,
}

/// Forwards inputs while the predicate holds.
///
/// The first failing input is never forwarded: it signals [`Step::Done`]
/// with the current accumulator, so iteration stops immediately after
/// the failing element is observed.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{build_vec, take_while, transduce};
///
/// let prefix = transduce(
///     take_while(|n: &i32| *n <= 3, build_vec()),
///     vec![1, 2, 3, 4, 3, 2, 1],
/// );
/// assert_eq!(prefix, vec![1, 2, 3]);
/// ```
pub fn take_while<P, X>(predicate: P, downstream: X) -> TakeWhileXf<P, X>
where
    P: FnMut(&X::Input) -> bool,
    X: Transformer,
{
    TakeWhileXf {
        predicate,
        downstream,
    }
}

impl<P, X> Transformer for TakeWhileXf<P, X>
where
    P: FnMut(&X::Input) -> bool,
    X: Transformer,
{
    type Input = X::Input;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: X::Input) -> Step<X::Acc> {
        if (self.predicate)(&input) {
            self.downstream.step(accumulator, input)
        } else {
            Step::Done(accumulator)
        }
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        self.downstream.result(accumulator)
    }
}

/// The transformer behind [`drop`].
pub struct DropXf<X> {
    remaining: usize,
    downstream: X,
}

/// Suppresses the first `count` inputs, then delegates every subsequent
/// step unchanged.
pub fn drop<X>(count: usize, downstream: X) -> DropXf<X>
where
    X: Transformer,
{
    DropXf {
        remaining: count,
        downstream,
    }
}

impl<X> Transformer for DropXf<X>
where
    X: Transformer,
{
    type Input = X::Input;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: X::Input) -> Step<X::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Step::Continue(accumulator);
        }
        self.downstream.step(accumulator, input)
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        self.downstream.result(accumulator)
    }
}

/// The transformer behind [`drop_while`].
pub struct DropWhileXf<P, X> {
    dropping: bool,
    predicate: P,
    downstream: X,
}

/// Suppresses inputs while the predicate holds, then delegates every
/// subsequent step unchanged, including later inputs the predicate would
/// have accepted.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{build_vec, drop_while, transduce};
///
/// let suffix = transduce(
///     drop_while(|n: &i32| *n <= 3, build_vec()),
///     vec![1, 2, 3, 4, 3, 2, 1],
/// );
/// assert_eq!(suffix, vec![4, 3, 2, 1]);
/// ```
pub fn drop_while<P, X>(predicate: P, downstream: X) -> DropWhileXf<P, X>
where
    P: FnMut(&X::Input) -> bool,
    X: Transformer,
{
    DropWhileXf {
        dropping: true,
        predicate,
        downstream,
    }
}

impl<P, X> Transformer for DropWhileXf<P, X>
where
    P: FnMut(&X::Input) -> bool,
    X: Transformer,
{
    type Input = X::Input;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: X::Input) -> Step<X::Acc> {
        if self.dropping {
            if (self.predicate)(&input) {
                return Step::Continue(accumulator);
            }
            self.dropping = false;
        }
        self.downstream.step(accumulator, input)
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        self.downstream.result(accumulator)
    }
}

/// The transformer behind [`all`].
pub struct AllXf<A, P, X> {
    predicate: P,
    all: bool,
    downstream: X,
    _marker: PhantomData<fn(A)>,
}

/// A terminal transformer: does every input satisfy the predicate?
///
/// The first counterexample determines the answer, steps `false` into
/// the downstream transformer, and short-circuits. If no counterexample
/// appears, `result` steps `true` downstream before finalizing.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{all, build_vec, transduce};
///
/// let answer = transduce(all(|n: &i32| *n > 0, build_vec()), vec![1, 2, 3]);
/// assert_eq!(answer, vec![true]);
/// ```
pub fn all<A, P, X>(predicate: P, downstream: X) -> AllXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = bool>,
{
    AllXf {
        predicate,
        all: true,
        downstream,
        _marker: PhantomData,
    }
}

impl<A, P, X> Transformer for AllXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = bool>,
{
    type Input = A;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: A) -> Step<X::Acc> {
        if (self.predicate)(&input) {
            Step::Continue(accumulator)
        } else {
            self.all = false;
            Step::Done(self.downstream.step(accumulator, false).into_inner())
        }
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        if self.all {
            let stepped = self.downstream.step(accumulator, true).into_inner();
            self.downstream.result(stepped)
        } else {
            self.downstream.result(accumulator)
        }
    }
}

/// The transformer behind [`any`].
pub struct AnyXf<A, P, X> {
    predicate: P,
    found: bool,
    downstream: X,
    _marker: PhantomData<fn(A)>,
}

/// A terminal transformer: does some input satisfy the predicate?
///
/// The first match determines the answer, steps `true` into the
/// downstream transformer, and short-circuits. If no match appears,
/// `result` steps `false` downstream before finalizing.
pub fn any<A, P, X>(predicate: P, downstream: X) -> AnyXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = bool>,
{
    AnyXf {
        predicate,
        found: false,
        downstream,
        _marker: PhantomData,
    }
}

impl<A, P, X> Transformer for AnyXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = bool>,
{
    type Input = A;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: A) -> Step<X::Acc> {
        if (self.predicate)(&input) {
            self.found = true;
            Step::Done(self.downstream.step(accumulator, true).into_inner())
        } else {
            Step::Continue(accumulator)
        }
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        if self.found {
            self.downstream.result(accumulator)
        } else {
            let stepped = self.downstream.step(accumulator, false).into_inner();
            self.downstream.result(stepped)
        }
    }
}

/// The transformer behind [`find`].
pub struct FindXf<P, X> {
    predicate: P,
    found: bool,
    downstream: X,
}

/// A terminal transformer: the first input satisfying the predicate.
///
/// Short-circuits on the first match, stepping `Some(input)` downstream;
/// when nothing matches, `result` steps `None` downstream before
/// finalizing.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::{build_vec, find, transduce};
///
/// let first_even = transduce(find(|n: &i32| n % 2 == 0, build_vec()), vec![1, 3, 4, 6]);
/// assert_eq!(first_even, vec![Some(4)]);
/// ```
pub fn find<A, P, X>(predicate: P, downstream: X) -> FindXf<P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = Option<A>>,
{
    FindXf {
        predicate,
        found: false,
        downstream,
    }
}

impl<A, P, X> Transformer for FindXf<P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = Option<A>>,
{
    type Input = A;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: A) -> Step<X::Acc> {
        if (self.predicate)(&input) {
            self.found = true;
            Step::Done(self.downstream.step(accumulator, Some(input)).into_inner())
        } else {
            Step::Continue(accumulator)
        }
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        if self.found {
            self.downstream.result(accumulator)
        } else {
            let stepped = self.downstream.step(accumulator, None).into_inner();
            self.downstream.result(stepped)
        }
    }
}

/// The transformer behind [`find_index`].
pub struct FindIndexXf<A, P, X> {
    predicate: P,
    index: usize,
    found: bool,
    downstream: X,
    _marker: PhantomData<fn(A)>,
}

/// A terminal transformer: the position of the first input satisfying
/// the predicate. Short-circuits on the first match.
pub fn find_index<A, P, X>(predicate: P, downstream: X) -> FindIndexXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = Option<usize>>,
{
    FindIndexXf {
        predicate,
        index: 0,
        found: false,
        downstream,
        _marker: PhantomData,
    }
}

impl<A, P, X> Transformer for FindIndexXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = Option<usize>>,
{
    type Input = A;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: A) -> Step<X::Acc> {
        let current = self.index;
        self.index += 1;
        if (self.predicate)(&input) {
            self.found = true;
            Step::Done(self.downstream.step(accumulator, Some(current)).into_inner())
        } else {
            Step::Continue(accumulator)
        }
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        if self.found {
            self.downstream.result(accumulator)
        } else {
            let stepped = self.downstream.step(accumulator, None).into_inner();
            self.downstream.result(stepped)
        }
    }
}

/// The transformer behind [`find_last`].
pub struct FindLastXf<A, P, X> {
    predicate: P,
    last: Option<A>,
    downstream: X,
}

/// A terminal transformer: the last input satisfying the predicate.
///
/// Last-biased, so it never short-circuits; the recorded match (or
/// `None`) is stepped downstream during `result`.
pub fn find_last<A, P, X>(predicate: P, downstream: X) -> FindLastXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = Option<A>>,
{
    FindLastXf {
        predicate,
        last: None,
        downstream,
    }
}

impl<A, P, X> Transformer for FindLastXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = Option<A>>,
{
    type Input = A;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: A) -> Step<X::Acc> {
        if (self.predicate)(&input) {
            self.last = Some(input);
        }
        Step::Continue(accumulator)
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        let stepped = self
            .downstream
            .step(accumulator, self.last.take())
            .into_inner();
        self.downstream.result(stepped)
    }
}

/// The transformer behind [`find_last_index`].
pub struct FindLastIndexXf<A, P, X> {
    predicate: P,
    index: usize,
    last: Option<usize>,
    downstream: X,
    _marker: PhantomData<fn(A)>,
}

/// A terminal transformer: the position of the last input satisfying the
/// predicate. Last-biased, so it never short-circuits; the recorded
/// position (or `None`) is stepped downstream during `result`.
pub fn find_last_index<A, P, X>(predicate: P, downstream: X) -> FindLastIndexXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = Option<usize>>,
{
    FindLastIndexXf {
        predicate,
        index: 0,
        last: None,
        downstream,
        _marker: PhantomData,
    }
}

impl<A, P, X> Transformer for FindLastIndexXf<A, P, X>
where
    P: FnMut(&A) -> bool,
    X: Transformer<Input = Option<usize>>,
{
    type Input = A;
    type Acc = X::Acc;
    type Output = X::Output;

    fn init(&self) -> X::Acc {
        self.downstream.init()
    }

    fn step(&mut self, accumulator: X::Acc, input: A) -> Step<X::Acc> {
        if (self.predicate)(&input) {
            self.last = Some(self.index);
        }
        self.index += 1;
        Step::Continue(accumulator)
    }

    fn result(&mut self, accumulator: X::Acc) -> X::Output {
        let stepped = self
            .downstream
            .step(accumulator, self.last.take())
            .into_inner();
        self.downstream.result(stepped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transduce::reduce::transduce;
    use crate::transduce::transformer::build_vec;

    #[test]
    fn map_composes_over_filter() {
        let pipeline = map(|n: i32| n * 10, filter(|n: &i32| n % 20 == 0, build_vec()));
        assert_eq!(transduce(pipeline, vec![1, 2, 3, 4]), vec![20, 40]);
    }

    #[test]
    fn take_zero_signals_done_without_forwarding() {
        let mut pipeline = take(0, build_vec::<i32>());
        let outcome = pipeline.step(Vec::new(), 1);
        assert!(outcome.is_done());
        assert!(outcome.into_inner().is_empty());
    }

    #[test]
    fn take_wraps_the_last_forwarded_step() {
        let mut pipeline = take(1, build_vec::<i32>());
        let outcome = pipeline.step(Vec::new(), 7);
        assert!(outcome.is_done());
        assert_eq!(outcome.into_inner(), vec![7]);
    }

    #[test]
    fn take_while_excludes_the_failing_element() {
        let mut pipeline = take_while(|n: &i32| *n < 5, build_vec());
        let accumulator = pipeline.step(Vec::new(), 3).into_inner();
        let outcome = pipeline.step(accumulator, 9);
        assert!(outcome.is_done());
        assert_eq!(outcome.into_inner(), vec![3]);
    }

    #[test]
    fn drop_suppresses_then_delegates() {
        let dropped = transduce(drop(2, build_vec()), vec![1, 2, 3, 4]);
        assert_eq!(dropped, vec![3, 4]);
    }

    #[test]
    fn all_counterexample_steps_false_downstream() {
        let answer = transduce(all(|n: &i32| *n < 3, build_vec()), vec![1, 2, 3, 4]);
        assert_eq!(answer, vec![false]);
    }

    #[test]
    fn find_last_emits_during_result() {
        let last_even = transduce(find_last(|n: &i32| n % 2 == 0, build_vec()), vec![2, 4, 5]);
        assert_eq!(last_even, vec![Some(4)]);
    }

    #[test]
    fn find_last_index_emits_none_when_unmatched() {
        let missing = transduce(
            find_last_index(|n: &i32| *n > 100, build_vec()),
            vec![1, 2, 3],
        );
        assert_eq!(missing, vec![None]);
    }
}
