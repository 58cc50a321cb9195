//! The step outcome: continue or stop.

/// The outcome of one transformer step.
///
/// `Done` is the boxed short-circuit signal: it tells the reduce driver
/// to stop iterating and treat the carried accumulator as final. Because
/// it is a tagged union rather than a flagged wrapper, the driver's
/// "check after every step" rule is an exhaustive match.
///
/// # Examples
///
/// ```rust
/// use currycomb::transduce::Step;
///
/// let outcome: Step<i32> = Step::Done(7);
/// assert!(outcome.is_done());
/// assert_eq!(outcome.into_inner(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<Acc> {
    /// Keep iterating with this accumulator.
    Continue(Acc),
    /// Stop iterating; this accumulator is final.
    Done(Acc),
}

impl<Acc> Step<Acc> {
    /// Unwraps the accumulator, discarding the signal.
    pub fn into_inner(self) -> Acc {
        match self {
            Self::Continue(accumulator) | Self::Done(accumulator) => accumulator,
        }
    }

    /// Whether this step signalled early termination.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Maps the carried accumulator, preserving the signal.
    pub fn map<B>(self, function: impl FnOnce(Acc) -> B) -> Step<B> {
        match self {
            Self::Continue(accumulator) => Step::Continue(function(accumulator)),
            Self::Done(accumulator) => Step::Done(function(accumulator)),
        }
    }
}
