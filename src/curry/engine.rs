//! The curry engine: partially-applicable functions of fixed arity.
//!
//! [`curry_n`] builds a [`Curried`] value over a variadic target; the
//! generated `curry0`..`curry10` constructors wrap typed closures of each
//! supported arity over the same machinery, so they are behaviorally
//! identical to the general case.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::curry::arity::{Arity, MAX_ARITY, n_ary};
use crate::curry::placeholder::Slot;
use crate::error::ArityError;

type Target<T, R> = Rc<dyn Fn(Vec<T>) -> R>;
type Slots<T> = SmallVec<[Slot<T>; MAX_ARITY]>;

/// A partially-applicable function of fixed arity.
///
/// A `Curried` value closes over the target function, the arity it
/// requires, and the ordered slots received so far. It is immutable:
/// [`apply`](Self::apply) never mutates in place, it either invokes the
/// target or produces a new `Curried` closing over the combined slots.
///
/// The number of filled slots never exceeds the required arity; once
/// enough slots are filled the target runs, and extra trailing arguments
/// beyond the arity pass through to it rather than being discarded.
///
/// # Examples
///
/// ```rust
/// use currycomb::args;
/// use currycomb::curry::curry3;
///
/// let add = curry3(|first: i32, second, third| first + second + third);
///
/// // Every grouping of the three arguments is equivalent.
/// assert_eq!(add.apply(args![1, 2, 3]).done(), Some(6));
///
/// let one = add.apply(args![1]).partial().unwrap();
/// let one_two = one.apply(args![2]).partial().unwrap();
/// assert_eq!(one_two.apply(args![3]).done(), Some(6));
///
/// // A placeholder defers a slot while consuming it.
/// let outer = add.apply(args![__, 2, __]).partial().unwrap();
/// assert_eq!(outer.arity(), 2);
/// assert_eq!(outer.apply(args![1, 3]).done(), Some(6));
/// ```
pub struct Curried<T, R> {
    target: Target<T, R>,
    required: usize,
    received: Slots<T>,
}

impl<T: Clone, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
            required: self.required,
            received: self.received.clone(),
        }
    }
}

impl<T: Clone, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("required", &self.required)
            .field("filled", &self.filled())
            .finish_non_exhaustive()
    }
}

/// The outcome of applying slots to a [`Curried`] function: either the
/// target's result or a new partial application.
pub enum Applied<T, R> {
    /// Enough slots were filled; the target ran and produced this value.
    Done(R),
    /// Slots are still missing; this is the new partial application.
    Partial(Curried<T, R>),
}

impl<T, R> Applied<T, R> {
    /// The target's result, if the application completed.
    pub fn done(self) -> Option<R> {
        match self {
            Self::Done(value) => Some(value),
            Self::Partial(_) => None,
        }
    }

    /// The new partial application, if slots are still missing.
    pub fn partial(self) -> Option<Curried<T, R>> {
        match self {
            Self::Done(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }

    /// Whether the application completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

impl<T, R: fmt::Debug> fmt::Debug for Applied<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Partial(curried) => formatter
                .debug_tuple("Partial")
                .field(&curried.required)
                .finish(),
        }
    }
}

impl<T: Clone, R> Curried<T, R> {
    fn with_target(target: Target<T, R>, required: usize) -> Self {
        Self {
            target,
            required,
            received: SmallVec::new(),
        }
    }

    /// The number of slots still needed before the target runs.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.required.saturating_sub(self.filled())
    }

    fn filled(&self) -> usize {
        self.received.iter().filter(|slot| !slot.is_gap()).count()
    }

    /// Applies argument slots, producing either the target's result or a
    /// new partial application.
    ///
    /// Received slots and incoming slots are walked in lockstep: a filled
    /// slot stays, a gap consumes the next incoming slot (which may
    /// itself be a gap, deferring the position again), and leftover
    /// incoming slots are appended wholesale. Applying zero slots is a
    /// no-op that returns an unchanged partial application and never
    /// re-invokes the target.
    pub fn apply(&self, slots: impl IntoIterator<Item = Slot<T>>) -> Applied<T, R> {
        let mut incoming = slots.into_iter().peekable();
        if incoming.peek().is_none() {
            return Applied::Partial(self.clone());
        }

        let mut combined: Slots<T> = SmallVec::new();
        for slot in &self.received {
            match slot {
                Slot::Given(value) => combined.push(Slot::Given(value.clone())),
                // An exhausted incoming list leaves the gap in place.
                Slot::Gap => combined.push(incoming.next().unwrap_or(Slot::Gap)),
            }
        }
        combined.extend(incoming);

        let filled = combined.iter().filter(|slot| !slot.is_gap()).count();
        if filled >= self.required {
            let arguments: Vec<T> = combined.into_iter().filter_map(Slot::given).collect();
            Applied::Done((self.target)(arguments))
        } else {
            Applied::Partial(Self {
                target: Rc::clone(&self.target),
                required: self.required,
                received: combined,
            })
        }
    }

    /// Post-composes a unary function onto the target's result.
    ///
    /// The required arity and every received slot carry over unchanged,
    /// so placeholders survive composition.
    pub fn then<S>(self, next: impl Fn(R) -> S + 'static) -> Curried<T, S>
    where
        T: 'static,
        R: 'static,
    {
        let target = self.target;
        Curried {
            target: Rc::new(move |arguments| next(target(arguments))),
            required: self.required,
            received: self.received,
        }
    }
}

/// Builds a [`Curried`] function of the given arity over a variadic
/// target.
///
/// The target receives every argument supplied once the arity is
/// satisfied, including extras beyond the arity.
///
/// # Errors
///
/// Returns [`ArityError`] when `arity` exceeds [`MAX_ARITY`].
///
/// # Examples
///
/// ```rust
/// use currycomb::args;
/// use currycomb::curry::curry_n;
///
/// let sum = curry_n(3, |arguments: Vec<i32>| arguments.iter().sum::<i32>()).unwrap();
/// assert_eq!(sum.apply(args![1, 2, 3]).done(), Some(6));
///
/// // Extras beyond the arity pass through.
/// assert_eq!(sum.apply(args![1, 2, 3, 4]).done(), Some(10));
/// ```
pub fn curry_n<T, R>(
    arity: usize,
    target: impl Fn(Vec<T>) -> R + 'static,
) -> Result<Curried<T, R>, ArityError>
where
    T: Clone + 'static,
    R: 'static,
{
    let wrapped = n_ary(arity, target)?;
    let declared = wrapped.arity();
    Ok(Curried::with_target(
        Rc::new(move |arguments| wrapped.invoke(arguments)),
        declared,
    ))
}

fn from_adapted<T, R>(arity: usize, adapted: impl Fn(Vec<T>) -> R + 'static) -> Curried<T, R>
where
    T: Clone + 'static,
    R: 'static,
{
    // Generated arities are within MAX_ARITY by construction.
    let wrapped: Arity<_> = match n_ary(arity, adapted) {
        Ok(wrapped) => wrapped,
        Err(error) => unreachable!("generated arity within the bound: {error}"),
    };
    let declared = wrapped.arity();
    Curried::with_target(Rc::new(move |arguments| wrapped.invoke(arguments)), declared)
}

/// Wraps a zero-argument function in the curry engine.
///
/// With nothing required, any application runs the target immediately.
pub fn curry0<T, R>(target: impl Fn() -> R + 'static) -> Curried<T, R>
where
    T: Clone + 'static,
    R: 'static,
{
    from_adapted(0, move |_arguments: Vec<T>| target())
}

macro_rules! argument_type {
    ($argument:ident) => {
        T
    };
}

macro_rules! curry_family {
    ($($count:tt => ($($argument:ident),+)),+ $(,)?) => {
        paste::paste! { $(
            #[doc = " Wraps a " $count "-argument function in the curry engine."]
            #[doc = ""]
            #[doc = " Behaviorally identical to [`curry_n`] at arity " $count ";"]
            #[doc = " the typed signature exists for convenience. Arguments share"]
            #[doc = " one type because slots are interchangeable across calls."]
            pub fn [<curry $count>]<T, R>(
                target: impl Fn($(argument_type!($argument)),+) -> R + 'static,
            ) -> Curried<T, R>
            where
                T: Clone + 'static,
                R: 'static,
            {
                from_adapted($count, move |arguments: Vec<T>| {
                    let mut taken = arguments.into_iter();
                    match ($(
                        {
                            let $argument = taken.next();
                            $argument
                        }
                    ),+) {
                        ($(Some($argument)),+) => target($($argument),+),
                        _ => unreachable!(
                            "curried target of arity {} invoked with too few arguments",
                            $count
                        ),
                    }
                })
            }
        )+ }
    };
}

curry_family! {
    1 => (first),
    2 => (first, second),
    3 => (first, second, third),
    4 => (first, second, third, fourth),
    5 => (first, second, third, fourth, fifth),
    6 => (first, second, third, fourth, fifth, sixth),
    7 => (first, second, third, fourth, fifth, sixth, seventh),
    8 => (first, second, third, fourth, fifth, sixth, seventh, eighth),
    9 => (first, second, third, fourth, fifth, sixth, seventh, eighth, ninth),
    10 => (first, second, third, fourth, fifth, sixth, seventh, eighth, ninth, tenth),
}
