//! The placeholder marker and argument slots.

/// The placeholder marker type.
///
/// A single process-wide sentinel denoting an unfilled argument slot. It
/// is recognized by tag, never by structural equality, so it cannot
/// collide with ordinary values. The constant [`__`] is the one instance.
///
/// # Examples
///
/// ```rust
/// use currycomb::args;
/// use currycomb::curry::curry2;
///
/// let divide = curry2(|numerator: f64, denominator| numerator / denominator);
///
/// // Fix the denominator, defer the numerator.
/// let half = divide.apply(args![__, 2.0]).partial().unwrap();
/// assert_eq!(half.apply(args![10.0]).done(), Some(5.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant.
///
/// Inside [`args!`](crate::args) the token `__` is matched literally, so
/// it works without importing this constant. The constant exists for
/// programmatic use: `Slot::from(__)` is a [`Slot::Gap`].
///
/// Named `__` (double underscore) because `macro_rules!` cannot match a
/// single underscore as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

static_assertions::assert_impl_all!(Placeholder: Copy, Send, Sync);

/// One argument slot of a curried call: a concrete value or a gap.
///
/// A gap consumes a call slot immediately while deferring the actual
/// argument to a later call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<T> {
    /// A concrete argument.
    Given(T),
    /// An unfilled slot left by the placeholder.
    Gap,
}

impl<T> Slot<T> {
    /// Whether this slot is still unfilled.
    #[must_use]
    pub const fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }

    /// The concrete value, if the slot holds one.
    pub fn given(self) -> Option<T> {
        match self {
            Self::Given(value) => Some(value),
            Self::Gap => None,
        }
    }
}

impl<T> From<Placeholder> for Slot<T> {
    fn from(_: Placeholder) -> Self {
        Self::Gap
    }
}

/// Builds a `Vec` of argument [`Slot`]s, matching the literal token `__`
/// as a gap.
///
/// Do **not** import [`__`](crate::curry::__) at the use site; the macro
/// matches the token itself.
///
/// # Examples
///
/// ```rust
/// use currycomb::args;
/// use currycomb::curry::Slot;
///
/// let slots: Vec<Slot<i32>> = args![1, __, 3];
/// assert_eq!(slots, vec![Slot::Given(1), Slot::Gap, Slot::Given(3)]);
///
/// let empty: Vec<Slot<i32>> = args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    // Internal accumulator: gaps first so `__` is never parsed as an
    // expression referring to the constant.
    (@build [$($slots:expr),*] __) => {
        $crate::args!(@build [$($slots,)* $crate::curry::Slot::Gap])
    };
    (@build [$($slots:expr),*] __, $($rest:tt)*) => {
        $crate::args!(@build [$($slots,)* $crate::curry::Slot::Gap] $($rest)*)
    };
    (@build [$($slots:expr),*] $value:expr) => {
        $crate::args!(@build [$($slots,)* $crate::curry::Slot::Given($value)])
    };
    (@build [$($slots:expr),*] $value:expr, $($rest:tt)*) => {
        $crate::args!(@build [$($slots,)* $crate::curry::Slot::Given($value)] $($rest)*)
    };
    (@build [$($slots:expr),*]) => {
        <[_]>::into_vec(::std::boxed::Box::new([$($slots),*]))
    };
    () => {
        ::std::vec::Vec::new()
    };
    ($($tokens:tt)+) => {
        $crate::args!(@build [] $($tokens)+)
    };
}
