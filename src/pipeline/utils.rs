//! Fundamental combinators and small helpers used alongside the
//! composition machinery.

use std::fmt;

use crate::error::ClampError;

/// Returns the value unchanged.
///
/// The unit element of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` both behave as `f`.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```rust
/// use currycomb::pipeline::constant;
///
/// let zeroes: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeroes, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b)` is `f(b, a)`, and `flip(flip(f))` behaves as `f`.
/// Useful for fixing the second argument of a function whose first is
/// the interesting one.
///
/// # Examples
///
/// ```rust
/// use currycomb::pipeline::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Restricts a value to an inclusive range.
///
/// # Errors
///
/// [`ClampError`] when `minimum > maximum`; the bounds are carried in
/// rendered form.
///
/// # Examples
///
/// ```rust
/// use currycomb::pipeline::clamp;
///
/// assert_eq!(clamp(0, 10, 15), Ok(10));
/// assert_eq!(clamp(0, 10, -3), Ok(0));
/// assert_eq!(clamp(0, 10, 7), Ok(7));
/// assert!(clamp(10, 0, 5).is_err());
/// ```
pub fn clamp<T>(minimum: T, maximum: T, value: T) -> Result<T, ClampError>
where
    T: PartialOrd + fmt::Display,
{
    if minimum > maximum {
        return Err(ClampError {
            minimum: minimum.to_string(),
            maximum: maximum.to_string(),
        });
    }
    Ok(if value < minimum {
        minimum
    } else if value > maximum {
        maximum
    } else {
        value
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_its_argument() {
        assert_eq!(identity(42), 42);
        assert_eq!(identity("text"), "text");
    }

    #[test]
    fn constant_ignores_its_input() {
        let always = constant::<_, &str>(5);
        assert_eq!(always("ignored"), 5);
    }

    #[test]
    fn double_flip_restores_the_order() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }
        let twice = flip(flip(power));
        assert_eq!(twice(2, 3), power(2, 3));
    }

    #[test]
    fn clamp_rejects_inverted_bounds() {
        let error = clamp(9, 1, 5).unwrap_err();
        assert_eq!(
            format!("{error}"),
            "minimum 9 must not be greater than maximum 1"
        );
    }
}
