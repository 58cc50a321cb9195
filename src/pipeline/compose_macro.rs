//! The `compose!` macro: right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`, following the mathematical
/// convention: the rightmost function applies first. The result is a
/// new function; to apply transformations to a value immediately, use
/// [`pipe!`](crate::pipe) instead.
///
/// # Laws
///
/// - Associativity: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - Identity: `compose!(identity, f) == f == compose!(f, identity)`
/// - Duality: `compose!(h, g, f)(x) == pipe!(x, f, g, h)`
///
/// # Examples
///
/// ```rust
/// use currycomb::compose;
///
/// fn increment(n: i32) -> i32 { n + 1 }
/// fn double(n: i32) -> i32 { n * 2 }
///
/// // increment(double(5)) == 11
/// let composed = compose!(increment, double);
/// assert_eq!(composed(5), 11);
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition.
    ($stage:expr $(,)?) => {
        $stage
    };

    // Two functions: the base composer.
    ($outer:expr, $inner:expr $(,)?) => {
        move |value| $outer($inner(value))
    };

    // More functions: peel the outermost, recurse on the rest.
    ($outer:expr, $($remaining:expr),+ $(,)?) => {
        move |value| $outer($crate::compose!($($remaining),+)(value))
    };
}

#[cfg(test)]
mod tests {
    use crate::pipeline::identity;

    #[test]
    fn single_function_composes_to_itself() {
        let lone = compose!(|n: i32| n - 1);
        assert_eq!(lone(10), 9);
    }

    #[test]
    fn rightmost_applies_first() {
        let square = |n: i32| n * n;
        let increment = |n: i32| n + 1;
        // square(increment(3)) == 16
        let composed = compose!(square, increment);
        assert_eq!(composed(3), 16);
    }

    #[test]
    fn identity_is_a_unit() {
        let double = |n: i32| n * 2;
        assert_eq!(compose!(identity, double)(5), double(5));
        assert_eq!(compose!(double, identity)(5), double(5));
    }
}
