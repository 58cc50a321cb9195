//! The `pipe!` macro: immediate left-to-right application.

/// Pipes a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`: the value flows through the
/// transformations in the order they are written. Each function is
/// called exactly once, so [`FnOnce`] suffices, and the functions may be
/// heterogeneously typed as long as each accepts its predecessor's
/// return value.
///
/// The duality with [`compose!`](crate::compose):
/// `pipe!(x, f, g, h)` equals `compose!(h, g, f)(x)`.
///
/// # Examples
///
/// ```rust
/// use currycomb::pipe;
///
/// fn double(n: i32) -> i32 { n * 2 }
/// fn render(n: i32) -> String { format!("<{n}>") }
///
/// assert_eq!(pipe!(21, double, render), "<42>");
///
/// // A bare value passes through unchanged.
/// assert_eq!(pipe!(7), 7);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return it unchanged.
    ($value:expr) => {
        $value
    };

    // Single function: apply it.
    ($value:expr, $stage:expr $(,)?) => {
        $stage($value)
    };

    // Multiple functions: apply left to right recursively.
    ($value:expr, $stage:expr, $($remaining:expr),+ $(,)?) => {
        $crate::pipe!($stage($value), $($remaining),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn pipes_through_a_chain() {
        let halve = |n: i32| n / 2;
        let describe = |n: i32| format!("{n}!");
        assert_eq!(pipe!(10, halve, describe), "5!");
    }

    #[test]
    fn accepts_consuming_closures() {
        let sorted = pipe!(vec![3, 1, 2], |mut v: Vec<i32>| {
            v.sort_unstable();
            v
        });
        assert_eq!(sorted, vec![1, 2, 3]);
    }
}
