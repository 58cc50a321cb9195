//! The arity wrapper: forcing a variadic target to report a fixed
//! declared parameter count.

use crate::error::ArityError;

/// The highest arity the engine supports.
///
/// Arities are enumerated rather than computed generically, so this is a
/// firm upper bound. The generated `curry0`..`curry10` family and the
/// runtime checks in [`n_ary`] and [`curry_n`](crate::curry::curry_n) all
/// share it.
pub const MAX_ARITY: usize = 10;

// The generated constructor family in engine.rs goes exactly this far.
static_assertions::const_assert_eq!(MAX_ARITY, 10);

/// A variadic target paired with a declared parameter count.
///
/// The wrapper reports exactly the declared arity, and [`invoke`](Self::invoke)
/// forwards **all** actual arguments to the target, not just the declared
/// number. Wrapping is pure; the target is never called during
/// construction.
///
/// # Examples
///
/// ```rust
/// use currycomb::curry::n_ary;
///
/// let sum = n_ary(2, |arguments: Vec<i32>| arguments.iter().sum::<i32>()).unwrap();
/// assert_eq!(sum.arity(), 2);
///
/// // Extra trailing arguments pass through to the target.
/// assert_eq!(sum.invoke(vec![1, 2, 3]), 6);
/// ```
#[derive(Clone)]
pub struct Arity<F> {
    declared: usize,
    target: F,
}

impl<F> core::fmt::Debug for Arity<F> {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter
            .debug_struct("Arity")
            .field("declared", &self.declared)
            .finish_non_exhaustive()
    }
}

/// Wraps `target` so it reports exactly `declared` parameters.
///
/// # Errors
///
/// Returns [`ArityError`] when `declared` exceeds [`MAX_ARITY`].
pub fn n_ary<F>(declared: usize, target: F) -> Result<Arity<F>, ArityError> {
    if declared > MAX_ARITY {
        return Err(ArityError::new(declared));
    }
    Ok(Arity { declared, target })
}

impl<F> Arity<F> {
    /// The declared parameter count.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.declared
    }

    /// Invokes the target with every supplied argument.
    pub fn invoke<T, R>(&self, arguments: Vec<T>) -> R
    where
        F: Fn(Vec<T>) -> R,
    {
        (self.target)(arguments)
    }

    /// Unwraps the target function.
    pub fn into_target(self) -> F {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_declared_count() {
        let wrapped = n_ary(3, |arguments: Vec<i32>| arguments.len()).unwrap();
        assert_eq!(wrapped.arity(), 3);
    }

    #[test]
    fn forwards_all_arguments_not_just_the_declared_number() {
        let wrapped = n_ary(1, |arguments: Vec<i32>| arguments.len()).unwrap();
        assert_eq!(wrapped.invoke(vec![1, 2, 3, 4]), 4);
    }

    #[test]
    fn zero_is_a_valid_arity() {
        let wrapped = n_ary(0, |arguments: Vec<i32>| arguments.is_empty()).unwrap();
        assert_eq!(wrapped.arity(), 0);
        assert!(wrapped.invoke(Vec::new()));
    }

    #[test]
    fn rejects_arities_above_the_bound() {
        let error = n_ary(11, |arguments: Vec<i32>| arguments.len()).unwrap_err();
        assert_eq!(error.requested, 11);
    }
}
