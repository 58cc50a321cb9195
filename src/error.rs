//! Error types for the functional core.
//!
//! All failures in this crate are synchronous and propagate by normal
//! `Result` unwinding; nothing is retried or swallowed internally. The
//! types here cover the full taxonomy:
//!
//! - [`ArityError`]: an arity outside the supported range (configuration)
//! - [`CompositionError`]: zero stages handed to a composition combinator
//!   (configuration)
//! - [`ClampError`]: an inverted range handed to a clamping helper
//!   (configuration)
//! - [`ShapeError`]: operands of incompatible shapes handed to a
//!   concatenation-like operation (type mismatch)
//! - [`DispatchError`]: a named method expected on a host that does not
//!   provide it (missing capability)

#[cfg(feature = "curry")]
use crate::curry::MAX_ARITY;

/// An arity outside the supported `0..=MAX_ARITY` range.
///
/// Arities are enumerated rather than computed generically, so the upper
/// bound is firm, not advisory.
///
/// # Examples
///
/// ```rust
/// use currycomb::curry::curry_n;
///
/// let error = curry_n(11, |arguments: Vec<i32>| arguments.len()).unwrap_err();
/// assert_eq!(
///     format!("{}", error),
///     "arity 11 is out of range: arities up to 10 are supported"
/// );
/// ```
#[cfg(feature = "curry")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    /// The arity that was requested.
    pub requested: usize,
}

#[cfg(feature = "curry")]
impl ArityError {
    /// Creates an error for the requested arity.
    #[must_use]
    pub const fn new(requested: usize) -> Self {
        Self { requested }
    }
}

#[cfg(feature = "curry")]
impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "arity {} is out of range: arities up to {} are supported",
            self.requested, MAX_ARITY
        )
    }
}

#[cfg(feature = "curry")]
impl std::error::Error for ArityError {}

/// Errors from the composition combinators.
///
/// # Examples
///
/// ```rust
/// use currycomb::error::CompositionError;
/// use currycomb::pipeline::{UnaryFn, pipe_unary};
///
/// let stages: Vec<UnaryFn<i32>> = Vec::new();
/// assert_eq!(pipe_unary(stages).unwrap_err(), CompositionError::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionError {
    /// No stages were supplied; a composition needs at least one function.
    Empty,
}

impl std::fmt::Display for CompositionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(formatter, "composition requires at least one function"),
        }
    }
}

impl std::error::Error for CompositionError {}

/// An inverted range handed to the clamping helper.
///
/// The bounds are carried in rendered form so the error can identify them
/// without constraining the value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClampError {
    /// Rendered form of the lower bound.
    pub minimum: String,
    /// Rendered form of the upper bound.
    pub maximum: String,
}

impl std::fmt::Display for ClampError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "minimum {} must not be greater than maximum {}",
            self.minimum, self.maximum
        )
    }
}

impl std::error::Error for ClampError {}

/// Operands of incompatible shapes handed to a concatenation-like
/// operation.
///
/// Carries the offending operand's rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    /// Rendered form of the operand that cannot be concatenated.
    pub operand: String,
}

impl ShapeError {
    /// Creates an error identifying the offending operand.
    #[must_use]
    pub fn new(operand: impl Into<String>) -> Self {
        Self {
            operand: operand.into(),
        }
    }
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} cannot be concatenated", self.operand)
    }
}

impl std::error::Error for ShapeError {}

/// Errors from the capability dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A named method was expected on a host that does not provide it.
    MissingMethod {
        /// Rendered form of the host that was probed.
        target: String,
        /// The method name that was absent.
        method: &'static str,
    },
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMethod { target, method } => {
                write!(formatter, "{target} does not provide the method `{method}`")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "curry")]
    #[test]
    fn arity_error_names_the_bound() {
        let error = ArityError::new(42);
        assert_eq!(
            format!("{error}"),
            "arity 42 is out of range: arities up to 10 are supported"
        );
    }

    #[test]
    fn missing_method_names_target_and_method() {
        let error = DispatchError::MissingMethod {
            target: String::from("<window host>"),
            method: "map",
        };
        assert_eq!(
            format!("{error}"),
            "<window host> does not provide the method `map`"
        );
    }

    #[test]
    fn shape_error_renders_the_operand() {
        let error = ShapeError::new("a transformer sink");
        assert_eq!(format!("{error}"), "a transformer sink cannot be concatenated");
    }
}
