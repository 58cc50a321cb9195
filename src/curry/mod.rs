//! The currying engine: arity bookkeeping, the placeholder, and partial
//! application in any argument order.
//!
//! # Overview
//!
//! A [`Curried`] value closes over three things: the target function, the
//! arity it requires before it executes, and the ordered list of argument
//! slots received so far. Each slot is either a concrete value or a gap
//! left by the [`__`] placeholder; a gap consumes a call slot immediately
//! while deferring the actual argument to a later call.
//!
//! For a function curried to arity `n`, every split of the `n` arguments
//! across calls is equivalent:
//!
//! ```text
//! g(a1, ..., an) == g(a1)(a2)...(an) == g(a1, a2)(a3, ..., an) == ...
//! ```
//!
//! # Examples
//!
//! ```rust
//! use currycomb::args;
//! use currycomb::curry::curry2;
//!
//! let subtract = curry2(|minuend: i32, subtrahend| minuend - subtrahend);
//!
//! // Supply both arguments at once...
//! assert_eq!(subtract.apply(args![10, 3]).done(), Some(7));
//!
//! // ...or defer the first with a placeholder.
//! let subtract_three = subtract.apply(args![__, 3]).partial().unwrap();
//! assert_eq!(subtract_three.apply(args![10]).done(), Some(7));
//! ```
//!
//! # The arity bound
//!
//! Arities are enumerated statically up to [`MAX_ARITY`] (ten). The bound
//! is firm: [`curry_n`] and [`n_ary`] reject anything above it with an
//! [`ArityError`](crate::error::ArityError).

mod arity;
mod engine;
mod placeholder;

pub use arity::{Arity, MAX_ARITY, n_ary};
pub use engine::{
    Applied, Curried, curry_n, curry0, curry1, curry2, curry3, curry4, curry5, curry6, curry7,
    curry8, curry9, curry10,
};
pub use placeholder::{__, Placeholder, Slot};

// The args! macro is exported at the crate root via #[macro_export].
pub use crate::args;
