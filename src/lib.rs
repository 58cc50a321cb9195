//! # currycomb
//!
//! A small functional core for Rust: a currying engine with placeholder
//! support, a capability-based dispatch layer, and a transducer protocol
//! with early termination.
//!
//! ## Overview
//!
//! The crate is built from four pieces, leaves first:
//!
//! - **Curry Engine**: [`curry::Curried`] values close over a target
//!   function, a required arity, and the argument slots received so far.
//!   Arguments may be supplied in any grouping, and the [`curry::__`]
//!   placeholder defers a slot to a later call.
//! - **Transducer Protocol**: [`transduce::Transformer`] is the
//!   `init`/`step`/`result` interface every composable reducer implements.
//!   A `step` returns [`transduce::Step`], a tagged union that makes the
//!   early-termination check an exhaustive match.
//! - **Capability Dispatcher**: [`dispatch::Dispatcher`] probes the final
//!   argument of a polymorphic operation at call time, preferring a host's
//!   own named method, then the transformer protocol, then the default
//!   algorithm.
//! - **Composition Combinators**: [`pipe!`], [`compose!`], and the
//!   value-level [`pipeline::pipe_unary`] family chain unary functions
//!   while preserving the first function's arity.
//!
//! ## Feature Flags
//!
//! - `curry`: The currying engine, placeholder, and arity wrapper
//! - `transduce`: The transducer protocol and reduce driver
//! - `dispatch`: Capability-based dispatch (requires `transduce`)
//! - `pipeline`: Composition combinators (requires `curry` and `transduce`)
//!
//! All features are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use currycomb::args;
//! use currycomb::curry::curry3;
//!
//! let add_three = curry3(|first: i32, second, third| first + second + third);
//!
//! // Any grouping of the three arguments is equivalent.
//! let with_gap = add_three.apply(args![1, __, 3]).partial().unwrap();
//! assert_eq!(with_gap.apply(args![2]).done(), Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use currycomb::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "transduce")]
    pub use crate::transduce::*;

    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;

    pub use crate::error::*;
}

pub mod error;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "transduce")]
pub mod transduce;

#[cfg(feature = "dispatch")]
pub mod dispatch;

#[cfg(feature = "pipeline")]
pub mod pipeline;
