//! Composition combinators: chaining unary functions left-to-right or
//! right-to-left.
//!
//! # Overview
//!
//! Two renderings of the same idea live here:
//!
//! - the [`pipe!`](crate::pipe) and [`compose!`](crate::compose) macros
//!   chain heterogeneously-typed unary functions at compile time;
//! - the value-level [`pipe_unary`] / [`compose_unary`] functions fold
//!   the binary composer over a runtime list of [`UnaryFn`] stages, and
//!   [`pipe_curried`] lets the first stage be a non-unary
//!   [`Curried`](crate::curry::Curried) function whose arity the chain
//!   preserves.
//!
//! The duality law connects them all:
//! `compose!(h, g, f)(x) == pipe!(x, f, g, h)`, and `compose_unary` of a
//! stage list equals `pipe_unary` of the reversed list.

mod compose_macro;
mod pipe_macro;
mod unary;
mod utils;

pub use unary::{UnaryFn, compose_unary, pipe_curried, pipe_unary};
pub use utils::{clamp, constant, flip, identity};

// The pipe! and compose! macros are exported at the crate root via
// #[macro_export].
pub use crate::{compose, pipe};
