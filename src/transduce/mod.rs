//! The transducer protocol and the reduce driver.
//!
//! # Overview
//!
//! A [`Transformer`] is the unit of composition: a three-operation
//! interface (`init`, `step`, `result`) that every composable reducer
//! implements. A transducer is a constructor like [`map`] or [`take`]
//! that wraps a downstream transformer with an element-wise behavior,
//! independently of the collection being traversed.
//!
//! The reduce driver ([`reduce`], [`transduce`], [`into_vec`]) walks any
//! [`Reducible`] collection, threading the accumulator through `step` and
//! checking for the [`Step::Done`] short-circuit signal after every step.
//! Once a step signals `Done`, no further steps occur for that reduction
//! and `result` is called exactly once with the final accumulator.
//!
//! # Example
//!
//! One pass, early termination included:
//!
//! ```rust
//! use currycomb::transduce::{build_vec, filter, map, take, transduce};
//!
//! let pipeline = map(
//!     |n: i32| n * n,
//!     filter(|n: &i32| n % 2 == 0, take(2, build_vec())),
//! );
//!
//! // Squares the inputs, keeps the even squares, stops after two.
//! assert_eq!(transduce(pipeline, vec![1, 2, 3, 4, 5, 6, 7]), vec![4, 16]);
//! ```

mod reduce;
mod step;
mod transformer;
mod xform;

pub use reduce::{Iterated, Reducible, into_vec, iterated, reduce, transduce};
pub use step::Step;
pub use transformer::{BuildVec, FnStep, Transformer, build_vec, fn_step};
pub use xform::{
    AllXf, AnyXf, DropWhileXf, DropXf, FilterXf, FindIndexXf, FindLastIndexXf, FindLastXf, FindXf,
    MapXf, TakeWhileXf, TakeXf, all, any, drop, drop_while, filter, find, find_index, find_last,
    find_last_index, map, take, take_while,
};
