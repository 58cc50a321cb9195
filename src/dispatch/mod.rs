//! Capability-based dispatch: choosing an implementation per call by
//! probing what the final argument can do.
//!
//! # Overview
//!
//! A polymorphic operation like a generic `map` is bound once to a
//! [`Dispatcher`]: an ordered list of native method names, a transducer
//! factory, and a default algorithm. At call time the dispatcher
//! inspects its [`Subject`] and resolves, in order:
//!
//! 1. a plain ordered sequence skips dispatch and runs the default
//!    algorithm directly;
//! 2. a [`Host`] exposing one of the named methods has that method
//!    invoked with the leading arguments (first match wins);
//! 3. a host exposing the transformer protocol becomes the downstream
//!    transformer the factory's transducer composes over;
//! 4. anything else falls back to the default algorithm over the host's
//!    items.
//!
//! This is not subtype polymorphism: the capability set is probed
//! structurally, per call.
//!
//! # Example
//!
//! ```rust
//! use currycomb::dispatch::{Dispatcher, DynTransformer, Subject};
//! use currycomb::transduce::map;
//!
//! let map_op = Dispatcher::new(
//!     vec!["map"],
//!     |f: &fn(i32) -> i32, sink| Box::new(map(*f, sink)) as DynTransformer<i32>,
//!     |f, items| items.into_iter().map(|n| f(n)).collect(),
//! );
//!
//! let double = (|n| n * 2) as fn(i32) -> i32;
//! let doubled = map_op.call(&double, Subject::sequence(vec![1, 2, 3]));
//! assert_eq!(doubled.value(), Some(vec![2, 4, 6]));
//! ```

mod dispatcher;
mod host;

pub use dispatcher::{Dispatched, Dispatcher, concat, invoker};
pub use host::{DynTransformer, Host, Subject};
