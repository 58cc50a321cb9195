//! The dispatcher: one polymorphic operation bound to its capability
//! set, transducer factory, and default algorithm.

use crate::dispatch::host::{DynTransformer, Host, Subject};
use crate::error::{DispatchError, ShapeError};

type Factory<A, T> = Box<dyn Fn(&A, DynTransformer<T>) -> DynTransformer<T>>;
type Fallback<A, T> = Box<dyn Fn(&A, Vec<T>) -> Vec<T>>;

/// A polymorphic operation's dispatch descriptor, bound once at
/// definition time: the ordered capability method names, the transducer
/// factory, and the default implementation. Immutable after
/// construction.
pub struct Dispatcher<A, T> {
    methods: Vec<&'static str>,
    factory: Factory<A, T>,
    fallback: Fallback<A, T>,
}

/// What a dispatched call produced.
pub enum Dispatched<T> {
    /// A finished value, from a native method or the default algorithm.
    Value(Vec<T>),
    /// The operation's transducer composed over the subject's own
    /// transformer; the caller drives it.
    Sink(DynTransformer<T>),
}

impl<T> Dispatched<T> {
    /// The finished value, if the call produced one.
    pub fn value(self) -> Option<Vec<T>> {
        match self {
            Self::Value(items) => Some(items),
            Self::Sink(_) => None,
        }
    }

    /// The composed transformer, if the call produced one.
    pub fn sink(self) -> Option<DynTransformer<T>> {
        match self {
            Self::Value(_) => None,
            Self::Sink(sink) => Some(sink),
        }
    }
}

impl<A, T> Dispatcher<A, T> {
    /// Binds a polymorphic operation to its capability method names,
    /// transducer factory, and default implementation.
    pub fn new(
        methods: Vec<&'static str>,
        factory: impl Fn(&A, DynTransformer<T>) -> DynTransformer<T> + 'static,
        fallback: impl Fn(&A, Vec<T>) -> Vec<T> + 'static,
    ) -> Self {
        Self {
            methods,
            factory: Box::new(factory),
            fallback: Box::new(fallback),
        }
    }

    /// Resolves and runs the operation for one call.
    ///
    /// Precedence: a plain sequence goes straight to the default
    /// implementation; a host's first matching named method wins; a host
    /// exposing the transformer protocol becomes the downstream of the
    /// factory's transducer; anything else falls back to the default
    /// implementation over the host's items.
    pub fn call(&self, arguments: &A, subject: Subject<A, T>) -> Dispatched<T> {
        match subject {
            Subject::Sequence(items) => Dispatched::Value((self.fallback)(arguments, items)),
            Subject::Sink(sink) => Dispatched::Sink((self.factory)(arguments, sink)),
            Subject::Host(host) => {
                if let Some(name) = self.methods.iter().find(|name| host.provides(name)) {
                    return Dispatched::Value(host.invoke(name, arguments));
                }
                match host.as_sink() {
                    Ok(sink) => Dispatched::Sink((self.factory)(arguments, sink)),
                    Err(host) => Dispatched::Value((self.fallback)(arguments, host.into_items())),
                }
            }
        }
    }
}

/// Builds an invoker for a named method on a host.
///
/// The returned function calls the method with the leading arguments,
/// or fails with [`DispatchError::MissingMethod`] naming the target and
/// the absent method.
///
/// # Errors
///
/// The returned function errs when the host does not provide `method`.
pub fn invoker<A, T>(
    method: &'static str,
) -> impl Fn(&A, Box<dyn Host<A, T>>) -> Result<Vec<T>, DispatchError> {
    move |arguments, host| {
        if host.provides(method) {
            Ok(host.invoke(method, arguments))
        } else {
            Err(DispatchError::MissingMethod {
                target: host.describe(),
                method,
            })
        }
    }
}

/// Concatenates two sequence-shaped subjects.
///
/// A plain sequence contributes its elements directly; a host
/// contributes its items. A transformer sink has no element sequence to
/// contribute, so it is a type mismatch.
///
/// # Errors
///
/// [`ShapeError`] identifying the operand that is not sequence-shaped.
pub fn concat<A, T>(left: Subject<A, T>, right: Subject<A, T>) -> Result<Vec<T>, ShapeError> {
    let mut combined = sequence_items(left)?;
    combined.extend(sequence_items(right)?);
    Ok(combined)
}

fn sequence_items<A, T>(subject: Subject<A, T>) -> Result<Vec<T>, ShapeError> {
    match subject {
        Subject::Sequence(items) => Ok(items),
        Subject::Host(host) => Ok(host.into_items()),
        sink @ Subject::Sink(_) => Err(ShapeError::new(sink.describe())),
    }
}
