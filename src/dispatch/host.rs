//! Hosts and subjects: the values a dispatcher probes at call time.

use crate::transduce::Transformer;

/// The boxed transformer shape the dispatch layer composes over:
/// elements of `T`, building a `Vec<T>`.
pub type DynTransformer<T> = Box<dyn Transformer<Input = T, Acc = Vec<T>, Output = Vec<T>>>;

/// An arbitrary host object probed for capabilities per call.
///
/// `A` is the bundle of leading arguments the dispatched operation was
/// called with; `T` is the element type the operation produces. A host
/// opts out of a generic algorithm by answering [`provides`](Self::provides)
/// for the operation's method name, or interoperates with transducer
/// pipelines by handing out its own transformer from
/// [`as_sink`](Self::as_sink).
pub trait Host<A, T> {
    /// Whether the host exposes a callable member under `name`.
    fn provides(&self, name: &str) -> bool;

    /// Invokes the named member with the leading arguments.
    ///
    /// Only called after [`provides`](Self::provides) answered `true`
    /// for `name`.
    fn invoke(self: Box<Self>, name: &str, arguments: &A) -> Vec<T>;

    /// The host's own transformer, if it implements the protocol.
    ///
    /// Hosts without a transformer hand themselves back so dispatch can
    /// continue to the default algorithm.
    fn as_sink(self: Box<Self>) -> Result<DynTransformer<T>, Box<dyn Host<A, T>>>;

    /// The host's items, for the default algorithm.
    fn into_items(self: Box<Self>) -> Vec<T>;

    /// The host's rendered form, used in error messages.
    fn describe(&self) -> String;
}

/// The final argument of a dispatched call, by shape.
pub enum Subject<A, T> {
    /// A plain ordered sequence with no custom behavior; dispatch is
    /// skipped entirely.
    Sequence(Vec<T>),
    /// A host object, probed for capabilities in precedence order.
    Host(Box<dyn Host<A, T>>),
    /// A downstream transformer to compose the operation's transducer
    /// over.
    Sink(DynTransformer<T>),
}

impl<A, T> Subject<A, T> {
    /// A plain-sequence subject.
    #[must_use]
    pub const fn sequence(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }

    /// A host subject.
    pub fn host(host: impl Host<A, T> + 'static) -> Self {
        Self::Host(Box::new(host))
    }

    /// A transformer subject.
    pub fn sink(
        sink: impl Transformer<Input = T, Acc = Vec<T>, Output = Vec<T>> + 'static,
    ) -> Self {
        Self::Sink(Box::new(sink))
    }

    /// The subject's rendered form, used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Sequence(items) => format!("a sequence of {} elements", items.len()),
            Self::Host(host) => host.describe(),
            Self::Sink(_) => String::from("a transformer sink"),
        }
    }
}
