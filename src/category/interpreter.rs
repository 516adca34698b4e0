//! Interpreter markers and the computation wrapper.
//!
//! Rust has no higher-kinded types, so "a computation of interpreter `K` from
//! `A` to `B`" is emulated with a generic associated type: every interpreter
//! names its representation `K::Repr<A, B>`, and [`Arrow<K, A, B>`] wraps that
//! representation so that `K` can be inferred from the values passed around.

use std::fmt;

use crate::shape::Shape;

/// A marker type naming an execution strategy for computations.
///
/// Implementors are usually empty types; all the work happens in the
/// capability traits ([`Category`](super::Category),
/// [`SemiIsoArrow`](super::SemiIsoArrow), ...) they implement.
///
/// # Example
///
/// ```rust
/// use siarrow::category::Interpreter;
/// use siarrow::interpret::Describe;
///
/// fn representation_is_shareable<K: Interpreter>()
/// where
///     K::Repr<(), char>: Send + Sync,
/// {
/// }
///
/// representation_is_shareable::<Describe>();
/// ```
pub trait Interpreter: Sized + 'static {
    /// How this interpreter represents a computation from `A` to `B`.
    type Repr<A: Shape, B: Shape>: Clone + Send + Sync + 'static;
}

/// A computation from `A` to `B`, executable by the interpreter `K`.
///
/// Values of this type do no work on construction; an interpreter runs them.
/// They are immutable and cheap to clone.
pub struct Arrow<K: Interpreter, A: Shape, B: Shape> {
    repr: K::Repr<A, B>,
}

impl<K: Interpreter, A: Shape, B: Shape> Arrow<K, A, B> {
    /// Wraps an interpreter representation.
    #[must_use]
    pub const fn from_repr(repr: K::Repr<A, B>) -> Self {
        Self { repr }
    }

    /// Borrows the interpreter representation.
    #[must_use]
    pub const fn repr(&self) -> &K::Repr<A, B> {
        &self.repr
    }

    /// Unwraps the interpreter representation.
    #[must_use]
    pub fn into_repr(self) -> K::Repr<A, B> {
        self.repr
    }
}

impl<K: Interpreter, A: Shape, B: Shape> Clone for Arrow<K, A, B> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
        }
    }
}

impl<K: Interpreter, A: Shape, B: Shape> fmt::Debug for Arrow<K, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Arrow")
            .field("interpreter", &std::any::type_name::<K>())
            .field("input", &std::any::type_name::<A>())
            .field("output", &std::any::type_name::<B>())
            .finish_non_exhaustive()
    }
}
