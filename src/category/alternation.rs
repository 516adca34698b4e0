//! Fallback between computations.

use super::{Arrow, Category};
use crate::shape::Shape;

/// Interpreters that can retry a failed computation with another.
///
/// # Laws
///
/// ```text
/// alt(alt(f, g), h) == alt(f, alt(g, h))
/// ```
///
/// No effect of a failed `first` (consumed input, produced text) is visible
/// to `second` or to the caller.
pub trait Alternation: Category {
    /// Runs `first`; if it fails, runs `second` from the same starting point.
    ///
    /// When both fail, the failure of `second` is reported.
    fn alt<A: Shape, B: Shape>(
        first: Arrow<Self, A, B>,
        second: Arrow<Self, A, B>,
    ) -> Arrow<Self, A, B>;
}

impl<K: Alternation, A: Shape, B: Shape> Arrow<K, A, B> {
    /// Method form of [`Alternation::alt`].
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        K::alt(self, other)
    }
}
