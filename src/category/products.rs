//! Parallel composition over pairs.

use super::{Arrow, Category};
use crate::shape::Shape;

/// Interpreters that run two computations side by side on a pair.
///
/// # Laws
///
/// ```text
/// split(identity(), identity()) == identity()
/// compose(split(f, g), split(h, k)) == split(compose(f, h), compose(g, k))
/// ```
pub trait Products: Category {
    /// Runs `left` on the first component and `right` on the second.
    ///
    /// The left computation always runs first, in both directions.
    fn split<A: Shape, B: Shape, C: Shape, D: Shape>(
        left: Arrow<Self, A, B>,
        right: Arrow<Self, C, D>,
    ) -> Arrow<Self, (A, C), (B, D)>;

    /// Runs `computation` on the first component, passing the second through.
    fn first<A: Shape, B: Shape, C: Shape>(
        computation: Arrow<Self, A, B>,
    ) -> Arrow<Self, (A, C), (B, C)> {
        Self::split(computation, Self::identity())
    }

    /// Runs `computation` on the second component, passing the first through.
    fn second<A: Shape, B: Shape, C: Shape>(
        computation: Arrow<Self, A, B>,
    ) -> Arrow<Self, (C, A), (C, B)> {
        Self::split(Self::identity(), computation)
    }
}
