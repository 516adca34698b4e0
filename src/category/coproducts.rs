//! Structural choice over sums.

use super::{Arrow, Category};
use crate::shape::{Either, Shape};

/// Interpreters that pick a computation by the variant of an [`Either`].
///
/// Selection is structural: the variant of the input decides which side
/// runs, the other side is never tried.
///
/// # Laws
///
/// ```text
/// choose(identity(), identity()) == identity()
/// compose(choose(f, g), choose(h, k)) == choose(compose(f, h), compose(g, k))
/// ```
pub trait Coproducts: Category {
    /// Runs `left` on `Left` values and `right` on `Right` values.
    fn choose<A: Shape, B: Shape, C: Shape, D: Shape>(
        left: Arrow<Self, A, B>,
        right: Arrow<Self, C, D>,
    ) -> Arrow<Self, Either<A, C>, Either<B, D>>;

    /// Runs `computation` on `Left` values, passing `Right` values through.
    fn left<A: Shape, B: Shape, C: Shape>(
        computation: Arrow<Self, A, B>,
    ) -> Arrow<Self, Either<A, C>, Either<B, C>> {
        Self::choose(computation, Self::identity())
    }

    /// Runs `computation` on `Right` values, passing `Left` values through.
    fn right<A: Shape, B: Shape, C: Shape>(
        computation: Arrow<Self, A, B>,
    ) -> Arrow<Self, Either<C, A>, Either<C, B>> {
        Self::choose(Self::identity(), computation)
    }
}
