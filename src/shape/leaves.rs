//! Type-level leaf lists.
//!
//! A flattened shape is a heterogeneous list built from [`HCons`] cells
//! terminated by [`HNil`]. [`Append`] concatenates two such lists and splits
//! a concatenation back into its two halves; both directions are resolved at
//! compile time.

/// The empty leaf list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HNil;

/// A leaf list cell holding `head` in front of the list `tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HCons<H, T> {
    /// The first leaf.
    pub head: H,
    /// The remaining leaves.
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    /// Creates a cell.
    #[must_use]
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

/// Concatenation of leaf lists.
///
/// ```rust
/// use siarrow::shape::{Append, HCons, HNil};
///
/// let left = HCons::new(1, HNil);
/// let right = HCons::new('a', HCons::new(true, HNil));
/// let joined = left.append(right);
/// assert_eq!(joined, HCons::new(1, HCons::new('a', HCons::new(true, HNil))));
///
/// let (left, right) =
///     <HCons<i32, HNil> as Append<HCons<char, HCons<bool, HNil>>>>::split_off(joined);
/// assert_eq!(left.head, 1);
/// assert_eq!(right.head, 'a');
/// ```
pub trait Append<Rest>: Sized {
    /// The concatenated list.
    type Output;

    /// Places `rest` after `self`.
    fn append(self, rest: Rest) -> Self::Output;

    /// Splits a concatenation produced by [`append`](Append::append).
    fn split_off(joined: Self::Output) -> (Self, Rest);
}

impl<Rest> Append<Rest> for HNil {
    type Output = Rest;

    #[inline]
    fn append(self, rest: Rest) -> Rest {
        rest
    }

    #[inline]
    fn split_off(joined: Rest) -> (Self, Rest) {
        (Self, joined)
    }
}

impl<H, T, Rest> Append<Rest> for HCons<H, T>
where
    T: Append<Rest>,
{
    type Output = HCons<H, T::Output>;

    #[inline]
    fn append(self, rest: Rest) -> Self::Output {
        HCons::new(self.head, self.tail.append(rest))
    }

    #[inline]
    fn split_off(joined: Self::Output) -> (Self, Rest) {
        let (tail, rest) = T::split_off(joined.tail);
        (Self::new(joined.head, tail), rest)
    }
}

/// Leaf lists that are the same list.
///
/// Implemented only for a list and itself, so the bound `L: SameLeaves<R>`
/// holds exactly when `L` and `R` are equal. [`morph`](super::morph) states
/// its shape requirement with this bound.
#[diagnostic::on_unimplemented(
    message = "the two shapes flatten to different leaves",
    label = "shapes with different leaves",
    note = "both shapes must hold the same leaf types in the same order; only nesting and units may differ"
)]
pub trait SameLeaves<Other> {
    /// Views `self` as the other list.
    fn cast(self) -> Other;

    /// Views the other list as `Self`.
    fn cast_back(other: Other) -> Self;
}

impl<L> SameLeaves<L> for L {
    #[inline]
    fn cast(self) -> L {
        self
    }

    #[inline]
    fn cast_back(other: L) -> L {
        other
    }
}
