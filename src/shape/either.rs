//! The sum shape.
//!
//! `Either<L, R>` is the shape consumed by
//! [`Coproducts::choose`](crate::category::Coproducts::choose) and produced by
//! [`either`](crate::combinators::either). The [`left`](crate::semi_iso::left)
//! and [`right`](crate::semi_iso::right) primitives select one side.

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The first alternative.
    Left(L),
    /// The second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// The `Left` value, if this is one.
    ///
    /// ```rust
    /// use siarrow::shape::Either;
    ///
    /// let left: Either<i32, char> = Either::Left(1);
    /// assert_eq!(left.left(), Some(1));
    /// assert_eq!(left.right(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The `Right` value, if this is one.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(3), Some(3), None)]
    #[case(Either::Right('r'), None, Some('r'))]
    fn each_side_is_projected(
        #[case] value: Either<i32, char>,
        #[case] left: Option<i32>,
        #[case] right: Option<char>,
    ) {
        assert_eq!(value.left(), left);
        assert_eq!(value.right(), right);
    }
}
