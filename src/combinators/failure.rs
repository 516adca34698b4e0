//! Explicit failure.

use crate::category::{Arrow, SemiIsoArrow};
use crate::semi_iso::always_failing;
use crate::shape::Shape;

/// A computation that always fails with `message`, in both directions.
///
/// ```rust
/// use siarrow::Failure;
/// use siarrow::combinators::fail;
/// use siarrow::interpret::Parser;
///
/// let boom = fail::<Parser, (), char>("boom");
/// assert_eq!(Parser::parse(&boom, ""), Err(Failure::new("boom")));
/// ```
#[must_use]
pub fn fail<K, A, B>(message: impl Into<String>) -> Arrow<K, A, B>
where
    K: SemiIsoArrow,
    A: Shape,
    B: Shape,
{
    K::embed(always_failing::<A, B>(message))
}

/// Runs `computation`; if it fails, fails with `message` instead.
///
/// ```rust
/// use siarrow::Failure;
/// use siarrow::combinators::{char_literal, or_fail};
/// use siarrow::interpret::Parser;
///
/// let semicolon = or_fail(char_literal::<Parser>(';'), "missing semicolon");
/// assert_eq!(Parser::parse(&semicolon, ";"), Ok(()));
/// assert_eq!(Parser::parse(&semicolon, ","), Err(Failure::new("missing semicolon")));
/// ```
#[must_use]
pub fn or_fail<K, A, B>(computation: Arrow<K, A, B>, message: impl Into<String>) -> Arrow<K, A, B>
where
    K: SemiIsoArrow,
    A: Shape,
    B: Shape,
{
    K::alt(computation, fail(message))
}

impl<K: SemiIsoArrow, A: Shape, B: Shape> Arrow<K, A, B> {
    /// Method form of [`or_fail`].
    #[must_use]
    pub fn or_fail(self, message: impl Into<String>) -> Self {
        or_fail(self, message)
    }
}
