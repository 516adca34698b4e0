//! Sequencing two computations and combining their results.
//!
//! All three functions run the left computation before the right one, in
//! both directions. A computation producing `()` contributes nothing to the
//! combined result: [`keep_left`] and [`keep_right`] drop it so a unit never
//! appears in a visible shape.

use crate::category::{Arrow, SemiIsoArrow};
use crate::semi_iso::{unit_left, unit_right};
use crate::shape::Shape;

use super::map_output;

/// Runs `left` then `right`, producing both results.
///
/// ```rust
/// use siarrow::category::Syntax;
/// use siarrow::combinators::pair;
/// use siarrow::interpret::{Parser, Printer};
///
/// assert_eq!(
///     Parser::parse(&pair(Parser::any_char(), Parser::any_char()), "ab"),
///     Ok(('a', 'b'))
/// );
/// assert_eq!(
///     Printer::print(&pair(Printer::any_char(), Printer::any_char()), ('a', 'b')),
///     Ok("ab".to_string())
/// );
/// ```
#[must_use]
pub fn pair<K, B, C>(left: Arrow<K, (), B>, right: Arrow<K, (), C>) -> Arrow<K, (), (B, C)>
where
    K: SemiIsoArrow,
    B: Shape,
    C: Shape,
{
    K::compose(K::embed(unit_right::<()>()), K::split(left, right))
}

/// Runs `left` then the unit computation `right`, producing the result of
/// `left` alone.
#[must_use]
pub fn keep_left<K, B>(left: Arrow<K, (), B>, right: Arrow<K, (), ()>) -> Arrow<K, (), B>
where
    K: SemiIsoArrow,
    B: Shape,
{
    map_output(unit_right::<B>(), pair(left, right))
}

/// Runs the unit computation `left` then `right`, producing the result of
/// `right` alone.
#[must_use]
pub fn keep_right<K, C>(left: Arrow<K, (), ()>, right: Arrow<K, (), C>) -> Arrow<K, (), C>
where
    K: SemiIsoArrow,
    C: Shape,
{
    map_output(unit_left::<C>(), pair(left, right))
}

impl<K: SemiIsoArrow, B: Shape> Arrow<K, (), B> {
    /// Method form of [`pair`].
    #[must_use]
    pub fn and<C: Shape>(self, right: Arrow<K, (), C>) -> Arrow<K, (), (B, C)> {
        pair(self, right)
    }

    /// Method form of [`keep_left`].
    #[must_use]
    pub fn skip(self, right: Arrow<K, (), ()>) -> Self {
        keep_left(self, right)
    }
}

impl<K: SemiIsoArrow> Arrow<K, (), ()> {
    /// Method form of [`keep_right`].
    #[must_use]
    pub fn then_keep<C: Shape>(self, right: Arrow<K, (), C>) -> Arrow<K, (), C> {
        keep_right(self, right)
    }
}
