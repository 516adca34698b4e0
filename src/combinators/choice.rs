//! Optional values, sums and separated lists.

use crate::category::{Arrow, SemiIsoArrow, zero_or_more};
use crate::semi_iso::{cons, left, nil, none, right, some};
use crate::shape::{Either, Shape};

use super::{keep_right, map_output, pair};

/// Runs `computation` if it succeeds, producing `None` otherwise.
///
/// Writing `None` produces nothing.
///
/// ```rust
/// use siarrow::combinators::{char_literal, optional};
/// use siarrow::interpret::{Parser, Printer};
///
/// let sign = optional(char_literal::<Parser>('-'));
/// assert_eq!(Parser::run(&sign, (), "-1"), Ok((Some(()), "1")));
/// assert_eq!(Parser::run(&sign, (), "1"), Ok((None, "1")));
///
/// let sign = optional(char_literal::<Printer>('-'));
/// assert_eq!(Printer::print(&sign, None), Ok(String::new()));
/// ```
#[must_use]
pub fn optional<K, T>(computation: Arrow<K, (), T>) -> Arrow<K, (), Option<T>>
where
    K: SemiIsoArrow,
    T: Shape,
{
    K::alt(
        map_output(some::<T>(), computation),
        K::embed_backward(none::<T>()),
    )
}

/// Runs `first`, falling back to `second`, tagging the result with the
/// branch that produced it.
///
/// When writing, the variant of the value selects the branch.
#[must_use]
pub fn either<K, B, C>(first: Arrow<K, (), B>, second: Arrow<K, (), C>) -> Arrow<K, (), Either<B, C>>
where
    K: SemiIsoArrow,
    B: Shape,
    C: Shape,
{
    K::alt(
        map_output(left::<B, C>(), first),
        map_output(right::<B, C>(), second),
    )
}

/// Zero or more `element`s with a `separator` between each pair.
///
/// ```rust
/// use siarrow::combinators::{char_literal, satisfy, separated_by};
/// use siarrow::interpret::{Parser, Printer};
///
/// let digits = separated_by(
///     satisfy::<Parser, _>("a digit", char::is_ascii_digit),
///     char_literal(','),
/// );
/// assert_eq!(Parser::parse(&digits, "1,2,3"), Ok(vec!['1', '2', '3']));
/// assert_eq!(Parser::parse(&digits, ""), Ok(vec![]));
///
/// let digits = separated_by(
///     satisfy::<Printer, _>("a digit", char::is_ascii_digit),
///     char_literal(','),
/// );
/// assert_eq!(Printer::print(&digits, vec!['4', '2']), Ok("4,2".to_string()));
/// ```
#[must_use]
pub fn separated_by<K, T>(element: Arrow<K, (), T>, separator: Arrow<K, (), ()>) -> Arrow<K, (), Vec<T>>
where
    K: SemiIsoArrow,
    T: Shape,
{
    let rest = zero_or_more(keep_right(separator, element.clone()));
    K::alt(
        map_output(cons::<T>(), pair(element, rest)),
        K::embed_backward(nil::<T>()),
    )
}
