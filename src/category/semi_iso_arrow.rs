//! Embedding reversible primitives, and repetition.
//!
//! # Laws
//!
//! ## Embedding Inverse Law
//!
//! Wherever both sides are defined:
//!
//! ```text
//! compose(embed(p), embed(p.reverse())) == identity()
//! ```
//!
//! ## Repetition
//!
//! ```text
//! one_or_more(v)  == map_output(cons(), pair(v, zero_or_more(v)))
//! zero_or_more(v) == alt(one_or_more(v), embed_backward(nil()))
//! ```

use super::{Alternation, Arrow, Coproducts, Fixpoint, Products};
use crate::semi_iso::{SemiIso, cons, nil, unit_right};
use crate::shape::Shape;

/// Interpreters that embed semi-isomorphisms as computations.
///
/// Reading interpreters run an embedded primitive forward, writing
/// interpreters run it backward. Everything else in the crate is derived
/// from [`embed`](SemiIsoArrow::embed) and the capabilities this trait
/// requires.
pub trait SemiIsoArrow: Products + Coproducts + Alternation + Fixpoint {
    /// Lifts `primitive` into a computation from `A` to `B`.
    fn embed<A, B, P>(primitive: P) -> Arrow<Self, A, B>
    where
        A: Shape,
        B: Shape,
        P: SemiIso<A, B> + Send + Sync + 'static;

    /// Lifts `primitive` with its directions swapped.
    ///
    /// ```rust
    /// use siarrow::category::SemiIsoArrow;
    /// use siarrow::interpret::Parser;
    /// use siarrow::semi_iso::nil;
    ///
    /// let empty = Parser::embed_backward(nil::<char>());
    /// assert_eq!(Parser::parse(&empty, ""), Ok(vec![]));
    /// ```
    fn embed_backward<A, B, P>(primitive: P) -> Arrow<Self, B, A>
    where
        A: Shape,
        B: Shape,
        P: SemiIso<A, B> + Send + Sync + 'static,
    {
        Self::embed(primitive.reverse())
    }

    /// Repeats `element` as often as it succeeds.
    ///
    /// The default is the recursive definition from the module docs. The
    /// text interpreters override it with a loop that behaves the same but
    /// keeps stack use independent of the list length and does not count
    /// repetitions towards the nesting limit.
    fn zero_or_more<T: Shape>(element: Arrow<Self, (), T>) -> Arrow<Self, (), Vec<T>> {
        Self::fix(move |rest| Self::alt(cons_of(element, rest), Self::embed_backward(nil::<T>())))
    }
}

/// Runs `head` then `tail` and joins the results into one list.
fn cons_of<K, T>(head: Arrow<K, (), T>, tail: Arrow<K, (), Vec<T>>) -> Arrow<K, (), Vec<T>>
where
    K: SemiIsoArrow,
    T: Shape,
{
    let paired = K::compose(K::embed(unit_right::<()>()), K::split(head, tail));
    K::compose(paired, K::embed_backward(cons::<T>()))
}

/// Repeats `element` as often as it succeeds, collecting the results.
///
/// Never fails: when the first repetition fails the result is the empty
/// list. When writing, every element of the list is written in order.
///
/// `element` should make progress (consume input) on every repetition.
/// The text readers stop a repetition whose element succeeds without
/// consuming anything, so the repetition ends there instead of looping.
///
/// ```rust
/// use siarrow::category::Syntax;
/// use siarrow::combinators::{char_literal, zero_or_more};
/// use siarrow::interpret::{Parser, Printer};
///
/// let stars = zero_or_more(char_literal::<Parser>('*'));
/// assert_eq!(Parser::parse(&stars, "***"), Ok(vec![(), (), ()]));
/// assert_eq!(Parser::parse(&stars, ""), Ok(vec![]));
///
/// let stars = zero_or_more(char_literal::<Printer>('*'));
/// assert_eq!(Printer::print(&stars, vec![(), ()]), Ok("**".to_string()));
/// ```
#[must_use]
pub fn zero_or_more<K, T>(element: Arrow<K, (), T>) -> Arrow<K, (), Vec<T>>
where
    K: SemiIsoArrow,
    T: Shape,
{
    K::zero_or_more(element)
}

/// Repeats `element` at least once, collecting the results.
///
/// Fails when the first repetition fails, and when writing an empty list.
///
/// ```rust
/// use siarrow::category::Syntax;
/// use siarrow::combinators::{one_or_more, satisfy};
/// use siarrow::interpret::Parser;
///
/// let letters = one_or_more(satisfy::<Parser, _>("a letter", char::is_ascii_alphabetic));
/// assert_eq!(Parser::parse(&letters, "abc"), Ok(vec!['a', 'b', 'c']));
/// assert!(Parser::parse(&letters, "").is_err());
/// ```
#[must_use]
pub fn one_or_more<K, T>(element: Arrow<K, (), T>) -> Arrow<K, (), Vec<T>>
where
    K: SemiIsoArrow,
    T: Shape,
{
    cons_of(element.clone(), zero_or_more(element))
}
