//! Fixed-length sequences of computations.

use std::iter;

use crate::category::{Arrow, SemiIsoArrow};
use crate::semi_iso::{cons, nil};
use crate::shape::Shape;

use super::{keep_left, map_output, pair};

/// Runs every computation in order, collecting the results.
///
/// An empty vector produces the empty list. When writing, the list must
/// have exactly as many elements as there are computations.
///
/// ```rust
/// use siarrow::category::Syntax;
/// use siarrow::combinators::sequence;
/// use siarrow::interpret::{Parser, Printer};
///
/// let three = sequence(vec![Parser::any_char(); 3]);
/// assert_eq!(Parser::parse(&three, "abc"), Ok(vec!['a', 'b', 'c']));
/// assert!(Parser::parse(&three, "ab").is_err());
///
/// let three = sequence(vec![Printer::any_char(); 3]);
/// assert!(Printer::print(&three, vec!['a', 'b']).is_err());
/// ```
#[must_use]
pub fn sequence<K, T>(computations: Vec<Arrow<K, (), T>>) -> Arrow<K, (), Vec<T>>
where
    K: SemiIsoArrow,
    T: Shape,
{
    computations
        .into_iter()
        .rev()
        .fold(K::embed_backward(nil::<T>()), |rest, computation| {
            map_output(cons::<T>(), pair(computation, rest))
        })
}

/// Runs every unit computation in order.
#[must_use]
pub fn sequence_unit<K>(computations: Vec<Arrow<K, (), ()>>) -> Arrow<K, (), ()>
where
    K: SemiIsoArrow,
{
    computations
        .into_iter()
        .fold(K::identity(), |done, computation| keep_left(done, computation))
}

/// Runs `computation` exactly `count` times, collecting the results.
///
/// Equivalent to [`sequence`] over `count` copies of `computation`.
#[must_use]
pub fn replicate<K, T>(count: usize, computation: Arrow<K, (), T>) -> Arrow<K, (), Vec<T>>
where
    K: SemiIsoArrow,
    T: Shape,
{
    sequence(iter::repeat_n(computation, count).collect())
}

/// Runs the unit computation `computation` exactly `count` times.
#[must_use]
pub fn replicate_unit<K>(count: usize, computation: Arrow<K, (), ()>) -> Arrow<K, (), ()>
where
    K: SemiIsoArrow,
{
    sequence_unit(iter::repeat_n(computation, count).collect())
}
