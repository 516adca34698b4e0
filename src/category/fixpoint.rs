//! Recursive computations.
//!
//! Computations are plain values built eagerly, so a computation that refers
//! to itself (a repetition, a nested grammar) cannot be written as a
//! self-referential expression. [`Fixpoint::fix`] hands the definition a
//! placeholder for the computation being defined and ties the knot once the
//! body is built.

#[cfg(any(feature = "parser", feature = "describe"))]
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Arrow, Category};
use crate::shape::Shape;

/// Interpreters that support self-referential computations.
///
/// # Example
///
/// ```rust
/// use siarrow::category::{Alternation, Fixpoint, Syntax};
/// use siarrow::combinators::{char_literal, keep_left, keep_right};
/// use siarrow::interpret::Parser;
///
/// // A single character inside any number of parentheses.
/// let nested = Parser::fix(|inner| {
///     Parser::alt(
///         keep_right(char_literal('('), keep_left(inner, char_literal(')'))),
///         Parser::any_char(),
///     )
/// });
///
/// assert_eq!(Parser::parse(&nested, "((x))"), Ok('x'));
/// assert!(Parser::parse(&nested, "((x)").is_err());
/// ```
pub trait Fixpoint: Category {
    /// Builds a computation that may use itself through the placeholder
    /// passed to `build`.
    ///
    /// The placeholder must only be run after `fix` returns; running a
    /// recursive computation counts towards the nesting limit of the
    /// interpreter, and exceeding that limit fails the whole run.
    fn fix<A, B, F>(build: F) -> Arrow<Self, A, B>
    where
        A: Shape,
        B: Shape,
        F: FnOnce(Arrow<Self, A, B>) -> Arrow<Self, A, B>;
}

/// Allocates an identifier for a recursive node.
#[cfg(any(feature = "parser", feature = "describe"))]
pub(crate) fn next_node_id() -> usize {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
