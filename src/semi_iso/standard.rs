//! Standard semi-isomorphisms.
//!
//! The list primitives [`cons`] and [`nil`] drive repetition and sequencing;
//! [`unit_left`] and [`unit_right`] drive unit elimination in the product
//! combinators. The rest are the building blocks most syntax descriptions
//! need.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use super::{FunctionSemiIso, Primitive};
use crate::error::Failure;
use crate::shape::Either;

/// The identity semi-isomorphism.
///
/// ```
/// use siarrow::semi_iso::{SemiIso, identity};
///
/// assert_eq!(identity::<i32>().apply(42), Ok(42));
/// assert_eq!(identity::<i32>().unapply(42), Ok(42));
/// ```
#[must_use]
pub fn identity<T: 'static>() -> impl Primitive<T, T> {
    FunctionSemiIso::labelled("identity", |value: T| Ok(value), |value: T| Ok(value))
}

/// Swaps the components of a pair.
#[must_use]
pub fn swap<A: 'static, B: 'static>() -> impl Primitive<(A, B), (B, A)> {
    FunctionSemiIso::labelled(
        "swap",
        |(a, b): (A, B)| Ok((b, a)),
        |(b, a): (B, A)| Ok((a, b)),
    )
}

/// Reassociates a nested pair.
#[must_use]
pub fn associate<A: 'static, B: 'static, C: 'static>()
-> impl Primitive<(A, (B, C)), ((A, B), C)> {
    FunctionSemiIso::labelled(
        "associate",
        |(a, (b, c)): (A, (B, C))| Ok(((a, b), c)),
        |((a, b), c): ((A, B), C)| Ok((a, (b, c))),
    )
}

/// Introduces a unit on the right: `a <-> (a, ())`.
///
/// ```
/// use siarrow::semi_iso::{SemiIso, unit_right};
///
/// assert_eq!(unit_right::<char>().apply('x'), Ok(('x', ())));
/// assert_eq!(unit_right::<char>().unapply(('x', ())), Ok('x'));
/// ```
#[must_use]
pub fn unit_right<A: 'static>() -> impl Primitive<A, (A, ())> {
    FunctionSemiIso::labelled("unit", |value: A| Ok((value, ())), |(value, ()): (A, ())| Ok(value))
}

/// Introduces a unit on the left: `a <-> ((), a)`.
#[must_use]
pub fn unit_left<A: 'static>() -> impl Primitive<A, ((), A)> {
    FunctionSemiIso::labelled("unit", |value: A| Ok(((), value)), |((), value): ((), A)| Ok(value))
}

/// Splits a non-empty list into its head and tail; joins them back.
///
/// Forward fails on an empty list.
///
/// ```
/// use siarrow::semi_iso::{SemiIso, cons};
///
/// assert_eq!(cons::<i32>().apply(vec![1, 2, 3]), Ok((1, vec![2, 3])));
/// assert_eq!(cons::<i32>().unapply((1, vec![2, 3])), Ok(vec![1, 2, 3]));
/// assert!(cons::<i32>().apply(vec![]).is_err());
/// ```
#[must_use]
pub fn cons<T: 'static>() -> impl Primitive<Vec<T>, (T, Vec<T>)> {
    FunctionSemiIso::labelled(
        "cons",
        |list: Vec<T>| {
            let mut elements = list.into_iter();
            let head = elements
                .next()
                .ok_or_else(|| Failure::new("expected a non-empty sequence"))?;
            Ok((head, elements.collect()))
        },
        |(head, tail): (T, Vec<T>)| {
            let mut list = Vec::with_capacity(tail.len() + 1);
            list.push(head);
            list.extend(tail);
            Ok(list)
        },
    )
}

/// Recognises the empty list; produces it backward.
///
/// ```
/// use siarrow::semi_iso::{SemiIso, nil};
///
/// assert_eq!(nil::<i32>().apply(vec![]), Ok(()));
/// assert_eq!(nil::<i32>().unapply(()), Ok(vec![]));
/// assert!(nil::<i32>().apply(vec![1]).is_err());
/// ```
#[must_use]
pub fn nil<T: 'static>() -> impl Primitive<Vec<T>, ()> {
    FunctionSemiIso::labelled(
        "nil",
        |list: Vec<T>| {
            if list.is_empty() {
                Ok(())
            } else {
                Err(non_empty_sequence(list.len()))
            }
        },
        |()| Ok(Vec::new()),
    )
}

/// The failure [`nil`] reports for a list of `length` elements.
pub(crate) fn non_empty_sequence(length: usize) -> Failure {
    Failure::new(format!("expected an empty sequence, found {length} elements"))
}

/// Produces `expected` forward; backward accepts only values equal to it.
///
/// ```
/// use siarrow::semi_iso::{SemiIso, exact};
///
/// let comma = exact(',');
/// assert_eq!(comma.apply(()), Ok(','));
/// assert_eq!(comma.unapply(','), Ok(()));
/// assert!(comma.unapply(';').is_err());
/// ```
#[must_use]
pub fn exact<T>(expected: T) -> impl Primitive<(), T>
where
    T: PartialEq + Debug + Clone + Send + Sync + 'static,
{
    let produced = expected.clone();
    let label = format!("exact({expected:?})");
    FunctionSemiIso::labelled(
        label,
        move |()| Ok(produced.clone()),
        move |value: T| {
            if value == expected {
                Ok(())
            } else {
                Err(Failure::expected(format!("{expected:?}"), value))
            }
        },
    )
}

/// Accepts, in both directions, only values satisfying `predicate`.
///
/// `description` names what is expected in the failure message.
#[must_use]
pub fn checked<T, F>(description: &'static str, predicate: F) -> impl Primitive<T, T>
where
    T: Debug + 'static,
    F: Fn(&T) -> bool + Clone + Send + Sync + 'static,
{
    let backward_predicate = predicate.clone();
    FunctionSemiIso::labelled(
        description,
        move |value: T| {
            if predicate(&value) {
                Ok(value)
            } else {
                Err(Failure::expected(description, value))
            }
        },
        move |value: T| {
            if backward_predicate(&value) {
                Ok(value)
            } else {
                Err(Failure::expected(description, value))
            }
        },
    )
}

/// Always fails in both directions with `message`.
#[must_use]
pub fn always_failing<A: 'static, B: 'static>(message: impl Into<String>) -> impl Primitive<A, B> {
    let message = message.into();
    let backward_message = message.clone();
    let label = format!("fail({message:?})");
    FunctionSemiIso::labelled(
        label,
        move |_: A| Err(Failure::new(message.clone())),
        move |_: B| Err(Failure::new(backward_message.clone())),
    )
}

/// Unwraps `Some`; fails on `None`.
#[must_use]
pub fn some<T: 'static>() -> impl Primitive<Option<T>, T> {
    FunctionSemiIso::labelled(
        "some",
        |option: Option<T>| option.ok_or_else(|| Failure::new("expected Some, found None")),
        |value: T| Ok(Some(value)),
    )
}

/// Recognises `None`; produces it backward.
#[must_use]
pub fn none<T: 'static>() -> impl Primitive<Option<T>, ()> {
    FunctionSemiIso::labelled(
        "none",
        |option: Option<T>| {
            if option.is_none() {
                Ok(())
            } else {
                Err(Failure::new("expected None, found Some"))
            }
        },
        |()| Ok(None),
    )
}

/// Unwraps `Either::Left`; fails on `Right`.
#[must_use]
pub fn left<L: 'static, R: 'static>() -> impl Primitive<Either<L, R>, L> {
    FunctionSemiIso::labelled(
        "left",
        |either: Either<L, R>| either.left().ok_or_else(|| Failure::new("expected Left, found Right")),
        |value: L| Ok(Either::Left(value)),
    )
}

/// Unwraps `Either::Right`; fails on `Left`.
#[must_use]
pub fn right<L: 'static, R: 'static>() -> impl Primitive<Either<L, R>, R> {
    FunctionSemiIso::labelled(
        "right",
        |either: Either<L, R>| either.right().ok_or_else(|| Failure::new("expected Right, found Left")),
        |value: R| Ok(Either::Right(value)),
    )
}

/// Collects characters into a string and back.
#[must_use]
pub fn text() -> impl Primitive<Vec<char>, String> {
    FunctionSemiIso::labelled(
        "text",
        |characters: Vec<char>| Ok(characters.into_iter().collect()),
        |text: String| Ok(text.chars().collect()),
    )
}

/// Parses a string with [`FromStr`] and renders it back with [`Display`].
///
/// ```
/// use siarrow::semi_iso::{SemiIso, parsed};
///
/// let number = parsed::<u16>("a 16-bit number");
/// assert_eq!(number.apply("512".to_string()), Ok(512));
/// assert_eq!(number.unapply(512), Ok("512".to_string()));
/// assert!(number.apply("70000".to_string()).is_err());
/// ```
#[must_use]
pub fn parsed<T>(description: &'static str) -> impl Primitive<String, T>
where
    T: FromStr + Display + 'static,
{
    FunctionSemiIso::labelled(
        description,
        move |text: String| {
            text.parse::<T>()
                .map_err(|_| Failure::expected(description, text))
        },
        |value: T| Ok(value.to_string()),
    )
}
