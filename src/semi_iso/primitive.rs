//! The reversible primitive.
//!
//! A semi-isomorphism is a pair of partial functions `apply: A -> Result<B>`
//! and `unapply: B -> Result<A>`. Either direction may fail; whenever one
//! succeeds, the other direction maps the result back to an equivalent input.
//!
//! # Laws
//!
//! 1. **`ApplyUnapply` Law**: if `p.apply(a) == Ok(b)` then `p.unapply(b)` succeeds
//!    and `p.apply(p.unapply(b)?) == Ok(b)`.
//! 2. **`UnapplyApply` Law**: if `p.unapply(b) == Ok(a)` then `p.apply(a)` succeeds
//!    and `p.unapply(p.apply(a)?) == Ok(a)`.
//!
//! # Examples
//!
//! ```
//! use siarrow::Failure;
//! use siarrow::semi_iso::{FunctionSemiIso, SemiIso};
//!
//! let digit = FunctionSemiIso::labelled(
//!     "digit",
//!     |c: char| c.to_digit(10).ok_or_else(|| Failure::expected("a digit", c)),
//!     |n: u32| char::from_digit(n, 10).ok_or_else(|| Failure::expected("a number below 10", n)),
//! );
//!
//! assert_eq!(digit.apply('7'), Ok(7));
//! assert_eq!(digit.unapply(7), Ok('7'));
//! assert!(digit.apply('x').is_err());
//! assert_eq!(digit.label(), "digit");
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::error::Result;

/// A partial, invertible transformation between `A` and `B`.
///
/// # Laws
///
/// 1. **`ApplyUnapply` Law**: `p.apply(a) == Ok(b)` implies `p.unapply(b)` is `Ok(a2)` with `p.apply(a2) == Ok(b)`
/// 2. **`UnapplyApply` Law**: `p.unapply(b) == Ok(a)` implies `p.apply(a)` is `Ok(b2)` with `p.unapply(b2) == Ok(a)`
pub trait SemiIso<A, B> {
    /// Applies the forward direction.
    ///
    /// # Errors
    ///
    /// Fails when `value` is outside the forward domain.
    fn apply(&self, value: A) -> Result<B>;

    /// Applies the backward direction.
    ///
    /// # Errors
    ///
    /// Fails when `value` is outside the backward domain.
    fn unapply(&self, value: B) -> Result<A>;

    /// A short name used by the structural interpreter.
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("semi_iso")
    }

    /// Returns the semi-isomorphism with both directions swapped.
    ///
    /// `p.reverse().reverse()` behaves as `p`.
    ///
    /// ```
    /// use siarrow::semi_iso::{SemiIso, swap};
    ///
    /// let swapped = swap::<i32, char>().reverse();
    /// assert_eq!(swapped.apply(('a', 1)), Ok((1, 'a')));
    /// ```
    fn reverse(self) -> ReversedSemiIso<Self>
    where
        Self: Sized,
    {
        ReversedSemiIso::new(self)
    }

    /// Chains `self` and `other`: forward runs `self` then `other`, backward
    /// runs `other` then `self`.
    ///
    /// ```
    /// use siarrow::semi_iso::{SemiIso, checked, identity};
    ///
    /// let even = checked("an even number", |n: &i32| n % 2 == 0);
    /// let composed = identity::<i32>().compose(even);
    /// assert_eq!(composed.apply(4), Ok(4));
    /// assert!(composed.unapply(3).is_err());
    /// ```
    fn compose<C, P>(self, other: P) -> ComposedSemiIso<Self, P, B>
    where
        Self: Sized,
        P: SemiIso<B, C>,
    {
        ComposedSemiIso::new(self, other)
    }
}

/// A semi-isomorphism that can be embedded into any interpreter.
///
/// Every standard primitive returns `impl Primitive<A, B>`.
pub trait Primitive<A, B>: SemiIso<A, B> + Clone + Send + Sync + 'static {}

impl<A, B, P> Primitive<A, B> for P where P: SemiIso<A, B> + Clone + Send + Sync + 'static {}

/// A semi-isomorphism built from two closures.
///
/// The `semi_iso!` macro expands to this type.
pub struct FunctionSemiIso<A, B, F, G>
where
    F: Fn(A) -> Result<B>,
    G: Fn(B) -> Result<A>,
{
    label: Cow<'static, str>,
    forward: F,
    backward: G,
    _marker: PhantomData<fn(A) -> B>,
}

impl<A, B, F, G> FunctionSemiIso<A, B, F, G>
where
    F: Fn(A) -> Result<B>,
    G: Fn(B) -> Result<A>,
{
    /// Creates an unlabelled semi-isomorphism.
    #[must_use]
    pub const fn new(forward: F, backward: G) -> Self {
        Self {
            label: Cow::Borrowed("semi_iso"),
            forward,
            backward,
            _marker: PhantomData,
        }
    }

    /// Creates a semi-isomorphism with a label for the structural interpreter.
    #[must_use]
    pub fn labelled(label: impl Into<Cow<'static, str>>, forward: F, backward: G) -> Self {
        Self {
            label: label.into(),
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<A, B, F, G> SemiIso<A, B> for FunctionSemiIso<A, B, F, G>
where
    F: Fn(A) -> Result<B>,
    G: Fn(B) -> Result<A>,
{
    fn apply(&self, value: A) -> Result<B> {
        (self.forward)(value)
    }

    fn unapply(&self, value: B) -> Result<A> {
        (self.backward)(value)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&*self.label)
    }
}

impl<A, B, F, G> Clone for FunctionSemiIso<A, B, F, G>
where
    F: Fn(A) -> Result<B> + Clone,
    G: Fn(B) -> Result<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, B, F, G> std::fmt::Debug for FunctionSemiIso<A, B, F, G>
where
    F: Fn(A) -> Result<B>,
    G: Fn(B) -> Result<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionSemiIso")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A semi-isomorphism with its directions swapped.
#[derive(Debug, Clone)]
pub struct ReversedSemiIso<I> {
    inner: I,
}

impl<I> ReversedSemiIso<I> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Unwraps the original semi-isomorphism.
    #[must_use]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<A, B, I> SemiIso<B, A> for ReversedSemiIso<I>
where
    I: SemiIso<A, B>,
{
    fn apply(&self, value: B) -> Result<A> {
        self.inner.unapply(value)
    }

    fn unapply(&self, value: A) -> Result<B> {
        self.inner.apply(value)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("reverse({})", self.inner.label()))
    }
}

/// Two semi-isomorphisms chained through the intermediate shape `M`.
pub struct ComposedSemiIso<I1, I2, M> {
    first: I1,
    second: I2,
    _marker: PhantomData<fn() -> M>,
}

impl<I1, I2, M> ComposedSemiIso<I1, I2, M> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<A, M, B, I1, I2> SemiIso<A, B> for ComposedSemiIso<I1, I2, M>
where
    I1: SemiIso<A, M>,
    I2: SemiIso<M, B>,
{
    fn apply(&self, value: A) -> Result<B> {
        let intermediate = self.first.apply(value)?;
        self.second.apply(intermediate)
    }

    fn unapply(&self, value: B) -> Result<A> {
        let intermediate = self.second.unapply(value)?;
        self.first.unapply(intermediate)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} . {}", self.first.label(), self.second.label()))
    }
}

impl<I1: Clone, I2: Clone, M> Clone for ComposedSemiIso<I1, I2, M> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, M> std::fmt::Debug for ComposedSemiIso<I1, I2, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedSemiIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a [`FunctionSemiIso`] from a forward and a backward function,
/// optionally preceded by a label.
///
/// ```
/// use siarrow::semi_iso;
/// use siarrow::semi_iso::SemiIso;
///
/// let negate = semi_iso!("negate", |n: i32| Ok(-n), |n: i32| Ok(-n));
/// assert_eq!(negate.apply(3), Ok(-3));
/// assert_eq!(negate.label(), "negate");
///
/// let swap = semi_iso!(|(a, b): (i32, char)| Ok((b, a)), |(b, a): (char, i32)| Ok((a, b)));
/// assert_eq!(swap.unapply(('x', 1)), Ok((1, 'x')));
/// ```
#[macro_export]
macro_rules! semi_iso {
    ($label:expr, $forward:expr, $backward:expr $(,)?) => {
        $crate::semi_iso::FunctionSemiIso::labelled($label, $forward, $backward)
    };
    ($forward:expr, $backward:expr $(,)?) => {
        $crate::semi_iso::FunctionSemiIso::new($forward, $backward)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;

    fn positive() -> impl Primitive<i32, u32> {
        FunctionSemiIso::labelled(
            "positive",
            |n: i32| u32::try_from(n).map_err(|_| Failure::expected("a positive number", n)),
            |n: u32| i32::try_from(n).map_err(|_| Failure::expected("a number in range", n)),
        )
    }

    #[test]
    fn test_function_semi_iso_apply() {
        assert_eq!(positive().apply(5), Ok(5));
        assert_eq!(
            positive().apply(-1),
            Err(Failure::new("expected a positive number, found -1"))
        );
    }

    #[test]
    fn test_function_semi_iso_unapply() {
        assert_eq!(positive().unapply(5), Ok(5));
        assert!(positive().unapply(u32::MAX).is_err());
    }

    #[test]
    fn test_reversed_semi_iso_swaps_directions() {
        let reversed = positive().reverse();
        assert_eq!(reversed.apply(7), Ok(7));
        assert!(reversed.unapply(-7).is_err());
        assert_eq!(reversed.label(), "reverse(positive)");
    }

    #[test]
    fn test_double_reverse_behaves_as_original() {
        let twice = positive().reverse().reverse();
        assert_eq!(twice.apply(3), positive().apply(3));
        assert_eq!(twice.apply(-3), positive().apply(-3));
    }

    #[test]
    fn test_composed_semi_iso_short_circuits() {
        let halve = FunctionSemiIso::labelled(
            "halve",
            |n: u32| {
                if n % 2 == 0 {
                    Ok(n / 2)
                } else {
                    Err(Failure::expected("an even number", n))
                }
            },
            |n: u32| Ok(n * 2),
        );
        let composed = positive().compose(halve);

        assert_eq!(composed.apply(8), Ok(4));
        assert_eq!(
            composed.apply(-8),
            Err(Failure::new("expected a positive number, found -8"))
        );
        assert_eq!(
            composed.apply(7),
            Err(Failure::new("expected an even number, found 7"))
        );
        assert_eq!(composed.unapply(4), Ok(8));
        assert_eq!(composed.label(), "positive . halve");
    }

    #[test]
    fn test_semi_iso_macro_default_label() {
        let identity = semi_iso!(|n: i32| Ok(n), |n: i32| Ok(n));
        assert_eq!(identity.label(), "semi_iso");
    }
}
