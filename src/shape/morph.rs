//! Shape normalisation.
//!
//! Two shapes are interchangeable when they flatten to the same list of
//! leaves: `((a, b), c)`, `(a, (b, c))` and `(a, b, c)` all flatten to
//! `[a, b, c]`, and units disappear. [`morph`] converts between such shapes
//! and never fails; a conversion between shapes with different leaves does
//! not type-check.

use super::leaves::{Append, HCons, HNil, SameLeaves};
use super::Either;
use crate::semi_iso::{FunctionSemiIso, Primitive};

/// A shape that can be flattened into a leaf list and rebuilt from one.
///
/// Tuples flatten recursively, `()` flattens to [`HNil`], every other type is
/// a single leaf. Leaf implementations for user types are written with
/// [`morph_leaf!`](crate::morph_leaf!).
///
/// # Laws
///
/// 1. **Round trip**: `T::from_leaves(value.into_leaves()) == value`
pub trait Morph: Sized {
    /// The flattened leaf list.
    type Leaves;

    /// Flattens `self`.
    fn into_leaves(self) -> Self::Leaves;

    /// Rebuilds a value from its leaves.
    fn from_leaves(leaves: Self::Leaves) -> Self;
}

impl Morph for () {
    type Leaves = HNil;

    #[inline]
    fn into_leaves(self) -> HNil {
        HNil
    }

    #[inline]
    fn from_leaves(_: HNil) -> Self {}
}

impl<A, B> Morph for (A, B)
where
    A: Morph,
    B: Morph,
    A::Leaves: Append<B::Leaves>,
{
    type Leaves = <A::Leaves as Append<B::Leaves>>::Output;

    fn into_leaves(self) -> Self::Leaves {
        self.0.into_leaves().append(self.1.into_leaves())
    }

    fn from_leaves(leaves: Self::Leaves) -> Self {
        let (first, second) = <A::Leaves as Append<B::Leaves>>::split_off(leaves);
        (A::from_leaves(first), B::from_leaves(second))
    }
}

impl<A, B, C> Morph for (A, B, C)
where
    A: Morph,
    B: Morph,
    C: Morph,
    B::Leaves: Append<C::Leaves>,
    A::Leaves: Append<<B::Leaves as Append<C::Leaves>>::Output>,
{
    type Leaves = <A::Leaves as Append<<B::Leaves as Append<C::Leaves>>::Output>>::Output;

    fn into_leaves(self) -> Self::Leaves {
        let (a, b, c) = self;
        a.into_leaves()
            .append(b.into_leaves().append(c.into_leaves()))
    }

    fn from_leaves(leaves: Self::Leaves) -> Self {
        let (first, rest) =
            <A::Leaves as Append<<B::Leaves as Append<C::Leaves>>::Output>>::split_off(leaves);
        let (second, third) = <B::Leaves as Append<C::Leaves>>::split_off(rest);
        (
            A::from_leaves(first),
            B::from_leaves(second),
            C::from_leaves(third),
        )
    }
}

impl<A, B, C, D> Morph for (A, B, C, D)
where
    A: Morph,
    (B, C, D): Morph,
    A::Leaves: Append<<(B, C, D) as Morph>::Leaves>,
{
    type Leaves = <A::Leaves as Append<<(B, C, D) as Morph>::Leaves>>::Output;

    fn into_leaves(self) -> Self::Leaves {
        let (a, b, c, d) = self;
        a.into_leaves().append((b, c, d).into_leaves())
    }

    fn from_leaves(leaves: Self::Leaves) -> Self {
        let (first, rest) =
            <A::Leaves as Append<<(B, C, D) as Morph>::Leaves>>::split_off(leaves);
        let (b, c, d) = <(B, C, D)>::from_leaves(rest);
        (A::from_leaves(first), b, c, d)
    }
}

/// Declares types as single leaves for [`Morph`].
///
/// ```rust
/// use siarrow::morph_leaf;
/// use siarrow::semi_iso::SemiIso;
/// use siarrow::shape::morph;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Meters(f64);
///
/// morph_leaf!(Meters);
///
/// let nested = morph::<((Meters, ()), char), (Meters, char)>();
/// assert_eq!(
///     nested.apply(((Meters(1.5), ()), 'm')),
///     Ok((Meters(1.5), 'm'))
/// );
/// ```
#[macro_export]
macro_rules! morph_leaf {
    ($($leaf:ty),+ $(,)?) => {
        $(
            impl $crate::shape::Morph for $leaf {
                type Leaves = $crate::shape::HCons<$leaf, $crate::shape::HNil>;

                #[inline]
                fn into_leaves(self) -> Self::Leaves {
                    $crate::shape::HCons::new(self, $crate::shape::HNil)
                }

                #[inline]
                fn from_leaves(leaves: Self::Leaves) -> Self {
                    leaves.head
                }
            }
        )+
    };
}

morph_leaf!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str,
);

macro_rules! generic_morph_leaf {
    ($($leaf:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> Morph for $leaf<$($param),+> {
                type Leaves = HCons<Self, HNil>;

                #[inline]
                fn into_leaves(self) -> Self::Leaves {
                    HCons::new(self, HNil)
                }

                #[inline]
                fn from_leaves(leaves: Self::Leaves) -> Self {
                    leaves.head
                }
            }
        )+
    };
}

generic_morph_leaf!(Vec<T>, Option<T>, Box<T>, Either<L, R>);

/// The total semi-isomorphism between two shapes with the same leaves.
///
/// ```rust
/// use siarrow::semi_iso::SemiIso;
/// use siarrow::shape::morph;
///
/// let regroup = morph::<((i32, char), bool), (i32, (char, bool))>();
/// assert_eq!(regroup.apply(((1, 'a'), true)), Ok((1, ('a', true))));
/// assert_eq!(regroup.unapply((1, ('a', true))), Ok(((1, 'a'), true)));
///
/// let drop_units = morph::<((), (u8, ())), u8>();
/// assert_eq!(drop_units.apply(((), (7, ()))), Ok(7));
/// ```
///
/// Shapes with different leaves, in number or in order, are rejected at
/// compile time through the [`SameLeaves`] bound.
#[must_use]
pub fn morph<S, T>() -> impl Primitive<S, T>
where
    S: Morph + 'static,
    T: Morph + 'static,
    S::Leaves: SameLeaves<T::Leaves>,
{
    FunctionSemiIso::labelled(
        "morph",
        |source: S| Ok(T::from_leaves(source.into_leaves().cast())),
        |target: T| {
            Ok(S::from_leaves(<S::Leaves as SameLeaves<T::Leaves>>::cast_back(
                target.into_leaves(),
            )))
        },
    )
}
