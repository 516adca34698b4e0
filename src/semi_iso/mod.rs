//! Reversible primitives.
//!
//! A [`SemiIso<A, B>`] is the unit of reversibility: every computation built
//! by the [`category`](crate::category) layer ultimately bottoms out in
//! semi-isomorphisms embedded with
//! [`SemiIsoArrow::embed`](crate::category::SemiIsoArrow::embed).
//!
//! # Available Primitives
//!
//! - Structural: [`identity`], [`swap`], [`associate`], [`unit_left`], [`unit_right`]
//! - Lists: [`cons`], [`nil`], [`text`]
//! - Sums: [`some`], [`none`], [`left`], [`right`]
//! - Values: [`exact`], [`checked`], [`parsed`], [`always_failing`]
//!
//! Custom primitives are written with [`FunctionSemiIso`] or the
//! [`semi_iso!`](crate::semi_iso!) macro, or derived for enums and structs
//! with `#[derive(SemiIsos)]` (feature `derive`).
//!
//! # Example
//!
//! ```
//! use siarrow::semi_iso::{SemiIso, cons, swap};
//!
//! let tail_first = cons::<char>().compose(swap::<char, Vec<char>>());
//! assert_eq!(tail_first.apply(vec!['a', 'b']), Ok((vec!['b'], 'a')));
//! assert_eq!(tail_first.unapply((vec![], 'z')), Ok(vec!['z']));
//! ```

mod primitive;
mod standard;

pub use primitive::{ComposedSemiIso, FunctionSemiIso, Primitive, ReversedSemiIso, SemiIso};
pub use standard::{
    always_failing, associate, checked, cons, exact, identity, left, nil, none, parsed, right, some,
    swap, text, unit_left, unit_right,
};
#[cfg(feature = "printer")]
pub(crate) use standard::non_empty_sequence;
