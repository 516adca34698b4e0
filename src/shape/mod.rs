//! Data shapes flowing through computations.
//!
//! A shape is the unit `()`, a single value, or a tuple of shapes. The unit
//! is the identity of pairing: the product combinators in
//! [`combinators`](crate::combinators) eliminate it so it never shows up in a
//! visible result, and [`morph`] converts between any two shapes that agree
//! once units are dropped and tuples are flattened.
//!
//! # Example
//!
//! ```rust
//! use siarrow::semi_iso::SemiIso;
//! use siarrow::shape::{Either, morph};
//!
//! let regroup = morph::<(((), String), (Either<u8, char>, ())), (String, Either<u8, char>)>();
//! assert_eq!(
//!     regroup.apply((((), "id".to_string()), (Either::Left(1), ()))),
//!     Ok(("id".to_string(), Either::Left(1)))
//! );
//! ```

mod either;
mod leaves;
mod morph;

pub use either::Either;
pub use leaves::{Append, HCons, HNil, SameLeaves};
pub use morph::{Morph, morph};

/// Values that can flow through a computation.
///
/// Alternation may hand the same input to both of its branches, which is why
/// shapes are `Clone`.
pub trait Shape: Clone + 'static {}

impl<T> Shape for T where T: Clone + 'static {}
