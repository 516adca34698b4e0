//! # siarrow
//!
//! Reversible computation combinators: describe the syntax of a data shape
//! once, then run that description as a parser, as a printer, or inspect it.
//!
//! ## Overview
//!
//! - **Semi-isomorphisms**: partial, invertible primitives ([`semi_iso`])
//! - **Category interface**: composition, products, coproducts, alternation
//!   and recursion over an abstract interpreter ([`category`])
//! - **Combinators**: repetition, sequencing, unit-eliminating pairing,
//!   optional values, failure messages ([`combinators`])
//! - **Shapes**: [`Either`](shape::Either) and statically checked shape
//!   normalisation ([`shape`])
//! - **Interpreters**: [`Parser`](interpret::Parser),
//!   [`Printer`](interpret::Printer) and [`Describe`](interpret::Describe)
//!   ([`interpret`])
//!
//! ## Feature Flags
//!
//! - `parser`: the reading interpreter
//! - `printer`: the writing interpreter
//! - `describe`: the introspecting interpreter
//! - `derive`: `#[derive(SemiIsos)]` for enums and structs
//! - `serde`: `Serialize`/`Deserialize` for [`RunConfig`](config::RunConfig) and
//!   [`Either`](shape::Either)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use siarrow::prelude::*;
//!
//! fn digit<K: Syntax>() -> Arrow<K, (), u32> {
//!     let to_number = semi_iso!(
//!         "digit",
//!         |c: char| c.to_digit(10).ok_or_else(|| Failure::expected("a digit", c)),
//!         |n: u32| char::from_digit(n, 10).ok_or_else(|| Failure::expected("a digit value", n)),
//!     );
//!     post_forward(K::any_char(), to_number)
//! }
//!
//! assert_eq!(Parser::parse(&one_or_more(digit()), "123"), Ok(vec![1, 2, 3]));
//! assert_eq!(Printer::print(&one_or_more(digit()), vec![1, 2, 3]), Ok("123".to_string()));
//! assert!(Parser::parse(&one_or_more(digit()), "").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, every combinator, the standard
/// primitives and the enabled interpreters.
///
/// # Usage
///
/// ```rust
/// use siarrow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::category::*;
    pub use crate::combinators::*;
    pub use crate::config::RunConfig;
    pub use crate::error::{Failure, Result};
    pub use crate::semi_iso;
    pub use crate::semi_iso::{FunctionSemiIso, Primitive, SemiIso};
    pub use crate::shape::{Either, Morph, Shape, morph};

    #[cfg(feature = "describe")]
    pub use crate::interpret::Describe;

    #[cfg(feature = "parser")]
    pub use crate::interpret::Parser;

    #[cfg(feature = "printer")]
    pub use crate::interpret::Printer;

    #[cfg(feature = "derive")]
    pub use siarrow_derive::SemiIsos;
}

pub mod category;
pub mod combinators;
pub mod config;
pub mod error;
pub mod interpret;
pub mod semi_iso;
pub mod shape;

pub use error::{Failure, Result};
pub use shape::Either;

#[cfg(feature = "derive")]
pub use siarrow_derive::SemiIsos;
