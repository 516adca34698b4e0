//! The category-of-computations interface.
//!
//! A computation is an [`Arrow<K, A, B>`]: a value describing how to turn an
//! `A` into a `B`, executed by an interpreter `K`. Interpreters advertise
//! what they can do through capability traits:
//!
//! - [`Category`]: identity and sequential composition
//! - [`Products`]: running two computations side by side on a pair
//! - [`Coproducts`]: structural choice on [`Either`](crate::shape::Either)
//! - [`Alternation`]: fallback when a computation fails
//! - [`Fixpoint`]: self-referential computations
//! - [`SemiIsoArrow`]: embedding reversible primitives (all of the above)
//! - [`Syntax`]: reading and writing single characters
//!
//! Syntaxes are written once, generic over `K`, and run by whichever
//! interpreter the caller instantiates them with.
//!
//! # Example
//!
//! ```rust
//! use siarrow::category::{Arrow, Syntax};
//! use siarrow::combinators::{one_or_more, satisfy};
//! use siarrow::interpret::{Describe, Parser, Printer};
//!
//! fn word<K: Syntax>() -> Arrow<K, (), Vec<char>> {
//!     one_or_more(satisfy("a lowercase letter", char::is_ascii_lowercase))
//! }
//!
//! assert_eq!(Parser::parse(&word(), "abc"), Ok(vec!['a', 'b', 'c']));
//! assert_eq!(Printer::print(&word(), vec!['o', 'k']), Ok("ok".to_string()));
//! assert!(Describe::describe(&word::<Describe>()).is_recursive());
//! ```

mod alternation;
mod compose;
mod coproducts;
mod fixpoint;
mod interpreter;
mod products;
mod semi_iso_arrow;
mod syntax;

pub use alternation::Alternation;
pub use compose::Category;
pub use coproducts::Coproducts;
pub use fixpoint::Fixpoint;
pub use interpreter::{Arrow, Interpreter};
pub use products::Products;
pub use semi_iso_arrow::{SemiIsoArrow, one_or_more, zero_or_more};
pub use syntax::Syntax;

#[cfg(any(feature = "parser", feature = "describe"))]
pub(crate) use fixpoint::next_node_id;
