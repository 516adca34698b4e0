//! Concrete interpreters.
//!
//! - [`Parser`] (feature `parser`): reads text into values
//! - [`Printer`] (feature `printer`): writes values as text
//! - [`Describe`] (feature `describe`): builds an inspectable tree
//!
//! One syntax, written generically over
//! [`Syntax`](crate::category::Syntax), runs under all three. Whatever
//! [`Parser`] reads from a text, [`Printer`] writes back as a text that reads
//! to the same value.
//!
//! # Example
//!
//! ```rust
//! use siarrow::category::{Arrow, Syntax};
//! use siarrow::combinators::{map_output, one_or_more, satisfy};
//! use siarrow::interpret::{Describe, Parser, Printer};
//! use siarrow::semi_iso::{SemiIso, parsed, text};
//!
//! fn number<K: Syntax>() -> Arrow<K, (), u32> {
//!     let digits = one_or_more(satisfy("a digit", char::is_ascii_digit));
//!     map_output(text().compose(parsed::<u32>("a number")).reverse(), digits)
//! }
//!
//! let value = Parser::parse(&number(), "1024").unwrap();
//! assert_eq!(value, 1024);
//! assert_eq!(Printer::print(&number(), value), Ok("1024".to_string()));
//! assert!(Describe::describe(&number::<Describe>()).is_recursive());
//! ```

#[cfg(feature = "describe")]
mod describe;
#[cfg(feature = "parser")]
mod parser;
#[cfg(feature = "printer")]
mod printer;

#[cfg(feature = "describe")]
pub use describe::{Describe, Description, Node};
#[cfg(feature = "parser")]
pub use parser::{Cursor, Parse, Parser};
#[cfg(feature = "printer")]
pub use printer::{Output, Print, Printer};
