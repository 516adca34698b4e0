//! Derived combinators.
//!
//! Every function here is generic over the interpreter and built only from
//! the capabilities in [`category`](crate::category), so a syntax
//! assembled from them runs unchanged under any interpreter.
//!
//! - Directional composition: [`pre_forward`], [`post_forward`],
//!   [`pre_backward`], [`post_backward`], [`map_output`], [`map_output_morphed`]
//! - Pairing with unit elimination: [`pair`], [`keep_left`], [`keep_right`]
//! - Failure: [`fail`], [`or_fail`]
//! - Repetition: [`zero_or_more`], [`one_or_more`], [`separated_by`]
//! - Sequences: [`sequence`], [`sequence_unit`], [`replicate`], [`replicate_unit`]
//! - Choice: [`optional`], [`either`]
//! - Text: [`char_literal`], [`text_literal`], [`satisfy`], [`word`]
//!
//! # Example
//!
//! ```rust
//! use siarrow::category::{Arrow, Syntax};
//! use siarrow::combinators::{char_literal, keep_left, pair, word};
//! use siarrow::interpret::{Parser, Printer};
//!
//! // key=value;
//! fn binding<K: Syntax>() -> Arrow<K, (), (String, String)> {
//!     let name = || word("a letter", char::is_ascii_alphabetic);
//!     keep_left(
//!         pair(keep_left(name(), char_literal('=')), name()),
//!         char_literal(';'),
//!     )
//! }
//!
//! let parsed = Parser::parse(&binding(), "mode=fast;");
//! assert_eq!(parsed, Ok(("mode".to_string(), "fast".to_string())));
//!
//! let printed = Printer::print(&binding(), ("mode".to_string(), "slow".to_string()));
//! assert_eq!(printed, Ok("mode=slow;".to_string()));
//! ```

mod applicative;
mod choice;
mod compose;
mod failure;
mod sequence;
mod text;

pub use crate::category::{one_or_more, zero_or_more};
pub use applicative::{keep_left, keep_right, pair};
pub use choice::{either, optional, separated_by};
pub use compose::{
    map_output, map_output_morphed, post_backward, post_forward, pre_backward, pre_forward,
};
pub use failure::{fail, or_fail};
pub use sequence::{replicate, replicate_unit, sequence, sequence_unit};
pub use text::{char_literal, satisfy, text_literal, word};
