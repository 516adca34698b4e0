//! The character-level primitive of text interpreters.

use super::{Arrow, SemiIsoArrow};

/// Interpreters that read and write characters.
///
/// Reading consumes one character of input; writing appends one. Every
/// textual combinator in [`combinators`](crate::combinators) is built on
/// [`any_char`](Syntax::any_char).
pub trait Syntax: SemiIsoArrow {
    /// A single character.
    ///
    /// ```rust
    /// use siarrow::category::Syntax;
    /// use siarrow::interpret::{Parser, Printer};
    ///
    /// assert_eq!(Parser::parse(&Parser::any_char(), "λ"), Ok('λ'));
    /// assert!(Parser::parse(&Parser::any_char(), "").is_err());
    /// assert_eq!(Printer::print(&Printer::any_char(), 'λ'), Ok("λ".to_string()));
    /// ```
    fn any_char() -> Arrow<Self, (), char>;
}
