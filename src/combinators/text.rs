//! Character-level combinators for text interpreters.

use crate::category::{Arrow, Syntax};
use crate::semi_iso::{SemiIso, checked, exact, text};

use super::{map_output, one_or_more, post_backward, post_forward, sequence_unit};

/// Exactly the character `expected`, producing nothing.
///
/// Writing always produces `expected`.
#[must_use]
pub fn char_literal<K: Syntax>(expected: char) -> Arrow<K, (), ()> {
    post_backward(K::any_char(), exact(expected))
}

/// Exactly the characters of `expected`, in order, producing nothing.
///
/// ```rust
/// use siarrow::combinators::text_literal;
/// use siarrow::interpret::{Parser, Printer};
///
/// assert_eq!(Parser::parse(&text_literal::<Parser>("let"), "let"), Ok(()));
/// assert!(Parser::parse(&text_literal::<Parser>("let"), "lit").is_err());
/// assert_eq!(Printer::print(&text_literal::<Printer>("let"), ()), Ok("let".to_string()));
/// ```
#[must_use]
pub fn text_literal<K: Syntax>(expected: &str) -> Arrow<K, (), ()> {
    sequence_unit(expected.chars().map(char_literal::<K>).collect())
}

/// A single character accepted by `predicate`.
///
/// `description` names the expected characters in failure messages.
#[must_use]
pub fn satisfy<K, F>(description: &'static str, predicate: F) -> Arrow<K, (), char>
where
    K: Syntax,
    F: Fn(&char) -> bool + Clone + Send + Sync + 'static,
{
    post_forward(K::any_char(), checked(description, predicate))
}

/// One or more characters accepted by `predicate`, as a string.
///
/// ```rust
/// use siarrow::combinators::word;
/// use siarrow::interpret::Parser;
///
/// let identifier = word::<Parser, _>("a letter", char::is_ascii_alphabetic);
/// assert_eq!(Parser::run(&identifier, (), "abc1"), Ok(("abc".to_string(), "1")));
/// ```
#[must_use]
pub fn word<K, F>(description: &'static str, predicate: F) -> Arrow<K, (), String>
where
    K: Syntax,
    F: Fn(&char) -> bool + Clone + Send + Sync + 'static,
{
    map_output(text().reverse(), one_or_more(satisfy(description, predicate)))
}
