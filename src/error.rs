//! The failure signal shared by every primitive, combinator and interpreter.
//!
//! There is exactly one failure kind. It carries a human-readable message and
//! is raised either when a primitive is applied outside its domain or
//! explicitly through [`fail`](crate::combinators::fail). Alternation is the
//! only construct that catches it.

use std::fmt;

/// A message-carrying failure.
///
/// # Examples
///
/// ```rust
/// use siarrow::Failure;
///
/// let failure = Failure::new("expected a digit");
/// assert_eq!(failure.message(), "expected a digit");
/// assert_eq!(format!("{failure}"), "expected a digit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    /// Creates a failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates the conventional "expected X, found Y" failure.
    ///
    /// ```rust
    /// use siarrow::Failure;
    ///
    /// let failure = Failure::expected("a digit", 'x');
    /// assert_eq!(failure.message(), "expected a digit, found 'x'");
    /// ```
    #[must_use]
    pub fn expected(what: impl fmt::Display, found: impl fmt::Debug) -> Self {
        Self::new(format!("expected {what}, found {found:?}"))
    }

    /// The message carried by this failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Result type used throughout the crate.
pub type Result<T, E = Failure> = std::result::Result<T, E>;
