//! Run-time limits for the text interpreters.
//!
//! A [`RunConfig`] is passed to [`Parser::parse_with`](crate::interpret::Parser::parse_with)
//! and [`Printer::print_with`](crate::interpret::Printer::print_with). The
//! defaults are what [`Parser::parse`](crate::interpret::Parser::parse) and
//! [`Printer::print`](crate::interpret::Printer::print) use.
//!
//! # Examples
//!
//! ```rust
//! use siarrow::config::RunConfig;
//!
//! let config = RunConfig::default()
//!     .with_max_depth(64)
//!     .with_require_complete(false);
//!
//! assert_eq!(config.max_depth(), 64);
//! assert!(!config.require_complete());
//! assert!(config.validate().is_ok());
//! ```

use crate::error::Failure;

/// Default nesting limit for recursive computations.
///
/// Recursive computations run on the native stack; this limit keeps a
/// default thread stack sufficient for them. Repetitions do not count.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Errors raised by [`RunConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A depth limit of zero would reject every recursive computation.
    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

/// Limits applied while an interpreter runs a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    max_depth: usize,
    require_complete: bool,
}

impl RunConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            require_complete: true,
        }
    }

    /// Sets how deeply recursive computations may nest.
    ///
    /// Each active [`fix`](crate::category::Fixpoint::fix) body costs one
    /// level; list repetitions cost none. Raising the limit far beyond the
    /// default needs a correspondingly larger thread stack.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets whether reading must consume the whole input.
    #[must_use]
    pub const fn with_require_complete(mut self, require_complete: bool) -> Self {
        self.require_complete = require_complete;
        self
    }

    /// Nesting limit for recursive computations.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether reading fails when input remains after the computation.
    #[must_use]
    pub const fn require_complete(&self) -> bool {
        self.require_complete
    }

    /// Checks that the configuration can run anything at all.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDepth`] when `max_depth` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ConfigError> for Failure {
    fn from(error: ConfigError) -> Self {
        Self::new(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_config_requires_complete_input() {
        let config = RunConfig::default();
        assert_eq!(config.max_depth(), DEFAULT_MAX_DEPTH);
        assert!(config.require_complete());
    }

    #[rstest]
    #[case(0, Err(ConfigError::ZeroDepth))]
    #[case(1, Ok(()))]
    #[case(DEFAULT_MAX_DEPTH, Ok(()))]
    fn validate_rejects_only_zero_depth(
        #[case] depth: usize,
        #[case] expected: Result<(), ConfigError>,
    ) {
        assert_eq!(RunConfig::new().with_max_depth(depth).validate(), expected);
    }

    #[rstest]
    fn config_error_display() {
        assert_eq!(
            format!("{}", ConfigError::ZeroDepth),
            "max_depth must be at least 1"
        );
    }
}
