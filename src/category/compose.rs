//! Identity and sequential composition.
//!
//! # Laws
//!
//! ## Left and Right Identity
//!
//! ```text
//! compose(identity(), f) == f
//! compose(f, identity()) == f
//! ```
//!
//! ## Associativity
//!
//! ```text
//! compose(compose(f, g), h) == compose(f, compose(g, h))
//! ```

use super::{Arrow, Interpreter};
use crate::shape::Shape;

/// Interpreters whose computations compose sequentially.
pub trait Category: Interpreter {
    /// The computation that passes its input through unchanged.
    fn identity<A: Shape>() -> Arrow<Self, A, A>;

    /// Runs `first`, then feeds its output to `second`.
    ///
    /// Reading runs `first` before `second`; writing produces the text of
    /// `first` before the text of `second`.
    fn compose<A: Shape, B: Shape, C: Shape>(
        first: Arrow<Self, A, B>,
        second: Arrow<Self, B, C>,
    ) -> Arrow<Self, A, C>;
}

impl<K: Category, A: Shape, B: Shape> Arrow<K, A, B> {
    /// Method form of [`Category::compose`].
    ///
    /// ```rust
    /// use siarrow::category::{Category, SemiIsoArrow};
    /// use siarrow::interpret::Parser;
    /// use siarrow::semi_iso::{swap, unit_right};
    ///
    /// let arrow = Parser::embed(unit_right::<char>()).then(Parser::embed(swap::<char, ()>()));
    /// assert_eq!(Parser::run(&arrow, 'a', ""), Ok((((), 'a'), "")));
    /// ```
    #[must_use]
    pub fn then<C: Shape>(self, next: Arrow<K, B, C>) -> Arrow<K, A, C> {
        K::compose(self, next)
    }
}
