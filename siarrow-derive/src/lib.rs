//! Derive macros for siarrow semi-isomorphisms.
//!
//! # Available Derive Macros
//!
//! - [`SemiIsos`]: generates one semi-isomorphism per enum variant, or one
//!   between a struct and the tuple of its fields
//!
//! # Example
//!
//! ```rust,ignore
//! use siarrow::SemiIsos;
//! use siarrow::semi_iso::SemiIso;
//!
//! #[derive(Clone, Debug, PartialEq, SemiIsos)]
//! enum Token {
//!     Number(u32),
//!     Pair(char, char),
//!     End,
//! }
//!
//! // Generated methods:
//! // - Token::number_semi_iso() -> impl Primitive<Token, u32>
//! // - Token::pair_semi_iso() -> impl Primitive<Token, (char, char)>
//! // - Token::end_semi_iso() -> impl Primitive<Token, ()>
//!
//! assert_eq!(Token::number_semi_iso().apply(Token::Number(7)), Ok(7));
//! assert!(Token::number_semi_iso().apply(Token::End).is_err());
//! assert_eq!(Token::pair_semi_iso().unapply(('a', 'b')), Ok(Token::Pair('a', 'b')));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod semi_isos;

use proc_macro::TokenStream;

/// Derive macro generating semi-isomorphisms for enums and structs.
///
/// # Enums
///
/// For each variant `FooBar`, generates `foo_bar_semi_iso()` returning
/// `impl Primitive<Self, T>` where `T` is `()` for unit variants, the field
/// type for single-field variants, and the tuple of field types otherwise.
/// Forward extracts the fields and fails with ``expected variant `FooBar` ``
/// on any other variant; backward constructs the variant.
///
/// # Structs
///
/// Generates `fields_semi_iso()` between the struct and the tuple of its
/// fields (same rules for `T`). Both directions always succeed.
///
/// # Generics
///
/// Type parameters receive a `'static` bound on the generated methods.
///
/// # Example
///
/// ```rust,ignore
/// use siarrow::SemiIsos;
/// use siarrow::semi_iso::SemiIso;
///
/// #[derive(Clone, Debug, PartialEq, SemiIsos)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let fields = Point::fields_semi_iso();
/// assert_eq!(fields.apply(Point { x: 1, y: 2 }), Ok((1, 2)));
/// assert_eq!(fields.unapply((3, 4)), Ok(Point { x: 3, y: 4 }));
/// ```
#[proc_macro_derive(SemiIsos)]
pub fn derive_semi_isos(input: TokenStream) -> TokenStream {
    semi_isos::derive_semi_isos_impl(input)
}
