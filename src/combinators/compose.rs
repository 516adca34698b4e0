//! Composition with embedded primitives.
//!
//! The four directional forms differ in which side the primitive sits on
//! and which way it is embedded:
//!
//! | Function          | Runs                                |
//! |-------------------|-------------------------------------|
//! | [`pre_forward`]   | `p` forward, then the computation   |
//! | [`post_forward`]  | the computation, then `p` forward   |
//! | [`pre_backward`]  | `p` backward, then the computation  |
//! | [`post_backward`] | the computation, then `p` backward  |

use crate::category::{Arrow, SemiIsoArrow};
use crate::semi_iso::SemiIso;
use crate::shape::{Morph, SameLeaves, Shape, morph};

/// Runs `primitive` forward, then `computation`.
#[must_use]
pub fn pre_forward<K, A, B, C, P>(primitive: P, computation: Arrow<K, B, C>) -> Arrow<K, A, C>
where
    K: SemiIsoArrow,
    A: Shape,
    B: Shape,
    C: Shape,
    P: SemiIso<A, B> + Send + Sync + 'static,
{
    K::compose(K::embed(primitive), computation)
}

/// Runs `computation`, then `primitive` forward.
///
/// ```rust
/// use siarrow::category::Syntax;
/// use siarrow::combinators::post_forward;
/// use siarrow::interpret::Parser;
/// use siarrow::semi_iso::checked;
///
/// let vowel = post_forward(Parser::any_char(), checked("a vowel", |c: &char| "aeiou".contains(*c)));
/// assert_eq!(Parser::parse(&vowel, "e"), Ok('e'));
/// assert!(Parser::parse(&vowel, "x").is_err());
/// ```
#[must_use]
pub fn post_forward<K, A, B, C, P>(computation: Arrow<K, A, B>, primitive: P) -> Arrow<K, A, C>
where
    K: SemiIsoArrow,
    A: Shape,
    B: Shape,
    C: Shape,
    P: SemiIso<B, C> + Send + Sync + 'static,
{
    K::compose(computation, K::embed(primitive))
}

/// Runs `primitive` backward, then `computation`.
#[must_use]
pub fn pre_backward<K, A, B, C, P>(primitive: P, computation: Arrow<K, B, C>) -> Arrow<K, A, C>
where
    K: SemiIsoArrow,
    A: Shape,
    B: Shape,
    C: Shape,
    P: SemiIso<B, A> + Send + Sync + 'static,
{
    K::compose(K::embed_backward(primitive), computation)
}

/// Runs `computation`, then `primitive` backward.
#[must_use]
pub fn post_backward<K, A, B, C, P>(computation: Arrow<K, A, B>, primitive: P) -> Arrow<K, A, C>
where
    K: SemiIsoArrow,
    A: Shape,
    B: Shape,
    C: Shape,
    P: SemiIso<C, B> + Send + Sync + 'static,
{
    K::compose(computation, K::embed_backward(primitive))
}

/// Maps the output of `computation` through `primitive`, read backward.
///
/// Primitives are usually written from the structured value towards its
/// parts (`Vec<T> -> (T, Vec<T>)`, `Option<T> -> T`), so this is the
/// natural way to assemble a value from the parts a computation produces.
///
/// ```rust
/// use siarrow::category::Syntax;
/// use siarrow::combinators::map_output;
/// use siarrow::interpret::{Parser, Printer};
/// use siarrow::semi_iso::some;
///
/// let present = map_output(some::<char>(), Parser::any_char());
/// assert_eq!(Parser::parse(&present, "q"), Ok(Some('q')));
///
/// let present = map_output(some::<char>(), Printer::any_char());
/// assert_eq!(Printer::print(&present, Some('q')), Ok("q".to_string()));
/// assert!(Printer::print(&present, None).is_err());
/// ```
#[must_use]
pub fn map_output<K, A, B, B2, P>(primitive: P, computation: Arrow<K, A, B>) -> Arrow<K, A, B2>
where
    K: SemiIsoArrow,
    A: Shape,
    B: Shape,
    B2: Shape,
    P: SemiIso<B2, B> + Send + Sync + 'static,
{
    post_backward(computation, primitive)
}

/// Like [`map_output`], after normalising the output of `computation` to the
/// shape `primitive` expects.
///
/// `B` and `C` must flatten to the same leaves; nesting and units may
/// differ.
///
/// ```rust
/// use siarrow::category::SemiIsoArrow;
/// use siarrow::combinators::map_output_morphed;
/// use siarrow::interpret::Parser;
/// use siarrow::semi_iso::identity;
///
/// let nested = Parser::embed(identity::<((u8, ()), (char, bool))>());
/// let flat = map_output_morphed(identity::<(u8, char, bool)>(), nested);
/// assert_eq!(
///     Parser::run(&flat, ((1, ()), ('a', true)), ""),
///     Ok(((1, 'a', true), ""))
/// );
/// ```
#[must_use]
pub fn map_output_morphed<K, A, B, C, B2, P>(
    primitive: P,
    computation: Arrow<K, A, B>,
) -> Arrow<K, A, B2>
where
    K: SemiIsoArrow,
    A: Shape,
    B: Shape + Morph,
    C: Shape + Morph,
    C::Leaves: SameLeaves<B::Leaves>,
    B2: Shape,
    P: SemiIso<B2, C> + Send + Sync + 'static,
{
    map_output(primitive.compose(morph::<C, B>()), computation)
}
