//! The introspecting interpreter.
//!
//! A [`Describe`] computation is a tree of [`Node`]s recording how it was
//! built. It cannot run, but it can be rendered and queried without any
//! input: which primitives a syntax uses, whether it is recursive,
//! how large it is.
//!
//! # Examples
//!
//! ```rust
//! use siarrow::combinators::{char_literal, optional};
//! use siarrow::interpret::Describe;
//!
//! let sign = optional(char_literal::<Describe>('-'));
//! let description = Describe::describe(&sign);
//!
//! assert_eq!(
//!     description.to_string(),
//!     "((<char> >>> reverse(exact('-')) >>> reverse(some)) <|> reverse(none))"
//! );
//! assert_eq!(description.primitives(), vec!["reverse(exact('-'))", "reverse(some)", "reverse(none)"]);
//! assert!(!description.is_recursive());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::category::{
    Alternation, Arrow, Category, Coproducts, Fixpoint, Interpreter, Products, SemiIsoArrow,
    Syntax, next_node_id,
};
use crate::semi_iso::SemiIso;
use crate::shape::{Either, Shape};

/// The introspecting interpreter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Describe;

/// One construct in a computation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// [`Category::identity`].
    Identity,
    /// An embedded primitive, by label.
    Primitive(String),
    /// A character-level primitive of a text interpreter.
    Token(String),
    /// [`Category::compose`].
    Compose(Arc<Node>, Arc<Node>),
    /// [`Products::split`].
    Split(Arc<Node>, Arc<Node>),
    /// [`Coproducts::choose`].
    Choose(Arc<Node>, Arc<Node>),
    /// [`Alternation::alt`].
    Alt(Arc<Node>, Arc<Node>),
    /// A recursive computation and its body.
    Fix {
        /// Identifier referenced by [`Node::Recur`] inside `body`.
        id: usize,
        /// The body, which refers back to this node.
        body: Arc<Node>,
    },
    /// A reference to the enclosing [`Node::Fix`] with the same id.
    Recur(usize),
}

impl Node {
    fn children(&self) -> Vec<&Self> {
        match self {
            Self::Identity | Self::Primitive(_) | Self::Token(_) | Self::Recur(_) => Vec::new(),
            Self::Compose(first, second)
            | Self::Split(first, second)
            | Self::Choose(first, second)
            | Self::Alt(first, second) => vec![&**first, &**second],
            Self::Fix { body, .. } => vec![&**body],
        }
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// The representation of a [`Describe`] computation.
pub struct Description<A, B> {
    node: Arc<Node>,
    _marker: PhantomData<fn(A) -> B>,
}

impl<A, B> Description<A, B> {
    fn new(node: Node) -> Self {
        Self {
            node: Arc::new(node),
            _marker: PhantomData,
        }
    }

    /// The root of the tree.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Labels of every embedded primitive, in construction order.
    #[must_use]
    pub fn primitives(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        self.node.walk(&mut |node| {
            if let Node::Primitive(label) = node {
                labels.push(label.as_str());
            }
        });
        labels
    }

    /// Labels of every character-level primitive, in construction order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        self.node.walk(&mut |node| {
            if let Node::Token(label) = node {
                labels.push(label.as_str());
            }
        });
        labels
    }

    /// Whether the computation contains a recursive part.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        let mut recursive = false;
        self.node.walk(&mut |node| {
            recursive |= matches!(node, Node::Fix { .. });
        });
        recursive
    }

    /// Number of nodes in the tree; a recursive reference counts once.
    #[must_use]
    pub fn size(&self) -> usize {
        let mut count = 0;
        self.node.walk(&mut |_| count += 1);
        count
    }
}

impl<A, B> Clone for Description<A, B> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            _marker: PhantomData,
        }
    }
}

impl<A, B> fmt::Debug for Description<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Description")
            .field("node", &self.node)
            .finish()
    }
}

/// Renders fixpoints as `rec rN { ... }` with ids numbered by appearance.
struct Renderer {
    names: HashMap<usize, usize>,
}

impl Renderer {
    fn render(&mut self, node: &Node, nested: bool, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match node {
            Node::Identity => formatter.write_str("id"),
            Node::Primitive(label) => formatter.write_str(label),
            Node::Token(label) => write!(formatter, "<{label}>"),
            Node::Compose(first, second) => {
                if nested {
                    formatter.write_str("(")?;
                }
                self.render(first, false, formatter)?;
                formatter.write_str(" >>> ")?;
                self.render(second, false, formatter)?;
                if nested {
                    formatter.write_str(")")?;
                }
                Ok(())
            }
            Node::Split(first, second) => self.render_binary(first, " *** ", second, formatter),
            Node::Choose(first, second) => self.render_binary(first, " +++ ", second, formatter),
            Node::Alt(first, second) => self.render_binary(first, " <|> ", second, formatter),
            Node::Fix { id, body } => {
                let name = self.names.len();
                self.names.insert(*id, name);
                write!(formatter, "rec r{name} {{ ")?;
                self.render(body, false, formatter)?;
                formatter.write_str(" }")
            }
            Node::Recur(id) => match self.names.get(id) {
                Some(name) => write!(formatter, "r{name}"),
                None => formatter.write_str("r?"),
            },
        }
    }

    fn render_binary(
        &mut self,
        first: &Node,
        operator: &str,
        second: &Node,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        formatter.write_str("(")?;
        self.render(first, true, formatter)?;
        formatter.write_str(operator)?;
        self.render(second, true, formatter)?;
        formatter.write_str(")")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer {
            names: HashMap::new(),
        }
        .render(self, false, formatter)
    }
}

impl<A, B> fmt::Display for Description<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.node, formatter)
    }
}

impl<A: Shape, B: Shape> fmt::Display for Arrow<Describe, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.repr(), formatter)
    }
}

fn binary<A: Shape, B: Shape, C: Shape, D: Shape, E: Shape, F: Shape>(
    constructor: fn(Arc<Node>, Arc<Node>) -> Node,
    first: Arrow<Describe, A, B>,
    second: Arrow<Describe, C, D>,
) -> Arrow<Describe, E, F> {
    Arrow::from_repr(Description::new(constructor(
        first.into_repr().node,
        second.into_repr().node,
    )))
}

impl Interpreter for Describe {
    type Repr<A: Shape, B: Shape> = Description<A, B>;
}

impl Category for Describe {
    fn identity<A: Shape>() -> Arrow<Self, A, A> {
        Arrow::from_repr(Description::new(Node::Identity))
    }

    fn compose<A: Shape, B: Shape, C: Shape>(
        first: Arrow<Self, A, B>,
        second: Arrow<Self, B, C>,
    ) -> Arrow<Self, A, C> {
        binary(Node::Compose, first, second)
    }
}

impl Products for Describe {
    fn split<A: Shape, B: Shape, C: Shape, D: Shape>(
        left: Arrow<Self, A, B>,
        right: Arrow<Self, C, D>,
    ) -> Arrow<Self, (A, C), (B, D)> {
        binary(Node::Split, left, right)
    }
}

impl Coproducts for Describe {
    fn choose<A: Shape, B: Shape, C: Shape, D: Shape>(
        left: Arrow<Self, A, B>,
        right: Arrow<Self, C, D>,
    ) -> Arrow<Self, Either<A, C>, Either<B, D>> {
        binary(Node::Choose, left, right)
    }
}

impl Alternation for Describe {
    fn alt<A: Shape, B: Shape>(
        first: Arrow<Self, A, B>,
        second: Arrow<Self, A, B>,
    ) -> Arrow<Self, A, B> {
        binary(Node::Alt, first, second)
    }
}

impl Fixpoint for Describe {
    fn fix<A, B, F>(build: F) -> Arrow<Self, A, B>
    where
        A: Shape,
        B: Shape,
        F: FnOnce(Arrow<Self, A, B>) -> Arrow<Self, A, B>,
    {
        let id = next_node_id();
        let body = build(Arrow::from_repr(Description::new(Node::Recur(id)))).into_repr();
        Arrow::from_repr(Description::new(Node::Fix {
            id,
            body: body.node,
        }))
    }
}

impl SemiIsoArrow for Describe {
    fn embed<A, B, P>(primitive: P) -> Arrow<Self, A, B>
    where
        A: Shape,
        B: Shape,
        P: SemiIso<A, B> + Send + Sync + 'static,
    {
        Arrow::from_repr(Description::new(Node::Primitive(
            primitive.label().into_owned(),
        )))
    }
}

impl Syntax for Describe {
    fn any_char() -> Arrow<Self, (), char> {
        Arrow::from_repr(Description::new(Node::Token("char".to_string())))
    }
}

impl Describe {
    /// The description of `computation`.
    #[must_use]
    pub fn describe<A: Shape, B: Shape>(computation: &Arrow<Self, A, B>) -> &Description<A, B> {
        computation.repr()
    }
}

static_assertions::assert_impl_all!(Description<(), Vec<char>>: Send, Sync, Clone);
