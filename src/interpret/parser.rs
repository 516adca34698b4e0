//! The reading interpreter.
//!
//! A [`Parser`] computation consumes text from a [`Cursor`] and produces a
//! value. Embedded primitives run forward, alternation rewinds the cursor
//! before trying its second branch, and recursive computations are guarded
//! against unbounded nesting and against re-entering themselves without
//! consuming input.
//!
//! Repetition runs as a loop, so lists of any length read in constant stack
//! space. Exceeding the nesting limit aborts the whole read: no alternation
//! or repetition recovers from it.
//!
//! # Examples
//!
//! ```rust
//! use siarrow::combinators::{one_or_more, satisfy};
//! use siarrow::config::RunConfig;
//! use siarrow::interpret::Parser;
//!
//! let digits = one_or_more(satisfy::<Parser, _>("a digit", char::is_ascii_digit));
//!
//! assert_eq!(Parser::parse(&digits, "42"), Ok(vec!['4', '2']));
//! assert!(Parser::parse(&digits, "42!").is_err());
//!
//! let partial = RunConfig::default().with_require_complete(false);
//! assert_eq!(Parser::parse_with(&digits, "42!", partial), Ok(vec!['4', '2']));
//! ```

use std::any::TypeId;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use crate::category::{
    Alternation, Arrow, Category, Coproducts, Fixpoint, Interpreter, Products, SemiIsoArrow,
    Syntax, next_node_id,
};
use crate::config::RunConfig;
use crate::error::{Failure, Result};
use crate::semi_iso::SemiIso;
use crate::shape::{Either, Shape};

/// The reading interpreter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Parser;

/// Read position over an input string.
#[derive(Debug)]
pub struct Cursor<'i> {
    input: &'i str,
    offset: usize,
    depth: usize,
    active: HashSet<(usize, usize)>,
    exhausted: bool,
    config: RunConfig,
}

impl<'i> Cursor<'i> {
    fn new(input: &'i str, config: RunConfig) -> Self {
        Self {
            input,
            offset: 0,
            depth: 0,
            active: HashSet::new(),
            exhausted: false,
            config,
        }
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The unread input.
    #[must_use]
    pub fn remaining(&self) -> &'i str {
        &self.input[self.offset..]
    }

    fn next_char(&mut self) -> Result<char> {
        let character = self.remaining().chars().next().ok_or_else(|| {
            Failure::new(format!(
                "expected a character, found end of input at offset {}",
                self.offset
            ))
        })?;
        self.offset += character.len_utf8();
        Ok(character)
    }

    /// Whether the nesting limit was hit; such a failure is never recovered.
    const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Runs the body of recursive node `node` one level deeper.
    ///
    /// With `unit_input` the node is also rejected when it is already active
    /// at the current offset: its input carries no state, so running it
    /// again there would repeat the same computation forever. Nodes with
    /// other inputs may progress through their input value and are bounded
    /// by the nesting limit alone.
    fn enter<T>(
        &mut self,
        node: usize,
        unit_input: bool,
        run: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.depth >= self.config.max_depth() {
            tracing::debug!(
                node,
                offset = self.offset,
                max_depth = self.config.max_depth(),
                "nesting limit reached while reading"
            );
            self.exhausted = true;
            return Err(Failure::new(format!(
                "nesting limit of {} exceeded at offset {}",
                self.config.max_depth(),
                self.offset
            )));
        }
        let key = (node, self.offset);
        if unit_input && !self.active.insert(key) {
            tracing::debug!(node, offset = self.offset, "recursive computation made no progress");
            return Err(Failure::new(format!(
                "no progress: recursive computation re-entered at offset {}",
                self.offset
            )));
        }
        self.depth += 1;
        let result = run(self);
        self.depth -= 1;
        if unit_input {
            self.active.remove(&key);
        }
        result
    }
}

type ParseFunction<A, B> = dyn for<'c, 'i> Fn(A, &'c mut Cursor<'i>) -> Result<B> + Send + Sync;

/// The representation of a [`Parser`] computation.
pub struct Parse<A, B> {
    run: Arc<ParseFunction<A, B>>,
}

impl<A, B> Parse<A, B> {
    fn new<F>(run: F) -> Self
    where
        F: for<'c, 'i> Fn(A, &'c mut Cursor<'i>) -> Result<B> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    fn run(&self, value: A, cursor: &mut Cursor<'_>) -> Result<B> {
        (self.run)(value, cursor)
    }
}

impl<A, B> Clone for Parse<A, B> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<A, B> fmt::Debug for Parse<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Parse").finish_non_exhaustive()
    }
}

impl Interpreter for Parser {
    type Repr<A: Shape, B: Shape> = Parse<A, B>;
}

impl Category for Parser {
    fn identity<A: Shape>() -> Arrow<Self, A, A> {
        Arrow::from_repr(Parse::new(|value, _| Ok(value)))
    }

    fn compose<A: Shape, B: Shape, C: Shape>(
        first: Arrow<Self, A, B>,
        second: Arrow<Self, B, C>,
    ) -> Arrow<Self, A, C> {
        let first = first.into_repr();
        let second = second.into_repr();
        Arrow::from_repr(Parse::new(move |value, cursor| {
            let intermediate = first.run(value, cursor)?;
            second.run(intermediate, cursor)
        }))
    }
}

impl Products for Parser {
    fn split<A: Shape, B: Shape, C: Shape, D: Shape>(
        left: Arrow<Self, A, B>,
        right: Arrow<Self, C, D>,
    ) -> Arrow<Self, (A, C), (B, D)> {
        let left = left.into_repr();
        let right = right.into_repr();
        Arrow::from_repr(Parse::new(move |(a, c): (A, C), cursor| {
            let b = left.run(a, cursor)?;
            let d = right.run(c, cursor)?;
            Ok((b, d))
        }))
    }
}

impl Coproducts for Parser {
    fn choose<A: Shape, B: Shape, C: Shape, D: Shape>(
        left: Arrow<Self, A, B>,
        right: Arrow<Self, C, D>,
    ) -> Arrow<Self, Either<A, C>, Either<B, D>> {
        let left = left.into_repr();
        let right = right.into_repr();
        Arrow::from_repr(Parse::new(move |value: Either<A, C>, cursor| match value {
            Either::Left(a) => left.run(a, cursor).map(Either::Left),
            Either::Right(c) => right.run(c, cursor).map(Either::Right),
        }))
    }
}

impl Alternation for Parser {
    fn alt<A: Shape, B: Shape>(
        first: Arrow<Self, A, B>,
        second: Arrow<Self, A, B>,
    ) -> Arrow<Self, A, B> {
        let first = first.into_repr();
        let second = second.into_repr();
        Arrow::from_repr(Parse::new(move |value: A, cursor| {
            let start = cursor.offset;
            match first.run(value.clone(), cursor) {
                Ok(result) => Ok(result),
                Err(failure) if cursor.is_exhausted() => Err(failure),
                Err(failure) => {
                    tracing::trace!(
                        offset = start,
                        failure = failure.message(),
                        "first alternative failed, trying second"
                    );
                    cursor.offset = start;
                    second.run(value, cursor)
                }
            }
        }))
    }
}

impl Fixpoint for Parser {
    fn fix<A, B, F>(build: F) -> Arrow<Self, A, B>
    where
        A: Shape,
        B: Shape,
        F: FnOnce(Arrow<Self, A, B>) -> Arrow<Self, A, B>,
    {
        let node = next_node_id();
        let unit_input = TypeId::of::<A>() == TypeId::of::<()>();
        let cell: Arc<OnceLock<Parse<A, B>>> = Arc::new(OnceLock::new());
        let handle = Arc::downgrade(&cell);
        let placeholder = Parse::new(move |value, cursor| {
            let body = Weak::upgrade(&handle)
                .and_then(|cell| cell.get().cloned())
                .ok_or_else(|| Failure::new("recursive computation run before it was defined"))?;
            cursor.enter(node, unit_input, |cursor| body.run(value, cursor))
        });
        let body = build(Arrow::from_repr(placeholder)).into_repr();
        let _ = cell.set(body);
        Arrow::from_repr(Parse::new(move |value, cursor| {
            let body = cell
                .get()
                .ok_or_else(|| Failure::new("recursive computation run before it was defined"))?;
            cursor.enter(node, unit_input, |cursor| body.run(value, cursor))
        }))
    }
}

impl SemiIsoArrow for Parser {
    fn embed<A, B, P>(primitive: P) -> Arrow<Self, A, B>
    where
        A: Shape,
        B: Shape,
        P: SemiIso<A, B> + Send + Sync + 'static,
    {
        Arrow::from_repr(Parse::new(move |value, _| primitive.apply(value)))
    }

    fn zero_or_more<T: Shape>(element: Arrow<Self, (), T>) -> Arrow<Self, (), Vec<T>> {
        let element = element.into_repr();
        Arrow::from_repr(Parse::new(move |(), cursor| {
            let mut items = Vec::new();
            loop {
                let start = cursor.offset;
                match element.run((), cursor) {
                    Ok(item) if cursor.offset > start => items.push(item),
                    Ok(_) => {
                        tracing::debug!(offset = start, "repeated element made no progress");
                        return Ok(items);
                    }
                    Err(failure) if cursor.is_exhausted() => return Err(failure),
                    Err(failure) => {
                        tracing::trace!(
                            offset = start,
                            count = items.len(),
                            failure = failure.message(),
                            "repetition ended"
                        );
                        cursor.offset = start;
                        return Ok(items);
                    }
                }
            }
        }))
    }
}

impl Syntax for Parser {
    fn any_char() -> Arrow<Self, (), char> {
        Arrow::from_repr(Parse::new(|(), cursor| cursor.next_char()))
    }
}

impl Parser {
    /// Reads `input` completely with the default [`RunConfig`].
    ///
    /// # Errors
    ///
    /// Returns the first failure not caught by an alternation, or a failure
    /// naming the offset of any unconsumed input.
    pub fn parse<T: Shape>(computation: &Arrow<Self, (), T>, input: &str) -> Result<T> {
        Self::parse_with(computation, input, RunConfig::default())
    }

    /// Reads `input` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`parse`](Self::parse); also fails when `config` is invalid.
    /// Unconsumed input is accepted when
    /// [`require_complete`](RunConfig::require_complete) is off.
    pub fn parse_with<T: Shape>(
        computation: &Arrow<Self, (), T>,
        input: &str,
        config: RunConfig,
    ) -> Result<T> {
        config.validate()?;
        tracing::debug!(input_length = input.len(), "parse started");
        let mut cursor = Cursor::new(input, config);
        let value = computation.repr().run((), &mut cursor)?;
        let remaining = cursor.remaining();
        if config.require_complete() && !remaining.is_empty() {
            return Err(Failure::new(format!(
                "unconsumed input at offset {}: {remaining:?}",
                cursor.offset
            )));
        }
        tracing::debug!(consumed = cursor.offset, "parse finished");
        Ok(value)
    }

    /// Runs `computation` on `value` against `input`, returning the result
    /// and the unconsumed rest of `input`.
    ///
    /// # Errors
    ///
    /// Returns the first failure not caught by an alternation.
    pub fn run<'i, A: Shape, B: Shape>(
        computation: &Arrow<Self, A, B>,
        value: A,
        input: &'i str,
    ) -> Result<(B, &'i str)> {
        let mut cursor = Cursor::new(input, RunConfig::default().with_require_complete(false));
        let result = computation.repr().run(value, &mut cursor)?;
        Ok((result, cursor.remaining()))
    }
}

static_assertions::assert_impl_all!(Parse<(), Vec<char>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Arrow<Parser, (), String>: Send, Sync, Clone);
