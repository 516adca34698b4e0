//! The writing interpreter.
//!
//! A [`Printer`] computation runs backwards: it starts from the value a
//! reader would have produced and appends the text that reader would have
//! consumed. Embedded primitives run backward, alternation truncates the
//! buffer before trying its second branch, and composition keeps the text
//! in reading order even though the second computation runs first.
//!
//! Repetition walks the list in a loop without copying it: stack use does
//! not grow with the list and the time spent is linear in its length.
//! Exceeding the nesting limit aborts the whole write.
//!
//! # Examples
//!
//! ```rust
//! use siarrow::combinators::{char_literal, keep_right, separated_by, word};
//! use siarrow::interpret::Printer;
//!
//! let names = separated_by(
//!     word::<Printer, _>("a letter", char::is_ascii_alphabetic),
//!     keep_right(char_literal(','), char_literal(' ')),
//! );
//!
//! let text = Printer::print(&names, vec!["ann".to_string(), "bo".to_string()]);
//! assert_eq!(text, Ok("ann, bo".to_string()));
//! assert!(Printer::print(&names, vec!["a1".to_string()]).is_err());
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use crate::category::{
    Alternation, Arrow, Category, Coproducts, Fixpoint, Interpreter, Products, SemiIsoArrow,
    Syntax,
};
use crate::config::RunConfig;
use crate::error::{Failure, Result};
use crate::semi_iso::{SemiIso, non_empty_sequence};
use crate::shape::{Either, Shape};

/// The writing interpreter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Printer;

/// The text produced so far.
#[derive(Debug)]
pub struct Output {
    text: String,
    depth: usize,
    exhausted: bool,
    config: RunConfig,
}

impl Output {
    const fn new(config: RunConfig) -> Self {
        Self {
            text: String::new(),
            depth: 0,
            exhausted: false,
            config,
        }
    }

    /// The text written so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn enter<T>(&mut self, run: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.config.max_depth() {
            tracing::debug!(
                written = self.text.len(),
                max_depth = self.config.max_depth(),
                "nesting limit reached while writing"
            );
            self.exhausted = true;
            return Err(Failure::new(format!(
                "nesting limit of {} exceeded while writing",
                self.config.max_depth()
            )));
        }
        self.depth += 1;
        let result = run(self);
        self.depth -= 1;
        result
    }
}

type PrintFunction<A, B> = dyn Fn(B, &mut Output) -> Result<A> + Send + Sync;

/// The representation of a [`Printer`] computation from `A` to `B`.
///
/// It maps a `B` back to the `A` it was read from, writing text on the way.
pub struct Print<A, B> {
    run: Arc<PrintFunction<A, B>>,
}

impl<A, B> Print<A, B> {
    fn new<F>(run: F) -> Self
    where
        F: Fn(B, &mut Output) -> Result<A> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    fn run(&self, value: B, output: &mut Output) -> Result<A> {
        (self.run)(value, output)
    }
}

impl<A, B> Clone for Print<A, B> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<A, B> fmt::Debug for Print<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Print").finish_non_exhaustive()
    }
}

impl Interpreter for Printer {
    type Repr<A: Shape, B: Shape> = Print<A, B>;
}

impl Category for Printer {
    fn identity<A: Shape>() -> Arrow<Self, A, A> {
        Arrow::from_repr(Print::new(|value, _| Ok(value)))
    }

    fn compose<A: Shape, B: Shape, C: Shape>(
        first: Arrow<Self, A, B>,
        second: Arrow<Self, B, C>,
    ) -> Arrow<Self, A, C> {
        let first = first.into_repr();
        let second = second.into_repr();
        Arrow::from_repr(Print::new(move |value, output: &mut Output| {
            let mark = output.text.len();
            let intermediate = second.run(value, output)?;
            let written_by_second = output.text.split_off(mark);
            let result = first.run(intermediate, output)?;
            output.text.push_str(&written_by_second);
            Ok(result)
        }))
    }
}

impl Products for Printer {
    fn split<A: Shape, B: Shape, C: Shape, D: Shape>(
        left: Arrow<Self, A, B>,
        right: Arrow<Self, C, D>,
    ) -> Arrow<Self, (A, C), (B, D)> {
        let left = left.into_repr();
        let right = right.into_repr();
        Arrow::from_repr(Print::new(move |(b, d): (B, D), output| {
            let a = left.run(b, output)?;
            let c = right.run(d, output)?;
            Ok((a, c))
        }))
    }
}

impl Coproducts for Printer {
    fn choose<A: Shape, B: Shape, C: Shape, D: Shape>(
        left: Arrow<Self, A, B>,
        right: Arrow<Self, C, D>,
    ) -> Arrow<Self, Either<A, C>, Either<B, D>> {
        let left = left.into_repr();
        let right = right.into_repr();
        Arrow::from_repr(Print::new(move |value: Either<B, D>, output| match value {
            Either::Left(b) => left.run(b, output).map(Either::Left),
            Either::Right(d) => right.run(d, output).map(Either::Right),
        }))
    }
}

impl Alternation for Printer {
    fn alt<A: Shape, B: Shape>(
        first: Arrow<Self, A, B>,
        second: Arrow<Self, A, B>,
    ) -> Arrow<Self, A, B> {
        let first = first.into_repr();
        let second = second.into_repr();
        Arrow::from_repr(Print::new(move |value: B, output: &mut Output| {
            let mark = output.text.len();
            match first.run(value.clone(), output) {
                Ok(result) => Ok(result),
                Err(failure) if output.is_exhausted() => Err(failure),
                Err(failure) => {
                    tracing::trace!(
                        written = mark,
                        failure = failure.message(),
                        "first alternative failed, trying second"
                    );
                    output.text.truncate(mark);
                    second.run(value, output)
                }
            }
        }))
    }
}

impl Fixpoint for Printer {
    fn fix<A, B, F>(build: F) -> Arrow<Self, A, B>
    where
        A: Shape,
        B: Shape,
        F: FnOnce(Arrow<Self, A, B>) -> Arrow<Self, A, B>,
    {
        let cell: Arc<OnceLock<Print<A, B>>> = Arc::new(OnceLock::new());
        let handle = Arc::downgrade(&cell);
        let placeholder = Print::new(move |value, output: &mut Output| {
            let body = Weak::upgrade(&handle)
                .and_then(|cell| cell.get().cloned())
                .ok_or_else(|| Failure::new("recursive computation run before it was defined"))?;
            output.enter(|output| body.run(value, output))
        });
        let body = build(Arrow::from_repr(placeholder)).into_repr();
        let _ = cell.set(body);
        Arrow::from_repr(Print::new(move |value, output: &mut Output| {
            let body = cell
                .get()
                .ok_or_else(|| Failure::new("recursive computation run before it was defined"))?;
            output.enter(|output| body.run(value, output))
        }))
    }
}

impl SemiIsoArrow for Printer {
    fn embed<A, B, P>(primitive: P) -> Arrow<Self, A, B>
    where
        A: Shape,
        B: Shape,
        P: SemiIso<A, B> + Send + Sync + 'static,
    {
        Arrow::from_repr(Print::new(move |value, _| primitive.unapply(value)))
    }

    fn zero_or_more<T: Shape>(element: Arrow<Self, (), T>) -> Arrow<Self, (), Vec<T>> {
        let element = element.into_repr();
        Arrow::from_repr(Print::new(move |items: Vec<T>, output: &mut Output| {
            let length = items.len();
            let mark = output.text.len();
            for (index, item) in items.into_iter().enumerate() {
                if let Err(failure) = element.run(item, output) {
                    if output.is_exhausted() {
                        return Err(failure);
                    }
                    tracing::trace!(
                        index,
                        failure = failure.message(),
                        "repeated element failed, list cannot be written"
                    );
                    output.text.truncate(mark);
                    return Err(non_empty_sequence(length));
                }
            }
            Ok(())
        }))
    }
}

impl Syntax for Printer {
    fn any_char() -> Arrow<Self, (), char> {
        Arrow::from_repr(Print::new(|character: char, output: &mut Output| {
            output.text.push(character);
            Ok(())
        }))
    }
}

impl Printer {
    /// Writes `value` with the default [`RunConfig`].
    ///
    /// # Errors
    ///
    /// Returns the first failure not caught by an alternation, typically a
    /// value outside the domain of an embedded primitive.
    pub fn print<T: Shape>(computation: &Arrow<Self, (), T>, value: T) -> Result<String> {
        Self::print_with(computation, value, RunConfig::default())
    }

    /// Writes `value` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`print`](Self::print); also fails when `config` is invalid.
    pub fn print_with<T: Shape>(
        computation: &Arrow<Self, (), T>,
        value: T,
        config: RunConfig,
    ) -> Result<String> {
        config.validate()?;
        tracing::debug!("print started");
        let mut output = Output::new(config);
        computation.repr().run(value, &mut output)?;
        tracing::debug!(written = output.text.len(), "print finished");
        Ok(output.text)
    }

    /// Runs `computation` backwards from `value`, returning the input it
    /// would have been read from and the text written.
    ///
    /// # Errors
    ///
    /// Returns the first failure not caught by an alternation.
    pub fn run<A: Shape, B: Shape>(computation: &Arrow<Self, A, B>, value: B) -> Result<(A, String)> {
        let mut output = Output::new(RunConfig::default());
        let input = computation.repr().run(value, &mut output)?;
        Ok((input, output.text))
    }
}

static_assertions::assert_impl_all!(Print<(), Vec<char>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Arrow<Printer, (), String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{
        char_literal, fail, keep_left, one_or_more, text_literal, zero_or_more,
    };
    use crate::semi_iso::{checked, unit_right};
    use rstest::rstest;

    #[rstest]
    fn composition_writes_in_reading_order() {
        let second = Printer::compose(
            Printer::embed(unit_right::<char>()),
            Printer::second(char_literal::<Printer>('!')),
        );
        let composed = Printer::compose(Printer::any_char(), second);
        assert_eq!(
            Printer::run(&composed, ('x', ())),
            Ok(((), "x!".to_string()))
        );
    }

    #[rstest]
    fn alternation_discards_text_of_failed_branch() {
        let failing = keep_left(text_literal::<Printer>("xyz"), fail("no"));
        let fallback = text_literal::<Printer>("ok");
        assert_eq!(
            Printer::print(&Printer::alt(failing, fallback), ()),
            Ok("ok".to_string())
        );
    }

    #[rstest]
    fn list_length_is_not_bounded_by_depth() {
        let letters = one_or_more(Printer::any_char());
        let config = RunConfig::default().with_max_depth(1);
        assert_eq!(
            Printer::print_with(&letters, vec!['a', 'b', 'c', 'd'], config),
            Ok("abcd".to_string())
        );
    }

    #[rstest]
    fn failed_element_reports_the_whole_list() {
        let digits = zero_or_more(Printer::compose(
            Printer::any_char(),
            Printer::embed(checked("a digit", char::is_ascii_digit)),
        ));
        assert_eq!(
            Printer::print(&digits, vec!['1', 'x', '2']),
            Err(Failure::new("expected an empty sequence, found 3 elements"))
        );
    }

    #[rstest]
    fn exhausted_output_is_not_recovered() {
        let mut output = Output::new(RunConfig::default().with_max_depth(1));
        let nested = output.enter(|output| output.enter(|_| Ok(())));
        assert!(nested.is_err());
        assert!(output.is_exhausted());
        assert_eq!(output.depth, 0);
    }

    #[rstest]
    fn output_text_is_visible_while_writing() {
        let output = Output::new(RunConfig::default());
        assert_eq!(output.text(), "");
    }
}
