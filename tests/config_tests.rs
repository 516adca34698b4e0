#![cfg(all(feature = "parser", feature = "printer"))]
//! Tests for `RunConfig` as seen through the interpreters.

use rstest::rstest;
use siarrow::config::{ConfigError, DEFAULT_MAX_DEPTH, RunConfig};
use siarrow::prelude::*;

fn stars<K: Syntax>() -> Arrow<K, (), Vec<()>> {
    zero_or_more(char_literal('*'))
}

/// A character inside any number of parentheses, with the count.
fn wrapped<K: Syntax>() -> Arrow<K, (), (usize, char)> {
    let deeper = semi_iso!(
        "deeper",
        |(depth, character): (usize, char)| Ok((depth + 1, character)),
        |(depth, character): (usize, char)| {
            depth
                .checked_sub(1)
                .map(|depth| (depth, character))
                .ok_or_else(|| Failure::new("expected a wrapped character"))
        },
    );
    let bare = semi_iso!(
        "bare",
        |character: char| Ok((0, character)),
        |(depth, character): (usize, char)| {
            if depth == 0 {
                Ok(character)
            } else {
                Err(Failure::new("expected a bare character"))
            }
        },
    );
    K::fix(move |inner: Arrow<K, (), (usize, char)>| {
        let bracketed = keep_left(keep_right(char_literal('('), inner), char_literal(')'));
        let letter = satisfy("a letter", char::is_ascii_alphabetic);
        map_output(deeper.reverse(), bracketed).or(map_output(bare.reverse(), letter))
    })
}

#[rstest]
fn defaults_match_the_plain_entry_points() {
    assert_eq!(RunConfig::default().max_depth(), DEFAULT_MAX_DEPTH);
    let input = "*".repeat(64);
    assert_eq!(
        Parser::parse(&stars(), &input),
        Parser::parse_with(&stars(), &input, RunConfig::default())
    );
    assert_eq!(
        Printer::print(&stars(), vec![(); 10]),
        Printer::print_with(&stars(), vec![(); 10], RunConfig::default())
    );
}

#[rstest]
fn default_depth_handles_long_repetitions() {
    let input = "*".repeat(20_000);
    assert_eq!(
        Parser::parse(&stars(), &input).map(|found| found.len()),
        Ok(20_000)
    );
    assert_eq!(Printer::print(&stars(), vec![(); 20_000]), Ok(input));
}

#[rstest]
#[case(1, 0)]
#[case(1, 5)]
#[case(4, 100)]
fn max_depth_does_not_bound_repetition(#[case] max_depth: usize, #[case] count: usize) {
    let config = RunConfig::default().with_max_depth(max_depth);
    let input = "*".repeat(count);
    assert_eq!(
        Parser::parse_with(&stars(), &input, config).map(|found| found.len()),
        Ok(count)
    );
    assert_eq!(
        Printer::print_with(&stars(), vec![(); count], config),
        Ok(input)
    );
}

#[rstest]
#[case(1, "x", true)]
#[case(1, "(x)", false)]
#[case(3, "((x))", true)]
#[case(3, "(((x)))", false)]
fn max_depth_bounds_nesting(
    #[case] max_depth: usize,
    #[case] input: &str,
    #[case] accepted: bool,
) {
    let config = RunConfig::default().with_max_depth(max_depth);
    assert_eq!(Parser::parse_with(&wrapped(), input, config).is_ok(), accepted);
    let depth = input.len() / 2;
    assert_eq!(
        Printer::print_with(&wrapped(), (depth, 'x'), config).is_ok(),
        accepted
    );
}

#[rstest]
fn partial_reads_leave_input_unreported() {
    let config = RunConfig::default().with_require_complete(false);
    assert_eq!(Parser::parse_with(&stars(), "**x", config), Ok(vec![(), ()]));
    assert!(Parser::parse(&stars::<Parser>(), "**x").is_err());
}

#[rstest]
fn zero_depth_is_rejected_before_running() {
    let config = RunConfig::default().with_max_depth(0);
    assert_eq!(config.validate(), Err(ConfigError::ZeroDepth));
    assert_eq!(
        Parser::parse_with(&stars(), "", config),
        Err(Failure::new("max_depth must be at least 1"))
    );
    assert_eq!(
        Printer::print_with(&stars(), vec![], config),
        Err(Failure::new("max_depth must be at least 1"))
    );
}

#[rstest]
fn config_error_converts_to_failure() {
    let failure: Failure = ConfigError::ZeroDepth.into();
    assert_eq!(failure.message(), "max_depth must be at least 1");
}
