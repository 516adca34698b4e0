#![cfg(feature = "parser")]
//! Tests for the reading interpreter.

use rstest::rstest;
use siarrow::prelude::*;

fn nested<K: Syntax>() -> Arrow<K, (), usize> {
    let depth = semi_iso!(
        "depth",
        |depth: usize| Ok(depth.checked_sub(1)),
        |option: Option<usize>| Ok(option.map_or(0, |inner| inner + 1)),
    );
    K::fix(move |inner: Arrow<K, (), usize>| {
        let bracketed = keep_left(keep_right(char_literal('('), inner), char_literal(')'));
        map_output(depth, optional(bracketed))
    })
}

// =============================================================================
// Input Handling
// =============================================================================

#[rstest]
fn any_char_reads_one_character() {
    assert_eq!(Parser::run(&Parser::any_char(), (), "ab"), Ok(('a', "b")));
}

#[rstest]
fn any_char_fails_at_end_of_input() {
    assert_eq!(
        Parser::parse(&Parser::any_char(), ""),
        Err(Failure::new("expected a character, found end of input at offset 0"))
    );
}

#[rstest]
fn multibyte_characters_are_read_whole() {
    let word = word::<Parser, _>("a letter", |c: &char| c.is_alphabetic());
    assert_eq!(Parser::parse(&word, "héllo"), Ok("héllo".to_string()));
}

#[rstest]
fn parse_requires_complete_input_by_default() {
    let letter = satisfy::<Parser, _>("a letter", char::is_ascii_alphabetic);
    assert_eq!(
        Parser::parse(&letter, "ab"),
        Err(Failure::new("unconsumed input at offset 1: \"b\""))
    );
}

#[rstest]
fn parse_with_can_accept_partial_input() {
    let letter = satisfy::<Parser, _>("a letter", char::is_ascii_alphabetic);
    let config = RunConfig::default().with_require_complete(false);
    assert_eq!(Parser::parse_with(&letter, "ab", config), Ok('a'));
}

#[rstest]
fn primitive_failure_message_is_reported() {
    let letter = satisfy::<Parser, _>("a letter", char::is_ascii_alphabetic);
    assert_eq!(
        Parser::parse(&letter, "1"),
        Err(Failure::new("expected a letter, found '1'"))
    );
}

// =============================================================================
// Alternation
// =============================================================================

#[rstest]
fn alternation_backtracks_after_partial_consumption() {
    let keyword = text_literal::<Parser>("let").or(text_literal("lambda"));
    assert_eq!(Parser::parse(&keyword, "lambda"), Ok(()));
}

#[rstest]
fn alternation_reports_the_second_failure() {
    let keyword = text_literal::<Parser>("a").or(fail("neither"));
    assert_eq!(Parser::parse(&keyword, "b"), Err(Failure::new("neither")));
}

#[rstest]
fn first_successful_alternative_wins() {
    let greedy = either(text_literal::<Parser>("ab"), text_literal("a"));
    assert_eq!(Parser::run(&greedy, (), "abc"), Ok((Either::Left(()), "c")));
}

// =============================================================================
// Recursion
// =============================================================================

#[rstest]
#[case("", 0)]
#[case("()", 1)]
#[case("((()))", 3)]
fn recursive_computation_reads_nesting(#[case] input: &str, #[case] expected: usize) {
    assert_eq!(Parser::parse(&nested(), input), Ok(expected));
}

#[rstest]
fn unbalanced_input_fails() {
    assert!(Parser::parse(&nested::<Parser>(), "((").is_err());
    assert!(Parser::parse(&nested::<Parser>(), "())").is_err());
}

#[rstest]
fn nesting_beyond_the_limit_is_reported() {
    let config = RunConfig::default().with_max_depth(2);
    assert_eq!(Parser::parse_with(&nested(), "()", config), Ok(1));
    assert_eq!(
        Parser::parse_with(&nested(), "((()))", config),
        Err(Failure::new("nesting limit of 2 exceeded at offset 2"))
    );
}

#[rstest]
fn nesting_limit_is_not_hidden_by_a_repetition() {
    let groups = zero_or_more(keep_left(nested(), char_literal(';')));
    let config = RunConfig::default().with_max_depth(2);
    assert_eq!(Parser::parse_with(&groups, "();();", config), Ok(vec![1, 1]));
    assert_eq!(
        Parser::parse_with(&groups, "();(());", config),
        Err(Failure::new("nesting limit of 2 exceeded at offset 5"))
    );
}

#[rstest]
fn default_nesting_limit_fits_a_thread_stack() {
    let limit = RunConfig::default().max_depth();
    let deepest = format!("{}{}", "(".repeat(limit - 1), ")".repeat(limit - 1));
    assert_eq!(Parser::parse(&nested(), &deepest), Ok(limit - 1));

    let too_deep = format!("{}{}", "(".repeat(limit), ")".repeat(limit));
    assert_eq!(
        Parser::parse(&nested(), &too_deep),
        Err(Failure::new(format!(
            "nesting limit of {limit} exceeded at offset {limit}"
        )))
    );
}

#[rstest]
fn recursion_over_input_values_needs_no_input_text() {
    let decrement = semi_iso!(
        "decrement",
        |n: u32| n.checked_sub(1).ok_or_else(|| Failure::new("expected a positive number")),
        |n: u32| Ok(n + 1),
    );
    let countdown = Parser::fix(move |rest: Arrow<Parser, u32, u32>| {
        Parser::embed(semi_iso::checked("zero", |n: &u32| *n == 0))
            .or(Parser::embed(decrement).then(rest))
    });
    assert_eq!(Parser::run(&countdown, 3_u32, ""), Ok((0, "")));
    assert_eq!(Parser::run(&countdown, 0_u32, "rest"), Ok((0, "rest")));
}

#[rstest]
fn left_recursion_fails_instead_of_looping() {
    let left_recursive = Parser::fix::<(), Vec<char>, _>(|rest| {
        let step = map_output(
            siarrow::semi_iso::cons::<char>().compose(siarrow::semi_iso::swap::<char, Vec<char>>()),
            pair(rest, Parser::any_char()),
        );
        step.or(fail("no base case"))
    });
    assert!(Parser::parse(&left_recursive, "abc").is_err());
}

#[rstest]
fn computations_are_shareable_across_threads() {
    let digits = one_or_more(satisfy::<Parser, _>("a digit", char::is_ascii_digit));
    let handles: Vec<_> = ["12", "345", "6"]
        .into_iter()
        .map(|input| {
            let digits = digits.clone();
            std::thread::spawn(move || Parser::parse(&digits, input).map(|found| found.len()))
        })
        .collect();
    let lengths: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(lengths, vec![Ok(2), Ok(3), Ok(1)]);
}
