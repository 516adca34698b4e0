#![cfg(all(feature = "parser", feature = "printer"))]
//! Property-based tests for the round-trip laws between the two text
//! interpreters.
//!
//! For a syntax `s`:
//!
//! - whatever `print(s, v)` writes, `parse(s, _)` reads back as `v`
//! - whatever `parse(s, t)` reads, `print(s, _)` writes as text that reads
//!   back to the same value

use proptest::prelude::*;
use siarrow::prelude::*;
use siarrow::semi_iso::{parsed, text};

fn number<K: Syntax>() -> Arrow<K, (), u64> {
    let digits = one_or_more(satisfy("a digit", char::is_ascii_digit));
    map_output(text().compose(parsed::<u64>("a number")).reverse(), digits)
}

fn identifier<K: Syntax>() -> Arrow<K, (), String> {
    word("a letter", char::is_ascii_lowercase)
}

fn entry<K: Syntax>() -> Arrow<K, (), (String, Option<u64>)> {
    pair(identifier(), optional(keep_right(char_literal('='), number())))
}

fn entries<K: Syntax>() -> Arrow<K, (), Vec<(String, Option<u64>)>> {
    separated_by(entry(), char_literal(';'))
}

fn letters<K: Syntax>() -> Arrow<K, (), Vec<char>> {
    separated_by(satisfy("a letter", char::is_ascii_lowercase), char_literal(','))
}

fn entry_value() -> impl Strategy<Value = (String, Option<u64>)> {
    ("[a-z]{1,8}", any::<Option<u64>>())
}

// =============================================================================
// Print Then Parse
// =============================================================================

proptest! {
    #[test]
    fn prop_number_round_trip(value in any::<u64>()) {
        let written = Printer::print(&number(), value).unwrap();
        prop_assert_eq!(Parser::parse(&number(), &written), Ok(value));
    }

    #[test]
    fn prop_entries_round_trip(value in prop::collection::vec(entry_value(), 0..6)) {
        let written = Printer::print(&entries(), value.clone()).unwrap();
        prop_assert_eq!(Parser::parse(&entries(), &written), Ok(value));
    }

    #[test]
    fn prop_separated_characters_round_trip(value in prop::collection::vec(prop::char::range('a', 'z'), 0..12)) {
        let written = Printer::print(&letters(), value.clone()).unwrap();
        prop_assert_eq!(Parser::parse(&letters(), &written), Ok(value));
    }
}

// =============================================================================
// Parse Then Print
// =============================================================================

proptest! {
    #[test]
    fn prop_canonical_text_is_reproduced(input in "([a-z]{1,5}(=[1-9][0-9]{0,5})?)(;[a-z]{1,5}(=[1-9][0-9]{0,5})?){0,4}") {
        let value = Parser::parse(&entries(), &input).unwrap();
        prop_assert_eq!(Printer::print(&entries(), value), Ok(input));
    }

    #[test]
    fn prop_non_canonical_text_reads_back_to_the_same_value(input in "0{1,3}[0-9]{1,5}") {
        let value = Parser::parse(&number(), &input).unwrap();
        let written = Printer::print(&number(), value).unwrap();
        prop_assert_eq!(Parser::parse(&number(), &written), Ok(value));
    }

    #[test]
    fn prop_rejected_text_is_rejected_consistently(input in "[A-Z]{1,4}") {
        prop_assert!(Parser::parse(&entries(), &input).is_err());
    }
}
