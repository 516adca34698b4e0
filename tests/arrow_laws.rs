#![cfg(all(feature = "parser", feature = "printer"))]
//! Property-based tests for the category laws and the embedding inverse law.
//!
//! Arrows are compared extensionally: two computations are equal when they
//! produce the same results (and consume or write the same text) on every
//! generated value.

use proptest::prelude::*;
use siarrow::prelude::*;
use siarrow::semi_iso::{cons, swap};

fn increment() -> impl Primitive<i32, i32> {
    semi_iso!(
        "increment",
        |n: i32| n.checked_add(1).ok_or_else(|| Failure::new("overflow")),
        |n: i32| n.checked_sub(1).ok_or_else(|| Failure::new("underflow")),
    )
}

fn halve() -> impl Primitive<i32, i32> {
    semi_iso!(
        "halve",
        |n: i32| {
            if n % 2 == 0 {
                Ok(n / 2)
            } else {
                Err(Failure::expected("an even number", n))
            }
        },
        |n: i32| n.checked_mul(2).ok_or_else(|| Failure::new("overflow")),
    )
}

// =============================================================================
// Category Laws Under The Reading Interpreter
// =============================================================================

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        let arrow = Parser::embed(halve());
        let composed = Parser::compose(Parser::identity(), Parser::embed(halve()));
        prop_assert_eq!(Parser::run(&composed, value, ""), Parser::run(&arrow, value, ""));
    }

    #[test]
    fn prop_right_identity(value in any::<i32>()) {
        let arrow = Parser::embed(halve());
        let composed = Parser::compose(Parser::embed(halve()), Parser::identity());
        prop_assert_eq!(Parser::run(&composed, value, ""), Parser::run(&arrow, value, ""));
    }

    #[test]
    fn prop_associativity(value in any::<i32>()) {
        let left_nested = Parser::compose(
            Parser::compose(Parser::embed(increment()), Parser::embed(halve())),
            Parser::embed(increment()),
        );
        let right_nested = Parser::compose(
            Parser::embed(increment()),
            Parser::compose(Parser::embed(halve()), Parser::embed(increment())),
        );
        prop_assert_eq!(
            Parser::run(&left_nested, value, ""),
            Parser::run(&right_nested, value, "")
        );
    }

    #[test]
    fn prop_composition_threads_input(input in "[a-z]{2,6}") {
        let two = Parser::any_char().and(Parser::any_char());
        let swapped = Parser::compose(two, Parser::embed(swap::<char, char>()));
        let mut characters = input.chars();
        let first = characters.next().unwrap();
        let second = characters.next().unwrap();
        prop_assert_eq!(
            Parser::run(&swapped, (), &input),
            Ok(((second, first), &input[2..]))
        );
    }
}

// =============================================================================
// Category Laws Under The Writing Interpreter
// =============================================================================

proptest! {
    #[test]
    fn prop_printer_identity_laws(value in any::<i32>()) {
        let arrow = Printer::embed(halve());
        let left = Printer::compose(Printer::identity(), Printer::embed(halve()));
        let right = Printer::compose(Printer::embed(halve()), Printer::identity());
        prop_assert_eq!(Printer::run(&left, value), Printer::run(&arrow, value));
        prop_assert_eq!(Printer::run(&right, value), Printer::run(&arrow, value));
    }

    #[test]
    fn prop_printer_associativity(value in any::<i32>()) {
        let left_nested = Printer::compose(
            Printer::compose(Printer::embed(increment()), Printer::embed(halve())),
            Printer::embed(increment()),
        );
        let right_nested = Printer::compose(
            Printer::embed(increment()),
            Printer::compose(Printer::embed(halve()), Printer::embed(increment())),
        );
        prop_assert_eq!(Printer::run(&left_nested, value), Printer::run(&right_nested, value));
    }
}

// =============================================================================
// Embedding Inverse Law
// =============================================================================

proptest! {
    #[test]
    fn prop_embed_then_embed_reverse_is_identity(list in prop::collection::vec(any::<u8>(), 1..10)) {
        let round_trip = Parser::compose(
            Parser::embed(cons::<u8>()),
            Parser::embed(cons::<u8>().reverse()),
        );
        prop_assert_eq!(Parser::run(&round_trip, list.clone(), ""), Ok((list, "")));
    }

    #[test]
    fn prop_embed_inverse_law_for_partial_primitives(value in any::<i32>().prop_map(|n| n & !1)) {
        let round_trip = Parser::compose(Parser::embed(halve()), Parser::embed_backward(halve()));
        prop_assert_eq!(Parser::run(&round_trip, value, ""), Ok((value, "")));
    }

    #[test]
    fn prop_embed_inverse_law_when_writing(value in any::<i32>().prop_map(|n| n & !1)) {
        let round_trip = Printer::compose(Printer::embed(halve()), Printer::embed(halve().reverse()));
        prop_assert_eq!(Printer::run(&round_trip, value), Ok((value, String::new())));
    }
}

// =============================================================================
// Products And Coproducts
// =============================================================================

proptest! {
    #[test]
    fn prop_split_runs_components_independently(left in any::<i32>(), right in any::<i32>()) {
        let split = Parser::split(Parser::embed(increment()), Parser::embed(halve()));
        let expected = increment()
            .apply(left)
            .and_then(|l| halve().apply(right).map(|r| (l, r)));
        prop_assert_eq!(Parser::run(&split, (left, right), "").map(|(value, _)| value), expected);
    }

    #[test]
    fn prop_choose_selects_by_variant(value in any::<i32>(), is_left in any::<bool>()) {
        let choice = Parser::choose(Parser::embed(increment()), Parser::identity::<char>());
        if is_left {
            let expected = increment().apply(value).map(Either::Left);
            let result = Parser::run(&choice, Either::Left(value), "").map(|(value, _)| value);
            prop_assert_eq!(result, expected);
        } else {
            let result = Parser::run(&choice, Either::Right('c'), "").map(|(value, _)| value);
            prop_assert_eq!(result, Ok(Either::Right('c')));
        }
    }

    #[test]
    fn prop_first_and_second_leave_the_other_component(value in any::<i32>(), other in any::<char>()) {
        prop_assume!(value < i32::MAX);
        let first = Parser::first::<i32, i32, char>(Parser::embed(increment()));
        let second = Parser::second::<i32, i32, char>(Parser::embed(increment()));
        prop_assert_eq!(Parser::run(&first, (value, other), ""), Ok(((value + 1, other), "")));
        prop_assert_eq!(Parser::run(&second, (other, value), ""), Ok(((other, value + 1), "")));
    }

    #[test]
    fn prop_left_and_right_pass_the_other_variant_through(value in any::<i32>(), other in any::<char>()) {
        let left = Parser::left::<i32, i32, char>(Parser::embed(halve()));
        let right = Parser::right::<i32, i32, char>(Parser::embed(halve()));
        prop_assert_eq!(Parser::run(&left, Either::Right(other), ""), Ok((Either::Right(other), "")));
        prop_assert_eq!(Parser::run(&right, Either::Left(other), ""), Ok((Either::Left(other), "")));
        prop_assert_eq!(
            Parser::run(&left, Either::Left(value), "").is_ok(),
            value % 2 == 0
        );
    }
}
