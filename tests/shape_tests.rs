//! Tests for shape normalisation and the sum shape.

use proptest::prelude::*;
use rstest::rstest;
use siarrow::Either;
use siarrow::semi_iso::SemiIso;
use siarrow::shape::{HCons, HNil, Morph, morph};

// =============================================================================
// Morph
// =============================================================================

proptest! {
    #[test]
    fn prop_reassociation_round_trip(a in any::<i32>(), b in any::<char>(), c in any::<bool>()) {
        let regroup = morph::<((i32, char), bool), (i32, (char, bool))>();
        prop_assert_eq!(regroup.apply(((a, b), c)), Ok((a, (b, c))));
        prop_assert_eq!(regroup.unapply((a, (b, c))), Ok(((a, b), c)));
    }

    #[test]
    fn prop_units_are_dropped(value in ".*") {
        let drop_units = morph::<(((), String), ()), String>();
        prop_assert_eq!(drop_units.apply((((), value.clone()), ())), Ok(value.clone()));
        prop_assert_eq!(drop_units.unapply(value.clone()), Ok((((), value), ())));
    }

    #[test]
    fn prop_quadruple_flattens_from_nested_pairs(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>()) {
        let flatten = morph::<((u8, u16), (u32, u64)), (u8, u16, u32, u64)>();
        prop_assert_eq!(flatten.apply(((a, b), (c, d))), Ok((a, b, c, d)));
    }
}

#[rstest]
fn containers_are_single_leaves() {
    let leaves = (vec![1_u8, 2], Some('x')).into_leaves();
    assert_eq!(leaves, HCons::new(vec![1, 2], HCons::new(Some('x'), HNil)));
}

#[rstest]
fn unit_has_no_leaves() {
    assert_eq!(().into_leaves(), HNil);
    assert_eq!(((), ((), ())).into_leaves(), HNil);
}

#[rstest]
fn morph_is_labelled() {
    assert_eq!(morph::<(u8, ()), u8>().label(), "morph");
}

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn either_projections_feed_the_side_primitives() {
    let value: Either<i32, char> = Either::Right('r');
    assert_eq!(value.left(), None);
    assert_eq!(value.right(), Some('r'));
    assert_eq!(siarrow::semi_iso::right::<i32, char>().apply(value), Ok('r'));
    assert!(siarrow::semi_iso::left::<i32, char>().apply(value).is_err());
}
