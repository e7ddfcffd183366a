//! Property-based tests for the algebraic laws the numeric wrapper types,
//! validator, and code generator are expected to hold for any input, not
//! just the handful of values exercised by the unit tests next to each type.

use proptest::prelude::*;

use gbdsl_core::game::{Button, Entity};
use gbdsl_core::services::{AssetService, EntityService, MockAssetService, MockEntityService};
use gbdsl_core::value::{I16, I8, U16, U8};
use gbdsl_core::{compile, validate, GameBuilder};

proptest! {
    #[test]
    fn u8_add_is_commutative(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(U8::new(a) + U8::new(b), U8::new(b) + U8::new(a));
    }

    #[test]
    fn u8_add_has_identity(a in any::<u8>()) {
        prop_assert_eq!(U8::new(a) + U8::ZERO, U8::new(a));
    }

    #[test]
    fn u8_mul_has_identity(a in any::<u8>()) {
        prop_assert_eq!(U8::new(a) * U8::new(1), U8::new(a));
    }

    #[test]
    fn u8_add_matches_native_wrapping_add(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!((U8::new(a) + U8::new(b)).to_int(), a.wrapping_add(b) as i64);
    }

    #[test]
    fn u16_add_is_commutative(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(U16::new(a) + U16::new(b), U16::new(b) + U16::new(a));
    }

    #[test]
    fn u16_high_low_round_trip(a in any::<u16>()) {
        let v = U16::new(a);
        prop_assert_eq!(U16::from(v.high(), v.low()), v);
    }

    #[test]
    fn i8_add_is_commutative(a in any::<i8>(), b in any::<i8>()) {
        prop_assert_eq!(I8::new(a) + I8::new(b), I8::new(b) + I8::new(a));
    }

    #[test]
    fn i8_negation_is_involutive_except_at_min(a in any::<i8>()) {
        prop_assume!(a != i8::MIN);
        prop_assert_eq!(-(-I8::new(a)), I8::new(a));
    }

    #[test]
    fn i16_add_is_commutative(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(I16::new(a) + I16::new(b), I16::new(b) + I16::new(a));
    }

    #[test]
    fn i16_negation_is_involutive_except_at_min(a in any::<i16>()) {
        prop_assume!(a != i16::MIN);
        prop_assert_eq!(-(-I16::new(a)), I16::new(a));
    }

    #[test]
    fn shift_round_trips_when_top_two_bits_are_clear(raw in 0u8..=63) {
        let a = U8::new(raw);
        prop_assert_eq!((a << 2) >> 2, a);
    }

    #[test]
    fn asset_resolves_to_its_own_registered_path(path in "[a-z]{1,8}/[a-z]{1,8}\\.png") {
        let mut service = MockAssetService::default();
        service.register_asset(path.clone());
        prop_assert_eq!(service.resolve_asset(&path), Some(path));
    }

    #[test]
    fn entity_tag_query_is_exact(
        tags in proptest::collection::vec("[a-z]{1,6}", 1..8),
        needle_idx in 0usize..8,
    ) {
        let mut service = MockEntityService::default();
        for (i, tag) in tags.iter().enumerate() {
            let mut entity = Entity::new(format!("e{i}"));
            entity.tag = Some(tag.clone());
            service.register_entity(entity);
        }

        let needle = &tags[needle_idx % tags.len()];
        let matches = service.query_by_tag(needle);
        let expected = tags.iter().filter(|t| *t == needle).count();
        prop_assert_eq!(matches.len(), expected);
        prop_assert!(matches.iter().all(|e| e.tag.as_deref() == Some(needle.as_str())));
    }

    #[test]
    fn generate_is_deterministic_across_runs(fill in 0u8..=255) {
        let game = GameBuilder::new("prop")
            .scene("title", |_scene| {})
            .start_scene("title")
            .input_buffer("jump", Button::A, U8::new(fill), None)
            .build()
            .expect("property game should build");

        let first = compile(&game).expect("property game should compile");
        let second = compile(&game).expect("property game should compile");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn validate_is_idempotent(fill in 0u8..=255) {
        let game = GameBuilder::new("prop")
            .scene("title", |_scene| {})
            .start_scene("title")
            .input_buffer("jump", Button::A, U8::new(fill), None)
            .build()
            .expect("property game should build");

        let first = validate(&game);
        let second = validate(&game);
        prop_assert_eq!(first.errors.len(), second.errors.len());
        prop_assert_eq!(first.warnings.len(), second.warnings.len());
        prop_assert_eq!(first.is_valid(), second.is_valid());
    }
}
