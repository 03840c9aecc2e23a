//! Property tests for effective-vector resolution.

use std::collections::BTreeMap;

use proptest::prelude::*;

use authority_core::{AuthoritySignal, SignalMap, SignalWeightVector};

fn layer_strategy() -> impl Strategy<Value = SignalMap> {
    prop::collection::btree_map(
        prop::sample::select(AuthoritySignal::ALL.to_vec()),
        -1.0_f64..1.0_f64,
        0..5,
    )
}

fn vector_strategy() -> impl Strategy<Value = SignalWeightVector> {
    (
        prop::collection::btree_map(
            prop::sample::select(AuthoritySignal::ALL.to_vec()),
            0.0_f64..1.0_f64,
            0..5,
        ),
        prop::option::of(layer_strategy()),
        prop::option::of(layer_strategy()),
        prop::option::of(layer_strategy()),
        prop::option::of(layer_strategy()),
    )
        .prop_map(|(primary, secondary, tertiary, negative, board)| {
            let context_override = board.map(|layer| {
                let mut m = BTreeMap::new();
                m.insert("board".to_string(), layer);
                m
            });
            SignalWeightVector {
                primary,
                secondary,
                tertiary,
                negative,
                context_override,
            }
        })
}

proptest! {
    #[test]
    fn effective_vector_has_five_finite_non_negative_weights(v in vector_strategy()) {
        for ctx in [None, Some("board")] {
            let eff = v.resolve_effective(ctx);
            let map: SignalMap = eff.into();
            prop_assert_eq!(map.len(), AuthoritySignal::COUNT);
            for (_, w) in map {
                prop_assert!(w.is_finite());
                prop_assert!(w >= 0.0);
            }
        }
    }

    #[test]
    fn unmatched_context_is_ignored(v in vector_strategy()) {
        prop_assert_eq!(v.resolve_effective(Some("unmatched")), v.resolve_effective(None));
    }

    #[test]
    fn resolution_is_pure(v in vector_strategy()) {
        prop_assert_eq!(v.resolve_effective(Some("board")), v.resolve_effective(Some("board")));
    }
}
