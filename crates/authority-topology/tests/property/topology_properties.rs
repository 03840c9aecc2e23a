//! Property tests for signatures and the differentiation engine.

use proptest::prelude::*;

use authority_core::{AuthoritySignal, Binding, EntityKind, SignalMap, SignalWeightVector};
use authority_topology::{
    binding_signature, compute_signal_entropy_score, compute_topology_dimensionality_index,
    differentiate_topology, vector_signature,
};

fn primary_strategy() -> impl Strategy<Value = Vec<(AuthoritySignal, f64)>> {
    prop::collection::vec(
        (prop::sample::select(AuthoritySignal::ALL.to_vec()), 0.0_f64..1.0_f64),
        1..6,
    )
}

proptest! {
    #[test]
    fn signature_ignores_key_insertion_order(
        unique in prop::collection::btree_map(
            prop::sample::select(AuthoritySignal::ALL.to_vec()),
            0.0_f64..1.0_f64,
            1..6,
        ),
    ) {
        let entries: Vec<(AuthoritySignal, f64)> = unique.into_iter().collect();
        let forward: SignalMap = entries.iter().copied().collect();
        let reversed: SignalMap = entries.iter().rev().copied().collect();
        let a = SignalWeightVector::from_primary(forward).resolve_effective(None);
        let b = SignalWeightVector::from_primary(reversed).resolve_effective(None);
        prop_assert_eq!(vector_signature(&a), vector_signature(&b));
    }

    #[test]
    fn signature_survives_json_round_trip(entries in primary_strategy()) {
        let primary: SignalMap = entries.into_iter().collect();
        let binding = Binding::new(EntityKind::Claim, "c", SignalWeightVector::from_primary(primary));
        let json = serde_json::to_string(&binding).unwrap();
        let back: Binding = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(binding_signature(&binding), binding_signature(&back));
    }

    #[test]
    fn small_clusters_become_pairwise_distinct(
        entries in primary_strategy(),
        n in 2_usize..=5,
    ) {
        let primary: SignalMap = entries.into_iter().collect();
        let cluster: Vec<Binding> = (0..n)
            .map(|i| Binding::new(EntityKind::Claim, format!("c{i}"), SignalWeightVector::from_primary(primary.clone())))
            .collect();

        let out = differentiate_topology(&cluster);
        prop_assert_eq!(out.len(), n);

        let signatures: std::collections::HashSet<String> = out.iter().map(binding_signature).collect();
        prop_assert_eq!(signatures.len(), n);

        for (before, after) in cluster.iter().zip(&out) {
            prop_assert_eq!(&before.vector.primary, &after.vector.primary);
            prop_assert_eq!(before.key(), after.key());
        }
    }

    #[test]
    fn differentiation_never_produces_negative_weights(
        entries in primary_strategy(),
        n in 1_usize..12,
    ) {
        let primary: SignalMap = entries.into_iter().collect();
        let cluster: Vec<Binding> = (0..n)
            .map(|i| Binding::new(EntityKind::Record, format!("r{i}"), SignalWeightVector::from_primary(primary.clone())))
            .collect();
        for binding in differentiate_topology(&cluster) {
            let layers = [binding.vector.secondary.clone(), binding.vector.tertiary.clone()];
            for layer in layers.into_iter().flatten() {
                prop_assert!(layer.values().all(|w| *w >= 0.0));
            }
        }
    }

    #[test]
    fn diagnostics_stay_in_unit_interval(
        batch in prop::collection::vec(primary_strategy(), 0..20),
    ) {
        let bindings: Vec<Binding> = batch
            .into_iter()
            .enumerate()
            .map(|(i, entries)| Binding::new(EntityKind::Book, format!("b{i}"), SignalWeightVector::from_primary(entries.into_iter().collect())))
            .collect();
        let entropy = compute_signal_entropy_score(&bindings);
        let dim = compute_topology_dimensionality_index(&bindings);
        prop_assert!((0.0..=1.0).contains(&entropy));
        prop_assert!((0.0..=1.0).contains(&dim));
        if !bindings.is_empty() {
            prop_assert!(dim > 0.0);
        }
    }
}
