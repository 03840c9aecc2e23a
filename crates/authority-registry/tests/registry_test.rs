use authority_core::{AuthoritySignal, Binding, EntityKey, EntityKind};
use authority_registry::SignalRegistry;
use test_fixtures::{load_fixture, BINDINGS};

fn corpus() -> Vec<Binding> {
    load_fixture(BINDINGS)
}

#[test]
fn corpus_populates_one_entry_per_binding() {
    let bindings = corpus();
    let registry = SignalRegistry::from_bindings(&bindings);
    assert_eq!(registry.len(), bindings.len());
    for b in &bindings {
        assert!(registry.contains(&b.key()), "{} missing", b.key());
    }
}

#[test]
fn lookup_returns_registered_vector() {
    let registry = SignalRegistry::from_bindings(&corpus());
    let vector = registry.lookup(EntityKind::Claim, "c-01").expect("c-01 bound");
    assert!(vector.context_override.is_some());
    assert!(registry.lookup(EntityKind::Record, "c-01").is_none());
    assert!(registry.lookup(EntityKind::Claim, "unknown").is_none());
}

#[test]
fn effective_applies_evaluator_context() {
    let registry = SignalRegistry::from_bindings(&corpus());
    let investor = registry
        .effective(EntityKind::Claim, "c-01", Some("investor"))
        .expect("c-01");
    assert_eq!(investor.get(AuthoritySignal::StrategicCognition), 0.8);
    let plain = registry
        .effective(EntityKind::Claim, "c-01", Some("no-such-context"))
        .expect("c-01");
    assert_eq!(plain, registry.effective(EntityKind::Claim, "c-01", None).expect("c-01"));
}

#[test]
fn aggregate_coverage_sums_effective_weights() {
    let bindings = corpus();
    let registry = SignalRegistry::from_bindings(&bindings);
    let coverage = registry.aggregate_coverage();
    for signal in AuthoritySignal::ALL {
        let expected: f64 = bindings.iter().map(|b| b.effective().get(signal)).sum();
        assert!((coverage.get(signal) - expected).abs() < 1e-9, "{signal}");
    }
}

#[test]
fn repopulating_forgets_previous_request() {
    let bindings = corpus();
    let mut registry = SignalRegistry::from_bindings(&bindings);
    registry.populate(bindings.iter().take(3));
    assert_eq!(registry.len(), 3);
    let key = bindings[10].key();
    assert!(!registry.contains(&key));
    assert!(registry.contains(&EntityKey::new(bindings[0].entity_kind, bindings[0].entity_id.clone())));
}

#[test]
fn bindings_round_trip_through_registry() {
    let bindings = corpus();
    let registry = SignalRegistry::from_bindings(&bindings);
    let mut expected: Vec<EntityKey> = bindings.iter().map(Binding::key).collect();
    expected.sort();
    let actual: Vec<EntityKey> = registry.bindings().iter().map(Binding::key).collect();
    assert_eq!(actual, expected);
}
