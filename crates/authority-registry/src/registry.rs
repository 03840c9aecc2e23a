//! SignalRegistry: upsert-by-key store of signal weight vectors.
//!
//! Callers `clear()` and fully repopulate before relying on lookups. Sharing
//! one registry between two concurrently repopulating requests is not
//! supported; give each request its own value.

use std::collections::BTreeMap;

use authority_core::{
    AuthoritySignal, Binding, EffectiveVector, EntityKey, EntityKind, SignalWeightVector,
};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SignalRegistry {
    entries: BTreeMap<EntityKey, SignalWeightVector>,
}

impl SignalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry already populated from `bindings`.
    pub fn from_bindings<'a>(bindings: impl IntoIterator<Item = &'a Binding>) -> Self {
        let mut registry = Self::new();
        registry.populate(bindings);
        registry
    }

    /// Drop all bindings. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Upsert one binding; the last write for a key wins.
    pub fn register(&mut self, binding: &Binding) {
        self.entries.insert(binding.key(), binding.vector.clone());
    }

    /// Clear, then register every binding in order.
    pub fn populate<'a>(&mut self, bindings: impl IntoIterator<Item = &'a Binding>) {
        self.clear();
        for binding in bindings {
            self.register(binding);
        }
        debug!(entries = self.entries.len(), "signal registry populated");
    }

    pub fn lookup(&self, kind: EntityKind, id: &str) -> Option<&SignalWeightVector> {
        self.entries.get(&EntityKey::new(kind, id))
    }

    /// Effective vector for one entity, if registered.
    pub fn effective(
        &self,
        kind: EntityKind,
        id: &str,
        active_context: Option<&str>,
    ) -> Option<EffectiveVector> {
        self.lookup(kind, id)
            .map(|v| v.resolve_effective(active_context))
    }

    /// Per-signal sum of every registered entity's effective weight.
    pub fn aggregate_coverage(&self) -> EffectiveVector {
        let mut totals = [0.0_f64; AuthoritySignal::COUNT];
        for vector in self.entries.values() {
            let eff = vector.resolve_effective(None);
            for (slot, w) in totals.iter_mut().zip(eff.weights()) {
                *slot += w;
            }
        }
        EffectiveVector::from_weights(totals)
    }

    /// Registered entries as bindings, in key order.
    pub fn bindings(&self) -> Vec<Binding> {
        self.entries
            .iter()
            .map(|(key, vector)| Binding::new(key.kind, key.id.clone(), vector.clone()))
            .collect()
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authority_core::SignalMap;

    fn binding(kind: EntityKind, id: &str, signal: AuthoritySignal, w: f64) -> Binding {
        let primary: SignalMap = [(signal, w)].into_iter().collect();
        Binding::new(kind, id, SignalWeightVector::from_primary(primary))
    }

    #[test]
    fn last_write_wins() {
        let mut registry = SignalRegistry::new();
        registry.register(&binding(EntityKind::Claim, "c1", AuthoritySignal::StrategicCognition, 0.2));
        registry.register(&binding(EntityKind::Claim, "c1", AuthoritySignal::StrategicCognition, 0.7));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry
                .effective(EntityKind::Claim, "c1", None)
                .unwrap()
                .get(AuthoritySignal::StrategicCognition),
            0.7
        );
    }

    #[test]
    fn same_id_under_different_kinds_is_distinct() {
        let mut registry = SignalRegistry::new();
        registry.register(&binding(EntityKind::Claim, "x", AuthoritySignal::SystemsConstruction, 0.3));
        registry.register(&binding(EntityKind::Record, "x", AuthoritySignal::SystemsConstruction, 0.5));
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup(EntityKind::Book, "x").is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut registry = SignalRegistry::new();
        registry.register(&binding(EntityKind::Book, "b", AuthoritySignal::InstitutionalLeadership, 0.4));
        registry.clear();
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.aggregate_coverage(), EffectiveVector::ZERO);
    }

    #[test]
    fn populate_replaces_previous_contents() {
        let mut registry = SignalRegistry::new();
        registry.register(&binding(EntityKind::Book, "old", AuthoritySignal::InstitutionalLeadership, 0.4));
        let fresh = [binding(EntityKind::Claim, "new", AuthoritySignal::StrategicCognition, 0.1)];
        registry.populate(&fresh);
        assert!(registry.lookup(EntityKind::Book, "old").is_none());
        assert!(registry.lookup(EntityKind::Claim, "new").is_some());
    }
}
