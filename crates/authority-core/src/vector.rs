//! Layered signal weight vectors and their collapse into one effective vector.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::signal::{AuthoritySignal, EffectiveVector, SignalMap};

/// An opinion about one entity's alignment to the five authority signals.
///
/// Only [`SignalWeightVector::resolve_effective`] should be consumed downstream;
/// the individual layers are authoring detail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalWeightVector {
    /// Doctrinal default. Never touched by the differentiation engine.
    pub primary: SignalMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SignalMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<SignalMap>,
    /// Subtractive overrides, floored at 0 after subtraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<SignalMap>,
    /// Evaluator context → replacement entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_override: Option<BTreeMap<String, SignalMap>>,
}

impl SignalWeightVector {
    pub fn from_primary(primary: SignalMap) -> Self {
        Self {
            primary,
            ..Default::default()
        }
    }

    /// Collapse all layers into one effective vector.
    ///
    /// primary + secondary + tertiary, minus negative (floored at 0), then
    /// any `context_override[active_context]` entries replace the computed ones.
    pub fn resolve_effective(&self, active_context: Option<&str>) -> EffectiveVector {
        let mut raw = [0.0_f64; AuthoritySignal::COUNT];

        add_layer(&mut raw, Some(&self.primary), 1.0);
        add_layer(&mut raw, self.secondary.as_ref(), 1.0);
        add_layer(&mut raw, self.tertiary.as_ref(), 1.0);
        add_layer(&mut raw, self.negative.as_ref(), -1.0);

        let mut effective = EffectiveVector::from_weights(raw);

        if let Some(overrides) = active_context
            .and_then(|ctx| self.context_override.as_ref().and_then(|m| m.get(ctx)))
        {
            for (signal, weight) in overrides {
                effective.set(*signal, *weight);
            }
        }

        effective
    }

    /// Set one secondary entry, creating the layer when absent.
    pub fn set_secondary(&mut self, signal: AuthoritySignal, weight: f64) {
        self.secondary.get_or_insert_with(SignalMap::new).insert(signal, weight);
    }

    /// Set one tertiary entry, creating the layer when absent.
    pub fn set_tertiary(&mut self, signal: AuthoritySignal, weight: f64) {
        self.tertiary.get_or_insert_with(SignalMap::new).insert(signal, weight);
    }
}

fn add_layer(acc: &mut [f64; AuthoritySignal::COUNT], layer: Option<&SignalMap>, sign: f64) {
    let Some(layer) = layer else {
        return;
    };
    for (signal, weight) in layer {
        if weight.is_finite() {
            acc[signal.index()] += sign * weight;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AuthoritySignal::*;

    fn map(entries: &[(AuthoritySignal, f64)]) -> SignalMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn missing_signals_resolve_to_zero() {
        let v = SignalWeightVector::from_primary(map(&[(StrategicCognition, 0.6)]));
        let eff = v.resolve_effective(None);
        assert_eq!(eff.get(StrategicCognition), 0.6);
        assert_eq!(eff.get(PublicServiceStatesmanship), 0.0);
    }

    #[test]
    fn layers_add_then_negative_floors_at_zero() {
        let v = SignalWeightVector {
            primary: map(&[(SystemsConstruction, 0.4), (InstitutionalLeadership, 0.1)]),
            secondary: Some(map(&[(SystemsConstruction, 0.1)])),
            tertiary: Some(map(&[(InstitutionalLeadership, 0.05)])),
            negative: Some(map(&[(InstitutionalLeadership, 0.5)])),
            context_override: None,
        };
        let eff = v.resolve_effective(None);
        assert!((eff.get(SystemsConstruction) - 0.5).abs() < 1e-12);
        assert_eq!(eff.get(InstitutionalLeadership), 0.0);
    }

    #[test]
    fn context_override_replaces_only_its_entries() {
        let mut overrides = BTreeMap::new();
        overrides.insert("board".to_string(), map(&[(StrategicCognition, 0.9)]));
        let v = SignalWeightVector {
            primary: map(&[(StrategicCognition, 0.2), (SystemsConstruction, 0.3)]),
            context_override: Some(overrides),
            ..Default::default()
        };

        let eff = v.resolve_effective(Some("board"));
        assert_eq!(eff.get(StrategicCognition), 0.9);
        assert_eq!(eff.get(SystemsConstruction), 0.3);

        assert_eq!(v.resolve_effective(Some("press")), v.resolve_effective(None));
    }

    #[test]
    fn deserializes_camel_case_layers() {
        let json = r#"{
            "primary": {"operational-transformation": 0.4},
            "contextOverride": {"investor": {"strategic-cognition": 0.7}}
        }"#;
        let v: SignalWeightVector = serde_json::from_str(json).unwrap();
        assert_eq!(
            v.resolve_effective(Some("investor")).get(StrategicCognition),
            0.7
        );
    }
}
