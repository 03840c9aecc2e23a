//! Entropy and dimensionality diagnostics over a batch of bindings.
//!
//! Pure analytics: nothing here mutates its input. All diagnostics use the
//! context-free effective vector of each binding.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use authority_core::config::defaults::{
    DEFAULT_COLLAPSE_DIMENSIONALITY_THRESHOLD, DEFAULT_COLLAPSE_ENTROPY_THRESHOLD,
};
use authority_core::{AuthoritySignal, Binding, EffectiveVector, EntityKey, EntityKind};

use crate::signature::binding_signature;

/// Normalized Shannon entropy of how the batch's total weight spreads over
/// the five signals, in [0, 1].
///
/// Each signal's share is the sum of that signal's weight across all
/// entities divided by the batch total; signals with zero weight contribute
/// nothing. The entropy in bits is normalized by `log2(5)`.
///
/// Batches of fewer than two bindings score 0 by rule, not by the formula:
/// a single binding spread evenly over all five signals would otherwise
/// score 1.
pub fn compute_signal_entropy_score(bindings: &[Binding]) -> f64 {
    if bindings.len() < 2 {
        return 0.0;
    }

    let mut totals = [0.0_f64; AuthoritySignal::COUNT];
    for binding in bindings {
        for (slot, w) in totals.iter_mut().zip(binding.effective().weights()) {
            *slot += w;
        }
    }

    let sum: f64 = totals.iter().sum();
    if sum <= 0.0 {
        return 0.0;
    }

    let entropy: f64 = totals
        .iter()
        .filter(|t| **t > 0.0)
        .map(|t| {
            let p = t / sum;
            -p * p.log2()
        })
        .sum();

    (entropy / (AuthoritySignal::COUNT as f64).log2()).clamp(0.0, 1.0)
}

/// `|unique signatures| / |bindings|`; 0 for an empty batch.
pub fn compute_topology_dimensionality_index(bindings: &[Binding]) -> f64 {
    if bindings.is_empty() {
        return 0.0;
    }
    unique_signature_count(bindings) as f64 / bindings.len() as f64
}

fn unique_signature_count(bindings: &[Binding]) -> usize {
    bindings
        .iter()
        .map(binding_signature)
        .collect::<HashSet<_>>()
        .len()
}

/// Mean and sample variance of one signal across the batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalMoments {
    pub mean: f64,
    /// N−1 denominator; 0 when N ≤ 1.
    pub variance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceReport {
    pub per_signal: BTreeMap<AuthoritySignal, SignalMoments>,
    /// Mean of the five per-signal variances.
    pub overall_variance: f64,
    pub unique_signatures: usize,
    pub total_entities: usize,
}

pub fn variance_distribution(bindings: &[Binding]) -> VarianceReport {
    let vectors: Vec<EffectiveVector> = bindings.iter().map(Binding::effective).collect();
    let n = vectors.len();

    let per_signal: BTreeMap<AuthoritySignal, SignalMoments> = AuthoritySignal::ALL
        .into_iter()
        .map(|signal| {
            let values: Vec<f64> = vectors.iter().map(|v| v.get(signal)).collect();
            (signal, moments(&values))
        })
        .collect();

    let overall_variance =
        per_signal.values().map(|m| m.variance).sum::<f64>() / AuthoritySignal::COUNT as f64;

    VarianceReport {
        per_signal,
        overall_variance,
        unique_signatures: unique_signature_count(bindings),
        total_entities: n,
    }
}

fn moments(values: &[f64]) -> SignalMoments {
    let n = values.len();
    if n == 0 {
        return SignalMoments {
            mean: 0.0,
            variance: 0.0,
        };
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = if n <= 1 {
        0.0
    } else {
        values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1) as f64
    };
    SignalMoments { mean, variance }
}

/// Build-time collapse gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollapseVerdict {
    pub severe: bool,
    /// Set only when `severe`.
    pub reason: Option<String>,
    pub entropy_score: f64,
    pub dimensionality_index: f64,
}

/// Collapse detection with the default thresholds (entropy < 0.12 or
/// dimensionality < 0.15).
pub fn detect_collapse(bindings: &[Binding]) -> CollapseVerdict {
    detect_collapse_with_thresholds(
        bindings,
        DEFAULT_COLLAPSE_ENTROPY_THRESHOLD,
        DEFAULT_COLLAPSE_DIMENSIONALITY_THRESHOLD,
    )
}

pub fn detect_collapse_with_thresholds(
    bindings: &[Binding],
    entropy_threshold: f64,
    dimensionality_threshold: f64,
) -> CollapseVerdict {
    let entropy_score = compute_signal_entropy_score(bindings);
    let dimensionality_index = compute_topology_dimensionality_index(bindings);

    if bindings.is_empty() {
        return CollapseVerdict {
            severe: false,
            reason: None,
            entropy_score,
            dimensionality_index,
        };
    }

    let mut reasons = Vec::new();
    if entropy_score < entropy_threshold {
        reasons.push(format!(
            "signal entropy score {entropy_score:.3} is below {entropy_threshold}"
        ));
    }
    if dimensionality_index < dimensionality_threshold {
        reasons.push(format!(
            "topology dimensionality index {dimensionality_index:.3} is below {dimensionality_threshold}"
        ));
    }

    CollapseVerdict {
        severe: !reasons.is_empty(),
        reason: (!reasons.is_empty()).then(|| reasons.join("; ")),
        entropy_score,
        dimensionality_index,
    }
}

/// Mean effective vector per entity kind.
pub fn mean_vectors_by_kind(bindings: &[Binding]) -> BTreeMap<EntityKind, EffectiveVector> {
    let mut sums: BTreeMap<EntityKind, ([f64; AuthoritySignal::COUNT], usize)> = BTreeMap::new();
    for binding in bindings {
        let entry = sums
            .entry(binding.entity_kind)
            .or_insert(([0.0; AuthoritySignal::COUNT], 0));
        for (slot, w) in entry.0.iter_mut().zip(binding.effective().weights()) {
            *slot += w;
        }
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(kind, (totals, count))| {
            let mean = totals.map(|t| t / count as f64);
            (kind, EffectiveVector::from_weights(mean))
        })
        .collect()
}

/// Squared Euclidean distance from the kind's mean. Higher = more distinctive.
pub fn entity_entropy_contribution(vector: &EffectiveVector, kind_mean: &EffectiveVector) -> f64 {
    vector.squared_distance(kind_mean)
}

/// Entropy contribution of every binding, keyed by entity.
pub fn entropy_contributions(bindings: &[Binding]) -> HashMap<EntityKey, f64> {
    let means = mean_vectors_by_kind(bindings);
    bindings
        .iter()
        .filter_map(|binding| {
            let mean = means.get(&binding.entity_kind)?;
            Some((
                binding.key(),
                entity_entropy_contribution(&binding.effective(), mean),
            ))
        })
        .collect()
}
