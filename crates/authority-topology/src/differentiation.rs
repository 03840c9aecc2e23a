//! Topology differentiation: nudge identical-signature bindings apart.
//!
//! Clusters of bindings sharing one signature get a small, index-dependent
//! `secondary` weight on an under-used signal and a `tertiary` weight on the
//! dominant one. `primary`, `negative` and `context_override` are never
//! touched, so doctrine is preserved and no weight can go negative.
//!
//! The nudge depends on input position, not content: run it exactly once per
//! canonical binding list. Re-running it on its own output is not a fixed point.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use authority_core::constants::{
    SECONDARY_NUDGE_CAP, SECONDARY_NUDGE_STEP, TERTIARY_NUDGE_CAP, TERTIARY_NUDGE_STEP,
};
use authority_core::{AuthoritySignal, Binding, EntityKey};

use crate::entropy::variance_distribution;
use crate::signature::binding_signature;

/// Bindings sharing one signature, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureCluster {
    pub signature: String,
    pub members: Vec<EntityKey>,
}

impl SignatureCluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group binding indices by signature, clusters ordered by first appearance.
fn group_by_signature(bindings: &[Binding]) -> Vec<(String, Vec<usize>)> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (i, binding) in bindings.iter().enumerate() {
        let sig = binding_signature(binding);
        match position.get(&sig) {
            Some(&g) => groups[g].1.push(i),
            None => {
                position.insert(sig.clone(), groups.len());
                groups.push((sig, vec![i]));
            }
        }
    }
    groups
}

fn clusters_at_least(bindings: &[Binding], min_size: usize) -> Vec<SignatureCluster> {
    group_by_signature(bindings)
        .into_iter()
        .filter(|(_, members)| members.len() >= min_size)
        .map(|(signature, members)| SignatureCluster {
            signature,
            members: members.into_iter().map(|i| bindings[i].key()).collect(),
        })
        .collect()
}

/// Every signature shared by two or more bindings.
pub fn find_duplicate_signatures(bindings: &[Binding]) -> Vec<SignatureCluster> {
    clusters_at_least(bindings, 2)
}

/// Clusters whose size is at or above `size_threshold`.
pub fn find_low_entropy_clusters(bindings: &[Binding], size_threshold: usize) -> Vec<SignatureCluster> {
    clusters_at_least(bindings, size_threshold.max(1))
}

/// True when the batch's mean per-signal variance is below `variance_threshold`.
///
/// Batches of fewer than two bindings have no spread to measure and are
/// never reported as flattened.
pub fn detect_flattening(bindings: &[Binding], variance_threshold: f64) -> bool {
    if bindings.len() < 2 {
        return false;
    }
    variance_distribution(bindings).overall_variance < variance_threshold
}

/// Return a new binding list, same order and keys, with duplicate-signature
/// clusters differentiated through `secondary`/`tertiary`.
pub fn differentiate_topology(bindings: &[Binding]) -> Vec<Binding> {
    let mut out = bindings.to_vec();

    for (signature, members) in group_by_signature(bindings) {
        if members.len() < 2 {
            continue;
        }
        debug!(%signature, size = members.len(), "differentiating signature cluster");

        for (cluster_index, &binding_index) in members.iter().enumerate() {
            let binding = &mut out[binding_index];
            let signal_order = binding.effective().ascending_signals();
            let step = (cluster_index + 1) as f64;

            let under_used = signal_order[cluster_index % AuthoritySignal::COUNT];
            binding
                .vector
                .set_secondary(under_used, (SECONDARY_NUDGE_STEP * step).min(SECONDARY_NUDGE_CAP));

            let dominant = signal_order[AuthoritySignal::COUNT - 1];
            binding
                .vector
                .set_tertiary(dominant, (TERTIARY_NUDGE_STEP * step).min(TERTIARY_NUDGE_CAP));
        }
    }

    out
}
