use serde::Serialize;
use tracing::info;

use authority_core::{topology_span, AuthorityConfig};
use authority_registry::SignalRegistry;
use authority_topology::{
    compute_signal_entropy_score, compute_topology_dimensionality_index,
    detect_collapse_with_thresholds, find_duplicate_signatures, variance_distribution,
    CollapseVerdict, VarianceReport,
};

use crate::integrity::integrity_warnings;

/// Every topology diagnostic for one registry, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyReport {
    pub entropy_score: f64,
    pub dimensionality_index: f64,
    pub variance: VarianceReport,
    pub collapse: CollapseVerdict,
    /// Signatures shared by two or more entities.
    pub duplicate_signatures: usize,
    pub warnings: Vec<String>,
}

impl TopologyReport {
    pub fn build(registry: &SignalRegistry, config: &AuthorityConfig) -> Self {
        let bindings = registry.bindings();
        let span = topology_span!(bindings.len());
        let _guard = span.enter();

        let report = Self {
            entropy_score: compute_signal_entropy_score(&bindings),
            dimensionality_index: compute_topology_dimensionality_index(&bindings),
            variance: variance_distribution(&bindings),
            collapse: detect_collapse_with_thresholds(
                &bindings,
                config.topology.collapse_entropy_threshold,
                config.topology.collapse_dimensionality_threshold,
            ),
            duplicate_signatures: find_duplicate_signatures(&bindings).len(),
            warnings: integrity_warnings(registry, &config.topology, &config.validation),
        };
        info!(
            entropy = report.entropy_score,
            dimensionality = report.dimensionality_index,
            severe = report.collapse.severe,
            warnings = report.warnings.len(),
            "topology report"
        );
        report
    }
}
