//! Data-integrity warnings: coverage imbalance and redundancy.
//!
//! Informational only. Each message names the signal or entity keys an
//! author would need to touch.

use tracing::warn;

use authority_core::config::{TopologyConfig, ValidationConfig};
use authority_core::AuthoritySignal;
use authority_registry::SignalRegistry;
use authority_topology::{detect_flattening, find_low_entropy_clusters};

pub fn integrity_warnings(
    registry: &SignalRegistry,
    topology: &TopologyConfig,
    validation: &ValidationConfig,
) -> Vec<String> {
    let mut warnings = coverage_warnings(registry, validation);

    let bindings = registry.bindings();
    for cluster in find_low_entropy_clusters(&bindings, topology.redundancy_cluster_size) {
        let members: Vec<String> = cluster.members.iter().map(ToString::to_string).collect();
        warnings.push(format!(
            "redundancy cluster: {} entities share signature {} ({})",
            cluster.len(),
            cluster.signature,
            members.join(", ")
        ));
    }

    if detect_flattening(&bindings, topology.flattening_variance_threshold) {
        warnings.push(format!(
            "flattened topology: mean per-signal variance is below {}",
            topology.flattening_variance_threshold
        ));
    }

    for w in &warnings {
        warn!(warning = %w, "signal integrity");
    }
    warnings
}

/// Signals covered far above or below the mean coverage.
fn coverage_warnings(registry: &SignalRegistry, config: &ValidationConfig) -> Vec<String> {
    if registry.is_empty() {
        return Vec::new();
    }
    let coverage = registry.aggregate_coverage();
    let mean = coverage.total() / AuthoritySignal::COUNT as f64;
    if mean == 0.0 {
        return Vec::new();
    }

    let mut warnings = Vec::new();
    for (signal, total) in coverage.iter() {
        let ratio = total / mean;
        if ratio > config.overconcentration_ratio {
            warnings.push(format!(
                "signal {signal} is overconcentrated: coverage {total:.2} is {ratio:.2}x the mean {mean:.2}"
            ));
        } else if ratio < config.starvation_ratio {
            warnings.push(format!(
                "signal {signal} is starved: coverage {total:.2} is {ratio:.2}x the mean {mean:.2}"
            ));
        }
    }
    warnings
}
