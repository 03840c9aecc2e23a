use authority_core::config::TopologyConfig;
use authority_core::errors::ValidationError;
use authority_core::{AuthorityResult, Binding};
use authority_topology::{detect_collapse_with_thresholds, CollapseVerdict};

/// Fail the build when the topology has collapsed. Returns the verdict otherwise.
pub fn collapse_gate(bindings: &[Binding], config: &TopologyConfig) -> AuthorityResult<CollapseVerdict> {
    let verdict = detect_collapse_with_thresholds(
        bindings,
        config.collapse_entropy_threshold,
        config.collapse_dimensionality_threshold,
    );
    if verdict.severe {
        return Err(ValidationError::TopologyCollapse {
            reason: verdict.reason.unwrap_or_default(),
        }
        .into());
    }
    Ok(verdict)
}
