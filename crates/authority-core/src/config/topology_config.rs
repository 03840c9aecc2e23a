use serde::{Deserialize, Serialize};

use super::defaults;

/// Differentiation and collapse-detection thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Run the differentiation engine before registering bindings.
    pub differentiate: bool,
    /// Entropy score below which the topology counts as collapsed.
    pub collapse_entropy_threshold: f64,
    /// Dimensionality index below which the topology counts as collapsed.
    pub collapse_dimensionality_threshold: f64,
    /// Identical-signature cluster size reported as redundant.
    pub redundancy_cluster_size: usize,
    /// Average per-signal variance below which the batch is flattened.
    pub flattening_variance_threshold: f64,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            differentiate: true,
            collapse_entropy_threshold: defaults::DEFAULT_COLLAPSE_ENTROPY_THRESHOLD,
            collapse_dimensionality_threshold: defaults::DEFAULT_COLLAPSE_DIMENSIONALITY_THRESHOLD,
            redundancy_cluster_size: defaults::DEFAULT_REDUNDANCY_CLUSTER_SIZE,
            flattening_variance_threshold: defaults::DEFAULT_FLATTENING_VARIANCE_THRESHOLD,
        }
    }
}
