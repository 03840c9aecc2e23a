use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval and formatting limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Cap on entries per result bucket.
    pub max_per_type: usize,
    /// Group weight used when a bucket has no configured priority.
    pub default_priority_weight: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_per_type: defaults::DEFAULT_MAX_PER_TYPE,
            default_priority_weight: defaults::DEFAULT_PRIORITY_WEIGHT,
        }
    }
}
