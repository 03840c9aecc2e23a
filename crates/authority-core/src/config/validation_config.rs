use serde::{Deserialize, Serialize};

use super::defaults;

/// Build-time binding validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum number of signals with a non-zero effective weight per binding.
    pub min_active_signals: usize,
    /// Coverage above `mean * ratio` is reported as overconcentrated.
    pub overconcentration_ratio: f64,
    /// Coverage below `mean * ratio` is reported as starved.
    pub starvation_ratio: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_active_signals: defaults::DEFAULT_MIN_ACTIVE_SIGNALS,
            overconcentration_ratio: defaults::DEFAULT_OVERCONCENTRATION_RATIO,
            starvation_ratio: defaults::DEFAULT_STARVATION_RATIO,
        }
    }
}
