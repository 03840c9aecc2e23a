use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bucket::{PriorityWeights, ResultBucket};
use crate::errors::ConfigError;

/// Response formatting: link base path and per-evaluator bucket priorities.
///
/// ```toml
/// [formatting]
/// base_path = "/en"
///
/// [formatting.priorities.investor]
/// claims = 0.9
/// frameworks = 0.2
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    pub base_path: String,
    /// Evaluator context → bucket name → weight.
    pub priorities: BTreeMap<String, BTreeMap<String, f64>>,
}

impl FormattingConfig {
    /// Priority weights for one evaluator context, if configured.
    pub fn priorities_for(&self, context: &str) -> Result<Option<PriorityWeights>, ConfigError> {
        let Some(raw) = self.priorities.get(context) else {
            return Ok(None);
        };
        let mut weights = BTreeMap::new();
        for (name, weight) in raw {
            let bucket: ResultBucket = name.parse().map_err(|_| ConfigError::ValidationFailed {
                field: format!("formatting.priorities.{context}.{name}"),
                message: "unknown result bucket".to_string(),
            })?;
            weights.insert(bucket, *weight);
        }
        Ok(Some(PriorityWeights(weights)))
    }
}
