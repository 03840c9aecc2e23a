//! Top-level configuration aggregating all sub-configs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    FormattingConfig, ObservabilityConfig, RetrievalConfig, TopologyConfig, ValidationConfig,
};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorityConfig {
    pub retrieval: RetrievalConfig,
    pub topology: TopologyConfig,
    pub validation: ValidationConfig,
    pub formatting: FormattingConfig,
    pub observability: ObservabilityConfig,
}

impl AuthorityConfig {
    /// Load from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retrieval.max_per_type == 0 {
            return Err(invalid("retrieval.max_per_type", "must be greater than 0"));
        }
        let unit_fields = [
            ("retrieval.default_priority_weight", self.retrieval.default_priority_weight),
            ("topology.collapse_entropy_threshold", self.topology.collapse_entropy_threshold),
            (
                "topology.collapse_dimensionality_threshold",
                self.topology.collapse_dimensionality_threshold,
            ),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if self.topology.flattening_variance_threshold < 0.0 {
            return Err(invalid(
                "topology.flattening_variance_threshold",
                "must not be negative",
            ));
        }
        if self.topology.redundancy_cluster_size < 2 {
            return Err(invalid("topology.redundancy_cluster_size", "must be at least 2"));
        }
        if self.validation.min_active_signals > crate::AuthoritySignal::COUNT {
            return Err(invalid(
                "validation.min_active_signals",
                "cannot exceed the number of authority signals",
            ));
        }
        if self.validation.overconcentration_ratio <= 1.0 {
            return Err(invalid(
                "validation.overconcentration_ratio",
                "must be greater than 1.0",
            ));
        }
        if !(0.0..1.0).contains(&self.validation.starvation_ratio) {
            return Err(invalid(
                "validation.starvation_ratio",
                "must be in [0.0, 1.0)",
            ));
        }
        if let Err(message) = crate::tracing_setup::parse_filter(&self.observability.log_level) {
            return Err(invalid("observability.log_level", &message));
        }
        for context in self.formatting.priorities.keys() {
            self.formatting.priorities_for(context)?;
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
