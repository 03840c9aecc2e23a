//! Compiled defaults for every config section.

pub const DEFAULT_MAX_PER_TYPE: usize = 10;
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 0.5;

pub const DEFAULT_COLLAPSE_ENTROPY_THRESHOLD: f64 = 0.12;
pub const DEFAULT_COLLAPSE_DIMENSIONALITY_THRESHOLD: f64 = 0.15;
pub const DEFAULT_REDUNDANCY_CLUSTER_SIZE: usize = 4;
pub const DEFAULT_FLATTENING_VARIANCE_THRESHOLD: f64 = 0.001;

pub const DEFAULT_MIN_ACTIVE_SIGNALS: usize = 1;
pub const DEFAULT_OVERCONCENTRATION_RATIO: f64 = 2.0;
pub const DEFAULT_STARVATION_RATIO: f64 = 0.5;

pub const DEFAULT_LOG_LEVEL: &str = "info";
