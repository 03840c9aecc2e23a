//! Configuration for the authority-signal engine.
//! TOML-based; every section falls back to compiled defaults.

pub mod authority_config;
pub mod defaults;
pub mod formatting_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod topology_config;
pub mod validation_config;

pub use authority_config::AuthorityConfig;
pub use formatting_config::FormattingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use topology_config::TopologyConfig;
pub use validation_config::ValidationConfig;
