//! Structured tracing: subscriber installation and span macros per operation.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::ConfigError;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `config.log_level`. Calling this when a subscriber
/// is already installed is a no-op.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.log_level)
            .map_err(|message| ConfigError::TracingInit { message })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    // try_init fails only when a global subscriber already exists.
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    Ok(())
}

/// Parse a filter directive string such as `info` or `authority_graph=debug`.
pub fn parse_filter(directives: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(directives).map_err(|e| e.to_string())
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($intent:expr, $context:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::names::RETRIEVAL,
            intent = %$intent,
            evaluator_context = ?$context
        )
    };
}

/// Create a graph build span.
#[macro_export]
macro_rules! graph_build_span {
    ($entity_count:expr) => {
        tracing::info_span!($crate::tracing_setup::names::GRAPH_BUILD, entity_count = $entity_count)
    };
}

/// Create a topology diagnostics span.
#[macro_export]
macro_rules! topology_span {
    ($binding_count:expr) => {
        tracing::info_span!($crate::tracing_setup::names::TOPOLOGY, binding_count = $binding_count)
    };
}

/// Span names, shared by the span macros and by subscribers that filter on them.
pub mod names {
    pub const RETRIEVAL: &str = "authority.retrieval";
    pub const GRAPH_BUILD: &str = "authority.graph_build";
    pub const TOPOLOGY: &str = "authority.topology";
}
