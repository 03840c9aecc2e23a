//! Binding coverage and density checks.

use tracing::warn;

use authority_core::config::ValidationConfig;
use authority_core::errors::ValidationError;
use authority_core::{AuthorityResult, ContentSnapshot};
use authority_registry::SignalRegistry;

/// One message per content entity with no registered binding.
pub fn missing_bindings(content: &ContentSnapshot, registry: &SignalRegistry) -> Vec<String> {
    content
        .entity_keys()
        .into_iter()
        .filter(|key| !registry.contains(key))
        .map(|key| format!("{key}: no signal binding registered"))
        .collect()
}

/// One message per binding with fewer than `min_active_signals` non-zero
/// effective weights.
pub fn low_density_bindings(registry: &SignalRegistry, min_active_signals: usize) -> Vec<String> {
    registry
        .bindings()
        .iter()
        .filter_map(|binding| {
            let active = binding.effective().iter().filter(|(_, w)| *w > 0.0).count();
            (active < min_active_signals).then(|| {
                format!(
                    "{}: {active} active signal(s), minimum is {min_active_signals}",
                    binding.key()
                )
            })
        })
        .collect()
}

/// Fail with every coverage and density problem at once.
pub fn validate_bindings(
    content: &ContentSnapshot,
    registry: &SignalRegistry,
    config: &ValidationConfig,
) -> AuthorityResult<()> {
    let mut details = missing_bindings(content, registry);
    details.extend(low_density_bindings(registry, config.min_active_signals));

    match ValidationError::from_binding_errors(details) {
        None => Ok(()),
        Some(err) => {
            warn!(%err, "binding validation failed");
            Err(err.into())
        }
    }
}
