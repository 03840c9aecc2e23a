//! # authority-core
//!
//! Foundation crate for the authority-signal engine.
//! Defines signals, weight vectors, bindings, content records, intents,
//! errors, config, constants, and tracing setup.

pub mod binding;
pub mod bucket;
pub mod config;
pub mod constants;
pub mod content;
pub mod errors;
pub mod intent;
pub mod signal;
pub mod tracing_setup;
pub mod vector;

// Re-export the most commonly used types at the crate root.
pub use binding::{Binding, EntityKey, EntityKind};
pub use bucket::{PriorityWeights, ResultBucket};
pub use config::AuthorityConfig;
pub use content::{ContentEntry, ContentSnapshot, ContentSource};
pub use errors::{AuthorityError, AuthorityResult};
pub use intent::QueryIntent;
pub use signal::{AuthoritySignal, EffectiveVector, SignalMap};
pub use vector::SignalWeightVector;
