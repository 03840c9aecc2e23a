//! # authority-registry
//!
//! The canonical `(entityKind, entityId) → signal vector` lookup table for one
//! logical unit of work. A [`SignalRegistry`] is an owned value handed to
//! whoever needs lookups; there is no process-wide instance.

pub mod registry;

pub use registry::SignalRegistry;
