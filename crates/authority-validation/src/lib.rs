//! # authority-validation
//!
//! Build-time checks over a binding list, its registry, and the entity
//! graph. Hard problems are aggregated into one [`ValidationError`];
//! data-integrity findings are warning strings and never fail a build.
//!
//! [`ValidationError`]: authority_core::errors::ValidationError

pub mod bindings;
pub mod gate;
pub mod graph_integrity;
pub mod integrity;
pub mod report;

pub use bindings::{low_density_bindings, missing_bindings, validate_bindings};
pub use gate::collapse_gate;
pub use graph_integrity::{check_graph_integrity, graph_integrity_issues};
pub use integrity::integrity_warnings;
pub use report::TopologyReport;
