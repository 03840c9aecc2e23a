//! # authority-topology
//!
//! Pure analytics and post-processing over a batch of bindings:
//! canonical vector signatures, the anti-collapse differentiation engine,
//! and entropy / dimensionality / variance diagnostics. Nothing here holds
//! state; every function is safe to call concurrently.

pub mod differentiation;
pub mod entropy;
pub mod signature;

pub use differentiation::{
    detect_flattening, differentiate_topology, find_duplicate_signatures,
    find_low_entropy_clusters, SignatureCluster,
};
pub use entropy::{
    compute_signal_entropy_score, compute_topology_dimensionality_index, detect_collapse,
    detect_collapse_with_thresholds, entity_entropy_contribution, entropy_contributions,
    mean_vectors_by_kind, variance_distribution, CollapseVerdict, SignalMoments,
    VarianceReport,
};
pub use signature::{binding_signature, vector_signature};
