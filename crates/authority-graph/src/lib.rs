//! # authority-graph
//!
//! Assembles typed nodes and derived edges from content collections,
//! attaching signal vectors and entropy contributions supplied by the caller.
//! Builds are deterministic: the same content always yields the same bytes.

pub mod builder;
pub mod cache;
pub mod edge;
pub mod graph;
pub mod indexed;
pub mod node;
pub mod similarity;

pub use builder::{build_entity_graph, SignalResolvers};
pub use cache::{BuildCache, GraphBuildCache};
pub use edge::{EdgeKind, GraphEdge};
pub use graph::EntityGraph;
pub use indexed::IndexedGraph;
pub use node::{
    BookNode, CaseStudyNode, ClaimNode, FrameworkNode, GraphNode, NodeHeader, RecordNode,
};
