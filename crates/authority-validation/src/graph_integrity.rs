//! Graph integrity: orphan nodes, dangling edge endpoints, and edges whose
//! endpoints exist only under kinds the edge kind cannot join.
//!
//! The builder never emits a dangling edge, so these checks matter for
//! graphs assembled by hand or deserialized from elsewhere.

use authority_core::errors::ValidationError;
use authority_core::{AuthorityResult, EntityKind};
use authority_graph::{EntityGraph, GraphEdge};

pub fn graph_integrity_issues(graph: &EntityGraph) -> Vec<String> {
    let mut issues: Vec<String> = graph
        .indexed()
        .orphans()
        .into_iter()
        .map(|(kind, id)| format!("orphan {kind} node {id}: no incident edges"))
        .collect();

    for edge in &graph.edges {
        let mut dangling = false;
        for (end, id) in [("source", &edge.from_id), ("target", &edge.to_id)] {
            if !graph.contains(id) {
                dangling = true;
                issues.push(format!(
                    "dangling {} edge {} -> {}: {end} {id} does not exist",
                    edge.kind.as_str(),
                    edge.from_id,
                    edge.to_id
                ));
            }
        }
        if !dangling && !resolves(graph, edge) {
            issues.push(format!(
                "mistyped {} edge {} -> {}: no endpoint kinds it can join",
                edge.kind.as_str(),
                edge.from_id,
                edge.to_id
            ));
        }
    }
    issues
}

fn resolves(graph: &EntityGraph, edge: &GraphEdge) -> bool {
    let kinds_of = |id: &str| -> Vec<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .filter(|kind| graph.node_of(*kind, id).is_some())
            .collect()
    };
    let targets = kinds_of(&edge.to_id);
    kinds_of(&edge.from_id)
        .into_iter()
        .any(|from| targets.iter().any(|to| edge.kind.joins(from, *to)))
}

pub fn check_graph_integrity(graph: &EntityGraph) -> AuthorityResult<()> {
    let details = graph_integrity_issues(graph);
    if details.is_empty() {
        return Ok(());
    }
    Err(ValidationError::GraphIntegrity {
        count: details.len(),
        details,
    }
    .into())
}
