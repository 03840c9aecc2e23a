use std::collections::HashMap;

use serde::Serialize;

use authority_core::{AuthorityResult, EntityKind};

use crate::edge::GraphEdge;
use crate::indexed::IndexedGraph;
use crate::node::GraphNode;

/// `{nodes, edges}`, deterministically sorted.
///
/// Nodes are ordered by kind rank then id; edges by from, to, kind. Ids are
/// unique within a kind only, so kind-aware lookups go through [`node_of`].
///
/// [`node_of`]: EntityGraph::node_of
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntityGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(skip)]
    by_id: HashMap<String, Vec<usize>>,
    #[serde(skip)]
    indexed: IndexedGraph,
}

impl EntityGraph {
    /// Sort, de-duplicate edges, and index.
    pub fn new(mut nodes: Vec<GraphNode>, mut edges: Vec<GraphEdge>) -> Self {
        nodes.sort_by(|a, b| {
            a.kind_rank()
                .cmp(&b.kind_rank())
                .then_with(|| a.id().cmp(b.id()))
        });
        edges.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        edges.dedup_by(|a, b| a.sort_key() == b.sort_key());

        let mut by_id: HashMap<String, Vec<usize>> = HashMap::with_capacity(nodes.len());
        let mut indexed = IndexedGraph::new();
        for (i, node) in nodes.iter().enumerate() {
            by_id.entry(node.id().to_string()).or_default().push(i);
            indexed.ensure_node(node.entity_kind(), node.id());
        }
        for edge in &edges {
            indexed.add_edge(edge);
        }

        Self {
            nodes,
            edges,
            by_id,
            indexed,
        }
    }

    /// First node with this id in graph order, whatever its kind.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.positions(id).first().and_then(|&i| self.nodes.get(i))
    }

    /// The node of `kind` with this id. Duplicates within a kind resolve to the first.
    pub fn node_of(&self, kind: EntityKind, id: &str) -> Option<&GraphNode> {
        self.positions(id)
            .iter()
            .filter_map(|&i| self.nodes.get(i))
            .find(|n| n.entity_kind() == kind)
    }

    fn positions(&self, id: &str) -> &[usize] {
        self.by_id.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Outbound neighbor nodes of the `kind` node `id`, in id order. Unknown
    /// nodes yield nothing.
    pub fn outbound_neighbors(&self, kind: EntityKind, id: &str) -> Vec<&GraphNode> {
        self.indexed
            .outbound(kind, id)
            .into_iter()
            .filter_map(|(k, n)| self.node_of(k, n))
            .collect()
    }

    pub fn indexed(&self) -> &IndexedGraph {
        &self.indexed
    }

    /// blake3 over the canonical JSON encoding.
    pub fn fingerprint(&self) -> AuthorityResult<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
