//! petgraph view of an entity graph for traversal and integrity checks.
//!
//! Nodes are keyed by `(kind, id)`: a record and a book may share an id.
//! Edges carry bare ids, so each endpoint resolves to the nodes whose kinds
//! the edge kind can join.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use authority_core::EntityKind;

use crate::edge::{EdgeKind, GraphEdge};

/// Directed graph of `(kind, id)` nodes with an id → indices lookup.
#[derive(Debug, Clone, Default)]
pub struct IndexedGraph {
    pub graph: DiGraph<(EntityKind, String), EdgeKind>,
    index: HashMap<String, Vec<(EntityKind, NodeIndex)>>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node if absent; return its index.
    pub fn ensure_node(&mut self, kind: EntityKind, id: &str) -> NodeIndex {
        if let Some(idx) = self.get_node(kind, id) {
            return idx;
        }
        let idx = self.graph.add_node((kind, id.to_string()));
        self.index.entry(id.to_string()).or_default().push((kind, idx));
        idx
    }

    pub fn get_node(&self, kind: EntityKind, id: &str) -> Option<NodeIndex> {
        self.candidates(id)
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, idx)| *idx)
    }

    fn candidates(&self, id: &str) -> &[(EntityKind, NodeIndex)] {
        self.index.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Link every endpoint pair the edge kind can join. Returns false when
    /// no pair resolves.
    pub fn add_edge(&mut self, edge: &GraphEdge) -> bool {
        let pairs: Vec<(NodeIndex, NodeIndex)> = self
            .candidates(&edge.from_id)
            .iter()
            .flat_map(|&(from_kind, from)| {
                self.candidates(&edge.to_id)
                    .iter()
                    .filter(move |&&(to_kind, _)| edge.kind.joins(from_kind, to_kind))
                    .map(move |&(_, to)| (from, to))
            })
            .collect();
        for &(from, to) in &pairs {
            self.graph.add_edge(from, to, edge.kind);
        }
        !pairs.is_empty()
    }

    /// Outbound neighbors, sorted by id then kind and de-duplicated.
    pub fn outbound(&self, kind: EntityKind, id: &str) -> Vec<(EntityKind, &str)> {
        self.neighbors(kind, id, Direction::Outgoing)
    }

    pub fn inbound(&self, kind: EntityKind, id: &str) -> Vec<(EntityKind, &str)> {
        self.neighbors(kind, id, Direction::Incoming)
    }

    fn neighbors(&self, kind: EntityKind, id: &str, direction: Direction) -> Vec<(EntityKind, &str)> {
        let Some(idx) = self.get_node(kind, id) else {
            return Vec::new();
        };
        let mut keys: Vec<(EntityKind, &str)> = self
            .graph
            .neighbors_directed(idx, direction)
            .filter_map(|n| self.key(n))
            .collect();
        sort_keys(&mut keys);
        keys.dedup();
        keys
    }

    fn key(&self, idx: NodeIndex) -> Option<(EntityKind, &str)> {
        self.graph
            .node_weight(idx)
            .map(|(kind, id)| (*kind, id.as_str()))
    }

    /// Nodes with no incident edge, sorted by id then kind.
    pub fn orphans(&self) -> Vec<(EntityKind, &str)> {
        let mut keys: Vec<(EntityKind, &str)> = self
            .graph
            .node_indices()
            .filter(|idx| self.graph.neighbors_undirected(*idx).next().is_none())
            .filter_map(|idx| self.key(idx))
            .collect();
        sort_keys(&mut keys);
        keys
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn sort_keys(keys: &mut [(EntityKind, &str)]) {
    keys.sort_unstable_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(&b.0)));
}
