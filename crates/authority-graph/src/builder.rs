//! Entity graph builder.
//!
//! One node per content item, then derived edges:
//! - claim → record (`supports`) for each of the claim's record ids
//! - record → case study (`references`) from a case study's proof refs
//! - claim → case study (`references`) from a case study's claim refs
//! - book → record (`references`) from a book's proof refs
//! - claim/record/case study → framework (`derivesFrom`) from a framework's related lists
//!
//! References resolve by `(kind, id)`. A reference with no node of the
//! expected kind adds no edge. Integrity is checked separately at build time.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, warn};

use authority_core::content::{
    BookEntry, CaseStudyEntry, ClaimEntry, ContentEntry, FrameworkEntry, PublicRecordEntry,
};
use authority_core::{graph_build_span, ContentSnapshot, EntityKind, SignalWeightVector};

use crate::edge::{EdgeKind, GraphEdge};
use crate::graph::EntityGraph;
use crate::node::{
    BookNode, CaseStudyNode, ClaimNode, FrameworkNode, GraphNode, NodeHeader, RecordNode,
};
use crate::similarity::cosine_distance;

/// Caller-supplied lookups for signal data.
pub struct SignalResolvers<'a> {
    pub signal_vector: &'a dyn Fn(EntityKind, &str) -> Option<SignalWeightVector>,
    /// Entropy contribution per entity.
    pub signal_variance: Option<&'a dyn Fn(EntityKind, &str) -> Option<f64>>,
}

fn no_vector(_: EntityKind, _: &str) -> Option<SignalWeightVector> {
    None
}

impl SignalResolvers<'static> {
    /// Resolvers that attach nothing.
    pub fn none() -> Self {
        SignalResolvers {
            signal_vector: &no_vector,
            signal_variance: None,
        }
    }
}

impl SignalResolvers<'_> {
    fn header<E: ContentEntry>(&self, entry: &E) -> NodeHeader {
        let id = entry.stable_id();
        NodeHeader {
            id: id.to_string(),
            slug: entry.slug().to_string(),
            title: entry.title().to_string(),
            summary: entry.summary().to_string(),
            signal_vector: (self.signal_vector)(E::KIND, id),
            signal_entropy_contribution: self
                .signal_variance
                .and_then(|variance| variance(E::KIND, id)),
        }
    }
}

/// Build a sorted entity graph from a content snapshot.
pub fn build_entity_graph(content: &ContentSnapshot, resolvers: &SignalResolvers<'_>) -> EntityGraph {
    let span = graph_build_span!(content.len());
    let _guard = span.enter();

    let mut nodes: Vec<GraphNode> = Vec::with_capacity(content.len());
    nodes.extend(content.frameworks.iter().map(|e| framework_node(e, resolvers)));
    nodes.extend(content.claims.iter().map(|e| claim_node(e, resolvers)));
    nodes.extend(content.records.iter().map(|e| record_node(e, resolvers)));
    nodes.extend(content.case_studies.iter().map(|e| case_study_node(e, resolvers)));
    nodes.extend(content.books.iter().map(|e| book_node(e, resolvers)));

    let mut by_key: HashMap<(EntityKind, &str), &GraphNode> = HashMap::with_capacity(nodes.len());
    for node in &nodes {
        match by_key.entry((node.entity_kind(), node.id())) {
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
            Entry::Occupied(_) => warn!(
                kind = %node.entity_kind(),
                id = node.id(),
                "duplicate node id within kind; edges resolve to the first entity"
            ),
        }
    }

    let mut edges = EdgeSet {
        nodes: &by_key,
        edges: Vec::new(),
        dropped: 0,
    };

    for claim in &content.claims {
        for record_id in &claim.record_ids {
            edges.add(claim.stable_id(), record_id, EdgeKind::Supports, EntityKind::Claim, EntityKind::Record);
        }
    }
    for cs in &content.case_studies {
        for record_id in &cs.proof_refs {
            edges.add(record_id, cs.stable_id(), EdgeKind::References, EntityKind::Record, EntityKind::CaseStudy);
        }
        for claim_id in &cs.claim_refs {
            edges.add(claim_id, cs.stable_id(), EdgeKind::References, EntityKind::Claim, EntityKind::CaseStudy);
        }
    }
    for book in &content.books {
        for record_id in &book.proof_refs {
            edges.add(book.stable_id(), record_id, EdgeKind::References, EntityKind::Book, EntityKind::Record);
        }
    }
    for fw in &content.frameworks {
        let related = [
            (&fw.related_claims, EntityKind::Claim),
            (&fw.related_records, EntityKind::Record),
            (&fw.related_case_studies, EntityKind::CaseStudy),
        ];
        for (ids, kind) in related {
            for id in ids {
                edges.add(id, fw.stable_id(), EdgeKind::DerivesFrom, kind, EntityKind::Framework);
            }
        }
    }

    let EdgeSet { edges, dropped, .. } = edges;
    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        dropped_references = dropped,
        "entity graph assembled"
    );

    EntityGraph::new(nodes, edges)
}

struct EdgeSet<'n> {
    nodes: &'n HashMap<(EntityKind, &'n str), &'n GraphNode>,
    edges: Vec<GraphEdge>,
    dropped: usize,
}

impl EdgeSet<'_> {
    fn add(&mut self, from: &str, to: &str, kind: EdgeKind, from_kind: EntityKind, to_kind: EntityKind) {
        let (Some(a), Some(b)) = (
            self.nodes.get(&(from_kind, from)),
            self.nodes.get(&(to_kind, to)),
        ) else {
            self.dropped += 1;
            return;
        };

        let weight = match (a.effective_vector(None), b.effective_vector(None)) {
            (Some(va), Some(vb)) => cosine_distance(&va, &vb),
            _ => None,
        };

        self.edges.push(GraphEdge {
            from_id: from.to_string(),
            to_id: to.to_string(),
            kind,
            weight,
        });
    }
}

fn framework_node(e: &FrameworkEntry, r: &SignalResolvers<'_>) -> GraphNode {
    GraphNode::Framework(FrameworkNode {
        header: r.header(e),
        related_claims: e.related_claims.clone(),
        related_records: e.related_records.clone(),
        related_case_studies: e.related_case_studies.clone(),
    })
}

fn claim_node(e: &ClaimEntry, r: &SignalResolvers<'_>) -> GraphNode {
    GraphNode::Claim(ClaimNode {
        header: r.header(e),
        record_ids: e.record_ids.clone(),
    })
}

fn record_node(e: &PublicRecordEntry, r: &SignalResolvers<'_>) -> GraphNode {
    GraphNode::Record(RecordNode { header: r.header(e) })
}

fn case_study_node(e: &CaseStudyEntry, r: &SignalResolvers<'_>) -> GraphNode {
    GraphNode::CaseStudy(CaseStudyNode {
        header: r.header(e),
        proof_refs: e.proof_refs.clone(),
        claim_refs: e.claim_refs.clone(),
    })
}

fn book_node(e: &BookEntry, r: &SignalResolvers<'_>) -> GraphNode {
    GraphNode::Book(BookNode {
        header: r.header(e),
        proof_refs: e.proof_refs.clone(),
    })
}
