//! One deterministic strategy per query intent.

mod evidence;
mod explore;
mod frameworks;

pub(crate) use evidence::claims_with_evidence;
pub(crate) use explore::explore_domain;
pub(crate) use frameworks::summarize_framework;

use authority_core::ResultBucket;
use authority_graph::{EntityGraph, GraphNode};

use crate::engine::QueryOptions;
use crate::ranking::rank_nodes;
use crate::result::RetrievalResult;

/// Result under construction, with the graph and limits it draws from.
pub(crate) struct Collector<'a> {
    pub graph: &'a EntityGraph,
    pub context: Option<&'a str>,
    pub cap: usize,
    result: RetrievalResult,
}

impl<'a> Collector<'a> {
    pub fn new(graph: &'a EntityGraph, options: &'a QueryOptions) -> Self {
        Self {
            graph,
            context: options.evaluator_context.as_deref(),
            cap: options.max_per_type,
            result: RetrievalResult::default(),
        }
    }

    /// Nodes of one bucket, ranked, at most `cap`.
    pub fn top(&self, bucket: ResultBucket) -> Vec<&'a GraphNode> {
        let graph = self.graph;
        let candidates = graph.nodes.iter().filter(|n| n.bucket() == bucket);
        let mut ranked = rank_nodes(candidates, self.context);
        ranked.truncate(self.cap);
        ranked
    }

    pub fn add(&mut self, bucket: ResultBucket, node: &GraphNode) -> bool {
        self.result.insert(bucket, node, self.cap)
    }

    /// Look up each id as the bucket's kind and add it. Unknown ids are skipped.
    pub fn add_ids(&mut self, bucket: ResultBucket, ids: &[String]) {
        let graph = self.graph;
        let kind = bucket.entity_kind();
        for id in ids {
            if let Some(node) = graph.node_of(kind, id) {
                self.add(bucket, node);
            }
        }
    }

    pub fn ids(&self, bucket: ResultBucket) -> Vec<String> {
        self.result
            .bucket(bucket)
            .iter()
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn into_result(self) -> RetrievalResult {
        self.result
    }
}

/// Up to `cap` nodes per bucket in graph order, unranked.
pub(crate) fn graph_order(c: &mut Collector<'_>) {
    let graph = c.graph;
    for node in &graph.nodes {
        c.add(node.bucket(), node);
    }
}
