//! The signal-and-entropy ranking rule.
//!
//! Keys, in order: entropy contribution (desc, 0 when absent), total
//! effective weight across all five signals (desc), id (asc). The id
//! tiebreak makes this a strict total order over distinct ids.

use std::cmp::Ordering;

use authority_graph::GraphNode;

#[derive(Debug, Clone, Copy)]
struct RankKey<'a> {
    contribution: f64,
    weight_total: f64,
    id: &'a str,
}

impl<'a> RankKey<'a> {
    fn of(node: &'a GraphNode, active_context: Option<&str>) -> Self {
        Self {
            contribution: node.entropy_contribution(),
            weight_total: node
                .effective_vector(active_context)
                .map(|v| v.total())
                .unwrap_or(0.0),
            id: node.id(),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        other
            .contribution
            .total_cmp(&self.contribution)
            .then_with(|| other.weight_total.total_cmp(&self.weight_total))
            .then_with(|| self.id.cmp(other.id))
    }
}

/// Compare two nodes under the ranking rule.
pub fn by_signal_and_entropy(a: &GraphNode, b: &GraphNode, active_context: Option<&str>) -> Ordering {
    RankKey::of(a, active_context).compare(&RankKey::of(b, active_context))
}

/// Sort `nodes` by the ranking rule.
pub fn rank_nodes<'g>(
    nodes: impl IntoIterator<Item = &'g GraphNode>,
    active_context: Option<&str>,
) -> Vec<&'g GraphNode> {
    let mut keyed: Vec<(RankKey<'g>, &'g GraphNode)> = nodes
        .into_iter()
        .map(|n| (RankKey::of(n, active_context), n))
        .collect();
    keyed.sort_by(|a, b| a.0.compare(&b.0));
    keyed.into_iter().map(|(_, n)| n).collect()
}
