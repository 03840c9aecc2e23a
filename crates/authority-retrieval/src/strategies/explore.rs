use tracing::debug;

use crate::index::{SemanticIndex, SemanticIndexEntry};

use super::Collector;

struct Scored<'i> {
    matched: bool,
    weight_total: f64,
    contribution: f64,
    entry: &'i SemanticIndexEntry,
}

/// Rank the text index, take `2 × cap` entries, bucket them by type.
///
/// Sort keys: literal match of `text` (case-insensitive), effective weight
/// total, entropy contribution, id. An empty `text` matches nothing.
pub(crate) fn explore_domain(c: &mut Collector<'_>, index: &SemanticIndex, text: &str) {
    let needle = text.trim().to_lowercase();
    let mut scored: Vec<Scored<'_>> = index
        .entries()
        .iter()
        .map(|entry| Scored {
            matched: !needle.is_empty() && entry.text.to_lowercase().contains(&needle),
            weight_total: entry
                .signal_vector
                .as_ref()
                .map(|v| v.resolve_effective(c.context).total())
                .unwrap_or(0.0),
            contribution: entry.entropy_contribution.unwrap_or(0.0),
            entry,
        })
        .collect();

    scored.sort_by(|a, b| {
        b.matched
            .cmp(&a.matched)
            .then_with(|| b.weight_total.total_cmp(&a.weight_total))
            .then_with(|| b.contribution.total_cmp(&a.contribution))
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });

    let take = c.cap.saturating_mul(2);
    debug!(
        indexed = scored.len(),
        matched = scored.iter().filter(|s| s.matched).count(),
        take,
        "ranked index entries"
    );

    let graph = c.graph;
    for s in scored.into_iter().take(take) {
        if let Some(node) = graph.node_of(s.entry.kind, &s.entry.id) {
            c.add(node.bucket(), node);
        }
    }
}
