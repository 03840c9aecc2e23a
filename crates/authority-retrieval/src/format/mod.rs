//! Response formatter: summary, count bullets, priority-ordered links.
//!
//! Never fails; an empty result yields the fixed empty summary and no links.

pub mod href;
pub mod label;

use serde::Serialize;
use tracing::debug;

use authority_core::config::defaults::DEFAULT_PRIORITY_WEIGHT;
use authority_core::constants::EMPTY_SUMMARY;
use authority_core::{EntityKind, PriorityWeights, ResultBucket};
use authority_graph::GraphNode;

use crate::result::RetrievalResult;

/// Presentation hooks supplied by the caller.
pub struct FormatHooks<'a> {
    /// Falls back to [`label::default_label`] when absent.
    pub label_resolver: Option<&'a dyn Fn(&GraphNode) -> String>,
    pub base_path: &'a str,
    /// Weights for the active evaluator context. When set, link groups are
    /// emitted heaviest first.
    pub priority_weights: Option<&'a PriorityWeights>,
    /// Weight of a bucket missing from `priority_weights`.
    pub default_priority_weight: f64,
}

impl Default for FormatHooks<'_> {
    fn default() -> Self {
        Self {
            label_resolver: None,
            base_path: "",
            priority_weights: None,
            default_priority_weight: DEFAULT_PRIORITY_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityLink {
    pub id: String,
    pub kind: EntityKind,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResponse {
    pub summary: String,
    pub bullets: Vec<String>,
    pub entity_links: Vec<EntityLink>,
}

struct LinkGroup {
    bucket: ResultBucket,
    weight: f64,
}

pub fn format_response(result: &RetrievalResult, hooks: &FormatHooks<'_>) -> FormattedResponse {
    let buckets = result.non_empty_buckets();

    let bullets: Vec<String> = buckets
        .iter()
        .map(|b| format!("{}: {} in scope.", b.heading(), result.bucket(*b).len()))
        .collect();

    let mut groups: Vec<LinkGroup> = buckets
        .iter()
        .map(|&bucket| LinkGroup {
            bucket,
            weight: hooks
                .priority_weights
                .and_then(|w| w.get(bucket))
                .unwrap_or(hooks.default_priority_weight),
        })
        .collect();
    if hooks.priority_weights.is_some() {
        // Stable: equal weights keep bucket order.
        groups.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    }
    debug!(
        order = ?groups.iter().map(|g| g.bucket.as_str()).collect::<Vec<_>>(),
        "link group order"
    );

    let mut entity_links = Vec::with_capacity(result.total());
    for group in &groups {
        entity_links.extend(result.bucket(group.bucket).iter().map(|entity| EntityLink {
            id: entity.id.clone(),
            kind: entity.node.entity_kind(),
            label: match hooks.label_resolver {
                Some(resolve) => resolve(&entity.node),
                None => label::default_label(&entity.node),
            },
            href: href::build_href(&entity.node, hooks.base_path),
        }));
    }

    let summary = match result.total() {
        0 => EMPTY_SUMMARY.to_string(),
        n => format!("Found {n} entities across {} categories.", buckets.len()),
    };

    FormattedResponse {
        summary,
        bullets,
        entity_links,
    }
}
