use tracing::debug;

use authority_core::{EntityKind, ResultBucket};
use authority_graph::GraphNode;

use super::Collector;

/// Top claims and their referenced records.
///
/// With `follow_records` (`trace_evidence_chain`), each collected record's
/// outbound neighbors are pulled in as case studies.
pub(crate) fn claims_with_evidence(c: &mut Collector<'_>, follow_records: bool) {
    let claims = c.top(ResultBucket::Claims);
    debug!(claims = claims.len(), follow_records, "ranked claims");

    for node in &claims {
        c.add(ResultBucket::Claims, node);
    }
    for node in claims {
        if let GraphNode::Claim(claim) = node {
            c.add_ids(ResultBucket::Records, &claim.record_ids);
        }
    }

    if !follow_records {
        return;
    }
    let graph = c.graph;
    for record_id in c.ids(ResultBucket::Records) {
        for neighbor in graph.outbound_neighbors(EntityKind::Record, &record_id) {
            c.add(ResultBucket::CaseStudies, neighbor);
        }
    }
}
