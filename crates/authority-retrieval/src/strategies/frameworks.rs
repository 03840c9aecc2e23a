use tracing::debug;

use authority_core::ResultBucket;
use authority_graph::GraphNode;

use super::Collector;

/// Top frameworks, then each one's declared related entities.
///
/// `summarize_framework` pulls case studies too; `extract_decision_model`
/// stops at claims and records.
pub(crate) fn summarize_framework(c: &mut Collector<'_>, with_case_studies: bool) {
    let frameworks = c.top(ResultBucket::Frameworks);
    debug!(frameworks = frameworks.len(), with_case_studies, "ranked frameworks");

    for node in &frameworks {
        c.add(ResultBucket::Frameworks, node);
    }
    for node in frameworks {
        let GraphNode::Framework(fw) = node else {
            continue;
        };
        c.add_ids(ResultBucket::Claims, &fw.related_claims);
        c.add_ids(ResultBucket::Records, &fw.related_records);
        if with_case_studies {
            c.add_ids(ResultBucket::CaseStudies, &fw.related_case_studies);
        }
    }
}
