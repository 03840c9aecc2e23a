//! Kind-specific link templates.

use authority_core::EntityKind;
use authority_graph::GraphNode;

/// Link to one entity under `base`.
pub fn href_for(kind: EntityKind, id: &str, slug: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    match kind {
        EntityKind::Record => format!("{base}/publicrecord/{slug}"),
        EntityKind::Framework => format!("{base}/brief#doctrine"),
        EntityKind::Claim => format!("{base}/brief#claim-{id}"),
        EntityKind::CaseStudy => format!("{base}/casestudies/{slug}"),
        EntityKind::Book => format!("{base}/books/{slug}"),
        EntityKind::BriefNode => format!("{base}/brief#{id}"),
    }
}

pub fn build_href(node: &GraphNode, base: &str) -> String {
    href_for(node.entity_kind(), node.id(), node.slug(), base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_per_kind() {
        assert_eq!(
            href_for(EntityKind::Record, "r-1", "budget-act", "/en"),
            "/en/publicrecord/budget-act"
        );
        assert_eq!(href_for(EntityKind::Framework, "fw", "x", "/en"), "/en/brief#doctrine");
        assert_eq!(href_for(EntityKind::Claim, "c-1", "x", ""), "/brief#claim-c-1");
        assert_eq!(
            href_for(EntityKind::CaseStudy, "cs", "port", "/fr/"),
            "/fr/casestudies/port"
        );
    }
}
