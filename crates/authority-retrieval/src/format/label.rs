use authority_core::EntityKind;
use authority_graph::GraphNode;

fn kind_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Claim => "Claim",
        EntityKind::Record => "Record",
        EntityKind::CaseStudy => "Case study",
        EntityKind::Book => "Book",
        EntityKind::BriefNode => "Brief node",
        EntityKind::Framework => "Framework",
    }
}

/// Title when present, else `"<Kind> <id>"`.
pub fn default_label(node: &GraphNode) -> String {
    let title = node.title().trim();
    if title.is_empty() {
        format!("{} {}", kind_label(node.entity_kind()), node.id())
    } else {
        title.to_string()
    }
}
