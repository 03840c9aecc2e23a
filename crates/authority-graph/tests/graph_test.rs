use std::collections::BTreeMap;

use authority_core::content::{BookEntry, ClaimEntry, PublicRecordEntry};
use authority_core::{
    AuthoritySignal, Binding, ContentSnapshot, EntityKey, EntityKind, SignalWeightVector,
};
use authority_graph::*;
use test_fixtures::{load_fixture, BINDINGS, CONTENT};

fn content() -> ContentSnapshot {
    load_fixture(CONTENT)
}

fn vectors() -> BTreeMap<EntityKey, SignalWeightVector> {
    let bindings: Vec<Binding> = load_fixture(BINDINGS);
    bindings.into_iter().map(|b| (b.key(), b.vector)).collect()
}

fn build(content: &ContentSnapshot) -> EntityGraph {
    let vectors = vectors();
    let lookup = |kind: EntityKind, id: &str| {
        vectors
            .get(&EntityKey {
                kind,
                id: id.to_string(),
            })
            .cloned()
    };
    let variance = |_: EntityKind, id: &str| Some(id.len() as f64 / 100.0);
    build_entity_graph(
        content,
        &SignalResolvers {
            signal_vector: &lookup,
            signal_variance: Some(&variance),
        },
    )
}

#[test]
fn corpus_graph_has_one_node_per_entity() {
    let graph = build(&content());
    assert_eq!(graph.nodes.len(), 19);
    assert!(graph.contains("civil-service-academy"), "slug stands in for a missing id");
    assert!(graph.indexed().orphans().is_empty());
}

#[test]
fn nodes_are_ordered_by_kind_then_id() {
    let graph = build(&content());
    let ids: Vec<&str> = graph.nodes.iter().map(GraphNode::id).collect();
    assert_eq!(
        ids,
        vec![
            "fw-adaptive-governance",
            "fw-systems-doctrine",
            "c-01",
            "c-02",
            "c-03",
            "c-04",
            "c-05",
            "civil-service-academy",
            "r-01",
            "r-02",
            "r-03",
            "r-04",
            "r-05",
            "r-06",
            "b-delivery",
            "b-statecraft",
            "cs-digital-registry",
            "cs-port-reform",
            "cs-treasury-turnaround",
        ]
    );
}

#[test]
fn dangling_references_produce_no_edges() {
    let graph = build(&content());
    assert_eq!(graph.edges.len(), 28);
    for missing in ["r-ghost", "c-missing", "c-06", "r-missing"] {
        assert!(
            graph
                .edges
                .iter()
                .all(|e| e.from_id != missing && e.to_id != missing),
            "edge touches {missing}"
        );
    }
    for edge in &graph.edges {
        assert!(graph.contains(&edge.from_id));
        assert!(graph.contains(&edge.to_id));
    }
}

#[test]
fn edge_kinds_follow_content_relations() {
    let graph = build(&content());
    let has = |from: &str, to: &str, kind: EdgeKind| {
        graph
            .edges
            .iter()
            .any(|e| e.from_id == from && e.to_id == to && e.kind == kind)
    };
    assert!(has("c-02", "r-03", EdgeKind::Supports));
    assert!(has("r-02", "cs-port-reform", EdgeKind::References));
    assert!(has("c-05", "cs-treasury-turnaround", EdgeKind::References));
    assert!(has("b-statecraft", "r-05", EdgeKind::References));
    assert!(has("cs-port-reform", "fw-adaptive-governance", EdgeKind::DerivesFrom));
    assert!(graph.edges.iter().all(|e| e.kind != EdgeKind::Verifies));
}

#[test]
fn edges_are_sorted_and_unique() {
    let graph = build(&content());
    let keys: Vec<(&str, &str, EdgeKind)> = graph
        .edges
        .iter()
        .map(|e| (e.from_id.as_str(), e.to_id.as_str(), e.kind))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(keys, sorted);
}

#[test]
fn identical_vectors_have_zero_edge_weight() {
    // c-02 and r-02 share a flat signature in the corpus.
    let graph = build(&content());
    let edge = graph
        .edges
        .iter()
        .find(|e| e.from_id == "c-02" && e.to_id == "r-02")
        .expect("supports edge");
    let weight = edge.weight.expect("both ends carry vectors");
    assert!(weight.abs() < 1e-12);
    for e in &graph.edges {
        if let Some(w) = e.weight {
            assert!((0.0..=1.0 + 1e-12).contains(&w));
        }
    }
}

#[test]
fn missing_vectors_leave_weight_unset() {
    let graph = build_entity_graph(&content(), &SignalResolvers::none());
    assert!(graph.edges.iter().all(|e| e.weight.is_none()));
    assert!(graph.nodes.iter().all(|n| n.header().signal_vector.is_none()));
    assert!(graph.nodes.iter().all(|n| n.entropy_contribution() == 0.0));
}

#[test]
fn resolvers_attach_vectors_and_contributions() {
    let graph = build(&content());
    let node = graph.node("c-01").expect("c-01");
    assert!(node.header().signal_vector.is_some());
    assert!((node.entropy_contribution() - 0.04).abs() < 1e-12);
    let investor = node.effective_vector(Some("investor")).expect("vector");
    assert_eq!(investor.get(AuthoritySignal::StrategicCognition), 0.8);
}

#[test]
fn build_is_deterministic() {
    let content = content();
    let a = build(&content);

    let mut shuffled = content.clone();
    shuffled.claims.reverse();
    shuffled.records.reverse();
    shuffled.frameworks.reverse();
    let b = build(&shuffled);

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
}

#[test]
fn empty_content_yields_empty_graph() {
    let graph = build_entity_graph(&ContentSnapshot::default(), &SignalResolvers::none());
    assert!(graph.is_empty());
    assert!(graph.edges.is_empty());
}

#[test]
fn outbound_neighbors_follow_edges() {
    let graph = build(&content());
    let ids: Vec<&str> = graph
        .outbound_neighbors(EntityKind::Record, "r-02")
        .into_iter()
        .map(GraphNode::id)
        .collect();
    assert_eq!(ids, vec!["cs-port-reform", "fw-adaptive-governance"]);
    assert!(graph.outbound_neighbors(EntityKind::Record, "nope").is_empty());
    assert!(graph.outbound_neighbors(EntityKind::Claim, "r-02").is_empty());
}

#[test]
fn a_record_and_a_book_may_share_a_slug() {
    let content = ContentSnapshot {
        claims: vec![ClaimEntry {
            id: Some("c1".into()),
            slug: "c1".into(),
            record_ids: vec!["annual-report".into()],
            ..Default::default()
        }],
        records: vec![PublicRecordEntry {
            slug: "annual-report".into(),
            title: "Annual Report (record)".into(),
            ..Default::default()
        }],
        books: vec![BookEntry {
            slug: "annual-report".into(),
            title: "Annual Report (book)".into(),
            proof_refs: vec!["annual-report".into()],
            ..Default::default()
        }],
        ..Default::default()
    };
    let graph = build_entity_graph(&content, &SignalResolvers::none());

    assert_eq!(graph.nodes.len(), 3);
    let kinds: Vec<EdgeKind> = graph.edges.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EdgeKind::References, EdgeKind::Supports]);

    let record = graph.node_of(EntityKind::Record, "annual-report").expect("record");
    let book = graph.node_of(EntityKind::Book, "annual-report").expect("book");
    assert_eq!(record.title(), "Annual Report (record)");
    assert_eq!(book.title(), "Annual Report (book)");
    assert!(graph.node_of(EntityKind::Claim, "annual-report").is_none());

    let cited: Vec<EntityKind> = graph
        .outbound_neighbors(EntityKind::Claim, "c1")
        .into_iter()
        .map(GraphNode::entity_kind)
        .collect();
    assert_eq!(cited, vec![EntityKind::Record]);
    assert_eq!(graph.indexed().node_count(), 3);
    assert_eq!(graph.indexed().edge_count(), 2);
    assert!(graph.indexed().orphans().is_empty());
}

#[test]
fn graph_serializes_with_kind_tags() {
    let graph = build(&content());
    let value = serde_json::to_value(&graph).unwrap();
    assert_eq!(value["nodes"][0]["kind"], "framework");
    assert_eq!(value["nodes"][0]["relatedClaims"][0], "c-01");
    assert!(value["edges"][0]["kind"].as_str().is_some());
}

#[test]
fn cache_reuses_the_first_build() {
    let cache = GraphBuildCache::new();
    let content = content();
    let first = cache.get_or_build(|| build(&content));
    let second = cache.get_or_build(|| EntityGraph::default());
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(second.nodes.len(), 19);
}
