//! Property tests for retrieval caps, de-duplication, and determinism.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use authority_core::content::{
    BookEntry, CaseStudyEntry, ClaimEntry, FrameworkEntry, PublicRecordEntry,
};
use authority_core::{
    AuthoritySignal, Binding, ContentSnapshot, EntityKind, QueryIntent, ResultBucket, SignalMap,
    SignalWeightVector,
};
use authority_graph::{build_entity_graph, EntityGraph, SignalResolvers};
use authority_registry::SignalRegistry;
use authority_retrieval::{build_semantic_index, query, QueryOptions, SemanticIndex};
use authority_topology::entropy_contributions;

const WORDS: [&str; 4] = ["reform", "treasury", "port", "registry"];

#[derive(Debug, Clone)]
struct Corpus {
    claims: Vec<(Vec<usize>, usize)>,
    records: usize,
    case_studies: Vec<(Vec<usize>, Vec<usize>)>,
    books: Vec<Vec<usize>>,
    frameworks: Vec<(Vec<usize>, Vec<usize>)>,
    weights: Vec<f64>,
}

fn refs(max: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..max, 0..4)
}

fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    (
        prop::collection::vec((refs(10), 0..WORDS.len()), 0..12),
        0_usize..8,
        prop::collection::vec((refs(10), refs(14)), 0..5),
        prop::collection::vec(refs(10), 0..4),
        prop::collection::vec((refs(14), refs(10)), 0..4),
        prop::collection::vec(0.0_f64..1.0, 5..40),
    )
        .prop_map(|(claims, records, case_studies, books, frameworks, weights)| Corpus {
            claims,
            records,
            case_studies,
            books,
            frameworks,
            weights,
        })
}

fn ids(prefix: &str, picks: &[usize]) -> Vec<String> {
    picks.iter().map(|i| format!("{prefix}{i}")).collect()
}

fn entry_fields(id: String, title: &str) -> (Option<String>, String, String) {
    (Some(id.clone()), id, title.to_string())
}

fn snapshot(c: &Corpus) -> ContentSnapshot {
    let mut content = ContentSnapshot::default();
    for (i, (records, word)) in c.claims.iter().enumerate() {
        let (id, slug, title) = entry_fields(format!("c{i}"), WORDS[*word]);
        content.claims.push(ClaimEntry {
            id,
            slug,
            title,
            record_ids: ids("r", records),
            ..Default::default()
        });
    }
    for i in 0..c.records {
        let (id, slug, title) = entry_fields(format!("r{i}"), "record");
        content.records.push(PublicRecordEntry {
            id,
            slug,
            title,
            ..Default::default()
        });
    }
    for (i, (proofs, claims)) in c.case_studies.iter().enumerate() {
        let (id, slug, title) = entry_fields(format!("cs{i}"), "case");
        content.case_studies.push(CaseStudyEntry {
            id,
            slug,
            title,
            proof_refs: ids("r", proofs),
            claim_refs: ids("c", claims),
            ..Default::default()
        });
    }
    for (i, proofs) in c.books.iter().enumerate() {
        let (id, slug, title) = entry_fields(format!("b{i}"), "book");
        content.books.push(BookEntry {
            id,
            slug,
            title,
            proof_refs: ids("r", proofs),
            ..Default::default()
        });
    }
    for (i, (claims, records)) in c.frameworks.iter().enumerate() {
        let (id, slug, title) = entry_fields(format!("fw{i}"), "doctrine");
        content.frameworks.push(FrameworkEntry {
            id,
            slug,
            title,
            related_claims: ids("c", claims),
            related_records: ids("r", records),
            ..Default::default()
        });
    }
    content
}

fn bindings(content: &ContentSnapshot, weights: &[f64]) -> Vec<Binding> {
    content
        .entity_keys()
        .into_iter()
        .enumerate()
        .map(|(i, key)| {
            let primary: SignalMap = AuthoritySignal::ALL
                .iter()
                .enumerate()
                .map(|(j, s)| (*s, weights[(i + j) % weights.len()]))
                .collect();
            Binding::new(key.kind, key.id, SignalWeightVector::from_primary(primary))
        })
        .collect()
}

fn build(c: &Corpus) -> (EntityGraph, SemanticIndex) {
    let content = snapshot(c);
    let bindings = bindings(&content, &c.weights);
    let registry = SignalRegistry::from_bindings(&bindings);
    let contributions: HashMap<_, _> = entropy_contributions(&bindings);

    let lookup = |kind: EntityKind, id: &str| registry.lookup(kind, id).cloned();
    let graph = build_entity_graph(
        &content,
        &SignalResolvers {
            signal_vector: &lookup,
            signal_variance: None,
        },
    );
    let index = build_semantic_index(&content, &registry, &contributions, "");
    (graph, index)
}

proptest! {
    #[test]
    fn buckets_respect_cap_and_hold_unique_ids(
        corpus in corpus_strategy(),
        cap in 0_usize..6,
        word in 0..WORDS.len(),
    ) {
        let (graph, index) = build(&corpus);
        let options = QueryOptions::default()
            .with_max_per_type(cap)
            .with_query_text(WORDS[word]);

        for intent in QueryIntent::ALL {
            let result = query(&graph, &index, intent, &options);
            for bucket in ResultBucket::ALL {
                let entries = result.bucket(bucket);
                prop_assert!(entries.len() <= cap);
                let unique: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
                prop_assert_eq!(unique.len(), entries.len());
                for e in entries {
                    prop_assert_eq!(e.node.bucket(), bucket);
                    prop_assert!(graph.contains(&e.id));
                }
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_output(
        corpus in corpus_strategy(),
        cap in 1_usize..6,
    ) {
        let (graph_a, index_a) = build(&corpus);
        let (graph_b, index_b) = build(&corpus);
        let options = QueryOptions::default().with_max_per_type(cap).with_query_text("port");

        for intent in QueryIntent::ALL {
            let a = serde_json::to_string(&query(&graph_a, &index_a, intent, &options)).unwrap();
            let b = serde_json::to_string(&query(&graph_b, &index_b, intent, &options)).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
