//! Flat text index, built in parallel with the graph.
//!
//! One entry per claim, record, case study and book. Frameworks are graph-only.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use authority_core::{ContentEntry, ContentSnapshot, EntityKey, EntityKind, SignalWeightVector};
use authority_registry::SignalRegistry;

use crate::format::href::href_for;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticIndexEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub text: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_vector: Option<SignalWeightVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy_contribution: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SemanticIndex {
    entries: Vec<SemanticIndexEntry>,
}

impl SemanticIndex {
    pub fn new(entries: Vec<SemanticIndexEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SemanticIndexEntry] {
        &self.entries
    }

    pub fn get(&self, kind: EntityKind, id: &str) -> Option<&SemanticIndexEntry> {
        self.entries.iter().find(|e| e.kind == kind && e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index `content`, attaching registered vectors and entropy contributions.
pub fn build_semantic_index(
    content: &ContentSnapshot,
    registry: &SignalRegistry,
    contributions: &HashMap<EntityKey, f64>,
    base_path: &str,
) -> SemanticIndex {
    let mut entries = Vec::with_capacity(content.len());
    let mut push = |entry: &dyn IndexSource| {
        let key = entry.index_key();
        entries.push(SemanticIndexEntry {
            url: href_for(key.kind, &key.id, entry.index_slug(), base_path),
            text: entry.index_text(),
            signal_vector: registry.lookup(key.kind, &key.id).cloned(),
            entropy_contribution: contributions.get(&key).copied(),
            id: key.id,
            kind: key.kind,
        });
    };

    for e in &content.claims {
        push(e);
    }
    for e in &content.records {
        push(e);
    }
    for e in &content.case_studies {
        push(e);
    }
    for e in &content.books {
        push(e);
    }

    debug!(entries = entries.len(), "semantic index built");
    SemanticIndex::new(entries)
}

/// Object-safe view of a content entry.
trait IndexSource {
    fn index_key(&self) -> EntityKey;
    fn index_slug(&self) -> &str;
    fn index_text(&self) -> String;
}

impl<E: ContentEntry> IndexSource for E {
    fn index_key(&self) -> EntityKey {
        self.key()
    }

    fn index_slug(&self) -> &str {
        self.slug()
    }

    fn index_text(&self) -> String {
        self.searchable_text()
    }
}
