//! RequestScope: everything one logical request owns.
//!
//! Construction populates a fresh registry from the canonical binding list
//! (through the differentiation engine when enabled) and computes entropy
//! contributions. The graph and semantic index are built on first use and
//! shared by every later call on the same scope.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use authority_core::{
    AuthorityConfig, AuthorityResult, Binding, ContentSnapshot, EntityKey, EntityKind,
    QueryIntent,
};
use authority_graph::{build_entity_graph, BuildCache, EntityGraph, GraphBuildCache, GraphNode, SignalResolvers};
use authority_registry::SignalRegistry;
use authority_topology::{differentiate_topology, entropy_contributions};

use crate::engine::{query, QueryOptions};
use crate::format::{format_response, FormatHooks, FormattedResponse};
use crate::index::{build_semantic_index, SemanticIndex};
use crate::result::RetrievalResult;

pub struct RequestScope<'a> {
    config: &'a AuthorityConfig,
    content: &'a ContentSnapshot,
    registry: SignalRegistry,
    bindings: Vec<Binding>,
    contributions: HashMap<EntityKey, f64>,
    graph_cache: GraphBuildCache,
    index_cache: BuildCache<SemanticIndex>,
}

impl<'a> RequestScope<'a> {
    pub fn new(config: &'a AuthorityConfig, content: &'a ContentSnapshot, canonical: &[Binding]) -> Self {
        let bindings = if config.topology.differentiate {
            differentiate_topology(canonical)
        } else {
            canonical.to_vec()
        };
        let registry = SignalRegistry::from_bindings(&bindings);
        let contributions = entropy_contributions(&bindings);
        debug!(
            bindings = bindings.len(),
            differentiated = config.topology.differentiate,
            "request scope ready"
        );

        Self {
            config,
            content,
            registry,
            bindings,
            contributions,
            graph_cache: GraphBuildCache::new(),
            index_cache: BuildCache::new(),
        }
    }

    pub fn registry(&self) -> &SignalRegistry {
        &self.registry
    }

    /// Bindings as registered for this request.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn contributions(&self) -> &HashMap<EntityKey, f64> {
        &self.contributions
    }

    pub fn graph(&self) -> Arc<EntityGraph> {
        self.graph_cache.get_or_build(|| {
            let signal_vector =
                |kind: EntityKind, id: &str| self.registry.lookup(kind, id).cloned();
            let signal_variance = |kind: EntityKind, id: &str| {
                self.contributions.get(&EntityKey::new(kind, id)).copied()
            };
            build_entity_graph(
                self.content,
                &SignalResolvers {
                    signal_vector: &signal_vector,
                    signal_variance: Some(&signal_variance),
                },
            )
        })
    }

    pub fn semantic_index(&self) -> Arc<SemanticIndex> {
        self.index_cache.get_or_build(|| {
            build_semantic_index(
                self.content,
                &self.registry,
                &self.contributions,
                &self.config.formatting.base_path,
            )
        })
    }

    /// Options seeded from config for one evaluator context.
    pub fn options(&self, evaluator_context: Option<&str>) -> QueryOptions {
        let options = QueryOptions::from_config(&self.config.retrieval);
        match evaluator_context {
            Some(context) => options.with_context(context),
            None => options,
        }
    }

    pub fn query(&self, intent: QueryIntent, options: &QueryOptions) -> RetrievalResult {
        let graph = self.graph();
        let index = self.semantic_index();
        query(&graph, &index, intent, options)
    }

    /// Query and format with the configured priorities for the options'
    /// evaluator context. Fails only on a malformed priority table.
    pub fn respond(
        &self,
        intent: QueryIntent,
        options: &QueryOptions,
        label_resolver: Option<&dyn Fn(&GraphNode) -> String>,
    ) -> AuthorityResult<FormattedResponse> {
        let result = self.query(intent, options);
        let priorities = match options.evaluator_context.as_deref() {
            Some(context) => self.config.formatting.priorities_for(context)?,
            None => None,
        };
        let hooks = FormatHooks {
            label_resolver,
            base_path: &self.config.formatting.base_path,
            priority_weights: priorities.as_ref(),
            default_priority_weight: self.config.retrieval.default_priority_weight,
        };
        let response = format_response(&result, &hooks);
        info!(
            %intent,
            links = response.entity_links.len(),
            "response formatted"
        );
        Ok(response)
    }
}
