//! Query entry points.
//!
//! `query(graph, index, intent, options)` is the whole retrieval contract:
//! deterministic, infallible, and degrading to smaller buckets when the
//! graph holds dangling ids or entities without vectors.

use tracing::{debug, info};

use authority_core::config::defaults::DEFAULT_MAX_PER_TYPE;
use authority_core::config::RetrievalConfig;
use authority_core::{retrieval_span, QueryIntent, ResultBucket};
use authority_graph::EntityGraph;

use crate::index::SemanticIndex;
use crate::result::RetrievalResult;
use crate::strategies::{self, Collector};

#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Evaluator context used to resolve effective vectors.
    pub evaluator_context: Option<String>,
    pub max_per_type: usize,
    /// Free text for `explore_domain`; ignored by the other intents.
    pub query_text: Option<String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            evaluator_context: None,
            max_per_type: DEFAULT_MAX_PER_TYPE,
            query_text: None,
        }
    }
}

impl QueryOptions {
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            max_per_type: config.max_per_type,
            ..Self::default()
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.evaluator_context = Some(context.into());
        self
    }

    pub fn with_query_text(mut self, text: impl Into<String>) -> Self {
        self.query_text = Some(text.into());
        self
    }

    pub fn with_max_per_type(mut self, max_per_type: usize) -> Self {
        self.max_per_type = max_per_type;
        self
    }
}

/// Run one intent against the graph and index.
pub fn query(
    graph: &EntityGraph,
    index: &SemanticIndex,
    intent: QueryIntent,
    options: &QueryOptions,
) -> RetrievalResult {
    let span = retrieval_span!(intent, options.evaluator_context);
    let _guard = span.enter();

    let mut collector = Collector::new(graph, options);
    match intent {
        QueryIntent::SummarizeFramework => strategies::summarize_framework(&mut collector, true),
        QueryIntent::ExtractDecisionModel => strategies::summarize_framework(&mut collector, false),
        QueryIntent::TraceEvidenceChain => strategies::claims_with_evidence(&mut collector, true),
        QueryIntent::CompareClaims => strategies::claims_with_evidence(&mut collector, false),
        QueryIntent::ExploreDomain => strategies::explore_domain(
            &mut collector,
            index,
            options.query_text.as_deref().unwrap_or(""),
        ),
    }
    finish(collector, intent.as_str())
}

/// Like [`query`], keyed by intent name. Unknown names take the unranked
/// graph-order path.
pub fn query_named(
    graph: &EntityGraph,
    index: &SemanticIndex,
    intent: &str,
    options: &QueryOptions,
) -> RetrievalResult {
    match intent.parse::<QueryIntent>() {
        Ok(intent) => query(graph, index, intent, options),
        Err(e) => {
            let span = retrieval_span!(intent, options.evaluator_context);
            let _guard = span.enter();
            debug!(error = %e, "falling back to graph-order retrieval");

            let mut collector = Collector::new(graph, options);
            strategies::graph_order(&mut collector);
            finish(collector, intent)
        }
    }
}

fn finish(collector: Collector<'_>, intent: &str) -> RetrievalResult {
    let result = collector.into_result();
    debug!(
        frameworks = result.bucket(ResultBucket::Frameworks).len(),
        claims = result.bucket(ResultBucket::Claims).len(),
        records = result.bucket(ResultBucket::Records).len(),
        books = result.bucket(ResultBucket::Books).len(),
        case_studies = result.bucket(ResultBucket::CaseStudies).len(),
        "buckets filled"
    );
    info!(intent, total = result.total(), "retrieval complete");
    result
}
