//! # authority-retrieval
//!
//! Constrained, non-generative query engine over the entity graph and a
//! flat text index. One closed intent selects one deterministic strategy;
//! the formatter turns the bucketed result into a summary, count bullets,
//! and priority-ordered entity links.

pub mod engine;
pub mod format;
pub mod index;
pub mod pipeline;
pub mod ranking;
pub mod result;
mod strategies;

pub use engine::{query, query_named, QueryOptions};
pub use format::{format_response, EntityLink, FormatHooks, FormattedResponse};
pub use index::{build_semantic_index, SemanticIndex, SemanticIndexEntry};
pub use pipeline::RequestScope;
pub use ranking::{by_signal_and_entropy, rank_nodes};
pub use result::{RetrievalResult, RetrievedEntity};
