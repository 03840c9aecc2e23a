use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::IntentError;

/// The closed set of deterministic retrieval strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    SummarizeFramework,
    TraceEvidenceChain,
    CompareClaims,
    ExploreDomain,
    ExtractDecisionModel,
}

impl QueryIntent {
    pub const ALL: [QueryIntent; 5] = [
        Self::SummarizeFramework,
        Self::TraceEvidenceChain,
        Self::CompareClaims,
        Self::ExploreDomain,
        Self::ExtractDecisionModel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SummarizeFramework => "summarize_framework",
            Self::TraceEvidenceChain => "trace_evidence_chain",
            Self::CompareClaims => "compare_claims",
            Self::ExploreDomain => "explore_domain",
            Self::ExtractDecisionModel => "extract_decision_model",
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryIntent {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| IntentError::UnknownIntent {
                name: s.to_string(),
            })
    }
}
