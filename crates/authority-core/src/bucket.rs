use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::binding::EntityKind;
use crate::errors::IntentError;

/// Result buckets, declared in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultBucket {
    Frameworks,
    Claims,
    Records,
    Books,
    CaseStudies,
}

impl ResultBucket {
    pub const ALL: [ResultBucket; 5] = [
        Self::Frameworks,
        Self::Claims,
        Self::Records,
        Self::Books,
        Self::CaseStudies,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frameworks => "frameworks",
            Self::Claims => "claims",
            Self::Records => "records",
            Self::Books => "books",
            Self::CaseStudies => "caseStudies",
        }
    }

    /// Kind of entity held by this bucket.
    pub fn entity_kind(self) -> EntityKind {
        match self {
            Self::Frameworks => EntityKind::Framework,
            Self::Claims => EntityKind::Claim,
            Self::Records => EntityKind::Record,
            Self::Books => EntityKind::Book,
            Self::CaseStudies => EntityKind::CaseStudy,
        }
    }

    /// Heading used in count bullets.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Frameworks => "Frameworks",
            Self::Claims => "Claims",
            Self::Records => "Records",
            Self::Books => "Books",
            Self::CaseStudies => "Case studies",
        }
    }
}

impl fmt::Display for ResultBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultBucket {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| IntentError::UnknownBucket {
                name: s.to_string(),
            })
    }
}

/// Presentation priority per bucket for one evaluator context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityWeights(pub BTreeMap<ResultBucket, f64>);

impl PriorityWeights {
    pub fn new(entries: &[(ResultBucket, f64)]) -> Self {
        Self(entries.iter().copied().collect())
    }

    pub fn get(&self, bucket: ResultBucket) -> Option<f64> {
        self.0.get(&bucket).copied()
    }
}
