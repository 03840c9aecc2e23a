//! Graph nodes: one variant per entity shape, discriminated by `kind`.

use serde::{Deserialize, Serialize};

use authority_core::{EffectiveVector, EntityKind, ResultBucket, SignalWeightVector};

/// Fields every node carries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeHeader {
    /// Stable id, distinct from the presentation slug.
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_vector: Option<SignalWeightVector>,
    /// Squared distance from the kind's mean vector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_entropy_contribution: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkNode {
    #[serde(flatten)]
    pub header: NodeHeader,
    pub related_claims: Vec<String>,
    pub related_records: Vec<String>,
    pub related_case_studies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimNode {
    #[serde(flatten)]
    pub header: NodeHeader,
    pub record_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordNode {
    #[serde(flatten)]
    pub header: NodeHeader,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyNode {
    #[serde(flatten)]
    pub header: NodeHeader,
    pub proof_refs: Vec<String>,
    pub claim_refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookNode {
    #[serde(flatten)]
    pub header: NodeHeader,
    pub proof_refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GraphNode {
    Framework(FrameworkNode),
    Claim(ClaimNode),
    Record(RecordNode),
    CaseStudy(CaseStudyNode),
    Book(BookNode),
}

impl GraphNode {
    pub fn header(&self) -> &NodeHeader {
        match self {
            Self::Framework(n) => &n.header,
            Self::Claim(n) => &n.header,
            Self::Record(n) => &n.header,
            Self::CaseStudy(n) => &n.header,
            Self::Book(n) => &n.header,
        }
    }

    pub fn id(&self) -> &str {
        &self.header().id
    }

    pub fn slug(&self) -> &str {
        &self.header().slug
    }

    pub fn title(&self) -> &str {
        &self.header().title
    }

    pub fn entity_kind(&self) -> EntityKind {
        match self {
            Self::Framework(_) => EntityKind::Framework,
            Self::Claim(_) => EntityKind::Claim,
            Self::Record(_) => EntityKind::Record,
            Self::CaseStudy(_) => EntityKind::CaseStudy,
            Self::Book(_) => EntityKind::Book,
        }
    }

    /// The result bucket this node belongs in.
    pub fn bucket(&self) -> ResultBucket {
        match self {
            Self::Framework(_) => ResultBucket::Frameworks,
            Self::Claim(_) => ResultBucket::Claims,
            Self::Record(_) => ResultBucket::Records,
            Self::CaseStudy(_) => ResultBucket::CaseStudies,
            Self::Book(_) => ResultBucket::Books,
        }
    }

    /// Position used for deterministic node ordering.
    pub fn kind_rank(&self) -> usize {
        ResultBucket::ALL
            .iter()
            .position(|b| *b == self.bucket())
            .unwrap_or(ResultBucket::ALL.len())
    }

    pub fn effective_vector(&self, active_context: Option<&str>) -> Option<EffectiveVector> {
        self.header()
            .signal_vector
            .as_ref()
            .map(|v| v.resolve_effective(active_context))
    }

    /// Entropy contribution, 0 when absent.
    pub fn entropy_contribution(&self) -> f64 {
        self.header().signal_entropy_contribution.unwrap_or(0.0)
    }
}
