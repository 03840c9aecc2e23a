use serde::{Deserialize, Serialize};

use authority_core::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    Supports,
    Verifies,
    References,
    DerivesFrom,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supports => "supports",
            Self::Verifies => "verifies",
            Self::References => "references",
            Self::DerivesFrom => "derivesFrom",
        }
    }

    /// `(source, target)` kind pairs this edge kind can join. `None` leaves
    /// both endpoints unconstrained.
    pub fn endpoint_kinds(self) -> Option<&'static [(EntityKind, EntityKind)]> {
        use EntityKind::*;
        match self {
            Self::Supports => Some(&[(Claim, Record)]),
            Self::References => Some(&[(Record, CaseStudy), (Claim, CaseStudy), (Book, Record)]),
            Self::DerivesFrom => Some(&[
                (Claim, Framework),
                (Record, Framework),
                (CaseStudy, Framework),
            ]),
            Self::Verifies => None,
        }
    }

    pub fn joins(self, from: EntityKind, to: EntityKind) -> bool {
        self.endpoint_kinds()
            .map_or(true, |pairs| pairs.contains(&(from, to)))
    }
}

/// A derived, directed edge. Never authored directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub from_id: String,
    pub to_id: String,
    pub kind: EdgeKind,
    /// `1 − cosine similarity` of the endpoints' effective vectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl GraphEdge {
    /// Sort key: from, to, kind.
    pub(crate) fn sort_key(&self) -> (&str, &str, EdgeKind) {
        (&self.from_id, &self.to_id, self.kind)
    }
}
