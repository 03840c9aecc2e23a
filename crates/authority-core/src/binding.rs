use std::fmt;

use serde::{Deserialize, Serialize};

use crate::signal::EffectiveVector;
use crate::vector::SignalWeightVector;

/// Kinds of entity a signal vector can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Claim,
    Record,
    CaseStudy,
    Book,
    BriefNode,
    Framework,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        Self::Claim,
        Self::Record,
        Self::CaseStudy,
        Self::Book,
        Self::BriefNode,
        Self::Framework,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Claim => "claim",
            Self::Record => "record",
            Self::CaseStudy => "caseStudy",
            Self::Book => "book",
            Self::BriefNode => "briefNode",
            Self::Framework => "framework",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(kind, id)` registry key, displayed as `kind:id`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityKey {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityKey {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// One content entity associated with one signal weight vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub entity_kind: EntityKind,
    pub entity_id: String,
    #[serde(rename = "signalWeightVector")]
    pub vector: SignalWeightVector,
}

impl Binding {
    pub fn new(entity_kind: EntityKind, entity_id: impl Into<String>, vector: SignalWeightVector) -> Self {
        Self {
            entity_kind,
            entity_id: entity_id.into(),
            vector,
        }
    }

    pub fn key(&self) -> EntityKey {
        EntityKey::new(self.entity_kind, self.entity_id.clone())
    }

    /// Context-free effective vector.
    pub fn effective(&self) -> EffectiveVector {
        self.vector.resolve_effective(None)
    }
}
