//! Read-only content records handed over by the content collaborator.
//!
//! The core never loads files itself: a [`ContentSource`] supplies
//! already-validated snapshots, and every entry exposes a stable id that
//! falls back to its presentation slug.

use serde::{Deserialize, Serialize};

use crate::binding::{EntityKey, EntityKind};

/// Behavior shared by every content entry.
pub trait ContentEntry {
    const KIND: EntityKind;

    fn explicit_id(&self) -> Option<&str>;
    fn slug(&self) -> &str;
    fn title(&self) -> &str;
    fn summary(&self) -> &str;

    /// Explicit id when present, else the slug.
    fn stable_id(&self) -> &str {
        match self.explicit_id() {
            Some(id) if !id.is_empty() => id,
            _ => self.slug(),
        }
    }

    fn key(&self) -> EntityKey {
        EntityKey::new(Self::KIND, self.stable_id())
    }

    /// Text indexed for literal retrieval.
    fn searchable_text(&self) -> String {
        if self.summary().is_empty() {
            self.title().to_string()
        } else {
            format!("{} {}", self.title(), self.summary())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimEntry {
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub record_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicRecordEntry {
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseStudyEntry {
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// Record ids offered as proof.
    pub proof_refs: Vec<String>,
    pub claim_refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookEntry {
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub proof_refs: Vec<String>,
}

/// A doctrine framework tying claims, records and case studies together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameworkEntry {
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub related_claims: Vec<String>,
    pub related_records: Vec<String>,
    pub related_case_studies: Vec<String>,
}

macro_rules! impl_content_entry {
    ($ty:ty, $kind:expr) => {
        impl ContentEntry for $ty {
            const KIND: EntityKind = $kind;

            fn explicit_id(&self) -> Option<&str> {
                self.id.as_deref()
            }
            fn slug(&self) -> &str {
                &self.slug
            }
            fn title(&self) -> &str {
                &self.title
            }
            fn summary(&self) -> &str {
                &self.summary
            }
        }
    };
}

impl_content_entry!(ClaimEntry, EntityKind::Claim);
impl_content_entry!(PublicRecordEntry, EntityKind::Record);
impl_content_entry!(CaseStudyEntry, EntityKind::CaseStudy);
impl_content_entry!(BookEntry, EntityKind::Book);
impl_content_entry!(FrameworkEntry, EntityKind::Framework);

/// The content collaborator's interface.
pub trait ContentSource {
    fn all_claims(&self) -> Vec<ClaimEntry>;
    fn public_record_entries(&self) -> Vec<PublicRecordEntry>;
    fn case_study_entries(&self) -> Vec<CaseStudyEntry>;
    fn book_entries(&self) -> Vec<BookEntry>;

    fn framework_entries(&self) -> Vec<FrameworkEntry> {
        Vec::new()
    }

    /// Take one immutable snapshot of every collection.
    fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            claims: self.all_claims(),
            records: self.public_record_entries(),
            case_studies: self.case_study_entries(),
            books: self.book_entries(),
            frameworks: self.framework_entries(),
        }
    }
}

/// Every content collection, captured once per process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSnapshot {
    pub claims: Vec<ClaimEntry>,
    pub records: Vec<PublicRecordEntry>,
    pub case_studies: Vec<CaseStudyEntry>,
    pub books: Vec<BookEntry>,
    pub frameworks: Vec<FrameworkEntry>,
}

impl ContentSnapshot {
    /// Keys of every entity in the snapshot, in collection order.
    pub fn entity_keys(&self) -> Vec<EntityKey> {
        let mut keys = Vec::with_capacity(self.len());
        keys.extend(self.claims.iter().map(ContentEntry::key));
        keys.extend(self.records.iter().map(ContentEntry::key));
        keys.extend(self.case_studies.iter().map(ContentEntry::key));
        keys.extend(self.books.iter().map(ContentEntry::key));
        keys.extend(self.frameworks.iter().map(ContentEntry::key));
        keys
    }

    pub fn len(&self) -> usize {
        self.claims.len()
            + self.records.len()
            + self.case_studies.len()
            + self.books.len()
            + self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContentSource for ContentSnapshot {
    fn all_claims(&self) -> Vec<ClaimEntry> {
        self.claims.clone()
    }
    fn public_record_entries(&self) -> Vec<PublicRecordEntry> {
        self.records.clone()
    }
    fn case_study_entries(&self) -> Vec<CaseStudyEntry> {
        self.case_studies.clone()
    }
    fn book_entries(&self) -> Vec<BookEntry> {
        self.books.clone()
    }
    fn framework_entries(&self) -> Vec<FrameworkEntry> {
        self.frameworks.clone()
    }
}
