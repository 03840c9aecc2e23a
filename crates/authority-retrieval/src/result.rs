use serde::Serialize;

use authority_core::ResultBucket;
use authority_graph::GraphNode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievedEntity {
    pub id: String,
    pub node: GraphNode,
}

/// Retrieval output, bucketed by entity kind.
///
/// Inserts are kind-checked, de-duplicated by id, and capped per bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalResult {
    pub frameworks: Vec<RetrievedEntity>,
    pub claims: Vec<RetrievedEntity>,
    pub records: Vec<RetrievedEntity>,
    pub books: Vec<RetrievedEntity>,
    pub case_studies: Vec<RetrievedEntity>,
}

impl RetrievalResult {
    pub fn bucket(&self, bucket: ResultBucket) -> &[RetrievedEntity] {
        match bucket {
            ResultBucket::Frameworks => &self.frameworks,
            ResultBucket::Claims => &self.claims,
            ResultBucket::Records => &self.records,
            ResultBucket::Books => &self.books,
            ResultBucket::CaseStudies => &self.case_studies,
        }
    }

    fn bucket_mut(&mut self, bucket: ResultBucket) -> &mut Vec<RetrievedEntity> {
        match bucket {
            ResultBucket::Frameworks => &mut self.frameworks,
            ResultBucket::Claims => &mut self.claims,
            ResultBucket::Records => &mut self.records,
            ResultBucket::Books => &mut self.books,
            ResultBucket::CaseStudies => &mut self.case_studies,
        }
    }

    /// Append `node` to `bucket`. Returns false when the node belongs to
    /// another bucket, is already present, or the bucket is full.
    pub fn insert(&mut self, bucket: ResultBucket, node: &GraphNode, cap: usize) -> bool {
        if node.bucket() != bucket {
            return false;
        }
        let items = self.bucket_mut(bucket);
        if items.len() >= cap || items.iter().any(|e| e.id == node.id()) {
            return false;
        }
        items.push(RetrievedEntity {
            id: node.id().to_string(),
            node: node.clone(),
        });
        true
    }

    pub fn ids(&self, bucket: ResultBucket) -> Vec<&str> {
        self.bucket(bucket).iter().map(|e| e.id.as_str()).collect()
    }

    /// Entities across all buckets.
    pub fn total(&self) -> usize {
        ResultBucket::ALL.iter().map(|b| self.bucket(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Buckets holding at least one entity, in declaration order.
    pub fn non_empty_buckets(&self) -> Vec<ResultBucket> {
        ResultBucket::ALL
            .into_iter()
            .filter(|b| !self.bucket(*b).is_empty())
            .collect()
    }
}
