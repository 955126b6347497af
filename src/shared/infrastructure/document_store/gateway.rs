use async_trait::async_trait;
use bson::{oid::ObjectId, Document};

use super::filter::Filter;
use super::pipeline::PipelineStage;
use crate::shared::errors::AppResult;

/// Single-field index definition applied at bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub field: String,
    pub unique: bool,
}

impl IndexSpec {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            unique: false,
        }
    }

    pub fn unique(field: &str) -> Self {
        Self {
            field: field.to_string(),
            unique: true,
        }
    }
}

/// Collection-level access to the document store.
///
/// Implementations carry no entity semantics; repositories translate
/// between domain records and raw documents. Every call is a single
/// round-trip and errors propagate unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document without `_id`; returns the identifier the store assigned
    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<ObjectId>;

    /// `$set` the given fields; `true` only when a document was actually modified
    async fn update_one_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> AppResult<bool>;

    /// `true` when a document was removed
    async fn delete_one_by_id(&self, collection: &str, id: ObjectId) -> AppResult<bool>;

    async fn find_one_by_id(&self, collection: &str, id: ObjectId) -> AppResult<Option<Document>>;

    async fn find_one(&self, collection: &str, filter: Filter) -> AppResult<Option<Document>>;

    /// Every document, ascending by `sort_key`
    async fn find_all(&self, collection: &str, sort_key: &str) -> AppResult<Vec<Document>>;

    /// Matching documents, ascending by `sort_key`
    async fn find_many(
        &self,
        collection: &str,
        filter: Filter,
        sort_key: &str,
    ) -> AppResult<Vec<Document>>;

    async fn count_all(&self, collection: &str) -> AppResult<u64>;

    async fn run_pipeline(
        &self,
        collection: &str,
        stages: Vec<PipelineStage>,
    ) -> AppResult<Vec<Document>>;

    async fn ensure_indexes(&self, collection: &str, indexes: Vec<IndexSpec>) -> AppResult<()>;
}
