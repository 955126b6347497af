use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use super::filter::Filter;
use super::gateway::{DocumentStore, IndexSpec};
use super::pipeline::{to_documents, PipelineStage};
use crate::log_debug;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// [`DocumentStore`] over the MongoDB async driver
#[derive(Clone)]
pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

fn ascending(key: &str) -> Document {
    let mut sort = Document::new();
    sort.insert(key, 1);
    sort
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<ObjectId> {
        LogContext::db_operation("insert_one", collection, None);
        let result = self.collection(collection).insert_one(document).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!(
                "Store assigned a non-ObjectId identifier in {}: {}",
                collection, result.inserted_id
            ))
        })
    }

    async fn update_one_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> AppResult<bool> {
        LogContext::db_operation("update_one", collection, None);
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result.modified_count > 0)
    }

    async fn delete_one_by_id(&self, collection: &str, id: ObjectId) -> AppResult<bool> {
        LogContext::db_operation("delete_one", collection, None);
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn find_one_by_id(&self, collection: &str, id: ObjectId) -> AppResult<Option<Document>> {
        LogContext::db_operation("find_one", collection, None);
        Ok(self
            .collection(collection)
            .find_one(doc! { "_id": id })
            .await?)
    }

    async fn find_one(&self, collection: &str, filter: Filter) -> AppResult<Option<Document>> {
        LogContext::db_operation("find_one", collection, None);
        Ok(self
            .collection(collection)
            .find_one(filter.to_document())
            .await?)
    }

    async fn find_all(&self, collection: &str, sort_key: &str) -> AppResult<Vec<Document>> {
        let timer = TimedOperation::new(&format!("find_all on {}", collection));
        let cursor = self
            .collection(collection)
            .find(Document::new())
            .sort(ascending(sort_key))
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        timer.finish();
        Ok(documents)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Filter,
        sort_key: &str,
    ) -> AppResult<Vec<Document>> {
        LogContext::db_operation("find", collection, None);
        let cursor = self
            .collection(collection)
            .find(filter.to_document())
            .sort(ascending(sort_key))
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count_all(&self, collection: &str) -> AppResult<u64> {
        LogContext::db_operation("count_documents", collection, None);
        Ok(self
            .collection(collection)
            .count_documents(Document::new())
            .await?)
    }

    async fn run_pipeline(
        &self,
        collection: &str,
        stages: Vec<PipelineStage>,
    ) -> AppResult<Vec<Document>> {
        let timer = TimedOperation::new(&format!("aggregate on {}", collection));
        let cursor = self
            .collection(collection)
            .aggregate(to_documents(&stages))
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        timer.finish_with_info(&format!("{} stages, {} rows", stages.len(), documents.len()));
        Ok(documents)
    }

    async fn ensure_indexes(&self, collection: &str, indexes: Vec<IndexSpec>) -> AppResult<()> {
        for index in indexes {
            let model = IndexModel::builder()
                .keys(ascending(&index.field))
                .options(IndexOptions::builder().unique(index.unique).build())
                .build();
            self.collection(collection).create_index(model).await?;
            log_debug!(
                "Index on {}.{} ready (unique: {})",
                collection,
                index.field,
                index.unique
            );
        }
        Ok(())
    }
}
