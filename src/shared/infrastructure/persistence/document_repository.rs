use bson::{oid::ObjectId, Document};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::log_debug;
use crate::shared::domain::Entity;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::document_store::{parse_object_id, DocumentStore, Filter};

/// Storage mapping for an entity kept in one collection
pub trait StoredEntity: Entity + Clone {
    const COLLECTION: &'static str;

    /// Persisted fields, without `_id`
    fn to_document(&self) -> AppResult<Document>;

    fn from_document(document: Document) -> AppResult<Self>;

    /// Record the identifier assigned on first insert
    fn assign_id(&mut self, id: ObjectId);
}

/// Save/delete/find behaviour shared by every entity repository
pub struct DocumentRepository<E> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for DocumentRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<E: StoredEntity> DocumentRepository<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Validate, stamp `updated_at`, then insert (no id) or update by id.
    ///
    /// Works on a staged copy: the caller's entity only takes the trimmed
    /// fields, new timestamp and assigned id once the write succeeded.
    /// An update that modifies nothing is reported as `NotFound`: the store
    /// cannot tell a missing id from an unchanged document.
    pub async fn save(&self, entity: &mut E) -> AppResult<()> {
        let mut staged = entity.clone();
        staged.validate()?;
        staged.touch();
        let document = staged.to_document()?;

        match staged.id() {
            Some(id) => {
                let modified = self
                    .store
                    .update_one_by_id(E::COLLECTION, id, document)
                    .await?;
                if !modified {
                    return Err(AppError::NotFound(format!(
                        "{} not found or no changes made",
                        E::KIND
                    )));
                }
                log_debug!("Updated {} {}", E::KIND, id);
            }
            None => {
                let id = self.store.insert_one(E::COLLECTION, document).await?;
                staged.assign_id(id);
                log_debug!("Inserted {} {}", E::KIND, id);
            }
        }

        *entity = staged;
        Ok(())
    }

    /// `false` without touching the store when the entity was never persisted
    pub async fn delete(&self, entity: &E) -> AppResult<bool> {
        match entity.id() {
            Some(id) => self.store.delete_one_by_id(E::COLLECTION, id).await,
            None => Ok(false),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<E>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };
        self.store
            .find_one_by_id(E::COLLECTION, object_id)
            .await?
            .map(E::from_document)
            .transpose()
    }

    pub async fn find_one(&self, filter: Filter) -> AppResult<Option<E>> {
        self.store
            .find_one(E::COLLECTION, filter)
            .await?
            .map(E::from_document)
            .transpose()
    }

    /// All documents ordered by `name`
    pub async fn find_all(&self) -> AppResult<Vec<E>> {
        self.store
            .find_all(E::COLLECTION, "name")
            .await?
            .into_iter()
            .map(E::from_document)
            .collect()
    }

    /// Matching documents ordered by `name`
    pub async fn find_many(&self, filter: Filter) -> AppResult<Vec<E>> {
        self.store
            .find_many(E::COLLECTION, filter, "name")
            .await?
            .into_iter()
            .map(E::from_document)
            .collect()
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.store.count_all(E::COLLECTION).await
    }
}
