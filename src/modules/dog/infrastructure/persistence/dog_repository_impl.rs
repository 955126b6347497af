use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::dog::domain::entities::dog::Dog;
use crate::modules::dog::domain::repositories::dog_repository::DogRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::document_store::{parse_object_id, DocumentStore, Filter};
use crate::shared::infrastructure::persistence::DocumentRepository;

pub struct DogRepositoryImpl {
    documents: DocumentRepository<Dog>,
}

impl DogRepositoryImpl {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            documents: DocumentRepository::new(store),
        }
    }
}

#[async_trait]
impl DogRepository for DogRepositoryImpl {
    async fn save(&self, dog: &mut Dog) -> AppResult<()> {
        self.documents.save(dog).await
    }

    async fn delete(&self, dog: &Dog) -> AppResult<bool> {
        self.documents.delete(dog).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Dog>> {
        self.documents.find_by_id(id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Dog>> {
        self.documents.find_all().await
    }

    async fn find_by_breed_id(&self, breed_id: &str) -> AppResult<Vec<Dog>> {
        let Some(breed_id) = parse_object_id(breed_id) else {
            return Ok(Vec::new());
        };
        self.documents
            .find_many(Filter::eq("breed_id", breed_id))
            .await
    }

    async fn count(&self) -> AppResult<u64> {
        self.documents.count().await
    }
}
