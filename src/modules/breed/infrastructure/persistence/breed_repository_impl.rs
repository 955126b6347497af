use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::breed::domain::entities::breed::Breed;
use crate::modules::breed::domain::repositories::breed_repository::BreedRepository;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::document_store::{DocumentStore, Filter};
use crate::shared::infrastructure::persistence::DocumentRepository;

pub struct BreedRepositoryImpl {
    documents: DocumentRepository<Breed>,
}

impl BreedRepositoryImpl {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            documents: DocumentRepository::new(store),
        }
    }
}

#[async_trait]
impl BreedRepository for BreedRepositoryImpl {
    async fn save(&self, breed: &mut Breed) -> AppResult<()> {
        self.documents.save(breed).await
    }

    async fn delete(&self, breed: &Breed) -> AppResult<bool> {
        self.documents.delete(breed).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Breed>> {
        self.documents.find_by_id(id).await
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Breed>> {
        self.documents
            .find_one(Filter::eq_ignore_case("name", name))
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<Breed>> {
        self.documents.find_all().await
    }

    async fn count(&self) -> AppResult<u64> {
        self.documents.count().await
    }
}
