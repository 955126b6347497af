/// Test helper functions and service builders
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use bson::{oid::ObjectId, Document};
use serde_json::Value;
use shelter_lib::modules::api::{build_router, AppState};
use shelter_lib::modules::breed::{BreedRepository, BreedRepositoryImpl};
use shelter_lib::modules::dog::{
    DogQueryRepository, DogQueryRepositoryImpl, DogRepository, DogRepositoryImpl,
};
use shelter_lib::shared::errors::{AppError, AppResult};
use shelter_lib::shared::infrastructure::document_store::{
    DocumentStore, Filter, IndexSpec, InMemoryDocumentStore, PipelineStage,
};
use shelter_lib::shared::infrastructure::ensure_indexes;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestServices {
    pub store: Arc<dyn DocumentStore>,
    pub breeds: Arc<dyn BreedRepository>,
    pub dogs: Arc<dyn DogRepository>,
    pub dog_queries: Arc<dyn DogQueryRepository>,
}

/// Build the repositories over any store
pub fn build_services_with_store(store: Arc<dyn DocumentStore>) -> TestServices {
    TestServices {
        breeds: Arc::new(BreedRepositoryImpl::new(Arc::clone(&store))),
        dogs: Arc::new(DogRepositoryImpl::new(Arc::clone(&store))),
        dog_queries: Arc::new(DogQueryRepositoryImpl::new(Arc::clone(&store))),
        store,
    }
}

/// Repositories over a fresh in-memory store with the shelter indexes applied
pub async fn build_test_services() -> TestServices {
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    assert!(ensure_indexes(store.as_ref()).await);
    build_services_with_store(store)
}

pub fn build_test_router(services: &TestServices) -> Router {
    build_router(AppState {
        breeds: Arc::clone(&services.breeds),
        dogs: Arc::clone(&services.dogs),
        dog_queries: Arc::clone(&services.dog_queries),
    })
}

/// Issue a GET through the router and decode the JSON body
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Store whose every call fails, standing in for a lost connection
pub struct UnreachableStore;

fn connection_lost<T>() -> AppResult<T> {
    Err(AppError::DatabaseError(
        "server selection timeout: no available servers".to_string(),
    ))
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn insert_one(&self, _: &str, _: Document) -> AppResult<ObjectId> {
        connection_lost()
    }
    async fn update_one_by_id(&self, _: &str, _: ObjectId, _: Document) -> AppResult<bool> {
        connection_lost()
    }
    async fn delete_one_by_id(&self, _: &str, _: ObjectId) -> AppResult<bool> {
        connection_lost()
    }
    async fn find_one_by_id(&self, _: &str, _: ObjectId) -> AppResult<Option<Document>> {
        connection_lost()
    }
    async fn find_one(&self, _: &str, _: Filter) -> AppResult<Option<Document>> {
        connection_lost()
    }
    async fn find_all(&self, _: &str, _: &str) -> AppResult<Vec<Document>> {
        connection_lost()
    }
    async fn find_many(&self, _: &str, _: Filter, _: &str) -> AppResult<Vec<Document>> {
        connection_lost()
    }
    async fn count_all(&self, _: &str) -> AppResult<u64> {
        connection_lost()
    }
    async fn run_pipeline(&self, _: &str, _: Vec<PipelineStage>) -> AppResult<Vec<Document>> {
        connection_lost()
    }
    async fn ensure_indexes(&self, _: &str, _: Vec<IndexSpec>) -> AppResult<()> {
        connection_lost()
    }
}
