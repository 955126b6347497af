//! HTTP handlers and the shared state they extract.
//!
//! Handlers only dispatch to the repositories and map results to response
//! bodies; the breed name defaulting happens in the response DTOs.

pub mod breeds;
pub mod dogs;
pub mod health;

pub use breeds::list_breeds_handler;
pub use dogs::{get_dog_handler, list_dogs_handler};
pub use health::health_handler;

use std::sync::Arc;

use crate::modules::breed::{BreedRepository, BreedRepositoryImpl};
use crate::modules::dog::{DogQueryRepository, DogQueryRepositoryImpl, DogRepository, DogRepositoryImpl};
use crate::shared::infrastructure::DocumentStore;

/// Repositories injected into every route
#[derive(Clone)]
pub struct AppState {
    pub breeds: Arc<dyn BreedRepository>,
    pub dogs: Arc<dyn DogRepository>,
    pub dog_queries: Arc<dyn DogQueryRepository>,
}

impl AppState {
    /// Wire the document-backed repositories over one store handle
    pub fn from_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            breeds: Arc::new(BreedRepositoryImpl::new(Arc::clone(&store))),
            dogs: Arc::new(DogRepositoryImpl::new(Arc::clone(&store))),
            dog_queries: Arc::new(DogQueryRepositoryImpl::new(store)),
        }
    }
}
