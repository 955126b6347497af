use async_trait::async_trait;

use super::super::entities::enriched_dog::EnrichedDog;
use crate::shared::errors::AppResult;

/// Read-side queries joining dogs with their breed
#[async_trait]
pub trait DogQueryRepository: Send + Sync {
    /// Every dog with its breed name, ordered by dog name
    async fn find_all_with_breed(&self) -> AppResult<Vec<EnrichedDog>>;

    /// Same join for a single dog; `None` for unknown or malformed ids
    async fn find_by_id_with_breed(&self, dog_id: &str) -> AppResult<Option<EnrichedDog>>;
}
