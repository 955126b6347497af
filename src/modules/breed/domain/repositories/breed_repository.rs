use async_trait::async_trait;

use super::super::entities::breed::Breed;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait BreedRepository: Send + Sync {
    /// Insert when `breed.id` is unset (assigning it), otherwise update by id
    async fn save(&self, breed: &mut Breed) -> AppResult<()>;
    /// `false` when nothing was removed, including never-persisted breeds
    async fn delete(&self, breed: &Breed) -> AppResult<bool>;
    /// Malformed ids resolve to `None`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Breed>>;
    /// Exact, case-insensitive name match
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Breed>>;
    /// Ordered by name ascending
    async fn find_all(&self) -> AppResult<Vec<Breed>>;
    async fn count(&self) -> AppResult<u64>;
}
