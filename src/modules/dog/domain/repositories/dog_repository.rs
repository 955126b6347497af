use async_trait::async_trait;

use super::super::entities::dog::Dog;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Insert when `dog.id` is unset (assigning it), otherwise update by id
    async fn save(&self, dog: &mut Dog) -> AppResult<()>;
    async fn delete(&self, dog: &Dog) -> AppResult<bool>;
    /// Malformed ids resolve to `None`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Dog>>;
    /// Ordered by name ascending
    async fn find_all(&self) -> AppResult<Vec<Dog>>;
    /// Dogs referencing the breed, ordered by name. Malformed ids give an empty list.
    async fn find_by_breed_id(&self, breed_id: &str) -> AppResult<Vec<Dog>>;
    async fn count(&self) -> AppResult<u64>;
}
