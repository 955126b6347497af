pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{AdoptionStatus, Dog, DogQueryRepository, DogRepository, EnrichedDog, NewDog};
pub use infrastructure::{DogQueryRepositoryImpl, DogRepositoryImpl};
