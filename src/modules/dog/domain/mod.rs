pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Dog, EnrichedDog, NewDog};
pub use repositories::{DogQueryRepository, DogRepository};
pub use value_objects::AdoptionStatus;
