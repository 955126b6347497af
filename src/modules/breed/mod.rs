pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{Breed, BreedRepository};
pub use infrastructure::BreedRepositoryImpl;
