pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::breed::Breed;
pub use repositories::breed_repository::BreedRepository;
