pub mod models;
pub mod persistence;

pub use models::BreedDocument;
pub use persistence::BreedRepositoryImpl;
