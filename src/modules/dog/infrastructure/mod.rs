pub mod models;
pub mod persistence;

pub use models::{DogDocument, EnrichedDogRow};
pub use persistence::{DogQueryRepositoryImpl, DogRepositoryImpl};
