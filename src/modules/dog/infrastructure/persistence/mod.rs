pub mod dog_query_repository_impl;
pub mod dog_repository_impl;

pub use dog_query_repository_impl::{breed_join_stages, DogQueryRepositoryImpl};
pub use dog_repository_impl::DogRepositoryImpl;
