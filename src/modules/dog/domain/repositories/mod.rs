pub mod dog_query_repository;
pub mod dog_repository;

pub use dog_query_repository::DogQueryRepository;
pub use dog_repository::DogRepository;
