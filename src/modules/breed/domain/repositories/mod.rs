pub mod breed_repository;

pub use breed_repository::BreedRepository;
