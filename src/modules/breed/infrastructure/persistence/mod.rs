pub mod breed_repository_impl;

pub use breed_repository_impl::BreedRepositoryImpl;
