pub mod records;

pub use records::{BreedRecord, DogRecord, SeedOutcome, SeedReport};
