pub mod breed;

pub use breed::Breed;
