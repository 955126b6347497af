pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::SeedService;
pub use domain::{SeedOutcome, SeedReport};
