// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod config; // Process configuration
pub mod domain; // Shared domain concepts (entity capabilities, projections)
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (document store, persistence)
pub mod utils; // Shared utilities
pub mod validation; // Field validation rules

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
pub use infrastructure::{Database, DocumentStore};
