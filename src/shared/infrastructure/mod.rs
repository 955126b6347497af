/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod database;
pub mod document_store;
pub mod persistence;

// Re-exports for convenience
pub use database::{ensure_indexes, Database};
pub use document_store::{DocumentStore, InMemoryDocumentStore, MongoDocumentStore};
pub use persistence::{DocumentRepository, StoredEntity};
