pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

// Re-exports for easy external access
pub use error::ApiError;
pub use handlers::AppState;
pub use router::build_router;
