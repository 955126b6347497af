use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures a route reports to the client; the message is the response's `error` field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Failed to retrieve {resource}")]
    RetrievalFailed { resource: String },
}

impl ApiError {
    pub fn not_found(resource: &str) -> Self {
        ApiError::NotFound {
            resource: resource.to_string(),
        }
    }

    pub fn retrieval_failed(resource: &str) -> Self {
        ApiError::RetrievalFailed {
            resource: resource.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RetrievalFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
