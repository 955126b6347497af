use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::AppState;
use crate::modules::api::dto::{HealthResponse, UnhealthyResponse};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

async fn collection_counts(state: &AppState) -> AppResult<(u64, u64)> {
    let breeds = state.breeds.count().await?;
    let dogs = state.dogs.count().await?;
    Ok((breeds, dogs))
}

/// `GET /health`: counts both collections as a connectivity check.
///
/// Returns 500 with the store error when either count fails.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    match collection_counts(&state).await {
        Ok((breeds_count, dogs_count)) => Json(HealthResponse {
            status: "healthy",
            database: "connected",
            breeds_count,
            dogs_count,
        })
        .into_response(),
        Err(e) => {
            LogContext::error_with_context(&e, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UnhealthyResponse {
                    status: "unhealthy",
                    database: "disconnected",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
