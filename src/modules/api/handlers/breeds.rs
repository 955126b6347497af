use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::modules::api::dto::BreedResponse;
use crate::modules::api::error::ApiError;
use crate::shared::utils::logger::LogContext;

/// `GET /api/breeds`: every breed, ordered by name
pub async fn list_breeds_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BreedResponse>>, ApiError> {
    let breeds = state.breeds.find_all().await.map_err(|e| {
        LogContext::error_with_context(&e, "Error retrieving breeds");
        ApiError::retrieval_failed("breeds")
    })?;

    Ok(Json(breeds.iter().map(BreedResponse::from).collect()))
}
