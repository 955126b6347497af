use axum::extract::{Path, State};
use axum::Json;

use super::AppState;
use crate::modules::api::dto::{DogDetailResponse, DogSummaryResponse};
use crate::modules::api::error::ApiError;
use crate::shared::utils::logger::LogContext;

/// `GET /api/dogs`: every dog with its breed name, ordered by name
pub async fn list_dogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DogSummaryResponse>>, ApiError> {
    let dogs = state.dog_queries.find_all_with_breed().await.map_err(|e| {
        LogContext::error_with_context(&e, "Error retrieving dogs");
        ApiError::retrieval_failed("dogs")
    })?;

    Ok(Json(dogs.iter().map(DogSummaryResponse::from).collect()))
}

/// `GET /api/dogs/{id}`: unknown and malformed ids are both 404
pub async fn get_dog_handler(
    State(state): State<AppState>,
    Path(dog_id): Path<String>,
) -> Result<Json<DogDetailResponse>, ApiError> {
    let dog = state
        .dog_queries
        .find_by_id_with_breed(&dog_id)
        .await
        .map_err(|e| {
            LogContext::error_with_context(&e, &format!("Error retrieving dog {}", dog_id));
            ApiError::retrieval_failed("dog")
        })?
        .ok_or_else(|| ApiError::not_found("Dog"))?;

    Ok(Json(DogDetailResponse::from(&dog)))
}
