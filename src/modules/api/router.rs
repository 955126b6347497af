use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{
    get_dog_handler, health_handler, list_breeds_handler, list_dogs_handler, AppState,
};

/// Read-only API; any origin may call it
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/dogs", get(list_dogs_handler))
        .route("/api/dogs/{id}", get(get_dog_handler))
        .route("/api/breeds", get(list_breeds_handler))
        .route("/health", get(health_handler))
        .layer(cors_layer())
        .with_state(state)
}
