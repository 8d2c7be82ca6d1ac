use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::models::system::{HealthResponse, SelfTestResponse};

pub const HEALTHY: &str = "healthy";

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Service health", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_string(),
        service: state.service.name.to_string(),
        version: state.service.version.to_string(),
    })
}

/// Served only by the reduced router; see [`crate::app::minimal_routes`].
#[utoipa::path(
    get,
    path = "/test",
    tag = "Test",
    responses((status = 200, description = "Self test", body = SelfTestResponse))
)]
pub async fn self_test() -> Json<SelfTestResponse> {
    Json(SelfTestResponse {
        test: "self test passed".to_string(),
        status: "working".to_string(),
    })
}
