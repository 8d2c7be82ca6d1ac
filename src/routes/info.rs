use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::docs::{DOCS_PATH, OPENAPI_PATH, REDOC_PATH};
use crate::models::system::{ApiInfo, InfoEndpoints};

const FEATURES: [&str; 3] = ["User management", "Service health checks", "Automatic API documentation"];

#[utoipa::path(
    get,
    path = "/info",
    tag = "Info",
    responses((status = 200, description = "Static API information", body = ApiInfo))
)]
pub async fn get_api_info(State(state): State<AppState>) -> Json<ApiInfo> {
    Json(ApiInfo {
        name: state.service.title.to_string(),
        version: state.service.version.to_string(),
        description: format!("API for the lightweight edition of {}", state.service.name),
        features: FEATURES.iter().map(|feature| feature.to_string()).collect(),
        endpoints: InfoEndpoints {
            docs: DOCS_PATH.to_string(),
            redoc: REDOC_PATH.to_string(),
            openapi: OPENAPI_PATH.to_string(),
        },
    })
}
