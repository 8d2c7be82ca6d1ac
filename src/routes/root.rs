use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::models::system::Message;

#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses((status = 200, description = "Welcome message", body = Message))
)]
pub async fn root(State(state): State<AppState>) -> Json<Message> {
    Json(Message {
        message: format!("Welcome to {}", state.service.title),
        timestamp: None,
    })
}
