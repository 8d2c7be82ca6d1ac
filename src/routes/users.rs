use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::Json;

use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::extract::ValidatedJson;
use crate::models::user::{User, UserCreateRequest};

/// Id handed out by `create_user`; the directory never grows.
pub const CREATED_USER_ID: i64 = 3;

fn demo_user(id: i64, full_name: &str) -> User {
    User {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        full_name: Some(full_name.to_string()),
        is_active: true,
    }
}

pub fn demo_users() -> Vec<User> {
    vec![demo_user(1, "First User"), demo_user(2, "Second User")]
}

pub fn find_demo_user(id: i64) -> Option<User> {
    demo_users().into_iter().find(|user| user.id == id)
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses((status = 200, description = "List users", body = [User]))
)]
pub async fn list_users() -> Json<Vec<User>> {
    Json(demo_users())
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User detail", body = User),
        (status = 400, description = "User id is not an integer", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(user_id: Result<Path<i64>, PathRejection>) -> AppResult<Json<User>> {
    let Path(user_id) = user_id.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    find_demo_user(user_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("user {user_id} does not exist")))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserCreateRequest,
    responses(
        (status = 200, description = "User created (not persisted)", body = User),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create_user(
    ValidatedJson(payload): ValidatedJson<UserCreateRequest>,
) -> Json<User> {
    let user = User::from_request(CREATED_USER_ID, payload);
    tracing::debug!(username = %user.username, "accepted user creation (not persisted)");
    Json(user)
}
