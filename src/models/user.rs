use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "user1")]
    pub username: String,
    #[schema(example = "user1@example.com")]
    pub email: String,
    #[schema(example = "First User")]
    pub full_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserCreateRequest {
    #[schema(example = "user3")]
    pub username: String,
    #[schema(example = "user3@example.com")]
    pub email: String,
    #[schema(example = "Third User")]
    pub full_name: Option<String>,
}

impl User {
    /// Materialize a create request under the given id. Nothing is stored.
    pub fn from_request(id: i64, request: UserCreateRequest) -> Self {
        Self {
            id,
            username: request.username,
            email: request.email,
            full_name: request.full_name,
            is_active: true,
        }
    }
}
