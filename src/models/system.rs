use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "SynaptiCore Lite")]
    pub service: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    #[schema(example = "Welcome to SynaptiCore Lite API")]
    pub message: String,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoEndpoints {
    #[schema(example = "/docs")]
    pub docs: String,
    #[schema(example = "/redoc")]
    pub redoc: String,
    #[schema(example = "/openapi.json")]
    pub openapi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiInfo {
    #[schema(example = "SynaptiCore Lite API")]
    pub name: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub description: String,
    pub features: Vec<String>,
    pub endpoints: InfoEndpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelfTestResponse {
    #[schema(example = "self test passed")]
    pub test: String,
    #[schema(example = "working")]
    pub status: String,
}
