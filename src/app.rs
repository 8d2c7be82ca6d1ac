use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceInfo;
use crate::docs;
use crate::routes::{health, info, root, users};

#[derive(Clone, Default)]
pub struct AppState {
    pub service: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(service: ServiceInfo) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// API routes only, without the documentation endpoints.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/info", get(info::get_api_info))
        .with_state(state)
}

/// Reduced stand-in application described by [`docs::MinimalApiDoc`].
pub fn minimal_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/test", get(health::self_test))
        .with_state(state)
}

pub fn create_app(state: AppState, port: u16) -> anyhow::Result<Router> {
    let doc = docs::build_openapi(port)?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    let router = api_routes(state)
        .merge(docs::doc_routes(doc)?)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
