use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::Value;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServiceInfo;
use crate::errors::ErrorResponse;
use crate::models::system::{ApiInfo, HealthResponse, InfoEndpoints, Message, SelfTestResponse};
use crate::models::user::{User, UserCreateRequest};
use crate::routes;

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";
pub const REDOC_PATH: &str = "/redoc";

#[derive(OpenApi)]
#[openapi(
	info(
		description = "API documentation for SynaptiCore Lite, the lightweight edition",
		contact(name = "SynaptiCore Team", email = "support@synapticore.com"),
		license(name = "MIT", url = "https://opensource.org/licenses/MIT")
	),
	paths(
		routes::root::root,
		routes::health::health,
		routes::users::list_users,
		routes::users::get_user,
		routes::users::create_user,
		routes::info::get_api_info
	),
	components(
		schemas(
			User,
			UserCreateRequest,
			HealthResponse,
			Message,
			ApiInfo,
			InfoEndpoints,
			ErrorResponse
		)
	),
	tags(
		(name = "Root", description = "Entry point"),
		(name = "System", description = "Service health"),
		(name = "Users", description = "Demo user directory"),
		(name = "Info", description = "Static API information")
	)
)]
pub struct ApiDoc;

/// The reduced document: greeting, health check and self test.
#[derive(OpenApi)]
#[openapi(
	info(description = "API documentation for SynaptiCore Lite, the lightweight edition"),
	paths(routes::root::root, routes::health::health, routes::health::self_test),
	components(schemas(Message, HealthResponse, SelfTestResponse)),
	tags(
		(name = "Root", description = "Entry point"),
		(name = "System", description = "Service health"),
		(name = "Test", description = "Self test")
	)
)]
pub struct MinimalApiDoc;

pub fn build_openapi(port: u16) -> anyhow::Result<utoipa::openapi::OpenApi> {
	let mut doc = ApiDoc::openapi();
	apply_identity(&mut doc, &ServiceInfo::default());
	ensure_paths(&doc)?;
	ensure_servers(&mut doc, port);
	Ok(doc)
}

pub fn build_minimal_openapi() -> anyhow::Result<utoipa::openapi::OpenApi> {
	let mut doc = MinimalApiDoc::openapi();
	apply_identity(&mut doc, &ServiceInfo::default());
	ensure_paths(&doc)?;
	Ok(doc)
}

/// Router serving the raw document, Swagger UI and ReDoc.
pub fn doc_routes(doc: utoipa::openapi::OpenApi) -> anyhow::Result<Router> {
	let swagger_config = utoipa_swagger_ui::Config::new([OPENAPI_PATH])
		.try_it_out_enabled(true)
		.with_credentials(true);

	let doc_json = Arc::new(serde_json::to_value(&doc)?);

	let json_route = {
		let doc_json = Arc::clone(&doc_json);
		get(move || {
			let doc_json = Arc::clone(&doc_json);
			async move { Json((*doc_json).clone()) }
		})
	};

	Ok(Router::new()
		.route(OPENAPI_PATH, json_route)
		.merge(SwaggerUi::new(DOCS_PATH).config(swagger_config))
		.merge(Redoc::with_url(REDOC_PATH, doc)))
}

/// Number of distinct route paths in a serialized document.
pub fn path_count(doc: &Value) -> usize {
	doc.get("paths")
		.and_then(Value::as_object)
		.map(|paths| paths.len())
		.unwrap_or(0)
}

fn apply_identity(doc: &mut utoipa::openapi::OpenApi, service: &ServiceInfo) {
	doc.info.title = service.title.to_string();
	doc.info.version = service.version.to_string();
}

fn ensure_paths(doc: &utoipa::openapi::OpenApi) -> anyhow::Result<()> {
	if doc.paths.paths.is_empty() {
		anyhow::bail!("OpenAPI document `{}` has no paths", doc.info.title);
	}
	Ok(())
}

fn ensure_servers(doc: &mut utoipa::openapi::OpenApi, port: u16) {
	let server_url = format!("http://localhost:{}", port);

	let servers = doc.servers.get_or_insert_with(Vec::new);
	if !servers.iter().any(|server| server.url == server_url) {
		servers.push(Server::new(server_url));
	}
}
