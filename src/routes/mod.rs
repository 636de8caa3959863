//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/api` routes sit behind the token layer and a permissive CORS layer.
//! The OpenAPI document and Swagger UI under `/api/docs` are public.
//! Everything else is served from the public directory, which holds the
//! console page and the gate's WASM bundle under `/pkg`. The page loads the
//! gate first, so browsers reach `/api` with the `auth_token` cookie set.

pub mod auth;
pub mod deploy;
pub mod echo;
pub mod logs;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{any, get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

pub const DOCS_PATH: &str = "/api/docs";
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(deploy::handler, echo::handler, logs::handler),
    components(schemas(deploy::WebhookPayload, deploy::Repository))
)]
pub struct ApiDoc;

/// Token-protected API routes. Layers only wrap the routes declared above
/// them, so anything merged afterwards stays public.
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/echo", any(echo::handler))
        .route("/api/deploy", post(deploy::handler))
        .route("/api/logs/{service}/{lines}", get(logs::handler))
        .layer(middleware::from_fn_with_state(state, auth::require_token))
        .layer(CorsLayer::permissive())
}

/// Full application router.
pub fn app(state: AppState, public_dir: &Path) -> Router {
    let public = ServeDir::new(public_dir).append_index_html_on_directories(true);

    Router::new()
        .merge(api_routes(state.clone()))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .route("/healthz", get(healthz))
        .fallback_service(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
