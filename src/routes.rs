//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /api/health`        - Liveness + active storage backend
//! - `GET    /api/configs`       - List configurations (newest first)
//! - `POST   /api/configs`       - Create a configuration
//! - `DELETE /api/configs/{id}`  - Delete a configuration
//! - `GET    /api/check`         - Resolve a keyword to a redirect decision
//!
//! Unmatched `/api/*` routes return a JSON 404 carrying the request path.
//! In production, non-API routes fall back to the built frontend with an
//! `index.html` fallback for client-side routing.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin allow-list from configuration
//! - **Path normalization** - Trailing slash handling

use axum::{
    Json, Router,
    extract::OriginalUri,
    http::StatusCode,
    routing::{delete, get},
};
use serde::Serialize;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers::{
    check_handler, create_config_handler, delete_config_handler, health_handler,
    list_configs_handler,
};
use crate::api::middleware::{cors, tracing};
use crate::config::Config;
use crate::state::AppState;

/// API routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/configs",
            get(list_configs_handler).post(create_config_handler),
        )
        .route("/configs/{id}", delete(delete_config_handler))
        .route("/check", get(check_handler))
        .fallback(api_fallback)
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let mut router = Router::new().nest("/api", api_routes()).with_state(state);

    if let Some(static_dir) = &config.static_dir {
        router = router.fallback_service(spa_service(static_dir));
    }

    let router = router
        .layer(cors::layer(&config.allowed_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Serves the built frontend, falling back to `index.html` so client-side
/// routes resolve after a hard refresh.
fn spa_service(static_dir: &str) -> ServeDir<ServeFile> {
    let index = std::path::Path::new(static_dir).join("index.html");
    ServeDir::new(static_dir).not_found_service(ServeFile::new(index))
}

/// Body returned for unmatched API routes.
#[derive(Serialize)]
struct ApiNotFoundResponse {
    success: bool,
    message: &'static str,
    path: String,
}

/// Fallback for unmatched `/api/*` routes.
async fn api_fallback(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ApiNotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiNotFoundResponse {
            success: false,
            message: "Endpoint not found",
            path: uri.path().to_string(),
        }),
    )
}
