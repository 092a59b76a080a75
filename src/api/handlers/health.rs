//! Handler for the health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness and the storage backend selected at startup.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "keyword-router API is running",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "storage": "supabase"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "keyword-router API is running".to_string(),
        timestamp: Utc::now(),
        storage: state.storage.as_str(),
    })
}
