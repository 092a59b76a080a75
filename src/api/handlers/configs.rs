//! Handlers for configuration management endpoints (list, create, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::configs::{
    ConfigCreatedResponse, ConfigListResponse, CreateConfigRequest, MessageResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all link configurations, newest first.
///
/// # Endpoint
///
/// `GET /api/configs`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": "6e5e...",
///       "keyword": "promo1",
///       "white_link": "https://a.example",
///       "black_link": "https://b.example",
///       "campaign_type": "facebook",
///       "created_at": "2026-01-01T00:00:00Z",
///       "updated_at": "2026-01-01T00:00:00Z"
///     }
///   ],
///   "count": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 500 on storage backend failure.
pub async fn list_configs_handler(
    State(state): State<AppState>,
) -> Result<Json<ConfigListResponse>, AppError> {
    let configs = state.config_service.list().await?;
    Ok(Json(ConfigListResponse::new(configs)))
}

/// Creates a new link configuration.
///
/// # Endpoint
///
/// `POST /api/configs`
///
/// # Request Body
///
/// ```json
/// {
///   "keyword": "promo1",
///   "white_link": "https://a.example",
///   "black_link": "https://b.example",
///   "campaign_type": "facebook"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field fails validation or the keyword is
/// already taken; 500 on storage backend failure.
pub async fn create_config_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateConfigRequest>,
) -> Result<(StatusCode, Json<ConfigCreatedResponse>), AppError> {
    let config = state.config_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ConfigCreatedResponse::new(config))))
}

/// Permanently deletes a link configuration.
///
/// # Endpoint
///
/// `DELETE /api/configs/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a blank id, 404 Not Found if no
/// configuration has this id, and 500 on storage backend failure.
pub async fn delete_config_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.config_service.delete(&id).await?;
    Ok(Json(MessageResponse::new(
        "Configuration deleted successfully",
    )))
}
