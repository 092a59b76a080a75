//! Handler for the keyword resolution endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::check::{CheckParams, CheckResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a keyword to a redirect decision.
///
/// # Endpoint
///
/// `GET /api/check?keyword=promo1`
///
/// # Response
///
/// On a hit, the configuration's **black** link:
///
/// ```json
/// {
///   "redirect": true,
///   "url": "https://b.example",
///   "keyword": "promo1",
///   "campaign_type": "facebook"
/// }
/// ```
///
/// A missing or unknown keyword is a normal 200 response with
/// `redirect: false` and a `reason`; it is never an error status.
///
/// # Errors
///
/// Returns 500 only on storage backend failure during lookup.
pub async fn check_handler(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> Result<Json<CheckResponse>, AppError> {
    let resolution = state.config_service.resolve_keyword(&params.keyword).await?;
    Ok(Json(CheckResponse::from(resolution)))
}
