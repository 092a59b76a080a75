//! DTOs for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness response reporting the active storage backend.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub storage: &'static str,
}
