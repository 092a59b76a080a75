#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use keyword_router::application::services::ConfigService;
use keyword_router::infrastructure::persistence::MemoryConfigRepository;
use keyword_router::routes::api_routes;
use keyword_router::state::{AppState, StorageBackend};
use serde_json::json;

pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryConfigRepository::new());
    AppState {
        config_service: Arc::new(ConfigService::new(repository)),
        storage: StorageBackend::Memory,
    }
}

/// API router as mounted in production, over the in-memory backend.
pub fn create_test_app() -> Router {
    Router::new()
        .nest("/api", api_routes())
        .with_state(create_test_state())
}

pub fn config_body(keyword: &str) -> serde_json::Value {
    json!({
        "keyword": keyword,
        "white_link": "https://white.example/landing",
        "black_link": "https://black.example/offer",
        "campaign_type": "facebook",
    })
}
