//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ConfigService;

/// Storage backend selected at startup, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Supabase,
    Memory,
}

impl StorageBackend {
    /// Returns the wire representation used in the health response.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supabase => "supabase",
            Self::Memory => "memory",
        }
    }
}

/// Application state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub config_service: Arc<ConfigService>,
    pub storage: StorageBackend,
}
