//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup. No variable is strictly
//! required: without a database URL the service runs on the in-memory
//! fallback store.
//!
//! ## Variables
//!
//! - `SUPABASE_DB_URL` / `DATABASE_URL` - Postgres connection string for the
//!   durable backend (Supabase connection pooler URL in production). When
//!   unset, configurations live in process memory and are lost on restart.
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`); alternatively
//!   `PORT` to bind `0.0.0.0:<port>`
//! - `APP_ENV` - `development` (default) or `production`
//! - `ALLOWED_ORIGINS` - Comma-separated CORS origin allow-list. Defaults to
//!   the local frontend ports in development, empty in production.
//! - `STATIC_DIR` - Frontend build directory served in production
//!   (default: `dist`)
//! - `STORE_TIMEOUT_SECONDS` - Per-query bound on durable storage calls
//!   (default: 5)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::fmt;
use std::time::Duration;

/// Deployment mode, which drives CORS defaults and static asset serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
        })
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Durable backend connection string; `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub environment: Environment,
    /// CORS origin allow-list handed to the CORS middleware.
    pub allowed_origins: Vec<String>,
    /// Frontend build directory; `Some` only in production.
    pub static_dir: Option<String>,
    /// Upper bound applied to every durable storage query.
    pub store_timeout: Duration,
    pub db_max_connections: u32,
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("SUPABASE_DB_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .ok();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| {
            env::var("PORT")
                .map(|port| format!("0.0.0.0:{port}"))
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        });

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let environment = match env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        };

        let allowed_origins = Self::load_allowed_origins(environment);

        let static_dir = environment
            .is_production()
            .then(|| env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string()));

        let store_timeout_seconds: u64 = env::var("STORE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            environment,
            allowed_origins,
            static_dir,
            store_timeout: Duration::from_secs(store_timeout_seconds),
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads the CORS allow-list, defaulting to the local frontend ports in
    /// development and to an empty list in production.
    fn load_allowed_origins(environment: Environment) -> Vec<String> {
        if let Ok(origins) = env::var("ALLOWED_ORIGINS") {
            return origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        match environment {
            Environment::Development => vec![
                "http://localhost:4200".to_string(),
                "http://localhost:3000".to_string(),
            ],
            Environment::Production => Vec::new(),
        }
    }
}
