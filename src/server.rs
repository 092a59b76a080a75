//! HTTP server initialization and runtime setup.
//!
//! Handles storage backend selection, state construction, and the Axum
//! server lifecycle.

use crate::application::services::ConfigService;
use crate::config::Config;
use crate::domain::repositories::ConfigRepository;
use crate::infrastructure::persistence::{MemoryConfigRepository, SupabaseConfigRepository};
use crate::routes::app_router;
use crate::state::{AppState, StorageBackend};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// The storage backend is selected exactly once at startup and injected
/// into the configuration service; request handling never branches on it
/// again.
///
/// # Errors
///
/// Returns an error if:
/// - Database migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, storage) = select_backend(&config).await?;

    let state = AppState {
        config_service: Arc::new(ConfigService::new(repository)),
        storage,
    };

    let app = app_router(state, &config);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Selects the storage backend: durable Supabase storage when a database
/// URL is configured and reachable, the in-memory fallback otherwise.
///
/// Migrations run against the durable backend before it is handed out, so
/// every repository sees the `link_configs` table with its keyword
/// uniqueness constraint in place.
async fn select_backend(config: &Config) -> Result<(Arc<dyn ConfigRepository>, StorageBackend)> {
    let Some(database_url) = &config.database_url else {
        tracing::info!("No database configured, using in-memory storage");
        let repository: Arc<dyn ConfigRepository> = Arc::new(MemoryConfigRepository::new());
        return Ok((repository, StorageBackend::Memory));
    };

    let connected = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await;

    match connected {
        Ok(pool) => {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Connected to Supabase database");

            let repository: Arc<dyn ConfigRepository> = Arc::new(SupabaseConfigRepository::new(
                Arc::new(pool),
                config.store_timeout,
            ));
            Ok((repository, StorageBackend::Supabase))
        }
        Err(e) => {
            tracing::warn!("Failed to connect to database: {e}. Using in-memory storage.");
            let repository: Arc<dyn ConfigRepository> = Arc::new(MemoryConfigRepository::new());
            Ok((repository, StorageBackend::Memory))
        }
    }
}
