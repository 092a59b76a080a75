//! Supabase-backed implementation of the configuration repository.
//!
//! Supabase hosts a PostgreSQL database, so the repository speaks to it over
//! the Postgres wire protocol through a SQLx connection pool. Parameterized
//! queries protect against SQL injection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::domain::entities::{LinkConfig, ParseCampaignTypeError};
use crate::domain::repositories::ConfigRepository;
use crate::error::{AppError, StoreError, is_unique_violation, map_sqlx_error};

const SELECT_COLUMNS: &str =
    "id, keyword, white_link, black_link, campaign_type, created_at, updated_at";

/// Row shape returned by `link_configs` queries.
#[derive(FromRow)]
struct LinkConfigRow {
    id: Uuid,
    keyword: String,
    white_link: String,
    black_link: String,
    campaign_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LinkConfigRow {
    /// Converts a database row into the domain entity.
    ///
    /// A campaign type outside the known set means the stored record cannot
    /// be represented and is reported as a serialization error.
    fn into_entity(self, operation: &'static str) -> Result<LinkConfig, AppError> {
        let campaign_type = self
            .campaign_type
            .parse()
            .map_err(|e: ParseCampaignTypeError| {
                AppError::Store(StoreError::serialization(operation, e.to_string()))
            })?;

        Ok(LinkConfig {
            id: self.id,
            keyword: self.keyword,
            white_link: self.white_link,
            black_link: self.black_link,
            campaign_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Durable configuration repository backed by Supabase PostgreSQL.
///
/// Every query is bounded by the configured timeout; on expiry the
/// operation fails with a timeout [`StoreError`] and the caller must treat
/// the write outcome as unknown. Keyword uniqueness is enforced by a UNIQUE
/// constraint on the `link_configs.keyword` column, so concurrent creates
/// racing past the service-level pre-check still cannot both succeed.
pub struct SupabaseConfigRepository {
    pool: Arc<PgPool>,
    query_timeout: Duration,
}

impl SupabaseConfigRepository {
    /// Creates a new repository over a database connection pool.
    pub fn new(pool: Arc<PgPool>, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Bounds a query future by the configured timeout.
    async fn run<T>(
        &self,
        operation: &'static str,
        query: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(map_sqlx_error(operation, e)),
            Err(_) => Err(AppError::Store(StoreError::timeout(operation))),
        }
    }
}

#[async_trait]
impl ConfigRepository for SupabaseConfigRepository {
    async fn find_by_keyword(&self, keyword: &str) -> Result<Option<LinkConfig>, AppError> {
        const OP: &str = "select link_config by keyword";

        let sql = format!("SELECT {SELECT_COLUMNS} FROM link_configs WHERE keyword = $1");
        let row = self
            .run(
                OP,
                sqlx::query_as::<_, LinkConfigRow>(&sql)
                    .bind(keyword)
                    .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        row.map(|r| r.into_entity(OP)).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LinkConfig>, AppError> {
        const OP: &str = "select link_config by id";

        let sql = format!("SELECT {SELECT_COLUMNS} FROM link_configs WHERE id = $1");
        let row = self
            .run(
                OP,
                sqlx::query_as::<_, LinkConfigRow>(&sql)
                    .bind(id)
                    .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        row.map(|r| r.into_entity(OP)).transpose()
    }

    async fn list(&self) -> Result<Vec<LinkConfig>, AppError> {
        const OP: &str = "list link_configs";

        let sql = format!("SELECT {SELECT_COLUMNS} FROM link_configs ORDER BY created_at DESC");
        let rows = self
            .run(
                OP,
                sqlx::query_as::<_, LinkConfigRow>(&sql).fetch_all(self.pool.as_ref()),
            )
            .await?;

        rows.into_iter().map(|r| r.into_entity(OP)).collect()
    }

    async fn insert(&self, config: LinkConfig) -> Result<LinkConfig, AppError> {
        const OP: &str = "insert link_config";

        let sql = format!(
            "INSERT INTO link_configs \
             (id, keyword, white_link, black_link, campaign_type, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {SELECT_COLUMNS}"
        );
        let query = sqlx::query_as::<_, LinkConfigRow>(&sql)
            .bind(config.id)
            .bind(&config.keyword)
            .bind(&config.white_link)
            .bind(&config.black_link)
            .bind(config.campaign_type.as_str())
            .bind(config.created_at)
            .bind(config.updated_at)
            .fetch_one(self.pool.as_ref());

        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(Ok(row)) => row.into_entity(OP),
            Ok(Err(e)) if is_unique_violation(&e) => {
                Err(AppError::duplicate_keyword(config.keyword))
            }
            Ok(Err(e)) => Err(map_sqlx_error(OP, e)),
            Err(_) => Err(AppError::Store(StoreError::timeout(OP))),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        const OP: &str = "delete link_config by id";

        let result = self
            .run(
                OP,
                sqlx::query("DELETE FROM link_configs WHERE id = $1")
                    .bind(id)
                    .execute(self.pool.as_ref()),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
