//! Repository trait for link configuration data access.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::LinkConfig;
use crate::error::AppError;

/// Repository interface for storing and resolving link configurations.
///
/// The backend is selected once at startup and injected into
/// [`crate::application::services::ConfigService`]; callers never branch on
/// the implementation per call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SupabaseConfigRepository`] -
///   durable backend (Supabase-hosted PostgreSQL)
/// - [`crate::infrastructure::persistence::MemoryConfigRepository`] -
///   process-local fallback, lost on restart
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Finds a configuration by its keyword (exact, case-sensitive match).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(config))` if found
    /// - `Ok(None)` if no configuration has this keyword
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend failure or timeout.
    async fn find_by_keyword(&self, keyword: &str) -> Result<Option<LinkConfig>, AppError>;

    /// Finds a configuration by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend failure or timeout.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<LinkConfig>, AppError>;

    /// Lists all configurations ordered by `created_at` descending.
    ///
    /// The result is a fresh snapshot computed per call, never a live view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend failure or timeout.
    async fn list(&self) -> Result<Vec<LinkConfig>, AppError>;

    /// Inserts a new, already-validated configuration and returns the stored
    /// copy, which the service treats as canonical.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKeyword`] if the keyword is already
    /// taken; the check is atomic with the write in both implementations,
    /// so concurrent creates for the same keyword cannot both succeed.
    /// Returns [`AppError::Store`] on backend failure or timeout.
    async fn insert(&self, config: LinkConfig) -> Result<LinkConfig, AppError>;

    /// Deletes a configuration by id.
    ///
    /// Returns `Ok(true)` if a record existed and was removed, `Ok(false)`
    /// otherwise. Deletion is permanent; there is no soft-delete state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend failure or timeout.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError>;
}
