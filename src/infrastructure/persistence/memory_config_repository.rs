//! In-memory implementation of the configuration repository.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::LinkConfig;
use crate::domain::repositories::ConfigRepository;
use crate::error::AppError;

/// Process-local configuration store, used when no durable backend is
/// configured. State does not survive a restart.
///
/// The backing collection is owned by the instance and guarded by a single
/// mutex; requests run concurrently, so every operation takes the lock.
/// `insert` re-checks keyword uniqueness while holding it, which makes
/// check-then-insert atomic for this backend.
pub struct MemoryConfigRepository {
    configs: Mutex<Vec<LinkConfig>>,
}

impl MemoryConfigRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self {
            configs: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for MemoryConfigRepository {
    async fn find_by_keyword(&self, keyword: &str) -> Result<Option<LinkConfig>, AppError> {
        let configs = self.configs.lock().await;
        Ok(configs.iter().find(|c| c.keyword == keyword).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LinkConfig>, AppError> {
        let configs = self.configs.lock().await;
        Ok(configs.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<LinkConfig>, AppError> {
        let configs = self.configs.lock().await;
        let mut snapshot = configs.clone();
        // Stable sort: equal timestamps keep insertion order.
        snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(snapshot)
    }

    async fn insert(&self, config: LinkConfig) -> Result<LinkConfig, AppError> {
        let mut configs = self.configs.lock().await;
        if configs.iter().any(|c| c.keyword == config.keyword) {
            return Err(AppError::duplicate_keyword(config.keyword));
        }

        configs.push(config.clone());
        Ok(config)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let mut configs = self.configs.lock().await;
        match configs.iter().position(|c| c.id == id) {
            Some(index) => {
                configs.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
