//! Configuration creation, listing, deletion, and keyword resolution.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{CampaignType, LinkConfig, NewLinkConfig};
use crate::domain::repositories::ConfigRepository;
use crate::domain::validation::validate_new_config;
use crate::error::AppError;

/// Why a keyword resolution produced no redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// No keyword was supplied (empty after trimming).
    Missing,
    /// No configuration exists for the keyword.
    NotFound,
}

impl MissReason {
    /// Returns the wire representation of the miss reason.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotFound => "not_found",
        }
    }
}

/// Outcome of resolving a keyword to a routing decision.
///
/// A hit always carries the configuration's black link; the white link is
/// never returned by resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Redirect {
        url: String,
        keyword: String,
        campaign_type: CampaignType,
    },
    Miss(MissReason),
}

/// Service orchestrating validation, uniqueness enforcement, and storage
/// delegation for link configurations.
///
/// The storage backend is injected once at construction and never branched
/// on per call.
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    /// Creates a new configuration service over the given repository.
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new link configuration.
    ///
    /// Validation and the keyword uniqueness pre-check both resolve before
    /// any mutation; the id and creation timestamps are assigned here, and
    /// `keyword`, `white_link`, and `black_link` are stored trimmed. The
    /// returned record is the backend's stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a field rule failure,
    /// [`AppError::DuplicateKeyword`] if the trimmed keyword is already
    /// taken (checked again atomically by the backend on insert), and
    /// [`AppError::Store`] on backend failure.
    pub async fn create(&self, input: NewLinkConfig) -> Result<LinkConfig, AppError> {
        validate_new_config(&input)?;

        let keyword = input.keyword.trim().to_string();
        if self.repository.find_by_keyword(&keyword).await?.is_some() {
            return Err(AppError::duplicate_keyword(keyword));
        }

        let campaign_type = input.campaign_type.parse::<CampaignType>().map_err(|_| {
            AppError::validation("campaign_type", "Campaign type must be facebook or google")
        })?;

        let now = Utc::now();
        let config = LinkConfig {
            id: Uuid::new_v4(),
            keyword,
            white_link: input.white_link.trim().to_string(),
            black_link: input.black_link.trim().to_string(),
            campaign_type,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(config).await?;
        tracing::info!(keyword = %stored.keyword, id = %stored.id, "Link configuration created");
        Ok(stored)
    }

    /// Lists all configurations, newest first.
    ///
    /// An empty store yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend failure.
    pub async fn list(&self) -> Result<Vec<LinkConfig>, AppError> {
        self.repository.list().await
    }

    /// Deletes a configuration by id. Deletion is permanent.
    ///
    /// Both backends report whether a record existed, so deleting an
    /// unknown id fails the same way regardless of the active store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] for a blank id,
    /// [`AppError::NotFound`] if no configuration has this id (including
    /// ids that are not well-formed UUIDs), and [`AppError::Store`] on
    /// backend failure.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::invalid_argument("ID is required"));
        }

        // An id that is not a UUID cannot identify a stored record.
        let Ok(id) = Uuid::parse_str(id) else {
            return Err(AppError::not_found("Configuration not found"));
        };

        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::not_found("Configuration not found"));
        }

        tracing::info!(%id, "Link configuration deleted");
        Ok(())
    }

    /// Resolves a keyword to a routing decision.
    ///
    /// A blank keyword and an unknown keyword are normal outcomes, not
    /// errors; callers get a [`Resolution::Miss`] with the reason. A hit
    /// returns the configuration's black link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] only on backend failure during lookup.
    pub async fn resolve_keyword(&self, keyword: &str) -> Result<Resolution, AppError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Resolution::Miss(MissReason::Missing));
        }

        match self.repository.find_by_keyword(keyword).await? {
            Some(config) => Ok(Resolution::Redirect {
                url: config.black_link,
                keyword: config.keyword,
                campaign_type: config.campaign_type,
            }),
            None => Ok(Resolution::Miss(MissReason::NotFound)),
        }
    }
}
