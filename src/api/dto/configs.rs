//! DTOs for configuration management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{CampaignType, LinkConfig, NewLinkConfig};

/// Request to create a new link configuration.
///
/// Missing fields deserialize to empty strings so the validator can report
/// them as field errors instead of the request failing at the JSON layer.
#[derive(Debug, Deserialize)]
pub struct CreateConfigRequest {
    #[serde(default)]
    pub keyword: String,

    #[serde(default)]
    pub white_link: String,

    #[serde(default)]
    pub black_link: String,

    #[serde(default)]
    pub campaign_type: String,
}

impl From<CreateConfigRequest> for NewLinkConfig {
    fn from(request: CreateConfigRequest) -> Self {
        Self {
            keyword: request.keyword,
            white_link: request.white_link,
            black_link: request.black_link,
            campaign_type: request.campaign_type,
        }
    }
}

/// JSON representation of a stored configuration.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub id: Uuid,
    pub keyword: String,
    pub white_link: String,
    pub black_link: String,
    pub campaign_type: CampaignType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LinkConfig> for ConfigResponse {
    fn from(config: LinkConfig) -> Self {
        Self {
            id: config.id,
            keyword: config.keyword,
            white_link: config.white_link,
            black_link: config.black_link,
            campaign_type: config.campaign_type,
            created_at: config.created_at,
            updated_at: config.updated_at,
        }
    }
}

/// Response for the configuration listing endpoint.
#[derive(Debug, Serialize)]
pub struct ConfigListResponse {
    pub success: bool,
    pub data: Vec<ConfigResponse>,
    pub count: usize,
}

impl ConfigListResponse {
    pub fn new(configs: Vec<LinkConfig>) -> Self {
        let data: Vec<ConfigResponse> = configs.into_iter().map(ConfigResponse::from).collect();
        let count = data.len();
        Self {
            success: true,
            data,
            count,
        }
    }
}

/// Response returned after a configuration is created.
#[derive(Debug, Serialize)]
pub struct ConfigCreatedResponse {
    pub success: bool,
    pub data: ConfigResponse,
    pub message: String,
}

impl ConfigCreatedResponse {
    pub fn new(config: LinkConfig) -> Self {
        Self {
            success: true,
            data: ConfigResponse::from(config),
            message: "Configuration created successfully".to_string(),
        }
    }
}

/// Generic success acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
