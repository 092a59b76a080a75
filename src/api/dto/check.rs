//! DTOs for the keyword resolution endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::{MissReason, Resolution};
use crate::domain::entities::CampaignType;

/// Query parameters accepted by `GET /api/check`.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    #[serde(default)]
    pub keyword: String,
}

/// Resolution outcome as returned on the wire.
///
/// A miss is a normal response, never an error status; `reason` and
/// `message` are only present on misses, the routing fields only on hits.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub redirect: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<CampaignType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<Resolution> for CheckResponse {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Redirect {
                url,
                keyword,
                campaign_type,
            } => Self {
                redirect: true,
                url: Some(url),
                keyword: Some(keyword),
                campaign_type: Some(campaign_type),
                reason: None,
                message: None,
            },
            Resolution::Miss(reason) => Self {
                redirect: false,
                url: None,
                keyword: None,
                campaign_type: None,
                reason: Some(reason.as_str()),
                message: Some(match reason {
                    MissReason::Missing => "Keyword not provided",
                    MissReason::NotFound => "Keyword not found",
                }),
            },
        }
    }
}
