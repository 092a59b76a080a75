//! Link configuration entity mapping a keyword to its routing destinations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Campaign classification attached to a configuration.
///
/// Informational at the core level; the resolution endpoint echoes it back
/// so traffic routers can tag the redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    Facebook,
    Google,
}

impl CampaignType {
    /// Returns the wire representation of the campaign type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Google => "google",
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized campaign type.
#[derive(Debug, thiserror::Error)]
#[error("unknown campaign type: {0}")]
pub struct ParseCampaignTypeError(String);

impl FromStr for CampaignType {
    type Err = ParseCampaignTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(Self::Facebook),
            "google" => Ok(Self::Google),
            other => Err(ParseCampaignTypeError(other.to_string())),
        }
    }
}

/// A keyword-to-destination routing configuration.
///
/// The keyword is the unique lookup key. Resolution returns `black_link`;
/// `white_link` is stored as the alternate destination for routing logic
/// outside this service. Records are immutable after creation, so
/// `updated_at` always equals `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkConfig {
    pub id: Uuid,
    pub keyword: String,
    pub white_link: String,
    pub black_link: String,
    pub campaign_type: CampaignType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new configuration, prior to validation.
///
/// `campaign_type` stays a raw string here; the validator rejects anything
/// outside the [`CampaignType`] set before the service parses it.
#[derive(Debug, Clone)]
pub struct NewLinkConfig {
    pub keyword: String,
    pub white_link: String,
    pub black_link: String,
    pub campaign_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_type_parse() {
        assert_eq!("facebook".parse::<CampaignType>().unwrap(), CampaignType::Facebook);
        assert_eq!("google".parse::<CampaignType>().unwrap(), CampaignType::Google);
    }

    #[test]
    fn test_campaign_type_parse_rejects_unknown() {
        assert!("bing".parse::<CampaignType>().is_err());
        assert!("Facebook".parse::<CampaignType>().is_err());
        assert!("".parse::<CampaignType>().is_err());
    }

    #[test]
    fn test_campaign_type_round_trip() {
        for campaign in [CampaignType::Facebook, CampaignType::Google] {
            assert_eq!(campaign.as_str().parse::<CampaignType>().unwrap(), campaign);
        }
    }

    #[test]
    fn test_campaign_type_serializes_lowercase() {
        let json = serde_json::to_string(&CampaignType::Facebook).unwrap();
        assert_eq!(json, "\"facebook\"");
    }

    #[test]
    fn test_link_config_construction() {
        let now = Utc::now();
        let config = LinkConfig {
            id: Uuid::new_v4(),
            keyword: "promo1".to_string(),
            white_link: "https://a.example".to_string(),
            black_link: "https://b.example".to_string(),
            campaign_type: CampaignType::Facebook,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(config.keyword, "promo1");
        assert_eq!(config.created_at, config.updated_at);
    }
}
