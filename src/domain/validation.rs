//! Validation rules for incoming link configurations.
//!
//! Rules are checked in a fixed order and the first failure wins, so a
//! request with several bad fields reports the earliest one. Validation is
//! pure: it never touches storage.

use url::Url;

use crate::domain::entities::{CampaignType, NewLinkConfig};
use crate::error::AppError;

/// Validates a candidate configuration before it is persisted.
///
/// # Rules (in order)
///
/// 1. `keyword` - at least 2 characters after trimming surrounding whitespace
/// 2. `white_link` - well-formed absolute URL with an `http`/`https` scheme
/// 3. `black_link` - same as `white_link`
/// 4. `campaign_type` - one of `facebook`, `google`
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the first offending field.
pub fn validate_new_config(input: &NewLinkConfig) -> Result<(), AppError> {
    if input.keyword.trim().chars().count() < 2 {
        return Err(AppError::validation(
            "keyword",
            "Keyword is required (minimum 2 characters)",
        ));
    }

    if !is_http_url(input.white_link.trim()) {
        return Err(AppError::validation(
            "white_link",
            "White link must be a valid URL",
        ));
    }

    if !is_http_url(input.black_link.trim()) {
        return Err(AppError::validation(
            "black_link",
            "Black link must be a valid URL",
        ));
    }

    if input.campaign_type.parse::<CampaignType>().is_err() {
        return Err(AppError::validation(
            "campaign_type",
            "Campaign type must be facebook or google",
        ));
    }

    Ok(())
}

/// Returns true if the input parses as an absolute `http` or `https` URL.
///
/// No reachability check is performed; this is purely syntactic.
fn is_http_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewLinkConfig {
        NewLinkConfig {
            keyword: "promo1".to_string(),
            white_link: "https://a.example".to_string(),
            black_link: "https://b.example".to_string(),
            campaign_type: "facebook".to_string(),
        }
    }

    fn assert_fails_on(input: NewLinkConfig, expected_field: &str) {
        match validate_new_config(&input) {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation error on {expected_field}, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_new_config(&valid_input()).is_ok());
    }

    #[test]
    fn test_keyword_too_short() {
        let mut input = valid_input();
        input.keyword = "a".to_string();
        assert_fails_on(input, "keyword");
    }

    #[test]
    fn test_keyword_empty() {
        let mut input = valid_input();
        input.keyword = String::new();
        assert_fails_on(input, "keyword");
    }

    #[test]
    fn test_keyword_whitespace_padding_does_not_count() {
        let mut input = valid_input();
        input.keyword = "  a  ".to_string();
        assert_fails_on(input, "keyword");
    }

    #[test]
    fn test_keyword_two_chars_after_trim_passes() {
        let mut input = valid_input();
        input.keyword = "  ab  ".to_string();
        assert!(validate_new_config(&input).is_ok());
    }

    #[test]
    fn test_white_link_not_a_url() {
        let mut input = valid_input();
        input.white_link = "not a url".to_string();
        assert_fails_on(input, "white_link");
    }

    #[test]
    fn test_white_link_missing() {
        let mut input = valid_input();
        input.white_link = String::new();
        assert_fails_on(input, "white_link");
    }

    #[test]
    fn test_white_link_rejects_non_http_scheme() {
        let mut input = valid_input();
        input.white_link = "ftp://a.example/file".to_string();
        assert_fails_on(input, "white_link");
    }

    #[test]
    fn test_black_link_not_a_url() {
        let mut input = valid_input();
        input.black_link = "example.com".to_string();
        assert_fails_on(input, "black_link");
    }

    #[test]
    fn test_black_link_rejects_javascript_scheme() {
        let mut input = valid_input();
        input.black_link = "javascript:alert(1)".to_string();
        assert_fails_on(input, "black_link");
    }

    #[test]
    fn test_campaign_type_rejects_unknown() {
        let mut input = valid_input();
        input.campaign_type = "bing".to_string();
        assert_fails_on(input, "campaign_type");
    }

    #[test]
    fn test_http_scheme_is_accepted() {
        let mut input = valid_input();
        input.white_link = "http://a.example/landing".to_string();
        input.black_link = "http://b.example/offer".to_string();
        assert!(validate_new_config(&input).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // Both keyword and links are invalid; the keyword rule fires first.
        let input = NewLinkConfig {
            keyword: "x".to_string(),
            white_link: "nope".to_string(),
            black_link: "nope".to_string(),
            campaign_type: "bing".to_string(),
        };
        assert_fails_on(input, "keyword");
    }
}
