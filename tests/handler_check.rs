mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

#[tokio::test]
async fn test_check_resolves_to_black_link() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    server
        .post("/api/configs")
        .json(&common::config_body("promo1"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/api/check")
        .add_query_param("keyword", "promo1")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["redirect"], true);
    assert_eq!(body["url"], "https://black.example/offer");
    assert_eq!(body["keyword"], "promo1");
    assert_eq!(body["campaign_type"], "facebook");
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn test_check_never_returns_white_link() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    server
        .post("/api/configs")
        .json(&common::config_body("promo1"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/api/check")
        .add_query_param("keyword", "promo1")
        .await;

    let body = response.json::<serde_json::Value>();
    assert_ne!(body["url"], "https://white.example/landing");
}

#[tokio::test]
async fn test_check_without_keyword_param() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.get("/api/check").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["redirect"], false);
    assert_eq!(body["reason"], "missing");
    assert_eq!(body["message"], "Keyword not provided");
    assert!(body.get("url").is_none());
}

#[tokio::test]
async fn test_check_with_empty_keyword() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.get("/api/check").add_query_param("keyword", "").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["reason"], "missing");
}

#[tokio::test]
async fn test_check_with_whitespace_only_keyword() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server
        .get("/api/check")
        .add_query_param("keyword", "   ")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["reason"], "missing");
}

#[tokio::test]
async fn test_check_unknown_keyword_is_not_an_error() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server
        .get("/api/check")
        .add_query_param("keyword", "doesnotexist")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["redirect"], false);
    assert_eq!(body["reason"], "not_found");
    assert_eq!(body["message"], "Keyword not found");
    assert!(body.get("url").is_none());
    assert!(body.get("campaign_type").is_none());
}

#[tokio::test]
async fn test_check_trims_keyword_before_lookup() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    server
        .post("/api/configs")
        .json(&common::config_body("promo1"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/api/check")
        .add_query_param("keyword", "  promo1  ")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["redirect"], true);
}

#[tokio::test]
async fn test_check_keyword_is_case_sensitive() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    server
        .post("/api/configs")
        .json(&common::config_body("promo1"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/api/check")
        .add_query_param("keyword", "PROMO1")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["reason"], "not_found");
}
