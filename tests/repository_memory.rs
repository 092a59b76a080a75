use chrono::{DateTime, Duration, Utc};
use keyword_router::domain::entities::{CampaignType, LinkConfig};
use keyword_router::domain::repositories::ConfigRepository;
use keyword_router::error::AppError;
use keyword_router::infrastructure::persistence::MemoryConfigRepository;
use uuid::Uuid;

fn config_at(keyword: &str, created_at: DateTime<Utc>) -> LinkConfig {
    LinkConfig {
        id: Uuid::new_v4(),
        keyword: keyword.to_string(),
        white_link: "https://white.example/landing".to_string(),
        black_link: "https://black.example/offer".to_string(),
        campaign_type: CampaignType::Google,
        created_at,
        updated_at: created_at,
    }
}

#[tokio::test]
async fn test_insert_and_find_by_keyword() {
    let repo = MemoryConfigRepository::new();

    let config = config_at("promo1", Utc::now());
    let stored = repo.insert(config.clone()).await.unwrap();
    assert_eq!(stored, config);

    let found = repo.find_by_keyword("promo1").await.unwrap();
    assert_eq!(found, Some(config));
}

#[tokio::test]
async fn test_find_by_keyword_is_case_sensitive() {
    let repo = MemoryConfigRepository::new();

    repo.insert(config_at("promo1", Utc::now())).await.unwrap();

    assert!(repo.find_by_keyword("Promo1").await.unwrap().is_none());
    assert!(repo.find_by_keyword("PROMO1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = MemoryConfigRepository::new();

    let config = config_at("promo1", Utc::now());
    let id = config.id;
    repo.insert(config).await.unwrap();

    assert!(repo.find_by_id(id).await.unwrap().is_some());
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_rejects_duplicate_keyword() {
    let repo = MemoryConfigRepository::new();

    repo.insert(config_at("promo1", Utc::now())).await.unwrap();

    let result = repo.insert(config_at("promo1", Utc::now())).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::DuplicateKeyword { .. }
    ));

    // The rejected insert left a single record behind.
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let repo = MemoryConfigRepository::new();

    let base = Utc::now();
    let oldest = config_at("oldest", base - Duration::minutes(2));
    let middle = config_at("middle", base - Duration::minutes(1));
    let newest = config_at("newest", base);

    // Insertion order deliberately differs from timestamp order.
    repo.insert(middle).await.unwrap();
    repo.insert(newest).await.unwrap();
    repo.insert(oldest).await.unwrap();

    let keywords: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.keyword)
        .collect();

    assert_eq!(keywords, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_list_breaks_timestamp_ties_by_insertion_order() {
    let repo = MemoryConfigRepository::new();

    let now = Utc::now();
    repo.insert(config_at("first", now)).await.unwrap();
    repo.insert(config_at("second", now)).await.unwrap();

    let keywords: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.keyword)
        .collect();

    assert_eq!(keywords, vec!["first", "second"]);
}

#[tokio::test]
async fn test_list_is_a_snapshot() {
    let repo = MemoryConfigRepository::new();

    repo.insert(config_at("promo1", Utc::now())).await.unwrap();
    let snapshot = repo.list().await.unwrap();

    repo.insert(config_at("promo2", Utc::now())).await.unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_by_id_reports_existence() {
    let repo = MemoryConfigRepository::new();

    let config = config_at("promo1", Utc::now());
    let id = config.id;
    repo.insert(config).await.unwrap();

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(repo.find_by_keyword("promo1").await.unwrap().is_none());

    // Second delete finds nothing.
    assert!(!repo.delete_by_id(id).await.unwrap());
    assert!(!repo.delete_by_id(Uuid::new_v4()).await.unwrap());
}
