//! Live Source Integration Tests
//!
//! Exercises the transport, normalizer and repository against a mock HTTP
//! server: envelope tolerance, error classification, degrade policy, and the
//! fire-and-forget view increment.

use arogya::{ContentRepository, FetchError, ServiceConfig};
use mockito::Matcher;

fn config_for(server: &mockito::ServerGuard) -> ServiceConfig {
    ServiceConfig {
        base_url: server.url(),
        timeout_ms: 2_000,
        ..ServiceConfig::default()
    }
}

/// Config pointing at a port nothing listens on.
fn unreachable_config() -> ServiceConfig {
    ServiceConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_ms: 500,
        ..ServiceConfig::default()
    }
}

const ITEMS_BODY: &str = r#"[
    {
        "id": 1,
        "title": "Balanced Diet Essentials",
        "description": "Learn about the importance of a balanced diet.",
        "content_type": "article",
        "url": "https://example.org/balanced-diet",
        "author": "Dr. Sharma",
        "source": "WHO",
        "tags": ["diet"],
        "is_featured": true,
        "is_verified": true,
        "view_count": 10,
        "like_count": 2,
        "share_count": 0,
        "created_at": "2024-01-15T00:00:00Z",
        "updated_at": "2024-01-15T00:00:00Z"
    }
]"#;

#[tokio::test]
async fn test_get_by_category_with_bare_array_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/categories/nutrition/content/")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ITEMS_BODY)
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    let items = repository.get_by_category("nutrition").await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Balanced Diet Essentials");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_by_category_with_paginated_envelope() {
    let mut server = mockito::Server::new_async().await;
    let envelope = format!(
        r#"{{"count": 1, "next": null, "previous": null, "results": {}}}"#,
        ITEMS_BODY
    );
    server
        .mock("GET", "/categories/nutrition/content/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope)
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    let items = repository.get_by_category("nutrition").await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Balanced Diet Essentials");
}

#[tokio::test]
async fn test_empty_category_is_a_success() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/categories/hygiene/content/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    let items = repository.get_by_category("hygiene").await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_unknown_slug_surfaces_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/categories/does-not-exist/content/")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Category with slug does-not-exist not found"}"#)
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    let err = repository
        .get_by_category("does-not-exist")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("does-not-exist"));
}

#[tokio::test]
async fn test_server_failure_keeps_status_classification() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/categories/nutrition/content/")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    let err = repository.get_by_category("nutrition").await.unwrap_err();

    assert!(matches!(err, FetchError::Http { status: 503, .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_classified_distinctly() {
    let repository = ContentRepository::live(&unreachable_config()).unwrap();
    let err = repository.get_by_category("nutrition").await.unwrap_err();

    assert!(matches!(err, FetchError::Unreachable(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_featured_degrades_to_empty_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/content/featured/")
        .with_status(500)
        .with_body(r#"{"detail": "boom"}"#)
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    assert!(repository.featured().await.is_empty());
}

#[tokio::test]
async fn test_featured_degrades_to_empty_when_unreachable() {
    let repository = ContentRepository::live(&unreachable_config()).unwrap();
    assert!(repository.featured().await.is_empty());
}

#[tokio::test]
async fn test_search_sends_url_encoded_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/content/search/")
        .match_query(Matcher::UrlEncoded(
            "q".to_string(),
            "hand washing".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ITEMS_BODY)
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    let items = repository.search("hand washing").await;

    assert_eq!(items.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_degrades_to_empty_on_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/content/search/")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    assert!(repository.search("anything").await.is_empty());
}

#[tokio::test]
async fn test_record_view_posts_to_increment_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/content/42/increment_view/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"view_count": 43}"#)
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    repository.record_view(42).await;
    mock.assert_async().await;
}

#[tokio::test]
async fn test_record_view_never_raises_when_unreachable() {
    let repository = ContentRepository::live(&unreachable_config()).unwrap();
    // Must complete without panicking or surfacing an error
    repository.record_view(42).await;
}

#[tokio::test]
async fn test_malformed_body_is_a_classified_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/categories/nutrition/content/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected": "shape"}"#)
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    let err = repository.get_by_category("nutrition").await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[tokio::test]
async fn test_directory_fetches_catalog_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/categories/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r##"[
                {"id": 2, "name": "Hygiene", "slug": "hygiene", "color": "#2196F3", "order": 2, "is_active": true},
                {"id": 1, "name": "Nutrition", "slug": "nutrition", "color": "#4CAF50", "order": 1, "is_active": true},
                {"id": 3, "name": "Archive", "slug": "archive", "color": "#9E9E9E", "order": 3, "is_active": false}
            ]"##,
        )
        .expect(1)
        .create_async()
        .await;

    let repository = ContentRepository::live(&config_for(&server)).unwrap();
    let directory = repository.directory();

    let first = directory.list_active().await.unwrap();
    let second = directory.list_active().await.unwrap();

    // Sorted by order rank, inactive excluded, one backend fetch total
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].slug, "nutrition");
    assert_eq!(first[1].slug, "hygiene");
    assert_eq!(first, second);

    // Inactive categories still resolve by slug
    let archive = directory.resolve("archive").await.unwrap().unwrap();
    assert!(!archive.is_active);

    mock.assert_async().await;
}
