use crate::common::setup_client;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
/// NEWS TESTS
#[tokio::test]
async fn test_get_news() {
    let router = Router::new().route(
        "/news",
        get(|| async {
            Json(json!([
                {"id": "1", "title": "SME boom", "summary": "s", "published_at": "2024-01-02T00:00:00Z",
                 "link": "https://example.com/1", "source": "ET"}
            ]))
        }),
    );
    let client = setup_client(router).await;
    let news = client.get_news().await.unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "SME boom");
}
