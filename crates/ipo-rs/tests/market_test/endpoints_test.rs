use crate::common::setup_client;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
/// MARKET INDICES TESTS
#[tokio::test]
async fn test_get_market_indices() {
    let router = Router::new().route(
        "/market-indices",
        get(|| async {
            Json(json!([
                {"name": "NIFTY 50", "price": 21731.4, "percent": 0.5, "is_positive": true},
                {"name": "SENSEX", "price": 72000.0, "percent": -0.1, "is_positive": false}
            ]))
        }),
    );
    let client = setup_client(router).await;
    let indices = client.get_market_indices().await.unwrap();
    assert_eq!(indices.len(), 2);
    assert_eq!(indices[1].name, "SENSEX");
}
#[tokio::test]
async fn test_get_market_indices_empty() {
    let router = Router::new().route("/market-indices", get(|| async { Json(json!([])) }));
    let client = setup_client(router).await;
    let indices = client.get_market_indices().await.unwrap();
    assert!(indices.is_empty());
}
/// HEALTH TEST
#[tokio::test]
async fn test_get_health() {
    let router = Router::new().route(
        "/",
        get(|| async { Json(json!({"status": "ok", "service": "IPO Tracker Pro API"})) }),
    );
    let client = setup_client(router).await;
    let health = client.get_health().await.unwrap();
    assert_eq!(health.service, "IPO Tracker Pro API");
}
