use crate::common::{sample_ipos_json, setup_client, setup_dead_client};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ipo_rs::ipos::models::*;
use ipo_rs::IpoError;
use serde_json::{json, Value};
/// IPO LIST TESTS
#[tokio::test]
async fn test_get_ipos() {
    let router = Router::new().route("/ipos", get(|| async { Json(sample_ipos_json()) }));
    let client = setup_client(router).await;
    let result = client.get_ipos().await;
    assert!(result.is_ok(), "Failed to get ipos: {:?}", result.err());
    let ipos = result.unwrap();
    assert_eq!(ipos.len(), 2);
    assert_eq!(ipos[1].name, "Beta Industries");
}
#[tokio::test]
async fn test_get_ipos_server_error_maps_to_status() {
    let router = Router::new().route(
        "/ipos",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = setup_client(router).await;
    let err = client.get_ipos().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("boom"));
}
#[tokio::test]
async fn test_get_ipos_bad_payload_is_parse_failure() {
    let router = Router::new().route("/ipos", get(|| async { "<html>maintenance</html>" }));
    let client = setup_client(router).await;
    let err = client.get_ipos().await.unwrap_err();
    assert!(matches!(err, IpoError::Other(_)));
    assert!(err.to_string().contains("maintenance"));
}
#[tokio::test]
async fn test_get_ipos_unreachable_host() {
    let client = setup_dead_client();
    let err = client.get_ipos().await.unwrap_err();
    assert!(matches!(err, IpoError::RequestError(_)));
}
/// SINGLE IPO TEST
#[tokio::test]
async fn test_get_single_ipo() {
    let router = Router::new().route(
        "/ipos/:id",
        get(|Path(id): Path<i64>| async move {
            Json(json!({
                "id": id,
                "name": "Alpha Tech",
                "type": "SME",
                "status": "Open",
                "current_gmp": 18.0,
                "subscriptions": [
                    {"category": "Retail", "times_subscribed": 4.2},
                    {"category": "Total", "times_subscribed": 6.0}
                ]
            }))
        }),
    );
    let client = setup_client(router).await;
    let detail = client.get_ipo(&IpoId::Int(17)).await.unwrap();
    assert_eq!(detail.ipo.id, IpoId::Int(17));
    assert_eq!(detail.subscriptions.len(), 2);
    assert_eq!(detail.retail_subscription_x(), Some(4.2));
    assert_eq!(detail.gmp(), 18.0);
}
/// VOTE TESTS
#[tokio::test]
async fn test_vote_posts_vote_type() {
    let router = Router::new().route(
        "/ipos/:id/vote",
        post(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
            assert_eq!(id, 3);
            let bullish = if body["vote_type"] == "bullish" { 11 } else { 10 };
            Json(json!({"status": "success", "bullish": bullish, "bearish": 2}))
        }),
    );
    let client = setup_client(router).await;
    let resp = client.vote(&IpoId::Int(3), VoteType::Bullish).await.unwrap();
    assert_eq!(resp.status, "success");
    assert_eq!(resp.bullish, 11);
    assert_eq!(resp.bearish, 2);
}
#[tokio::test]
async fn test_vote_unknown_ipo() {
    let router = Router::new().route(
        "/ipos/:id/vote",
        post(|| async { (StatusCode::NOT_FOUND, Json(json!({"detail": "IPO not found"}))) }),
    );
    let client = setup_client(router).await;
    let err = client.vote(&IpoId::Int(404), VoteType::Bearish).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}
