use crate::common::setup_client;
use axum::routing::post;
use axum::{Json, Router};
use ipo_rs::ipos::models::IpoId;
use ipo_rs::predict::models::Category;
use serde_json::{json, Value};
/// PROFIT PREDICTOR TEST
#[tokio::test]
async fn test_predict_profit() {
    let router = Router::new().route(
        "/predict/profit",
        post(|Json(body): Json<Value>| async move {
            let lots = body["lots"].as_f64().unwrap_or(0.0);
            Json(json!({
                "ipo_name": "Alpha",
                "estimated_profit": 24.0 * 600.0 * lots,
                "investment_amount": 200.0 * 600.0 * lots,
                "gmp": 24.0,
                "lot_size": 600,
                "lots": lots as u32
            }))
        }),
    );
    let client = setup_client(router).await;
    let est = client.predict_profit(&IpoId::Int(1), 2).await.unwrap();
    assert_eq!(est.estimated_profit, 28800.0);
    assert_eq!(est.lots, 2);
}
/// ALLOTMENT PREDICTOR TEST
#[tokio::test]
async fn test_predict_allotment() {
    let router = Router::new().route(
        "/predict/allotment",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "ipo_name": "Alpha",
                "probability": "Low",
                "reasoning": "Lottery basis likely.",
                "category": body["category"].clone()
            }))
        }),
    );
    let client = setup_client(router).await;
    let est = client
        .predict_allotment(&IpoId::Int(1), Category::Hni, 3)
        .await
        .unwrap();
    assert_eq!(est.probability, "Low");
    assert_eq!(est.category, "HNI");
}
