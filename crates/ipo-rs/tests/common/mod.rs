use axum::Router;
use ipo_rs::IpoClient;
use tokio::net::TcpListener;


/// Serve `router` on an ephemeral local port and point a client at it.
pub async fn setup_client(router: Router) -> IpoClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server crashed");
    });
    IpoClient::new_with_config(Some(format!("http://{addr}/")))
}


/// Client pointed at a port nothing listens on.
pub fn setup_dead_client() -> IpoClient {
    IpoClient::new_with_config(Some("http://127.0.0.1:9".to_string()))
}


pub fn sample_ipos_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Alpha Tech",
            "symbol": "ALPHA",
            "ipo_type": "SME",
            "type": "SME",
            "gmp": 24.0,
            "growth_percent": 12.0,
            "listing_date": "2024-01-01",
            "base_price": 200.0,
            "status": "Open",
            "price_band": "190-200",
            "trend": [{"price": 20.0, "date": "2023-12-28"}, {"price": 24.0, "date": "2023-12-29"}],
            "lot_size": 600,
            "kostak_rate": null,
            "retail_subscription_x": 3.5,
            "allotment_url": null,
            "sentiment_bullish": 4,
            "sentiment_bearish": 1
        },
        {
            "id": 2,
            "name": "Beta Industries",
            "symbol": null,
            "type": "Mainboard",
            "gmp": -3.0,
            "growth_percent": -3.0,
            "listing_date": null,
            "status": "Closed",
            "trend": []
        }
    ])
}
