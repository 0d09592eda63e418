use ipo_rs::market::models::*;
#[test]


fn test_market_index_deserialization() {
    let json = r#"{"name":"NIFTY 50","price":21731.4,"percent":-0.42,"is_positive":false}"#;
    let idx: MarketIndex = serde_json::from_str(json).unwrap();
    assert_eq!(idx.name, "NIFTY 50");
    assert!(!idx.is_positive);
    assert_eq!(idx.change, None);
}
#[test]


fn test_market_index_null_columns_read_as_zero() {
    let json = r#"[{"name":"NIFTY 50","price":21731.4,"percent":0.5,"is_positive":true},
        {"name":"BANK NIFTY","price":null,"percent":null,"is_positive":null}]"#;
    let indices: Vec<MarketIndex> = serde_json::from_str(json).unwrap();
    assert_eq!(indices.len(), 2);
    assert_eq!(indices[1].price, 0.0);
    assert_eq!(indices[1].percent, 0.0);
    assert!(!indices[1].is_positive);
}
#[test]


fn test_health_deserialization() {
    let json = r#"{"status":"ok","service":"IPO Tracker Pro API"}"#;
    let health: HealthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(health.status, "ok");
}
