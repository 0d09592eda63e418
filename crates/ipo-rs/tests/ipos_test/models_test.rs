use crate::common::sample_ipos_json;
use ipo_rs::ipos::models::*;
#[test]


fn test_ipo_list_deserialization() {
    let ipos: Vec<Ipo> = serde_json::from_value(sample_ipos_json()).unwrap();
    assert_eq!(ipos.len(), 2);
    assert_eq!(ipos[0].id, IpoId::Int(1));
    assert_eq!(ipos[0].ipo_type, "SME");
    assert_eq!(ipos[0].trend.len(), 2);
    assert_eq!(ipos[0].lot_size, Some(600));
    assert_eq!(ipos[1].symbol, None);
    assert_eq!(ipos[1].listing_date, None);
}
#[test]


fn test_ipo_minimal_record_defaults() {
    let json = r#"{"id":"abc","name":"Gamma","gmp":null,"trend":null,"status":null}"#;
    let ipo: Ipo = serde_json::from_str(json).unwrap();
    assert_eq!(ipo.id, IpoId::Text("abc".to_string()));
    assert_eq!(ipo.gmp, 0.0);
    assert_eq!(ipo.growth_percent, 0.0);
    assert!(ipo.trend.is_empty());
    assert_eq!(ipo.status, "");
    assert_eq!(ipo.ipo_type, "");
    assert_eq!(ipo.sentiment_bullish, 0);
}
#[test]


fn test_display_symbol_falls_back_to_name() {
    let json = r#"{"id":3,"name":"Delta Foods","symbol":"  "}"#;
    let ipo: Ipo = serde_json::from_str(json).unwrap();
    assert_eq!(ipo.display_symbol(), "Delta Foods");

    let json = r#"{"id":4,"name":"Echo Power","symbol":"ECHO"}"#;
    let ipo: Ipo = serde_json::from_str(json).unwrap();
    assert_eq!(ipo.display_symbol(), "ECHO");
}
#[test]


fn test_ipo_id_ordering_and_parsing() {
    assert!(IpoId::Int(99) < IpoId::Text("1".to_string()));
    assert!(IpoId::Int(2) < IpoId::Int(10));
    assert_eq!(IpoId::from("42"), IpoId::Int(42));
    assert_eq!(IpoId::from("tata-tech"), IpoId::Text("tata-tech".to_string()));
    assert_eq!(IpoId::Int(7).to_string(), "7");
}
#[test]


fn test_ipo_detail_flattened_deserialization() {
    let json = r#"{"id":5,"name":"Foxtrot","symbol":null,"type":"Mainboard","status":"Allotment",
        "price_band":"₹95-100","lot_size":150,"issue_size":"₹400 Cr","fresh_issue":null,
        "allotment_date":"2024-02-06","refund_date":"2024-02-07","listing_date":"2024-02-08",
        "subscriptions":[{"category":"QIB","times_subscribed":120.5},{"category":"Retail","times_subscribed":60.0}],
        "gmp_history":[{"price":10,"date":"2024-02-01"}],"current_gmp":24.0}"#;
    let detail: IpoDetail = serde_json::from_str(json).unwrap();
    assert_eq!(detail.ipo.name, "Foxtrot");
    assert_eq!(detail.ipo.status, "Allotment");
    assert_eq!(detail.ipo.lot_size, Some(150));
    assert_eq!(detail.ipo.gmp, 0.0);
    assert_eq!(detail.gmp(), 24.0);
    assert_eq!(detail.subscriptions.len(), 2);
    assert_eq!(detail.subscriptions[0].category, "QIB");
    assert_eq!(detail.retail_subscription_x(), Some(60.0));
    assert_eq!(detail.issue_size.as_deref(), Some("₹400 Cr"));
    assert_eq!(detail.fresh_issue, None);
    assert_eq!(detail.refund_date.as_deref(), Some("2024-02-07"));
    assert_eq!(detail.gmp_history.len(), 1);
}
#[test]


fn test_ipo_detail_falls_back_to_listing_fields() {
    let json = r#"{"id":6,"name":"Golf","gmp":12.0,"retail_subscription_x":3.5,
        "subscriptions":[{"category":"RII","times_subscribed":null}]}"#;
    let detail: IpoDetail = serde_json::from_str(json).unwrap();
    assert_eq!(detail.gmp(), 12.0);
    assert!(detail.subscriptions[0].is_retail());
    assert_eq!(detail.retail_subscription_x(), Some(0.0));

    let json = r#"{"id":7,"name":"Hotel","retail_subscription_x":3.5,"subscriptions":null}"#;
    let detail: IpoDetail = serde_json::from_str(json).unwrap();
    assert!(detail.subscriptions.is_empty());
    assert_eq!(detail.retail_subscription_x(), Some(3.5));
}
#[test]


fn test_vote_wire_format() {
    let body = serde_json::to_string(&VoteRequest { vote_type: VoteType::Bearish }).unwrap();
    assert_eq!(body, r#"{"vote_type":"bearish"}"#);
    assert_eq!("Bull".parse::<VoteType>().unwrap(), VoteType::Bullish);
    assert!("sideways".parse::<VoteType>().is_err());

    let resp: VoteResponse =
        serde_json::from_str(r#"{"status":"success","bullish":5,"bearish":1}"#).unwrap();
    assert_eq!(resp.bullish, 5);
}
