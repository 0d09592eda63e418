use ipo_rs::ipos::models::IpoId;
use ipo_rs::predict::models::*;
#[test]


fn test_allotment_request_wire_format() {
    let req = AllotmentRequest {
        ipo_id: IpoId::Int(1),
        category: Category::Retail,
        lots_applied: 2,
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body["category"], "RII");
    assert_eq!(body["ipo_id"], 1);
    assert_eq!(body["lots_applied"], 2);
}
#[test]


fn test_category_parsing() {
    assert_eq!("hni".parse::<Category>().unwrap(), Category::Hni);
    assert_eq!("Retail".parse::<Category>().unwrap(), Category::Retail);
    assert!("qib".parse::<Category>().is_err());
    assert_eq!(Category::default(), Category::Retail);
}
#[test]


fn test_profit_estimate_deserialization() {
    let json = r#"{"ipo_name":"Alpha","estimated_profit":14400.0,"investment_amount":120000.0,
        "gmp":24.0,"lot_size":600,"lots":1}"#;
    let est: ProfitEstimate = serde_json::from_str(json).unwrap();
    assert_eq!(est.lot_size, 600);
    assert_eq!(est.estimated_profit, 14400.0);
}
