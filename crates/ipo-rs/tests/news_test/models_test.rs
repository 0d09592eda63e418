use ipo_rs::news::models::*;
#[test]


fn test_news_item_deserialization() {
    let json = r#"{"id":"n1","title":"Tata Tech lists at 140% premium","summary":"...",
        "published_at":"2023-11-30T09:15:00Z","link":"https://example.com/a","source":"Mint"}"#;
    let item: NewsItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.source, "Mint");
    assert_eq!(item.to_string(), "[Mint] Tata Tech lists at 140% premium");
}
#[test]


fn test_news_item_optional_fields() {
    let item: NewsItem = serde_json::from_str(r#"{"id":"n2","title":"Short"}"#).unwrap();
    assert!(item.summary.is_empty());
    assert!(item.link.is_empty());
}
