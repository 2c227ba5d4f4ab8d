use items_api::types::{Item, Page, Status};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_items_full() {
    let json = load_fixture("items.json");
    let items: Vec<Item> = serde_json::from_str(&json).unwrap();
    assert_eq!(items.len(), 2);

    let first = &items[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "Test Item");
    assert_eq!(first.description, "Test Description");
    assert_eq!(first.price, 100.0);
    assert_eq!(first.category, "Test Category");
    assert_eq!(first.status, Status::Active);
    assert_eq!(first.tags, vec!["test".to_string()]);
    assert_eq!(first.rating, 4.5);
    assert_eq!(first.stock, 10);
    assert!(first.is_available);

    let second = &items[1];
    assert_eq!(second.status, Status::Inactive);
    assert_eq!(second.stock, 0);
    assert!(!second.is_available);
}

#[test]
fn deserialize_empty_array() {
    let items: Vec<Item> = serde_json::from_str("[]").unwrap();
    assert!(items.is_empty());
}

#[test]
fn page_roundtrips_camel_case() {
    let json = load_fixture("items_wrapped.json");
    let page: Page<Item> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total, 1);
    assert_eq!(page.next_page, None);

    let out = serde_json::to_value(&page).unwrap();
    assert!(out.get("nextPage").is_some());
    assert!(out.get("next_page").is_none());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"[{"id": not valid json}]"#;
    let result = serde_json::from_str::<Vec<Item>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"[{"id": 1, "name": "Incomplete"}]"#;
    let result = serde_json::from_str::<Vec<Item>>(json);
    assert!(result.is_err());
}
