//! JSON shapes for drafts and violations, the error surface an API
//! endpoint returns when binding fails.

#![cfg(feature = "serde")]

use lavka_catalog::{ItemDraft, validate_item};
use serde_json::json;

#[test]
fn draft_round_trips_through_json() {
    let draft: ItemDraft = serde_json::from_value(json!({
        "id": null,
        "name": "itemA",
        "price": 10000,
        "quantity": 10,
    }))
    .unwrap();

    assert_eq!(draft, ItemDraft::new("itemA", 10_000, 10));
    assert!(validate_item(&draft).is_empty());
}

#[test]
fn violations_serialize_as_the_error_body() {
    let draft = ItemDraft::new("itemA", 100, 50);
    let value = serde_json::to_value(validate_item(&draft)).unwrap();

    let errors = value.as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["scope"], "field");
    assert_eq!(errors[0]["field"], "price");
    assert_eq!(errors[0]["code"], "range");
    assert_eq!(errors[1]["scope"], "object");
    assert_eq!(errors[1]["code"], "totalPriceMin");
    assert_eq!(errors[1]["args"], json!(["10000", "5000"]));
}
