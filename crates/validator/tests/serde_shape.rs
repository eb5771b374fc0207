//! Serialization shape of violations, for JSON error surfaces.

#![cfg(feature = "serde")]

use lavka_validator::prelude::*;
use serde_json::json;

#[test]
fn field_violation_serializes_with_scope_and_args() {
    let violation = Violation::new("range", "price must be between 1000 and 1000000")
        .with_field("price")
        .with_arg("1000")
        .with_arg("1000000");

    let value = serde_json::to_value(&violation).unwrap();
    assert_eq!(
        value,
        json!({
            "scope": "field",
            "field": "price",
            "code": "range",
            "args": ["1000", "1000000"],
            "message": "price must be between 1000 and 1000000",
        })
    );
}

#[test]
fn violations_serialize_as_ordered_array() {
    let violations: Violations = [
        Violation::required("name"),
        Violation::new("totalPriceMin", "total price is too low"),
    ]
    .into_iter()
    .collect();

    let value = serde_json::to_value(&violations).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["code"], "required");
    assert_eq!(array[1]["scope"], "object");
}
