//! Built-in error message bundles
//!
//! The store's error templates: a Korean base table plus an English bundle,
//! with per-field templates for the item form and bare-code fallbacks for
//! violations on fields the specific keys do not cover. Loading tables from
//! resource files is the host application's concern; these bundles serve
//! tests and demos.

use lavka_message::{MessageTable, Tier};

/// Korean base templates, consulted when no locale-specific entry exists.
const BASE: &[(&str, &str)] = &[
    ("required.item.name", "상품 이름은 필수입니다."),
    ("range.item.price", "가격은 {0} ~ {1} 까지 허용합니다."),
    ("max.item.quantity", "수량은 최대 {0} 까지 허용합니다."),
    ("totalPriceMin", "가격 * 수량의 합은 {0}원 이상이어야 합니다. 현재 값 = {1}"),
    ("required", "필수 값 입니다."),
    ("range", "{0} ~ {1} 범위를 허용합니다."),
    ("max", "{0} 까지 허용합니다."),
];

/// English templates.
const EN: &[(&str, &str)] = &[
    ("required.item.name", "item name is required"),
    ("range.item.price", "price must be between {0} and {1}"),
    ("max.item.quantity", "quantity must be no more than {0}"),
    ("totalPriceMin", "price * quantity must be at least {0}, current total is {1}"),
    ("required", "this value is required"),
    ("range", "must be between {0} and {1}"),
    ("max", "must be at most {0}"),
];

/// Builds the item error-message table.
#[must_use]
pub fn error_messages() -> MessageTable {
    MessageTable::builder()
        .bundle(Tier::Base, BASE)
        .bundle(Tier::language("en"), EN)
        .build()
}

// ============================================================================
// TESTS
// ============================================================================
