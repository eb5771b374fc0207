//! # lavka-catalog
//!
//! The shop-item domain: a form-backing [`ItemDraft`], the consolidated
//! validation rule set, built-in error message bundles, and the bridge that
//! turns violations into locale-aware display text.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lavka_catalog::{ItemDraft, describe_all, error_messages, validate_item};
//! use lavka_message::Locale;
//!
//! let draft = ItemDraft::new("itemA", 100, 50);
//! let violations = validate_item(&draft);
//!
//! let table = error_messages();
//! for line in describe_all(&violations, &table, Some(&Locale::english())) {
//!     println!("{line}");
//! }
//! ```
//!
//! Validation failure is data: [`validate_item`] always completes and the
//! caller decides how to react to a non-empty list. The only genuine error
//! in the flow, a message code with no template, is absorbed here by falling
//! back to the violation's built-in message.

pub mod bundles;
pub mod item;
pub mod localize;
pub mod rules;

pub use bundles::error_messages;
pub use item::ItemDraft;
pub use localize::{describe, describe_all, validate_item};
pub use rules::{
    OBJECT_NAME, PRICE_MAX, PRICE_MIN, QUANTITY_CEILING, TOTAL_MIN, item_rules, item_update_rules,
};
