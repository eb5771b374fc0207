//! The item rule set
//!
//! One consolidated, ordered rule set per form. Evaluation never
//! short-circuits, so a draft violating several rules reports all of them
//! at once. Violation field names follow the form's field paths, which is
//! what the message bundles key their per-field templates on.

use lavka_validator::foundation::Violation;
use lavka_validator::ruleset::RuleSet;
use lavka_validator::validator;
use lavka_validator::validators::required;

use crate::item::ItemDraft;

/// Object name for message-code chains, e.g. `required.item.name`.
pub const OBJECT_NAME: &str = "item";

/// Inclusive price band.
pub const PRICE_MIN: i64 = 1000;
/// Inclusive price band.
pub const PRICE_MAX: i64 = 1_000_000;
/// Quantities at or above this are rejected.
pub const QUANTITY_CEILING: i64 = 9999;
/// Minimum acceptable `price * quantity`.
pub const TOTAL_MIN: i64 = 10_000;

validator! {
    /// The name must be present and contain a non-whitespace character.
    pub NameRequired for Option<String>;
    rule(input) { input.as_deref().is_some_and(|name| !name.trim().is_empty()) }
    error(input) { Violation::new("required", "item name is required") }
    fn name_required();
}

validator! {
    /// The price must be present and inside the store's band.
    ///
    /// Absence reports the same `range` code as an out-of-band value, the
    /// way the form surfaces it.
    pub PriceBand for Option<i64>;
    rule(input) { input.is_some_and(|price| (PRICE_MIN..=PRICE_MAX).contains(&price)) }
    error(input) { Violation::out_of_range(PRICE_MIN, PRICE_MAX) }
    fn price_band();
}

validator! {
    /// The quantity must be present and below the ceiling.
    pub QuantityLimit for Option<i64>;
    rule(input) { input.is_some_and(|quantity| quantity < QUANTITY_CEILING) }
    error(input) { Violation::at_most(QUANTITY_CEILING) }
    fn quantity_limit();
}

/// The composite total check.
///
/// Only fires when both fields are present; a draft missing either already
/// carries the field violation and is exempt here.
fn total_price_floor(draft: &ItemDraft) -> Option<Violation> {
    let total = draft.price? * draft.quantity?;
    if total >= TOTAL_MIN {
        return None;
    }
    Some(
        Violation::new(
            "totalPriceMin",
            format!("price * quantity must be at least {TOTAL_MIN}, was {total}"),
        )
        .with_arg(TOTAL_MIN.to_string())
        .with_arg(total.to_string()),
    )
}

/// The rule set for creating an item.
///
/// Rules run in this order and all of them run on every draft:
/// name, price band, quantity cap, then the total floor.
#[must_use]
pub fn item_rules() -> RuleSet<ItemDraft> {
    RuleSet::new()
        .field_rule("name", name_required(), |draft: &ItemDraft| &draft.name)
        .field_rule("price", price_band(), |draft: &ItemDraft| &draft.price)
        .field_rule("quantity", quantity_limit(), |draft: &ItemDraft| &draft.quantity)
        .check(total_price_floor)
}

/// The rule set for updating an item: the create rules preceded by an `id`
/// presence check.
#[must_use]
pub fn item_update_rules() -> RuleSet<ItemDraft> {
    RuleSet::new()
        .field_rule("id", required::<u64>(), |draft: &ItemDraft| &draft.id)
        .field_rule("name", name_required(), |draft: &ItemDraft| &draft.name)
        .field_rule("price", price_band(), |draft: &ItemDraft| &draft.price)
        .field_rule("quantity", quantity_limit(), |draft: &ItemDraft| &draft.quantity)
        .check(total_price_floor)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lavka_validator::foundation::{Scope, Validate};
    use pretty_assertions::assert_eq;

    #[test]
    fn name_required_rejects_absent_and_blank() {
        let rule = name_required();
        assert!(rule.validate(&Some("itemA".to_string())).is_ok());
        assert!(rule.validate(&None).is_err());
        assert!(rule.validate(&Some("   ".to_string())).is_err());
        assert_eq!(rule.validate(&None).unwrap_err().code, "required");
    }

    #[test]
    fn price_band_bounds() {
        let rule = price_band();
        assert!(rule.validate(&Some(PRICE_MIN)).is_ok());
        assert!(rule.validate(&Some(PRICE_MAX)).is_ok());
        assert!(rule.validate(&Some(PRICE_MIN - 1)).is_err());
        assert!(rule.validate(&Some(PRICE_MAX + 1)).is_err());
        assert!(rule.validate(&None).is_err());
    }

    #[test]
    fn price_violation_shape() {
        let violation = price_band().validate(&Some(500)).unwrap_err();
        assert_eq!(violation.code, "range");
        assert_eq!(violation.arg(0), Some("1000"));
        assert_eq!(violation.arg(1), Some("1000000"));
    }

    #[test]
    fn quantity_ceiling_is_exclusive() {
        let rule = quantity_limit();
        assert!(rule.validate(&Some(QUANTITY_CEILING - 1)).is_ok());
        assert!(rule.validate(&Some(QUANTITY_CEILING)).is_err());
        assert!(rule.validate(&None).is_err());

        let violation = rule.validate(&Some(QUANTITY_CEILING)).unwrap_err();
        assert_eq!(violation.code, "max");
        assert_eq!(violation.arg(0), Some("9999"));
    }

    #[test]
    fn total_floor_needs_both_fields() {
        let mut draft = ItemDraft::new("itemA", 100, 50);
        assert!(total_price_floor(&draft).is_some());

        draft.quantity = None;
        assert!(total_price_floor(&draft).is_none());

        draft.quantity = Some(50);
        draft.price = None;
        assert!(total_price_floor(&draft).is_none());
    }

    #[test]
    fn total_floor_violation_shape() {
        let violation = total_price_floor(&ItemDraft::new("itemA", 100, 50)).unwrap();
        assert_eq!(violation.scope, Scope::Object);
        assert_eq!(violation.code, "totalPriceMin");
        assert_eq!(violation.arg(0), Some("10000"));
        assert_eq!(violation.arg(1), Some("5000"));
    }

    #[test]
    fn total_floor_does_not_overflow_in_band() {
        // the largest in-band product fits comfortably in i64
        let draft = ItemDraft::new("itemA", PRICE_MAX, QUANTITY_CEILING - 1);
        assert!(total_price_floor(&draft).is_none());
    }

    #[test]
    fn update_rules_add_id_presence_first() {
        let draft = ItemDraft::new("itemA", 10_000, 10);
        let violations = item_update_rules().evaluate(&draft);
        assert_eq!(violations.len(), 1);

        let violation = violations.iter().next().unwrap();
        assert!(violation.is_on("id"));
        assert_eq!(violation.code, "required");

        assert!(item_update_rules().evaluate(&draft.with_id(1)).is_empty());
    }
}
