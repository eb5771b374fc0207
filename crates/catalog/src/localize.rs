//! From violations to display text
//!
//! Bridges the rule set and the message table: each violation's code expands
//! to a candidate-code chain, the first resolving template is rendered with
//! the violation's args, and the violation's built-in message covers the
//! case where the table has no template at all. Describing never fails.

use lavka_message::{CodeChain, Locale, MessageTable, render};
use lavka_validator::foundation::{Scope, Violation, Violations};
use tracing::debug;

use crate::item::ItemDraft;
use crate::rules::{OBJECT_NAME, item_rules};

/// Resolves one violation to display text for a locale.
///
/// Field violations try `code.item.field`, `code.field`, then `code`;
/// object violations try `code.item`, then `code`. When no candidate code
/// has a template at any tier, the violation's built-in message is returned.
#[must_use]
pub fn describe(violation: &Violation, table: &MessageTable, locale: Option<&Locale>) -> String {
    let chain = match (violation.scope, violation.field.as_deref()) {
        (Scope::Field, Some(field)) => CodeChain::for_field(&violation.code, OBJECT_NAME, field),
        _ => CodeChain::for_object(&violation.code, OBJECT_NAME),
    };

    let args: Vec<&str> = violation.args.iter().map(AsRef::as_ref).collect();

    match table.resolve_first(&chain, locale) {
        Ok(template) => render(template, &args),
        Err(err) => {
            debug!(%err, "no template resolved, using the violation's built-in message");
            violation.message.clone().into_owned()
        }
    }
}

/// Resolves every violation in order.
#[must_use]
pub fn describe_all(
    violations: &Violations,
    table: &MessageTable,
    locale: Option<&Locale>,
) -> Vec<String> {
    violations
        .iter()
        .map(|violation| describe(violation, table, locale))
        .collect()
}

/// Evaluates the item rule set against a draft.
///
/// Sugar over `item_rules().evaluate(draft)` with a debug log when the
/// draft fails, the way a form endpoint reports binding failures.
#[must_use]
pub fn validate_item(draft: &ItemDraft) -> Violations {
    let violations = item_rules().evaluate(draft);
    if !violations.is_empty() {
        debug!(count = violations.len(), "item draft failed validation");
    }
    violations
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundles::error_messages;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_violation_uses_specific_template() {
        let violation = Violation::new("required", "item name is required").with_field("name");
        let text = describe(&violation, &error_messages(), Some(&Locale::english()));
        assert_eq!(text, "item name is required");
    }

    #[test]
    fn unknown_code_falls_back_to_built_in_message() {
        let violation = Violation::new("unmapped", "the built-in text");
        let text = describe(&violation, &error_messages(), None);
        assert_eq!(text, "the built-in text");
    }

    #[test]
    fn validate_item_routes_through_item_rules() {
        assert!(validate_item(&ItemDraft::new("itemA", 10_000, 10)).is_empty());
        assert_eq!(validate_item(&ItemDraft::default()).len(), 3);
    }
}
