//! The item draft record
//!
//! An [`ItemDraft`] is the form-backing candidate as it arrives from an
//! external binding layer: every field optional, absence meaning the raw
//! input was missing or unparseable. The rules in
//! [`rules`](crate::rules) decide what absence means per field.

/// A shop-item candidate awaiting validation.
///
/// `id` is only expected on updates. Prices and quantities are `i64` so the
/// composite total check multiplies without overflow for any in-band values.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_catalog::{ItemDraft, item_rules};
///
/// let draft = ItemDraft::new("itemA", 10_000, 10);
/// assert!(item_rules().evaluate(&draft).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemDraft {
    /// Persistent identifier; present only when updating an existing item.
    pub id: Option<u64>,

    /// Display name; required non-blank.
    pub name: Option<String>,

    /// Unit price; required, bounded to the store's price band.
    pub price: Option<i64>,

    /// Stock quantity; required, capped.
    pub quantity: Option<i64>,
}

impl ItemDraft {
    /// Creates a draft with all three form fields present.
    #[must_use]
    pub fn new(name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    /// Attaches an identifier, as an update form would.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
