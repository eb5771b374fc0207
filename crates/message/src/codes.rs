//! Candidate message codes for one violation
//!
//! A bare violation code like `required` expands to an ordered list of
//! candidate codes, most specific first, so a table can carry both a generic
//! template and per-field overrides:
//!
//! - field violations: `required.item.itemName`, `required.itemName`, `required`
//! - object violations: `totalPriceMin.item`, `totalPriceMin`
//!
//! [`MessageTable::resolve_first`](crate::table::MessageTable::resolve_first)
//! consumes a chain and returns the first code that resolves.

/// An ordered, most-specific-first list of candidate message codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeChain {
    codes: Vec<String>,
}

impl CodeChain {
    /// Candidate codes for a field-scope violation.
    #[must_use]
    pub fn for_field(code: &str, object: &str, field: &str) -> Self {
        Self {
            codes: vec![
                format!("{code}.{object}.{field}"),
                format!("{code}.{field}"),
                code.to_string(),
            ],
        }
    }

    /// Candidate codes for an object-scope violation.
    #[must_use]
    pub fn for_object(code: &str, object: &str) -> Self {
        Self {
            codes: vec![format!("{code}.{object}"), code.to_string()],
        }
    }

    /// Iterates the candidate codes, most specific first.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// The bare code, the least specific candidate.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.codes.last().map_or("", String::as_str)
    }
}

// ============================================================================
// TESTS
// ============================================================================
