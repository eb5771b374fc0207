//! Prelude module for convenient imports.
//!
//! A single `use lavka_validator::prelude::*;` brings in the core traits,
//! the violation model, all built-in rules, the combinators, and the
//! rule-set machinery.
//!
//! # Examples
//!
//! ```rust,ignore
//! use lavka_validator::prelude::*;
//!
//! let name = not_blank().and(max_chars(80));
//! let price = required::<i64>();
//! ```

// ============================================================================
// FOUNDATION: Core traits and the violation model
// ============================================================================

pub use crate::foundation::{RuleResult, Scope, Validate, ValidateExt, Violation, Violations};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Field, Not, Optional, Or, When, and, field, not, optional, or, when,
};

// ============================================================================
// EVALUATION: Rule sets and the per-type registry
// ============================================================================

pub use crate::registry::Registry;
pub use crate::ruleset::RuleSet;
