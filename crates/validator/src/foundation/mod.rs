//! Core validation types and traits
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Violations**: [`Scope`], [`Violation`], [`Violations`]
//!
//! Rules are generic over their input type, compose through combinators, and
//! report failures as plain data. A [`Violation`] carries a stable code plus
//! ordered positional args so display text can be resolved per locale by a
//! message table, with the built-in `message` as the fallback.

pub mod traits;
pub mod violation;

pub use traits::{Validate, ValidateExt};
pub use violation::{Scope, Violation, Violations};

/// A single-rule result.
pub type RuleResult = Result<(), Violation>;
