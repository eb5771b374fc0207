//! # lavka-validator
//!
//! A composable, type-safe validation core for form-backing candidates.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lavka_validator::prelude::*;
//!
//! struct Draft { name: String, price: Option<i64> }
//!
//! let rules = RuleSet::new()
//!     .field_rule("name", not_blank(), |d: &Draft| d.name.as_str())
//!     .field_rule("price", required(), |d: &Draft| &d.price);
//!
//! let violations = rules.evaluate(&Draft { name: " ".into(), price: None });
//! assert_eq!(violations.len(), 2);
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and the
//!   [`Violation`](foundation::Violation) data model.
//! - [`validators`]: built-in rules; the [`validator!`] macro declares new
//!   ones without boilerplate.
//! - [`combinators`]: `.and()` / `.or()` / `.when()` / field projection.
//! - [`ruleset`]: ordered, non-short-circuiting evaluation over one
//!   candidate type.
//! - [`registry`]: explicit per-type rule lookup for callers that dispatch
//!   on candidate type.

// Violation carries a code, args, and message inline; boxing it would add
// indirection to every rule call for no practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex
// types that are inherent to the combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod ruleset;
pub mod validators;

pub use foundation::{Scope, Validate, ValidateExt, Violation, Violations};
pub use registry::Registry;
pub use ruleset::RuleSet;
