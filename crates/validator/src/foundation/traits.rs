//! Core traits for the validation system

use crate::combinators::{And, Field, Not, Optional, Or, When};
use crate::foundation::Violation;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The trait every rule implements.
///
/// A rule is generic over its input type and checks exactly one property of
/// it. Failure is reported as a single [`Violation`]; collecting violations
/// across many rules is the job of [`RuleSet`](crate::ruleset::RuleSet).
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::foundation::{Validate, Violation};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
///         if input.trim().is_empty() {
///             Err(Violation::new("required", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so rules can validate `str` and `[T]` directly.
    type Input: ?Sized;

    /// Checks the input.
    ///
    /// Returns `Ok(())` when the rule holds, `Err(violation)` when it does
    /// not. Must not panic for any well-typed input.
    fn validate(&self, input: &Self::Input) -> Result<(), Violation>;
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::prelude::*;
///
/// let name = not_blank().and(max_chars(80));
/// assert!(name.validate("itemA").is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two rules with logical AND.
    ///
    /// Both rules must pass; evaluation stops at the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two rules with logical OR.
    ///
    /// At least one rule must pass; evaluation stops at the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the rule with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Applies the rule only when the predicate holds for the input.
    ///
    /// When the predicate returns `false`, validation passes without
    /// running the inner rule.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Lifts the rule over `Option`: `None` passes, `Some(v)` runs the rule.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Projects the rule onto a named field of a candidate struct.
    ///
    /// The resulting violation carries field scope and the given name.
    fn for_field<T, F>(
        self,
        name: &'static str,
        accessor: F,
    ) -> Field<T, Self::Input, Self, F>
    where
        F: Fn(&T) -> &Self::Input,
    {
        Field::named(name, self, accessor)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
