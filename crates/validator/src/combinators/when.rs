//! WHEN combinator - conditional rule application

use crate::foundation::{Validate, Violation};

/// Applies a rule only when a predicate holds for the input.
///
/// When the predicate returns `false`, validation passes without running
/// the inner rule. Composite rules guard on field presence this way: the
/// rule body never sees an input the predicate rejected.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::prelude::*;
///
/// // only check long names for the character cap
/// let rule = max_chars(40).when(|s: &str| !s.is_empty());
/// assert!(rule.validate("").is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) rule: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(rule: V, condition: C) -> Self {
        Self { rule, condition }
    }

    /// Extracts the inner rule, discarding the condition.
    pub fn into_inner(self) -> V {
        self.rule
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        if (self.condition)(input) {
            self.rule.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator from a rule and a predicate.
pub fn when<V, C>(rule: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(rule, condition)
}
