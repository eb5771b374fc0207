//! NOT combinator - inverts a rule

use crate::foundation::{Validate, Violation};

/// Inverts a rule with logical NOT.
///
/// Passes when the inner rule fails and fails when it passes. The inner
/// rule's violation is discarded; the emitted violation has code `not`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        match self.inner.validate(input) {
            Ok(()) => Err(Violation::new("not", "value matched a forbidden rule")),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a rule.
pub fn not<V: Validate>(rule: V) -> Not<V> {
    Not::new(rule)
}
