//! OR combinator - logical disjunction of rules

use crate::foundation::{Validate, Violation};

/// Combines two rules with logical OR.
///
/// At least one rule must pass. If the first passes, the second is not
/// evaluated. If both fail, the violation of the last alternative tried is
/// returned (violations are flat, so the two failures are not merged).
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::prelude::*;
///
/// let rule = max_chars(3).or(not_blank());
/// assert!(rule.validate("ab").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(_) => self.right.validate(input),
        }
    }
}

/// Creates an `Or` combinator from two rules.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
