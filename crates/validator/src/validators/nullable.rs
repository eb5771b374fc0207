//! Nullable rules for `Option` inputs
//!
//! [`Required`] rejects absence itself; pair a rule with
//! [`Optional`](crate::combinators::Optional) when `None` should pass
//! instead.

use std::marker::PhantomData;

use crate::foundation::{Validate, Violation};

/// Validates that an `Option` is `Some`.
///
/// Fails with code `required` on `None`; the inner value is not inspected.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::prelude::*;
///
/// let rule = required::<i64>();
/// assert!(rule.validate(&Some(42)).is_ok());
/// assert!(rule.validate(&None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Validate for Required<T> {
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        if input.is_some() {
            Ok(())
        } else {
            Err(Violation::new("required", "value is required"))
        }
    }
}

/// Creates a `Required` rule.
#[must_use]
pub fn required<T>() -> Required<T> {
    Required {
        _phantom: PhantomData,
    }
}
