//! OPTIONAL combinator - lifts a rule over Option

use crate::foundation::{Validate, Violation};

/// Lifts a rule over `Option`: `None` passes, `Some(value)` runs the rule.
///
/// Pair with [`Required`](crate::validators::Required) when absence itself
/// must be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

/// Creates an `Optional` combinator from a rule.
pub fn optional<V>(rule: V) -> Optional<V> {
    Optional::new(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive;

    impl Validate for Positive {
        type Input = i64;

        fn validate(&self, input: &i64) -> Result<(), Violation> {
            if *input > 0 {
                Ok(())
            } else {
                Err(Violation::new("positive", "must be positive"))
            }
        }
    }

    #[test]
    fn none_passes() {
        let rule = optional(Positive);
        assert!(rule.validate(&None).is_ok());
    }

    #[test]
    fn some_runs_inner() {
        let rule = optional(Positive);
        assert!(rule.validate(&Some(5)).is_ok());
        assert!(rule.validate(&Some(-5)).is_err());
    }
}
