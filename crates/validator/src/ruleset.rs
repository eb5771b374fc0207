//! Ordered, non-short-circuiting rule evaluation
//!
//! A [`RuleSet`] holds every rule that applies to one candidate type and
//! evaluates all of them on every call, collecting violations in insertion
//! order. This is the collection counterpart to [`Validate`], which reports
//! a single violation and stops: a form wants to show the user everything
//! that is wrong at once, not just the first problem.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, Violation, Violations};

/// One boxed rule over `&T`.
type BoxedRule<T> = Box<dyn Validate<Input = T> + Send + Sync>;

// ============================================================================
// RULESET
// ============================================================================

/// An ordered list of rules over a candidate type `T`.
///
/// Every rule is evaluated on every call; the returned [`Violations`] are in
/// rule insertion order. Evaluation is pure: the same candidate always yields
/// the same ordered list.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::prelude::*;
///
/// struct Draft { name: String, price: Option<i64> }
///
/// let rules = RuleSet::new()
///     .field_rule("name", not_blank(), |d: &Draft| d.name.as_str())
///     .field_rule("price", required(), |d: &Draft| &d.price);
///
/// let violations = rules.evaluate(&Draft { name: " ".into(), price: None });
/// assert_eq!(violations.len(), 2);
/// ```
pub struct RuleSet<T> {
    rules: Vec<BoxedRule<T>>,
}

impl<T> RuleSet<T> {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule over the whole candidate.
    ///
    /// The rule's violation keeps whatever scope the rule gave it; use
    /// [`field_rule`](Self::field_rule) to stamp field scope automatically.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a rule projected onto a named field.
    ///
    /// Shorthand for `self.rule(field(name, rule, accessor))`; the emitted
    /// violation carries field scope and `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_rule<U, V, F>(self, name: &'static str, rule: V, accessor: F) -> Self
    where
        U: ?Sized + 'static,
        V: Validate<Input = U> + Send + Sync + 'static,
        F: Fn(&T) -> &U + Send + Sync + 'static,
        T: 'static,
    {
        self.rule(crate::combinators::field(name, rule, accessor))
    }

    /// Appends a closure-based rule for composite conditions that read
    /// several fields at once.
    ///
    /// The closure returns `Some(violation)` to report a failure and `None`
    /// to pass; guarding on field presence belongs inside the closure.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<F>(self, check: F) -> Self
    where
        F: Fn(&T) -> Option<Violation> + Send + Sync + 'static,
        T: 'static,
    {
        self.rule(Check {
            check,
            _phantom: PhantomData,
        })
    }

    /// Evaluates every rule in insertion order and collects all violations.
    ///
    /// Never short-circuits: a candidate violating three rules yields three
    /// violations. An empty result means the candidate is valid.
    #[must_use]
    pub fn evaluate(&self, candidate: &T) -> Violations {
        self.rules
            .iter()
            .filter_map(|rule| rule.validate(candidate).err())
            .collect()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .finish()
    }
}

// ============================================================================
// CHECK ADAPTER
// ============================================================================

/// Adapts a closure into a rule for [`RuleSet::check`].
struct Check<T, F> {
    check: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> Validate for Check<T, F>
where
    F: Fn(&T) -> Option<Violation>,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        match (self.check)(input) {
            None => Ok(()),
            Some(violation) => Err(violation),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{in_range, not_blank, required};

    struct Draft {
        name: String,
        price: Option<i64>,
        quantity: Option<i64>,
    }

    fn rules() -> RuleSet<Draft> {
        RuleSet::new()
            .field_rule("name", not_blank(), |d: &Draft| d.name.as_str())
            .field_rule("price", required(), |d: &Draft| &d.price)
            .check(|d: &Draft| match (d.price, d.quantity) {
                (Some(p), Some(q)) if p * q < 10_000 => Some(
                    Violation::new("totalPriceMin", "total is too low")
                        .with_arg("10000")
                        .with_arg((p * q).to_string()),
                ),
                _ => None,
            })
    }

    #[test]
    fn valid_candidate_yields_empty() {
        let draft = Draft {
            name: "itemA".into(),
            price: Some(1000),
            quantity: Some(10),
        };
        assert!(rules().evaluate(&draft).is_empty());
    }

    #[test]
    fn all_rules_run_no_short_circuit() {
        let draft = Draft {
            name: " ".into(),
            price: None,
            quantity: Some(10),
        };
        let violations = rules().evaluate(&draft);
        let codes: Vec<_> = violations.iter().map(|v| v.code.as_ref()).collect();
        assert_eq!(codes, vec!["required", "required"]);
    }

    #[test]
    fn insertion_order_is_emission_order() {
        let rules: RuleSet<i64> = RuleSet::new()
            .rule(in_range(0_i64, 10))
            .check(|_| Some(Violation::new("second", "always fails")));

        let violations = rules.evaluate(&99);
        let codes: Vec<_> = violations.iter().map(|v| v.code.as_ref()).collect();
        assert_eq!(codes, vec!["range", "second"]);
    }

    #[test]
    fn composite_check_skipped_when_guard_fails() {
        // price absent: the composite closure must not fire
        let draft = Draft {
            name: "itemA".into(),
            price: None,
            quantity: Some(1),
        };
        let violations = rules().evaluate(&draft);
        assert!(violations.iter().all(|v| v.code != "totalPriceMin"));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let draft = Draft {
            name: "".into(),
            price: Some(50),
            quantity: Some(50),
        };
        let rules = rules();
        assert_eq!(rules.evaluate(&draft), rules.evaluate(&draft));
    }
}
