//! Per-type rule lookup
//!
//! A [`Registry`] maps candidate types to their [`RuleSet`]s, replacing the
//! global validator registration of binding frameworks with an explicit
//! instance the caller owns. Build it once at startup, share it read-only.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::foundation::Violations;
use crate::ruleset::RuleSet;

/// An explicit lookup table of rule sets keyed by candidate type.
///
/// `Send + Sync` once built, so a single instance can serve concurrent
/// requests without locking.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::prelude::*;
///
/// struct Draft { name: String }
///
/// let mut registry = Registry::new();
/// registry.register(RuleSet::<Draft>::new()
///     .field_rule("name", not_blank(), |d: &Draft| d.name.as_str()));
///
/// assert!(registry.supports::<Draft>());
/// let violations = registry.evaluate(&Draft { name: "itemA".into() });
/// assert!(violations.is_some_and(|v| v.is_empty()));
/// ```
#[derive(Default)]
pub struct Registry {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers the rule set for a candidate type, replacing any previous
    /// registration for the same type.
    pub fn register<T: 'static>(&mut self, rules: RuleSet<T>) {
        self.entries.insert(TypeId::of::<T>(), Box::new(rules));
    }

    /// Returns true if a rule set is registered for `T`.
    #[must_use]
    pub fn supports<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Returns the registered rule set for `T`, if any.
    #[must_use]
    pub fn rules<T: 'static>(&self) -> Option<&RuleSet<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref())
    }

    /// Evaluates the registered rule set against a candidate.
    ///
    /// `None` means no rule set is registered for `T`; the caller decides
    /// whether that is an error. `Some(empty)` means the candidate is valid.
    #[must_use]
    pub fn evaluate<T: 'static>(&self, candidate: &T) -> Option<Violations> {
        self.rules::<T>().map(|rules| rules.evaluate(candidate))
    }

    /// Returns the number of registered candidate types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.entries.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
