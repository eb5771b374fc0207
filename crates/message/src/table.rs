//! The locale-keyed message table
//!
//! A [`MessageTable`] is populated once through its builder and read-only
//! afterwards, so a single instance can serve concurrent lookups without
//! locking. Resolution walks the requested locale's tier chain and returns
//! the first template found; codes defined at the base tier therefore always
//! resolve.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::codes::CodeChain;
use crate::locale::{Locale, Tier};
use crate::render::render;

// ============================================================================
// ERROR
// ============================================================================

/// No tier of the requested locale defines the code and the caller supplied
/// no default.
///
/// This signals a missing resource, not a validation outcome; callers should
/// propagate it rather than swallow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no message template for code `{code}` (locale: {locale})")]
pub struct MessageNotFound {
    /// The unresolvable code; for a code chain, the bare canonical code.
    pub code: String,
    /// Display form of the requested locale, `"default"` when none was given.
    pub locale: String,
}

impl MessageNotFound {
    fn new(code: &str, locale: Option<&Locale>) -> Self {
        Self {
            code: code.to_string(),
            locale: locale.map_or_else(|| "default".to_string(), ToString::to_string),
        }
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// An immutable mapping from `(code, tier)` to message template.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_message::{Locale, MessageTable, Tier};
///
/// let table = MessageTable::builder()
///     .message(Tier::Base, "hello", "안녕")
///     .message(Tier::language("en"), "hello", "hello")
///     .build();
///
/// // Chinese has no entry, so the base table answers
/// assert_eq!(table.resolve("hello", Some(&Locale::china()))?, "안녕");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    tiers: HashMap<Tier, HashMap<String, String>>,
}

impl MessageTable {
    /// Starts building a table.
    #[must_use]
    pub fn builder() -> MessageTableBuilder {
        MessageTableBuilder::default()
    }

    /// Resolves a code to its template for the requested locale.
    ///
    /// Walks the tier chain most specific first and returns the first entry
    /// found. `None` for the locale means "base table only".
    pub fn resolve(&self, code: &str, locale: Option<&Locale>) -> Result<&str, MessageNotFound> {
        for tier in Tier::chain(locale) {
            if let Some(template) = self.tiers.get(&tier).and_then(|codes| codes.get(code)) {
                return Ok(template);
            }
            debug!(code, tier = %tier, "message tier missed, falling back");
        }
        Err(MessageNotFound::new(code, locale))
    }

    /// Resolves and renders a message.
    pub fn message(
        &self,
        code: &str,
        args: &[&str],
        locale: Option<&Locale>,
    ) -> Result<String, MessageNotFound> {
        self.resolve(code, locale).map(|template| render(template, args))
    }

    /// Resolves and renders a message, returning the caller-supplied default
    /// when the code is undefined at every tier.
    ///
    /// The default is returned as-is; it is not treated as a template.
    #[must_use]
    pub fn message_or(
        &self,
        code: &str,
        args: &[&str],
        locale: Option<&Locale>,
        default: &str,
    ) -> String {
        match self.message(code, args, locale) {
            Ok(message) => message,
            Err(_) => default.to_string(),
        }
    }

    /// Resolves the first code of a chain that has a template at any tier.
    ///
    /// Each candidate code walks the full tier chain before the next code is
    /// tried, so the most specific *code* wins over the most specific *tier*.
    /// The error reports the chain's bare canonical code.
    pub fn resolve_first(
        &self,
        chain: &CodeChain,
        locale: Option<&Locale>,
    ) -> Result<&str, MessageNotFound> {
        for code in chain.codes() {
            if let Ok(template) = self.resolve(code, locale) {
                return Ok(template);
            }
        }
        Err(MessageNotFound::new(chain.canonical(), locale))
    }

    /// Returns true if no tier defines any code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.values().all(HashMap::is_empty)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds a [`MessageTable`]; the table is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MessageTableBuilder {
    tiers: HashMap<Tier, HashMap<String, String>>,
}

impl MessageTableBuilder {
    /// Adds one `(code, template)` entry at a tier, replacing any previous
    /// entry for the same pair.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, tier: Tier, code: &str, template: &str) -> Self {
        self.tiers
            .entry(tier)
            .or_default()
            .insert(code.to_string(), template.to_string());
        self
    }

    /// Adds a whole bundle of entries at a tier.
    #[must_use = "builder methods must be chained or built"]
    pub fn bundle(mut self, tier: Tier, entries: &[(&str, &str)]) -> Self {
        let codes = self.tiers.entry(tier).or_default();
        for (code, template) in entries {
            codes.insert((*code).to_string(), (*template).to_string());
        }
        self
    }

    /// Finishes the table.
    #[must_use]
    pub fn build(self) -> MessageTable {
        MessageTable { tiers: self.tiers }
    }
}

// ============================================================================
// TESTS
// ============================================================================
