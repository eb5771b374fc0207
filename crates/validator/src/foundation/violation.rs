//! Violation types produced by failed rules
//!
//! A violation is data, not a fault: rule evaluation always completes and
//! hands the caller an ordered list of everything that was wrong. String
//! fields use `Cow<'static, str>` for zero-allocation in the common case of
//! static codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// SCOPE
// ============================================================================

/// Whether a violation points at a single field or at the candidate as a
/// whole (composite rules that read several fields at once).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scope {
    /// The violation concerns one named field of the candidate.
    Field,
    /// The violation concerns a relationship between fields.
    Object,
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A single failed rule: a stable code for programmatic handling and message
/// lookup, ordered positional arguments for template substitution, and a
/// built-in default message shown when no template resolves.
///
/// Immutable once built; the builder methods consume `self`.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::foundation::Violation;
///
/// let violation = Violation::new("range", "price must be between 1000 and 1000000")
///     .with_field("price")
///     .with_arg("1000")
///     .with_arg("1000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Violation {
    /// Field- or object-scope. `with_field` switches to [`Scope::Field`].
    pub scope: Scope,

    /// Field path for field-scope violations, e.g. `"price"`.
    pub field: Option<Cow<'static, str>>,

    /// Stable code for message lookup, e.g. `"required"`, `"range"`.
    pub code: Cow<'static, str>,

    /// Ordered positional substitution values, already stringified.
    ///
    /// These feed `{0}`, `{1}`, … placeholders in message templates.
    pub args: SmallVec<[Cow<'static, str>; 2]>,

    /// Default human-readable text when no template resolves for the code.
    pub message: Cow<'static, str>,
}

impl Violation {
    /// Creates an object-scope violation with a code and default message.
    ///
    /// Static strings do not allocate:
    ///
    /// ```rust,ignore
    /// let violation = Violation::new("totalPriceMin", "total price is too low");
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            scope: Scope::Object,
            field: None,
            code: code.into(),
            args: SmallVec::new(),
            message: message.into(),
        }
    }

    /// Attaches a field name, making this a field-scope violation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.scope = Scope::Field;
        self.field = Some(field.into());
        self
    }

    /// Appends a positional substitution argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl Into<Cow<'static, str>>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Looks up a positional argument by index.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(Cow::as_ref)
    }

    /// Returns true if this violation is attached to the given field.
    #[must_use]
    pub fn is_on(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.args.is_empty() {
            write!(f, " (args: [")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for Violation {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl Violation {
    /// Creates a "required" violation on a field.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", "this value is required").with_field(field)
    }

    /// Creates a "range" violation with the inclusive bounds as args.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T) -> Self {
        Self::new("range", format!("value must be between {min} and {max}"))
            .with_arg(min.to_string())
            .with_arg(max.to_string())
    }

    /// Creates a "max" violation with the bound as its single arg.
    pub fn at_most<T: fmt::Display>(max: T) -> Self {
        Self::new("max", format!("value must be at most {max}")).with_arg(max.to_string())
    }
}

// ============================================================================
// VIOLATIONS
// ============================================================================

/// An ordered collection of violations.
///
/// Emission order is deterministic: rules append in evaluation order and the
/// collection never reorders. Empty means the candidate passed every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Violations {
    entries: Vec<Violation>,
}

impl Violations {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.entries.push(violation);
    }

    /// Appends every violation from `other`, preserving order.
    pub fn extend(&mut self, other: Violations) {
        self.entries.extend(other.entries);
    }

    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates the violations in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.entries.iter()
    }

    /// Returns the violations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.entries
    }

    /// Returns all violations attached to the given field.
    pub fn on_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.entries.iter().filter(move |v| v.is_on(field))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} violation(s):", self.len())?;
        for (i, violation) in self.entries.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

// ============================================================================
// TESTS
// ============================================================================
