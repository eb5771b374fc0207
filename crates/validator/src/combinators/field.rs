//! FIELD combinator - projects a rule onto one field of a candidate
//!
//! The FIELD combinator runs an inner rule against a single field extracted
//! by an accessor function, and stamps field scope plus the field name onto
//! the resulting violation. It is how a rule over `str` or `Option<i64>`
//! becomes a rule over a whole candidate struct.

use crate::foundation::{Validate, Violation};
use std::marker::PhantomData;

/// Validates one field of a candidate struct.
///
/// # Type Parameters
///
/// * `T` - The candidate struct type
/// * `U` - The field type (can be `?Sized`)
/// * `V` - The inner rule type
/// * `F` - The accessor function type
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_validator::prelude::*;
///
/// struct Draft { name: String }
///
/// let rule = field("name", not_blank(), |d: &Draft| d.name.as_str());
/// let violation = rule.validate(&Draft { name: "  ".into() }).unwrap_err();
/// assert_eq!(violation.field.as_deref(), Some("name"));
/// ```
pub struct Field<T, U, V, F>
where
    U: ?Sized,
{
    name: &'static str,
    rule: V,
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &U>,
}

impl<T, U, V, F> Field<T, U, V, F>
where
    U: ?Sized,
{
    /// Creates a field rule with the given name.
    pub fn named(name: &'static str, rule: V, accessor: F) -> Self {
        Self {
            name,
            rule,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Returns the field name.
    pub fn field_name(&self) -> &'static str {
        self.name
    }

    /// Returns a reference to the inner rule.
    pub fn rule(&self) -> &V {
        &self.rule
    }
}

// Manual Clone: F might not derive Clone.
impl<T, U, V, F> Clone for Field<T, U, V, F>
where
    V: Clone,
    F: Clone,
    U: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            rule: self.rule.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, U, V, F> std::fmt::Debug for Field<T, U, V, F>
where
    V: std::fmt::Debug,
    U: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .field("accessor", &"<function>")
            .finish()
    }
}

impl<T, U, V, F> Validate for Field<T, U, V, F>
where
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
    U: ?Sized,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        let value = (self.accessor)(input);
        self.rule
            .validate(value)
            .map_err(|violation| violation.with_field(self.name))
    }
}

/// Creates a named field rule.
pub fn field<T, U, V, F>(name: &'static str, rule: V, accessor: F) -> Field<T, U, V, F>
where
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
    U: ?Sized,
{
    Field::named(name, rule, accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Scope;

    struct TestDraft {
        name: String,
        price: Option<i64>,
    }

    struct NotBlank;

    impl Validate for NotBlank {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), Violation> {
            if input.trim().is_empty() {
                Err(Violation::new("required", "must not be blank"))
            } else {
                Ok(())
            }
        }
    }

    struct Present;

    impl Validate for Present {
        type Input = Option<i64>;

        fn validate(&self, input: &Option<i64>) -> Result<(), Violation> {
            if input.is_some() {
                Ok(())
            } else {
                Err(Violation::new("required", "value is required"))
            }
        }
    }

    #[test]
    fn passing_field() {
        let draft = TestDraft {
            name: "itemA".to_string(),
            price: Some(1000),
        };
        let rule = field("name", NotBlank, |d: &TestDraft| d.name.as_str());
        assert!(rule.validate(&draft).is_ok());
    }

    #[test]
    fn failure_is_stamped_with_field_scope() {
        let draft = TestDraft {
            name: " ".to_string(),
            price: None,
        };

        let rule = field("name", NotBlank, |d: &TestDraft| d.name.as_str());
        let violation = rule.validate(&draft).unwrap_err();
        assert_eq!(violation.scope, Scope::Field);
        assert_eq!(violation.field.as_deref(), Some("name"));

        let rule = field("price", Present, |d: &TestDraft| &d.price);
        let violation = rule.validate(&draft).unwrap_err();
        assert!(violation.is_on("price"));
    }

    #[test]
    fn field_name_accessor() {
        let rule = field("price", Present, |d: &TestDraft| &d.price);
        assert_eq!(rule.field_name(), "price");
    }
}
