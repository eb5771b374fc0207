//! Text rules
//!
//! Blankness follows form semantics: a string of only whitespace is as
//! missing as an empty one, so [`NotBlank`] rejects both under the code
//! `required`. Character counts use Unicode scalar values.

crate::validator! {
    /// Validates that a string contains at least one non-whitespace character.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { crate::foundation::Violation::new("required", "must not be blank") }
    fn not_blank();
}

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace-only strings pass; use [`NotBlank`] to reject those too.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { crate::foundation::Violation::new("not_empty", "must not be empty") }
    fn not_empty();
}

crate::validator! {
    /// Validates that a string does not exceed a character count.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxChars { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { crate::foundation::Violation::at_most(self.max) }
    fn max_chars(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
