//! Positional template rendering
//!
//! Templates carry `{0}`, `{1}`, … placeholders; each is replaced by the
//! argument at that index. Rendering never fails: a placeholder with no
//! matching argument stays in the output verbatim, surplus arguments are
//! ignored, and non-numeric `{...}` runs and unmatched braces pass through
//! untouched.

/// Renders a template by substituting positional placeholders.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_message::render;
///
/// assert_eq!(render("안녕 {0}", &["Spring"]), "안녕 Spring");
/// assert_eq!(render("{0} of {1}", &["3"]), "3 of {1}");
/// assert_eq!(render("literal {braces}", &[]), "literal {braces}");
/// ```
#[must_use]
pub fn render(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find('}') else {
            // unmatched opening brace: emit the remainder as-is
            out.push_str(tail);
            return out;
        };

        let placeholder = &tail[..=end];
        let index = &tail[1..end];

        let arg = if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
            index.parse::<usize>().ok().and_then(|i| args.get(i).copied())
        } else {
            None
        };

        match arg {
            Some(arg) => out.push_str(arg),
            None => out.push_str(placeholder),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substitutes_in_order() {
        assert_eq!(render("{0} and {1}", &["a", "b"]), "a and b");
    }

    #[test]
    fn repeated_placeholder() {
        assert_eq!(render("{0}{0}", &["ha"]), "haha");
    }

    #[test]
    fn no_placeholders_is_identity() {
        assert_eq!(render("plain text", &["unused"]), "plain text");
    }

    #[test]
    fn missing_argument_stays_verbatim() {
        assert_eq!(render("{0} of {1}", &["3"]), "3 of {1}");
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        assert_eq!(render("{0}", &["a", "b", "c"]), "a");
    }

    #[test]
    fn non_numeric_braces_pass_through() {
        assert_eq!(render("literal {braces}", &["x"]), "literal {braces}");
        assert_eq!(render("{}", &["x"]), "{}");
    }

    #[test]
    fn unmatched_braces_pass_through() {
        assert_eq!(render("open {0", &["x"]), "open {0");
        assert_eq!(render("close 0}", &["x"]), "close 0}");
    }

    #[test]
    fn absurd_index_stays_verbatim() {
        assert_eq!(render("{99999999999999999999}", &["x"]), "{99999999999999999999}");
    }

    #[test]
    fn multibyte_text_around_placeholders() {
        assert_eq!(render("안녕 {0}", &["Spring"]), "안녕 Spring");
    }
}
