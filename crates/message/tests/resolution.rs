//! End-to-end message resolution.
//!
//! The table mirrors a classic properties layout: a base bundle (Korean)
//! plus an English bundle that overrides `hello`. The cases cover default
//! resolution, locale selection, argument substitution, and the
//! missing-code contract.

use lavka_message::{Locale, MessageNotFound, MessageTable, Tier};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn table() -> MessageTable {
    MessageTable::builder()
        .bundle(Tier::Base, &[("hello", "안녕"), ("hello.name", "안녕 {0}")])
        .bundle(Tier::language("en"), &[("hello", "hello"), ("hello.name", "hello {0}")])
        .build()
}

// ============================================================================
// DEFAULT LOCALE
// ============================================================================

#[test]
fn hello_message() {
    assert_eq!(table().message("hello", &[], None).unwrap(), "안녕");
}

// ============================================================================
// MISSING CODES
// ============================================================================

#[test]
fn not_found_message_code() {
    let err = table().message("no_code", &[], None).unwrap_err();
    assert_eq!(
        err,
        MessageNotFound {
            code: "no_code".to_string(),
            locale: "default".to_string(),
        }
    );
}

#[test]
fn not_found_message_code_default_message() {
    let message = table().message_or("no_code", &[], None, "기본 메시지");
    assert_eq!(message, "기본 메시지");
}

// ============================================================================
// ARGUMENTS
// ============================================================================

#[test]
fn argument_message() {
    assert_eq!(table().message("hello.name", &["Spring"], None).unwrap(), "안녕 Spring");
}

// ============================================================================
// LOCALE SELECTION
// ============================================================================

#[test]
fn lang_message() {
    let table = table();

    // Chinese has no bundle: the base table answers
    assert_eq!(table.message("hello", &[], Some(&Locale::china())).unwrap(), "안녕");

    // English has a bundle: the base table does not answer
    let english = table.message("hello", &[], Some(&Locale::english())).unwrap();
    assert_ne!(english, "안녕");
    assert_eq!(english, "hello");
}

#[rstest]
#[case(None, "안녕")]
#[case(Some(Locale::english()), "hello")]
#[case(Some(Locale::us_english()), "hello")] // en_US -> en -> base
#[case(Some(Locale::china()), "안녕")] // zh_CN -> zh -> base
#[case(Some(Locale::korean()), "안녕")]
fn fallback_chain(#[case] locale: Option<Locale>, #[case] expected: &str) {
    let resolved = table().message("hello", &[], locale.as_ref()).unwrap();
    assert_eq!(resolved, expected, "{locale:?}");
}

// ============================================================================
// ERROR PROPAGATION
// ============================================================================

#[test]
fn error_carries_code_and_locale() {
    let err = table().message("no_code", &[], Some(&Locale::us_english())).unwrap_err();
    assert_eq!(err.code, "no_code");
    assert_eq!(err.locale, "en_US");
    assert!(err.to_string().contains("no_code"));
}
