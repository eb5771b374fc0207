//! Property-based tests for lavka-validator.

use lavka_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn not_blank_idempotent(s in ".*") {
        let rule = not_blank();
        let r1 = rule.validate(&*s);
        let r2 = rule.validate(&*s);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn in_range_idempotent(n in any::<i64>()) {
        let rule = in_range(1000_i64, 1_000_000);
        let r1 = rule.validate(&n);
        let r2 = rule.validate(&n);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn ruleset_evaluation_idempotent(s in ".{0,20}", n in proptest::option::of(any::<i64>())) {
        struct Draft {
            name: String,
            price: Option<i64>,
        }

        let rules = RuleSet::new()
            .field_rule("name", not_blank(), |d: &Draft| d.name.as_str())
            .field_rule("price", required::<i64>(), |d: &Draft| &d.price);

        let draft = Draft { name: s, price: n };
        prop_assert_eq!(rules.evaluate(&draft), rules.evaluate(&draft));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = not_blank();
        let b = max_chars(10);
        let combined = a.and(b);

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        prop_assert_eq!(combined.validate(&*s).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(s in ".{0,30}") {
        let a = not_blank();
        let b = max_chars(3);
        let combined = a.or(b);

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        prop_assert_eq!(combined.validate(&*s).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn double_negation(s in ".{0,20}") {
        let rule = not_blank();
        let double_neg = not(not(rule));
        prop_assert_eq!(rule.validate(&*s).is_ok(), double_neg.validate(&*s).is_ok());
    }

    #[test]
    fn optional_none_always_passes(bound in 0_i64..100) {
        let rule = in_range(0_i64, bound).optional();
        prop_assert!(rule.validate(&None).is_ok());
    }
}

// ============================================================================
// RANGE BOUNDS
// ============================================================================

proptest! {
    #[test]
    fn in_range_agrees_with_contains(n in any::<i64>(), lo in -100_i64..0, hi in 1_i64..100) {
        let rule = in_range(lo, hi);
        prop_assert_eq!(rule.validate(&n).is_ok(), (lo..=hi).contains(&n));
    }

    #[test]
    fn min_max_compose_to_range(n in any::<i64>()) {
        let composed = min(10_i64).and(max(20_i64));
        let range = in_range(10_i64, 20_i64);
        prop_assert_eq!(composed.validate(&n).is_ok(), range.validate(&n).is_ok());
    }
}
