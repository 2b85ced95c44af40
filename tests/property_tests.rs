//! Property tests for the package classifier

use pkgsort::classifier::{classify, explain, Category};
use pkgsort::ClassifyError;
use proptest::prelude::*;

fn side() -> impl Strategy<Value = f64> {
    0.0f64..400.0
}

fn mass() -> impl Strategy<Value = f64> {
    0.0f64..50.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_input_always_classifies(w in side(), h in side(), l in side(), m in mass()) {
        let category = classify(w, h, l, m);
        prop_assert!(category.is_ok());
        prop_assert!(Category::ALL.contains(&category.unwrap()));
    }

    #[test]
    fn prop_deterministic(w in side(), h in side(), l in side(), m in mass()) {
        let first = classify(w, h, l, m).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(classify(w, h, l, m).unwrap(), first);
        }
    }

    #[test]
    fn prop_explain_agrees_with_classify(w in side(), h in side(), l in side(), m in mass()) {
        let info = explain(w, h, l, m).unwrap();
        prop_assert_eq!(info.category, classify(w, h, l, m).unwrap());
        let expected = match (info.is_bulky(), info.is_heavy()) {
            (true, true) => Category::Rejected,
            (false, false) => Category::Standard,
            _ => Category::Special,
        };
        prop_assert_eq!(info.category, expected);
    }

    #[test]
    fn prop_monotonic_in_every_input(
        w in side(), h in side(), l in side(), m in mass(),
        grow in 0.0f64..200.0,
        which in 0usize..4,
    ) {
        let mut bigger = [w, h, l, m];
        bigger[which] += grow;

        let before = classify(w, h, l, m).unwrap();
        let after = classify(bigger[0], bigger[1], bigger[2], bigger[3]).unwrap();
        prop_assert!(after.severity() >= before.severity());
    }

    #[test]
    fn prop_negative_input_rejected(
        w in side(), h in side(), l in side(), m in mass(),
        negative in -1000.0f64..-0.001,
        which in 0usize..4,
    ) {
        let mut input = [w, h, l, m];
        input[which] = negative;

        let result = classify(input[0], input[1], input[2], input[3]);
        let is_invalid = matches!(result, Err(ClassifyError::InvalidArgument { .. }));
        prop_assert!(is_invalid);
    }
}
