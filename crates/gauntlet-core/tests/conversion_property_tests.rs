//! Property-based tests for test case / golden conversion
//!
//! Uses `proptest` to verify the conversion invariants hold across
//! arbitrary record sequences:
//! - Output length equals input length in both directions
//! - Output order matches input order
//! - Round-tripping through the other record shape reproduces the original
//!   `(input, actual_output, expected_output, context)` values, including
//!   the distinction between absent and empty context

use gauntlet_core::{
    convert_goldens_to_test_cases, convert_test_cases_to_goldens, goldens_from_json,
    goldens_to_json, Golden, TestCase,
};
use proptest::prelude::*;

prop_compose! {
    fn arb_test_case()(
        input in ".{0,40}",
        actual_output in proptest::option::of(".{0,40}"),
        expected_output in proptest::option::of(".{0,40}"),
        context in proptest::option::of(proptest::collection::vec(".{0,20}", 0..4)),
    ) -> TestCase {
        TestCase {
            input,
            actual_output,
            expected_output,
            context,
        }
    }
}

prop_compose! {
    fn arb_golden()(
        input in ".{0,40}",
        actual_output in proptest::option::of(".{0,40}"),
        expected_output in proptest::option::of(".{0,40}"),
        context in proptest::option::of(proptest::collection::vec(".{0,20}", 0..4)),
    ) -> Golden {
        Golden {
            input,
            actual_output,
            expected_output,
            context,
        }
    }
}

proptest! {
    #[test]
    fn round_trip_through_goldens_is_identity(test_cases in proptest::collection::vec(arb_test_case(), 0..16)) {
        let round_tripped =
            convert_goldens_to_test_cases(&convert_test_cases_to_goldens(&test_cases));
        prop_assert_eq!(round_tripped, test_cases);
    }

    #[test]
    fn round_trip_through_test_cases_is_identity(goldens in proptest::collection::vec(arb_golden(), 0..16)) {
        let round_tripped =
            convert_test_cases_to_goldens(&convert_goldens_to_test_cases(&goldens));
        prop_assert_eq!(round_tripped, goldens);
    }

    #[test]
    fn conversion_preserves_length_and_order(test_cases in proptest::collection::vec(arb_test_case(), 0..16)) {
        let goldens = convert_test_cases_to_goldens(&test_cases);
        prop_assert_eq!(goldens.len(), test_cases.len());
        for (golden, test_case) in goldens.iter().zip(test_cases.iter()) {
            prop_assert_eq!(&golden.input, &test_case.input);
        }
    }

    #[test]
    fn golden_json_round_trip_is_identity(goldens in proptest::collection::vec(arb_golden(), 0..8)) {
        let json = goldens_to_json(&goldens).unwrap();
        let loaded = goldens_from_json(&json).unwrap();
        prop_assert_eq!(loaded, goldens);
    }
}
