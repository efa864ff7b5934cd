//! Property-based tests for guard checks: determinism, idempotence, and the
//! pass/fail partition of each check's input domain.

use guardrail::messages;
use guardrail::prelude::*;
use proptest::prelude::*;

fn variable_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}"
}

proptest! {
    #[test]
    fn prop_templates_are_deterministic(
        name in variable_name(),
        threshold in any::<i64>(),
    ) {
        let first = messages::variable_cant_be_less_than(&name, threshold);
        let second = messages::variable_cant_be_less_than(&name, threshold);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_ordering_templates_embed_both_names(
        name1 in variable_name(),
        name2 in variable_name(),
    ) {
        let message = messages::first_value_is_greater_than_second_value(&name1, &name2);
        prop_assert!(message.contains(&name1));
        prop_assert!(message.contains(&name2));
    }

    #[test]
    fn prop_validate_length_partitions_at_one(length in any::<u32>()) {
        let result = validate_length(length);
        prop_assert_eq!(result.is_ok(), length >= 1);
    }

    #[test]
    fn prop_validate_array_accepts_any_populated_slice(
        items in prop::collection::vec(any::<u8>(), 1..50),
        name in variable_name(),
    ) {
        prop_assert!(validate_array(Some(items.as_slice()), &name).is_ok());
    }

    #[test]
    fn prop_whitespace_only_strings_split_the_two_string_checks(
        spaces in prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n']), 1..10),
        name in variable_name(),
    ) {
        let value: String = spaces.into_iter().collect();

        // Whitespace-only passes the empty check but fails the white-space check,
        // and the latter reports it as the null category.
        prop_assert!(validate_string_null_or_empty(Some(&value), &name).is_ok());
        let err = validate_string_null_or_white_space(Some(&value), &name).unwrap_err();
        prop_assert_eq!(err, GuardError::ArgumentNull(name));
    }

    #[test]
    fn prop_throw_if_less_than_matches_comparison(
        value in any::<i32>(),
        threshold in any::<i32>(),
        name in variable_name(),
    ) {
        let result = throw_if_less_than(value, threshold, &name);
        prop_assert_eq!(result.is_ok(), value >= threshold);

        if let Err(err) = result {
            prop_assert_eq!(
                err.message(),
                messages::variable_cant_be_less_than(&name, i64::from(threshold))
            );
        }
    }

    #[test]
    fn prop_throw_if_first_is_greater_partitions_on_strict_order(
        value1 in any::<i64>(),
        value2 in any::<i64>(),
    ) {
        let result = throw_if_first_is_greater(value1, "n1", value2, "n2");
        prop_assert_eq!(result.is_ok(), value1 <= value2);
    }

    #[test]
    fn prop_greater_and_greater_or_equal_disagree_only_on_equality(
        value in any::<i64>(),
    ) {
        prop_assert!(throw_if_first_is_greater(value, "n1", value, "n2").is_ok());
        prop_assert!(throw_if_first_is_greater_or_equal(value, "n1", value, "n2").is_err());
    }

    #[test]
    fn prop_modulo_check_matches_remainder(
        value in any::<i64>(),
        divisor in 1i64..1_000,
    ) {
        let result = throw_if_modulo_is_not_zero(value, "n1", divisor, "n2");
        prop_assert_eq!(result.is_ok(), value % divisor == 0);
    }

    #[test]
    fn prop_failing_checks_are_idempotent(
        value in any::<i32>(),
        threshold in any::<i32>(),
        name in variable_name(),
    ) {
        let first = throw_if_less_than(value, threshold, &name);
        let second = throw_if_less_than(value, threshold, &name);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_generic_form_message_matches_default_form(
        value in any::<i32>(),
        threshold in any::<i32>(),
        name in variable_name(),
    ) {
        let default_form = throw_if_less_than(value, threshold, &name);
        let generic_form = throw_if_less_than_with::<String, _>(value, threshold, &name);

        match (default_form, generic_form) {
            (Ok(()), Ok(())) => {}
            (Err(default_err), Err(generic_message)) => {
                prop_assert_eq!(default_err.message(), generic_message);
            }
            (default_form, generic_form) => {
                prop_assert!(false, "forms disagree: {:?} vs {:?}", default_form, generic_form);
            }
        }
    }
}
