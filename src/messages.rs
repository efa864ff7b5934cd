//! Message templates for guard violations
//!
//! This module collects the diagnostic text produced when a guard fails. Each
//! template is a pure string builder: given the same variable names and
//! thresholds it always returns the same sentence, so the message can double
//! as a stable assertion target in downstream tests.
//!
//! The exact literal text is part of the crate's compatibility surface.
//! Templates do not validate their own inputs — callers are responsible for
//! supplying meaningful identifiers.
//!
//! # Examples
//!
//! ```
//! use guardrail::messages;
//!
//! assert_eq!(
//!     messages::variable_contains_zero_items("cars"),
//!     "'cars' contains zero items."
//! );
//! assert_eq!(
//!     messages::variable_cant_be_less_than("length", 1),
//!     "'length' can't be less than '1'."
//! );
//! ```

/// Message for an ordering violation where the first value is greater than or
/// equal to the second.
///
/// # Examples
///
/// ```
/// use guardrail::messages::first_value_is_greater_or_equal_than_second_value;
///
/// assert_eq!(
///     first_value_is_greater_or_equal_than_second_value("n1", "n2"),
///     "The 'n1''s value is greater or equal than 'n2''s value."
/// );
/// ```
#[inline]
pub fn first_value_is_greater_or_equal_than_second_value(
    variable_name1: &str,
    variable_name2: &str,
) -> String {
    format!(
        "The '{}''s value is greater or equal than '{}''s value.",
        variable_name1, variable_name2
    )
}

/// Message for an ordering violation where the first value is strictly greater
/// than the second.
///
/// # Examples
///
/// ```
/// use guardrail::messages::first_value_is_greater_than_second_value;
///
/// assert_eq!(
///     first_value_is_greater_than_second_value("n1", "n2"),
///     "The 'n1''s value is greater than 'n2''s value."
/// );
/// ```
#[inline]
pub fn first_value_is_greater_than_second_value(
    variable_name1: &str,
    variable_name2: &str,
) -> String {
    format!(
        "The '{}''s value is greater than '{}''s value.",
        variable_name1, variable_name2
    )
}

/// Message for a non-empty collection that turned out to hold zero items.
///
/// # Examples
///
/// ```
/// use guardrail::messages::variable_contains_zero_items;
///
/// assert_eq!(
///     variable_contains_zero_items("variable"),
///     "'variable' contains zero items."
/// );
/// ```
#[inline]
pub fn variable_contains_zero_items(variable_name: &str) -> String {
    format!("'{}' contains zero items.", variable_name)
}

/// Message for an integer value below its required minimum.
///
/// The threshold renders with the default `Display` for integers.
///
/// # Examples
///
/// ```
/// use guardrail::messages::variable_cant_be_less_than;
///
/// assert_eq!(
///     variable_cant_be_less_than("n1", 1),
///     "'n1' can't be less than '1'."
/// );
/// ```
#[inline]
pub fn variable_cant_be_less_than(variable_name: &str, threshold: i64) -> String {
    format!("'{}' can't be less than '{}'.", variable_name, threshold)
}

/// Message for a floating-point value below its required minimum.
///
/// The threshold renders with the default `Display` for `f64`, so whole
/// values produce the same text as the integer template.
///
/// # Examples
///
/// ```
/// use guardrail::messages::variable_cant_be_less_than_double;
///
/// assert_eq!(
///     variable_cant_be_less_than_double("n1", 1.0),
///     "'n1' can't be less than '1'."
/// );
/// assert_eq!(
///     variable_cant_be_less_than_double("n1", 1.5),
///     "'n1' can't be less than '1.5'."
/// );
/// ```
#[inline]
pub fn variable_cant_be_less_than_double(variable_name: &str, threshold: f64) -> String {
    format!("'{}' can't be less than '{}'.", variable_name, threshold)
}

/// Message for a divisibility violation, framed as a division that must come
/// out whole.
///
/// # Examples
///
/// ```
/// use guardrail::messages::dividing_must_return_whole_number;
///
/// assert_eq!(
///     dividing_must_return_whole_number("n1", "n2"),
///     "Dividing 'n1' by 'n2' must return a whole number."
/// );
/// ```
#[inline]
pub fn dividing_must_return_whole_number(variable_name1: &str, variable_name2: &str) -> String {
    format!(
        "Dividing '{}' by '{}' must return a whole number.",
        variable_name1, variable_name2
    )
}
