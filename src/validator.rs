//! Guard-clause checks for function arguments
//!
//! Every check enforces a single precondition on a single named value and
//! reports a violation by returning an error carrying the templated message
//! from [`crate::messages`]. Each check comes in two forms:
//!
//! - a **default** form returning [`GuardError`], with the variant fixed per
//!   failure mode (`ArgumentNull` for absent values and content-less strings,
//!   `Argument` for everything else);
//! - a **generic** `*_with` form bounded by [`FromMessage`], where the caller
//!   picks the error kind at the call site and receives byte-identical
//!   message text.
//!
//! On success a check returns `Ok(())` with no other observable effect. On
//! failure it returns exactly one error; nothing is aggregated and nothing is
//! retried. All checks are pure functions of their inputs and are safe to
//! call concurrently.
//!
//! # Examples
//!
//! ```
//! use guardrail::{validate_array, throw_if_less_than, GuardError};
//!
//! fn head_of(items: Option<&[&str]>, window: u32) -> Result<(), GuardError> {
//!     validate_array(items, "items")?;
//!     throw_if_less_than(window, 1, "window")?;
//!     Ok(())
//! }
//!
//! let cars = ["Dodge", "Datsun", "Jaguar", "DeLorean"];
//! assert!(head_of(Some(&cars), 2).is_ok());
//! assert!(head_of(None, 2).is_err());
//! ```

use crate::error::{FromMessage, GuardError};
use crate::messages;

/// The fixed variable name used by [`validate_length`] diagnostics.
const LENGTH_VARIABLE_NAME: &str = "length";

#[cfg(feature = "tracing")]
#[inline]
fn trace_violation(message: &str) {
    tracing::debug!(target: "guardrail", message = %message, "guard violated");
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn trace_violation(_message: &str) {}

// Every violation leaves the crate through one of these constructors.
#[inline]
fn fail<E: FromMessage>(message: String) -> Result<(), E> {
    trace_violation(&message);
    Err(E::from_message(message))
}

#[inline]
fn fail_argument(message: String) -> Result<(), GuardError> {
    trace_violation(&message);
    Err(GuardError::Argument(message))
}

#[inline]
fn fail_null(message: String) -> Result<(), GuardError> {
    trace_violation(&message);
    Err(GuardError::ArgumentNull(message))
}

/// Numeric types accepted by the minimum-bound checks.
///
/// Ties each numeric type to the message template that renders its threshold:
/// integers go through [`messages::variable_cant_be_less_than`], floats
/// through [`messages::variable_cant_be_less_than_double`]. Integer
/// implementations are limited to widths that convert losslessly into the
/// `i64` template parameter.
pub trait Threshold: PartialOrd + Copy {
    /// Build the below-minimum message for this threshold type.
    fn below_minimum_message(variable_name: &str, threshold: Self) -> String;
}

macro_rules! integer_threshold {
    ($($t:ty),* $(,)?) => {$(
        impl Threshold for $t {
            #[inline]
            fn below_minimum_message(variable_name: &str, threshold: Self) -> String {
                messages::variable_cant_be_less_than(variable_name, i64::from(threshold))
            }
        }
    )*};
}

integer_threshold!(i8, i16, i32, i64, u8, u16, u32);

impl Threshold for f32 {
    #[inline]
    fn below_minimum_message(variable_name: &str, threshold: Self) -> String {
        messages::variable_cant_be_less_than_double(variable_name, f64::from(threshold))
    }
}

impl Threshold for f64 {
    #[inline]
    fn below_minimum_message(variable_name: &str, threshold: Self) -> String {
        messages::variable_cant_be_less_than_double(variable_name, threshold)
    }
}

/// Integral types accepted by [`throw_if_modulo_is_not_zero`].
pub trait Integer: Copy {
    /// Remainder of `self / divisor`.
    fn remainder(self, divisor: Self) -> Self;
    /// Whether the value is zero.
    fn is_zero(self) -> bool;
}

macro_rules! primitive_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Integer for $t {
            #[inline]
            fn remainder(self, divisor: Self) -> Self {
                self % divisor
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }
        }
    )*};
}

primitive_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Validate that a length is at least one.
///
/// The diagnostic always names the value `length`.
///
/// # Examples
///
/// ```
/// use guardrail::{validate_length, GuardError};
///
/// assert!(validate_length(3).is_ok());
///
/// let err = validate_length(0).unwrap_err();
/// assert_eq!(err, GuardError::Argument("'length' can't be less than '1'.".to_string()));
/// ```
pub fn validate_length(length: u32) -> Result<(), GuardError> {
    if length < 1 {
        fail_argument(messages::variable_cant_be_less_than(LENGTH_VARIABLE_NAME, 1))
    } else {
        Ok(())
    }
}

/// Like [`validate_length`], raising the caller-chosen error kind.
///
/// # Examples
///
/// ```
/// use guardrail::validate_length_with;
///
/// let err = validate_length_with::<String>(0).unwrap_err();
/// assert_eq!(err, "'length' can't be less than '1'.");
/// ```
pub fn validate_length_with<E: FromMessage>(length: u32) -> Result<(), E> {
    if length < 1 {
        fail(messages::variable_cant_be_less_than(LENGTH_VARIABLE_NAME, 1))
    } else {
        Ok(())
    }
}

/// Validate that a value is present.
///
/// The violation message is the variable name itself.
///
/// # Examples
///
/// ```
/// use guardrail::{validate_object, GuardError};
///
/// assert!(validate_object(Some(&42), "variable").is_ok());
///
/// let err = validate_object::<str>(None, "variable").unwrap_err();
/// assert_eq!(err, GuardError::ArgumentNull("variable".to_string()));
/// ```
pub fn validate_object<T: ?Sized>(value: Option<&T>, variable_name: &str) -> Result<(), GuardError> {
    if value.is_none() {
        fail_null(variable_name.to_string())
    } else {
        Ok(())
    }
}

/// Like [`validate_object`], raising the caller-chosen error kind.
pub fn validate_object_with<E: FromMessage, T: ?Sized>(
    value: Option<&T>,
    variable_name: &str,
) -> Result<(), E> {
    if value.is_none() {
        fail(variable_name.to_string())
    } else {
        Ok(())
    }
}

/// Validate that a slice is present and holds at least one item.
///
/// The presence check runs first and short-circuits: an absent slice is never
/// reported as empty. Absence raises `ArgumentNull` with the variable name as
/// the message; emptiness raises `Argument` with the zero-items message.
///
/// # Examples
///
/// ```
/// use guardrail::{validate_array, GuardError};
///
/// let cars = ["Dodge", "Datsun", "Jaguar", "DeLorean"];
/// assert!(validate_array(Some(&cars[..]), "variable").is_ok());
///
/// let err = validate_array::<&str>(None, "variable").unwrap_err();
/// assert_eq!(err, GuardError::ArgumentNull("variable".to_string()));
///
/// let err = validate_array(Some(&[] as &[&str]), "variable").unwrap_err();
/// assert_eq!(err, GuardError::Argument("'variable' contains zero items.".to_string()));
/// ```
pub fn validate_array<T>(array: Option<&[T]>, variable_name: &str) -> Result<(), GuardError> {
    match array {
        None => fail_null(variable_name.to_string()),
        Some(items) if items.is_empty() => {
            fail_argument(messages::variable_contains_zero_items(variable_name))
        }
        Some(_) => Ok(()),
    }
}

/// Like [`validate_array`], raising the caller-chosen error kind for both
/// failure modes.
pub fn validate_array_with<E: FromMessage, T>(
    array: Option<&[T]>,
    variable_name: &str,
) -> Result<(), E> {
    match array {
        None => fail(variable_name.to_string()),
        Some(items) if items.is_empty() => {
            fail(messages::variable_contains_zero_items(variable_name))
        }
        Some(_) => Ok(()),
    }
}

/// Validate that a vector is present and holds at least one item.
///
/// Same policy as [`validate_array`]: presence first, then emptiness.
///
/// # Examples
///
/// ```
/// use guardrail::{validate_list, GuardError};
///
/// let cars = vec!["Dodge", "Datsun", "Jaguar", "DeLorean"];
/// assert!(validate_list(Some(&cars), "variable").is_ok());
///
/// let empty: Vec<&str> = Vec::new();
/// let err = validate_list(Some(&empty), "variable").unwrap_err();
/// assert_eq!(err, GuardError::Argument("'variable' contains zero items.".to_string()));
/// ```
pub fn validate_list<T>(list: Option<&Vec<T>>, variable_name: &str) -> Result<(), GuardError> {
    validate_array(list.map(|items| items.as_slice()), variable_name)
}

/// Like [`validate_list`], raising the caller-chosen error kind for both
/// failure modes.
pub fn validate_list_with<E: FromMessage, T>(
    list: Option<&Vec<T>>,
    variable_name: &str,
) -> Result<(), E> {
    validate_array_with(list.map(|items| items.as_slice()), variable_name)
}

/// Validate that a string is present and carries at least one
/// non-whitespace character.
///
/// Absence, emptiness, and whitespace-only content are the same failure
/// class: all three raise `ArgumentNull` with the variable name as the
/// message. "No usable content" is one category here, unlike the array and
/// list checks, which distinguish absence from emptiness.
///
/// # Examples
///
/// ```
/// use guardrail::{validate_string_null_or_white_space, GuardError};
///
/// assert!(validate_string_null_or_white_space(Some("Dodge"), "variable").is_ok());
///
/// let err = validate_string_null_or_white_space(Some("   "), "variable").unwrap_err();
/// assert_eq!(err, GuardError::ArgumentNull("variable".to_string()));
/// ```
pub fn validate_string_null_or_white_space(
    value: Option<&str>,
    variable_name: &str,
) -> Result<(), GuardError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => fail_null(variable_name.to_string()),
    }
}

/// Like [`validate_string_null_or_white_space`], raising the caller-chosen
/// error kind.
pub fn validate_string_null_or_white_space_with<E: FromMessage>(
    value: Option<&str>,
    variable_name: &str,
) -> Result<(), E> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => fail(variable_name.to_string()),
    }
}

/// Validate that a string is present and non-empty.
///
/// Strictly narrower than [`validate_string_null_or_white_space`]:
/// whitespace-only strings pass.
///
/// # Examples
///
/// ```
/// use guardrail::validate_string_null_or_empty;
///
/// assert!(validate_string_null_or_empty(Some("   "), "variable").is_ok());
/// assert!(validate_string_null_or_empty(Some(""), "variable").is_err());
/// assert!(validate_string_null_or_empty(None, "variable").is_err());
/// ```
pub fn validate_string_null_or_empty(
    value: Option<&str>,
    variable_name: &str,
) -> Result<(), GuardError> {
    match value {
        Some(s) if !s.is_empty() => Ok(()),
        _ => fail_null(variable_name.to_string()),
    }
}

/// Like [`validate_string_null_or_empty`], raising the caller-chosen error
/// kind.
pub fn validate_string_null_or_empty_with<E: FromMessage>(
    value: Option<&str>,
    variable_name: &str,
) -> Result<(), E> {
    match value {
        Some(s) if !s.is_empty() => Ok(()),
        _ => fail(variable_name.to_string()),
    }
}

/// Validate that a value is at least one.
///
/// # Examples
///
/// ```
/// use guardrail::{throw_if_less_than_one, GuardError};
///
/// assert!(throw_if_less_than_one(3, "n1").is_ok());
///
/// let err = throw_if_less_than_one(0, "n1").unwrap_err();
/// assert_eq!(err, GuardError::Argument("'n1' can't be less than '1'.".to_string()));
/// ```
pub fn throw_if_less_than_one(value: u32, variable_name: &str) -> Result<(), GuardError> {
    if value < 1 {
        fail_argument(messages::variable_cant_be_less_than(variable_name, 1))
    } else {
        Ok(())
    }
}

/// Like [`throw_if_less_than_one`], raising the caller-chosen error kind.
pub fn throw_if_less_than_one_with<E: FromMessage>(
    value: u32,
    variable_name: &str,
) -> Result<(), E> {
    if value < 1 {
        fail(messages::variable_cant_be_less_than(variable_name, 1))
    } else {
        Ok(())
    }
}

/// Validate that a value is not below a caller-supplied minimum.
///
/// Works over any [`Threshold`] type. Comparison is strict and exact; no
/// epsilon is applied to floating-point values.
///
/// # Examples
///
/// ```
/// use guardrail::{throw_if_less_than, GuardError};
///
/// assert!(throw_if_less_than(3, 3, "value").is_ok());
///
/// let err = throw_if_less_than(0.0, 1.0, "n1").unwrap_err();
/// assert_eq!(err.message(), "'n1' can't be less than '1'.");
/// ```
pub fn throw_if_less_than<T: Threshold>(
    value: T,
    threshold: T,
    variable_name: &str,
) -> Result<(), GuardError> {
    if value < threshold {
        fail_argument(T::below_minimum_message(variable_name, threshold))
    } else {
        Ok(())
    }
}

/// Like [`throw_if_less_than`], raising the caller-chosen error kind.
pub fn throw_if_less_than_with<E: FromMessage, T: Threshold>(
    value: T,
    threshold: T,
    variable_name: &str,
) -> Result<(), E> {
    if value < threshold {
        fail(T::below_minimum_message(variable_name, threshold))
    } else {
        Ok(())
    }
}

/// Validate that the first value does not exceed the second.
///
/// # Examples
///
/// ```
/// use guardrail::{throw_if_first_is_greater, GuardError};
///
/// assert!(throw_if_first_is_greater(3, "n1", 4, "n2").is_ok());
/// assert!(throw_if_first_is_greater(4, "n1", 4, "n2").is_ok());
///
/// let err = throw_if_first_is_greater(4, "n1", 1, "n2").unwrap_err();
/// assert_eq!(err.message(), "The 'n1''s value is greater than 'n2''s value.");
/// ```
pub fn throw_if_first_is_greater<T: PartialOrd>(
    value1: T,
    variable_name1: &str,
    value2: T,
    variable_name2: &str,
) -> Result<(), GuardError> {
    if value1 > value2 {
        fail_argument(messages::first_value_is_greater_than_second_value(
            variable_name1,
            variable_name2,
        ))
    } else {
        Ok(())
    }
}

/// Like [`throw_if_first_is_greater`], raising the caller-chosen error kind.
pub fn throw_if_first_is_greater_with<E: FromMessage, T: PartialOrd>(
    value1: T,
    variable_name1: &str,
    value2: T,
    variable_name2: &str,
) -> Result<(), E> {
    if value1 > value2 {
        fail(messages::first_value_is_greater_than_second_value(
            variable_name1,
            variable_name2,
        ))
    } else {
        Ok(())
    }
}

/// Validate that the first value is strictly below the second.
///
/// # Examples
///
/// ```
/// use guardrail::{throw_if_first_is_greater_or_equal, GuardError};
///
/// assert!(throw_if_first_is_greater_or_equal(4, "n1", 5, "n2").is_ok());
///
/// let err = throw_if_first_is_greater_or_equal(4, "n1", 4, "n2").unwrap_err();
/// assert_eq!(err.message(), "The 'n1''s value is greater or equal than 'n2''s value.");
/// ```
pub fn throw_if_first_is_greater_or_equal<T: PartialOrd>(
    value1: T,
    variable_name1: &str,
    value2: T,
    variable_name2: &str,
) -> Result<(), GuardError> {
    if value1 >= value2 {
        fail_argument(messages::first_value_is_greater_or_equal_than_second_value(
            variable_name1,
            variable_name2,
        ))
    } else {
        Ok(())
    }
}

/// Like [`throw_if_first_is_greater_or_equal`], raising the caller-chosen
/// error kind.
pub fn throw_if_first_is_greater_or_equal_with<E: FromMessage, T: PartialOrd>(
    value1: T,
    variable_name1: &str,
    value2: T,
    variable_name2: &str,
) -> Result<(), E> {
    if value1 >= value2 {
        fail(messages::first_value_is_greater_or_equal_than_second_value(
            variable_name1,
            variable_name2,
        ))
    } else {
        Ok(())
    }
}

/// Validate that dividing the first value by the second leaves no remainder.
///
/// Defined for integral types only.
///
/// # Panics
///
/// Panics if `value2` is zero, as integer division does.
///
/// # Examples
///
/// ```
/// use guardrail::{throw_if_modulo_is_not_zero, GuardError};
///
/// assert!(throw_if_modulo_is_not_zero(4, "n1", 2, "n2").is_ok());
///
/// let err = throw_if_modulo_is_not_zero(5, "n1", 2, "n2").unwrap_err();
/// assert_eq!(err.message(), "Dividing 'n1' by 'n2' must return a whole number.");
/// ```
pub fn throw_if_modulo_is_not_zero<T: Integer>(
    value1: T,
    variable_name1: &str,
    value2: T,
    variable_name2: &str,
) -> Result<(), GuardError> {
    if !value1.remainder(value2).is_zero() {
        fail_argument(messages::dividing_must_return_whole_number(
            variable_name1,
            variable_name2,
        ))
    } else {
        Ok(())
    }
}

/// Like [`throw_if_modulo_is_not_zero`], raising the caller-chosen error
/// kind.
///
/// # Panics
///
/// Panics if `value2` is zero, as integer division does.
pub fn throw_if_modulo_is_not_zero_with<E: FromMessage, T: Integer>(
    value1: T,
    variable_name1: &str,
    value2: T,
    variable_name2: &str,
) -> Result<(), E> {
    if !value1.remainder(value2).is_zero() {
        fail(messages::dividing_must_return_whole_number(
            variable_name1,
            variable_name2,
        ))
    } else {
        Ok(())
    }
}
