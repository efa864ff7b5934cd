//! # Guardrail
//!
//! Guard-clause argument validation with caller-selected error kinds.
//!
//! Every check enforces one precondition on one named value. On success it
//! returns `Ok(())`; on violation it returns an error carrying a templated,
//! fully interpolated diagnostic message. Each check exists in two forms: a
//! default form returning [`GuardError`], and a generic `*_with` form where
//! the caller picks any error kind implementing [`FromMessage`].
//!
//! ## Quick Example
//!
//! ```rust
//! use guardrail::{validate_string_null_or_white_space, throw_if_less_than_one, GuardError};
//!
//! fn make_label(text: Option<&str>, copies: u32) -> Result<String, GuardError> {
//!     validate_string_null_or_white_space(text, "text")?;
//!     throw_if_less_than_one(copies, "copies")?;
//!     Ok(text.unwrap_or_default().repeat(copies as usize))
//! }
//!
//! assert_eq!(make_label(Some("x"), 2).unwrap(), "xx");
//!
//! let err = make_label(Some("   "), 2).unwrap_err();
//! assert_eq!(err, GuardError::ArgumentNull("text".to_string()));
//!
//! let err = make_label(Some("x"), 0).unwrap_err();
//! assert_eq!(err.message(), "'copies' can't be less than '1'.");
//! ```
//!
//! ## Choosing the error kind
//!
//! ```rust
//! use guardrail::throw_if_first_is_greater_with;
//!
//! // `String` implements `FromMessage`; custom kinds can too.
//! let err = throw_if_first_is_greater_with::<String, _>(4, "n1", 1, "n2").unwrap_err();
//! assert_eq!(err, "The 'n1''s value is greater than 'n2''s value.");
//! ```
//!
//! Enable the `tracing` feature to have every violation emit a `debug!`
//! event alongside the returned error.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod messages;
pub mod validator;

// Re-exports
pub use error::{FromMessage, GuardError};
pub use validator::{
    throw_if_first_is_greater, throw_if_first_is_greater_or_equal,
    throw_if_first_is_greater_or_equal_with, throw_if_first_is_greater_with, throw_if_less_than,
    throw_if_less_than_one, throw_if_less_than_one_with, throw_if_less_than_with,
    throw_if_modulo_is_not_zero, throw_if_modulo_is_not_zero_with, validate_array,
    validate_array_with, validate_length, validate_length_with, validate_list, validate_list_with,
    validate_object, validate_object_with, validate_string_null_or_empty,
    validate_string_null_or_empty_with, validate_string_null_or_white_space,
    validate_string_null_or_white_space_with, Integer, Threshold,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{FromMessage, GuardError};
    pub use crate::validator::{
        throw_if_first_is_greater, throw_if_first_is_greater_or_equal,
        throw_if_first_is_greater_or_equal_with, throw_if_first_is_greater_with,
        throw_if_less_than, throw_if_less_than_one, throw_if_less_than_one_with,
        throw_if_less_than_with, throw_if_modulo_is_not_zero, throw_if_modulo_is_not_zero_with,
        validate_array, validate_array_with, validate_length, validate_length_with, validate_list,
        validate_list_with, validate_object, validate_object_with, validate_string_null_or_empty,
        validate_string_null_or_empty_with, validate_string_null_or_white_space,
        validate_string_null_or_white_space_with, Integer, Threshold,
    };
}
