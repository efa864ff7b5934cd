//! Error kinds for guard violations
//!
//! This module provides [`GuardError`], the default error kind returned by
//! every check's default form, and [`FromMessage`], the capability that lets
//! the generic `*_with` forms construct an arbitrary caller-chosen error kind
//! from the templated diagnostic message.
//!
//! # Examples
//!
//! ## Default kind
//!
//! ```
//! use guardrail::{validate_object, GuardError};
//!
//! let err = validate_object::<str>(None, "variable").unwrap_err();
//! assert_eq!(err, GuardError::ArgumentNull("variable".to_string()));
//! assert_eq!(err.message(), "variable");
//! ```
//!
//! ## Caller-chosen kind
//!
//! ```
//! use guardrail::{validate_object_with, FromMessage};
//! use std::fmt;
//!
//! #[derive(Debug, PartialEq)]
//! struct ConfigError(String);
//!
//! impl fmt::Display for ConfigError {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}", self.0)
//!     }
//! }
//!
//! impl FromMessage for ConfigError {
//!     fn from_message(message: String) -> Self {
//!         ConfigError(message)
//!     }
//! }
//!
//! let err = validate_object_with::<ConfigError, str>(None, "variable").unwrap_err();
//! assert_eq!(err, ConfigError("variable".to_string()));
//! ```

use thiserror::Error;

/// The default error kind raised by guard checks.
///
/// Each variant carries the fully interpolated diagnostic message, which is
/// the sole diagnostic payload: the offending variable name (and threshold,
/// where applicable) is always embedded in the text, never only in structured
/// fields. `Display` renders exactly that message.
///
/// # Examples
///
/// ```
/// use guardrail::{validate_array, GuardError};
///
/// let err = validate_array(Some(&[] as &[&str]), "variable").unwrap_err();
/// assert_eq!(err, GuardError::Argument("'variable' contains zero items.".to_string()));
/// assert_eq!(err.to_string(), "'variable' contains zero items.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// An argument value failed a precondition (range, ordering, emptiness,
    /// divisibility).
    #[error("{0}")]
    Argument(String),
    /// A required argument was absent, or a string carried no usable content.
    #[error("{0}")]
    ArgumentNull(String),
}

impl GuardError {
    /// The diagnostic message carried by this error, regardless of variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use guardrail::GuardError;
    ///
    /// let err = GuardError::ArgumentNull("variable".to_string());
    /// assert_eq!(err.message(), "variable");
    /// ```
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            GuardError::Argument(message) | GuardError::ArgumentNull(message) => message,
        }
    }
}

/// An error kind constructible from a single diagnostic message.
///
/// The generic `*_with` forms of every check are bounded by this trait: the
/// caller picks the error kind at the call site and the check builds it from
/// the templated message. A kind that cannot be constructed from a message
/// string fails the bound at compile time, so a misconfigured call site is
/// rejected at the boundary rather than surfacing at runtime.
///
/// `GuardError` itself deliberately does not implement `FromMessage`: the
/// default forms pick its variant per failure mode, and a single-message
/// constructor could not.
///
/// # Examples
///
/// ```
/// use guardrail::throw_if_less_than_one_with;
///
/// // `String` implements `FromMessage`, so checks can produce plain text.
/// let err = throw_if_less_than_one_with::<String>(0, "n1").unwrap_err();
/// assert_eq!(err, "'n1' can't be less than '1'.");
/// ```
pub trait FromMessage {
    /// Construct the error kind carrying `message` verbatim.
    fn from_message(message: String) -> Self;
}

impl FromMessage for String {
    #[inline]
    fn from_message(message: String) -> Self {
        message
    }
}

impl FromMessage for Box<dyn std::error::Error + Send + Sync> {
    #[inline]
    fn from_message(message: String) -> Self {
        message.into()
    }
}
