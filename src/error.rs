//! Error types for EDN encoding.
//!
//! Every failure raised while rendering a value unwinds to the encode call that
//! started it, which discards the partial output and returns one of these.
//!
//! ## Error Categories
//!
//! - **Unsupported Type**: the shape has no EDN production (channels, locks, callables)
//! - **Unsupported Value**: the shape is fine but this value is not (`NaN`, `±inf`)
//! - **Extension**: a [`ToEdnText`](crate::ToEdnText) implementation returned an error
//! - **I/O**: the sink behind a [`StreamWriter`](crate::StreamWriter) rejected a write
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn::{to_string, Error};
//!
//! let err = to_string(&f64::NAN).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedValue(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during EDN encoding.
///
/// `Clone` so a failed [`StreamWriter`](crate::StreamWriter) can hand the same
/// failure back on every later call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The output sink rejected a write
    #[error("IO error: {0}")]
    Io(String),

    /// A shape with no EDN equivalent, named by its type
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A value the notation cannot represent, in its textual form
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// A custom textual form failed for the named type
    #[error("error calling to_edn_text for type {type_name}: {message}")]
    Extension { type_name: String, message: String },

    /// A renderer was handed a value of a different type than it was compiled for
    #[error("shape mismatch: renderer for {expected} received {found}")]
    ShapeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error naming the offending shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn::Error;
    ///
    /// let err = Error::unsupported_type("std::sync::Mutex<i32>");
    /// assert_eq!(err.to_string(), "unsupported type: std::sync::Mutex<i32>");
    /// ```
    pub fn unsupported_type(type_name: &str) -> Self {
        Error::UnsupportedType(type_name.to_string())
    }

    /// Creates an unsupported value error from the value's textual form.
    pub fn unsupported_value<T: fmt::Display>(value: T) -> Self {
        Error::UnsupportedValue(value.to_string())
    }

    /// Wraps the failure of a [`ToEdnText`](crate::ToEdnText) call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn::Error;
    ///
    /// let err = Error::extension("app::Color", "no name for #ff00ff");
    /// assert!(err.to_string().contains("app::Color"));
    /// assert!(err.to_string().contains("no name for #ff00ff"));
    /// ```
    pub fn extension<T: fmt::Display>(type_name: &str, cause: T) -> Self {
        Error::Extension {
            type_name: type_name.to_string(),
            message: cause.to_string(),
        }
    }

    pub(crate) fn shape_mismatch(expected: &str, found: &str) -> Self {
        Error::ShapeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
