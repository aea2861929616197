//! # bulwark-error
//!
//! Structured errors for domain validation.
//!
//! Every failure is a [`StructuredError`]: a stable [`MessageKey`] for
//! programmatic matching, an optional human message, an optional
//! [`ErrorSeverity`] that maps to a 400- or 500-class status, and a read-only
//! [`Arguments`] view describing the violation.
//!
//! The nine built-in kinds live in [`Violation`]; converting one into a
//! `StructuredError` fixes its key, severity and message template.
//!
//! ```
//! use bulwark_error::{MessageKey, StructuredError, Violation};
//!
//! let error: StructuredError = Violation::value_over_max("age", 4, 5).into();
//!
//! assert_eq!(error.message_key(), MessageKey::ValueOverMax);
//! assert_eq!(error.argument("max"), Some("4"));
//! assert_eq!(error.to_string(), "Value of \"age\" must be under 4 but was 5");
//! ```

pub mod arguments;
pub mod error;
pub mod message;
pub mod severity;
pub mod violation;

pub use arguments::Arguments;
pub use error::{Cause, StructuredError, StructuredErrorBuilder};
pub use message::{MessageKey, UnknownMessageKey};
pub use severity::ErrorSeverity;
pub use violation::{Missing, Violation};

/// Result alias for operations that fail with a [`StructuredError`].
pub type Result<T, E = StructuredError> = std::result::Result<T, E>;
