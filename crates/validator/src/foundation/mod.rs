//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: re-exported from `bulwark-error`
//!
//! Rules are small values; the fluent [`field`](crate::assertion::field) API
//! builds them on the fly, and callers can also keep composed rules around
//! as constants.

pub mod traits;

pub use bulwark_error::{ErrorSeverity, MessageKey, StructuredError, Violation};
pub use traits::{Validate, ValidateExt};

/// Result of a single check.
pub type ValidationResult<T> = Result<T, StructuredError>;

/// Turns a violation into the error a rule returns.
///
/// Every rejection in this crate goes through here, so it is also the one place
/// that logs.
pub(crate) fn reject(violation: Violation) -> StructuredError {
    trace_rejection(&violation);
    violation.into()
}

/// Like [`reject`], wrapping the lower-level error that caused the violation.
pub(crate) fn reject_with_cause<E>(violation: Violation, cause: E) -> StructuredError
where
    E: std::error::Error + Send + Sync + 'static,
{
    trace_rejection(&violation);
    violation.into_builder().cause(cause).build()
}

#[cfg(feature = "tracing")]
fn trace_rejection(violation: &Violation) {
    tracing::debug!(
        field = violation.field(),
        message_key = %violation.message_key(),
        "value rejected"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_rejection(_violation: &Violation) {}
