//! Prelude module for convenient imports.
//!
//! ```
//! use bulwark_validator::prelude::*;
//!
//! let rule = min_length(3).and(max_length(20));
//! assert!(rule.validate("username", "alice").is_ok());
//! assert!(field("age", 17_i64).min(18).is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors
// ============================================================================

pub use crate::foundation::{
    ErrorSeverity, MessageKey, StructuredError, Validate, ValidateExt, ValidationResult, Violation,
};

// ============================================================================
// ASSERTIONS
// ============================================================================

pub use crate::assertion::{IntoAssertion, NumberAssertion, StringAssertion, field};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    Emptiable, Format, Max, MaxLength, Min, MinLength, format, max, max_length, min, min_length,
    require_not_blank, require_not_empty, require_present,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, and};
