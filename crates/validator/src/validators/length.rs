//! String length rules
//!
//! Length is measured in Unicode scalar values (chars), never bytes, so a
//! multi-byte letter counts once.

use crate::foundation::{Validate, reject};
use bulwark_error::{StructuredError, Violation};

/// Measures a string the way every length rule does.
#[inline]
pub(crate) fn char_length(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Validates that a string is at most `max` characters long (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    /// Inclusive maximum.
    pub max: usize,
}

impl MaxLength {
    /// Creates a maximum length rule.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validate for MaxLength {
    type Input = str;

    fn validate(&self, field: &str, input: &str) -> Result<(), StructuredError> {
        let length = char_length(input);
        if length > self.max {
            return Err(reject(Violation::string_too_long(field, length, self.max)));
        }
        Ok(())
    }
}

/// Creates a [`MaxLength`] rule.
#[must_use]
pub fn max_length(max: usize) -> MaxLength {
    MaxLength::new(max)
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that a string is at least `min` characters long (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    /// Inclusive minimum.
    pub min: usize,
}

impl MinLength {
    /// Creates a minimum length rule.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validate for MinLength {
    type Input = str;

    fn validate(&self, field: &str, input: &str) -> Result<(), StructuredError> {
        let length = char_length(input);
        if length < self.min {
            return Err(reject(Violation::string_too_short(field, length, self.min)));
        }
        Ok(())
    }
}

/// Creates a [`MinLength`] rule.
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}
