//! Numeric bound rules
//!
//! Inputs are [`Decimal`]s so that any integer the fluent API accepts can be
//! compared against an `i64` bound without overflow. Bounds are inclusive.

use crate::foundation::{Validate, reject};
use bulwark_error::{StructuredError, Violation};
use rust_decimal::Decimal;

/// Validates that a value does not exceed a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Max {
    /// Inclusive maximum.
    pub max: i64,
}

impl Validate for Max {
    type Input = Decimal;

    fn validate(&self, field: &str, input: &Decimal) -> Result<(), StructuredError> {
        if *input > Decimal::from(self.max) {
            return Err(reject(Violation::value_over_max(
                field,
                self.max,
                input.normalize(),
            )));
        }
        Ok(())
    }
}

/// Creates a [`Max`] rule.
#[must_use]
pub fn max(max: i64) -> Max {
    Max { max }
}

/// Validates that a value is at least a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Min {
    /// Inclusive minimum.
    pub min: i64,
}

impl Validate for Min {
    type Input = Decimal;

    fn validate(&self, field: &str, input: &Decimal) -> Result<(), StructuredError> {
        if *input < Decimal::from(self.min) {
            return Err(reject(Violation::value_under_min(
                field,
                self.min,
                input.normalize(),
            )));
        }
        Ok(())
    }
}

/// Creates a [`Min`] rule.
#[must_use]
pub fn min(min: i64) -> Min {
    Min { min }
}
