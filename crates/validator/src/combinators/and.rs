//! AND combinator - logical conjunction of rules
//!
//! This module provides the [`And`] combinator which combines two rules with
//! logical AND semantics: both must pass, and the first failure is the one
//! reported.
//!
//! # Examples
//!
//! ```
//! use bulwark_validator::combinators::And;
//! use bulwark_validator::foundation::Validate;
//! use bulwark_validator::validators::{max_length, min_length};
//!
//! let rule = And::new(min_length(5), max_length(20));
//! assert!(rule.validate("nickname", "hello").is_ok());
//! assert!(rule.validate("nickname", "hi").is_err()); // fails min_length
//! ```

use crate::foundation::Validate;
use bulwark_error::StructuredError;

/// Combines two rules with logical AND.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, field: &str, input: &Self::Input) -> Result<(), StructuredError> {
        self.left.validate(field, input)?;
        self.right.validate(field, input)
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, min_length};
    use bulwark_error::MessageKey;

    #[test]
    fn test_both_pass() {
        let rule = and(min_length(2), max_length(5));
        assert!(rule.validate("f", "abc").is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // "abc" violates both; only the left rule is reported.
        let rule = and(max_length(2), min_length(10));
        let err = rule.validate("f", "abc").unwrap_err();
        assert_eq!(err.message_key(), MessageKey::StringTooLong);
    }

    #[test]
    fn test_right_failure() {
        let rule = and(min_length(1), max_length(2));
        let err = rule.validate("f", "abc").unwrap_err();
        assert_eq!(err.message_key(), MessageKey::StringTooLong);
        assert_eq!(err.argument("maxLength"), Some("2"));
    }

    #[test]
    fn test_into_parts() {
        let rule = and(min_length(1), max_length(2));
        let (left, right) = rule.into_parts();
        assert_eq!(left, min_length(1));
        assert_eq!(right, max_length(2));
    }
}
