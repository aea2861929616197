//! Core traits for the validation system
//!
//! This module defines the trait every rule implements, plus the extension
//! trait that composes rules.

use crate::combinators::And;
use bulwark_error::StructuredError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait all rules implement.
///
/// A rule checks one named field's value and either passes or returns the
/// [`StructuredError`] describing the first violation it found. Rules hold no
/// mutable state, so validating the same input twice always yields the same
/// outcome.
///
/// # Examples
///
/// ```
/// use bulwark_error::{StructuredError, Violation};
/// use bulwark_validator::foundation::Validate;
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, field: &str, input: &i64) -> Result<(), StructuredError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(Violation::wrong_format(field, "even", input.to_string()).into())
///         }
///     }
/// }
///
/// assert!(Even.validate("count", &4).is_ok());
/// assert!(Even.validate("count", &3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the value of `field`.
    fn validate(&self, field: &str, input: &Self::Input) -> Result<(), StructuredError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, field: &str, input: &Self::Input) -> Result<(), StructuredError> {
        (**self).validate(field, input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two rules with logical AND.
    ///
    /// Short-circuits: the right rule never runs once the left one failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bulwark_validator::prelude::*;
    ///
    /// let login = min_length(1).and(max_length(50));
    /// assert!(login.validate("login", "alice").is_ok());
    /// assert!(login.validate("login", "").is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}
