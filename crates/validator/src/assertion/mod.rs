//! Fluent field assertions
//!
//! [`field`] pairs a field name with a value and returns a short-lived handle
//! whose checks chain with `?`. The first failing check returns its error and
//! the rest of the chain never runs.
//!
//! ```
//! use bulwark_validator::field;
//!
//! # fn main() -> Result<(), bulwark_error::StructuredError> {
//! field("login", "alice").not_blank()?.min_length(1)?.max_length(50)?;
//! field("age", 42_i64).min(18)?.max(130)?;
//! # Ok(())
//! # }
//! ```
//!
//! Absent values pass every check except [`StringAssertion::not_blank`]:
//! only presence checks force presence.
//!
//! ```
//! use bulwark_validator::field;
//!
//! assert!(field("age", None::<i64>).max(3).is_ok());
//! assert!(field("nickname", None::<&str>).max_length(3).is_ok());
//! assert!(field("nickname", None::<&str>).not_blank().is_err());
//! ```

mod number;
mod string;

pub use number::NumberAssertion;
pub use string::StringAssertion;

/// Converts a value into the assertion handle matching its type.
///
/// Numbers (bare or optional) become a [`NumberAssertion`], strings become a
/// [`StringAssertion`].
pub trait IntoAssertion<'a> {
    /// The handle produced for this value type.
    type Assertion;

    /// Pairs the value with the name of the field it belongs to.
    fn into_assertion(self, field: &'a str) -> Self::Assertion;
}

/// Starts a fluent assertion chain on a named field.
pub fn field<'a, V>(name: &'a str, value: V) -> V::Assertion
where
    V: IntoAssertion<'a>,
{
    value.into_assertion(name)
}
