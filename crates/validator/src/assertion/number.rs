use super::IntoAssertion;
use crate::foundation::Validate;
use crate::validators::{max, min};
use bulwark_error::StructuredError;
use rust_decimal::Decimal;

/// Fluent checks on a numeric field.
///
/// The value is held as a [`Decimal`], so every integer type compares against
/// an `i64` bound exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberAssertion<'a> {
    field: &'a str,
    value: Option<Decimal>,
}

impl<'a> NumberAssertion<'a> {
    /// Creates a handle; prefer [`field`](super::field).
    pub fn new(field: &'a str, value: Option<Decimal>) -> Self {
        Self { field, value }
    }

    /// Returns the field name.
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// Returns the value, if present.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Fails with value-over-max when the value is greater than `limit`.
    pub fn max(self, limit: i64) -> Result<Self, StructuredError> {
        self.satisfies(&max(limit))
    }

    /// Fails with value-under-min when the value is less than `limit`.
    pub fn min(self, limit: i64) -> Result<Self, StructuredError> {
        self.satisfies(&min(limit))
    }

    /// Applies any numeric rule; skipped when the value is absent.
    pub fn satisfies<V>(self, rule: &V) -> Result<Self, StructuredError>
    where
        V: Validate<Input = Decimal> + ?Sized,
    {
        if let Some(value) = &self.value {
            rule.validate(self.field, value)?;
        }
        Ok(self)
    }
}

macro_rules! impl_into_number_assertion {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> IntoAssertion<'a> for $ty {
                type Assertion = NumberAssertion<'a>;

                fn into_assertion(self, field: &'a str) -> Self::Assertion {
                    NumberAssertion::new(field, Some(Decimal::from(self)))
                }
            }

            impl<'a> IntoAssertion<'a> for Option<$ty> {
                type Assertion = NumberAssertion<'a>;

                fn into_assertion(self, field: &'a str) -> Self::Assertion {
                    NumberAssertion::new(field, self.map(Decimal::from))
                }
            }
        )*
    };
}

impl_into_number_assertion!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, Decimal);
