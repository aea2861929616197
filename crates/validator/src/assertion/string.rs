use super::IntoAssertion;
use crate::foundation::Validate;
use crate::validators::{Format, max_length, min_length, require_not_blank, require_present};
use bulwark_error::StructuredError;
use regex::Regex;

/// Fluent checks on a string field.
///
/// Length and format checks are skipped when the string is absent;
/// [`not_blank`](Self::not_blank) is the only check that enforces presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringAssertion<'a> {
    field: &'a str,
    value: Option<&'a str>,
}

impl<'a> StringAssertion<'a> {
    /// Creates a handle; prefer [`field`](super::field).
    pub fn new(field: &'a str, value: Option<&'a str>) -> Self {
        Self { field, value }
    }

    /// Returns the field name.
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// Returns the value, if present.
    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// Fails with mandatory-null when absent, mandatory-blank when blank.
    pub fn not_blank(self) -> Result<Self, StructuredError> {
        require_not_blank(self.field, self.value)?;
        Ok(self)
    }

    /// Fails with string-too-long when longer than `max` characters.
    pub fn max_length(self, max: usize) -> Result<Self, StructuredError> {
        self.satisfies(&max_length(max))
    }

    /// Fails with string-too-short when shorter than `min` characters.
    pub fn min_length(self, min: usize) -> Result<Self, StructuredError> {
        self.satisfies(&min_length(min))
    }

    /// Requires the whole value to match `regex`.
    ///
    /// A missing `regex` is the caller's bug and fails with mandatory-null on
    /// the field name `"regex"`. A pattern that does not compile fails with
    /// invalid-regex; a value that does not match fails with invalid-format.
    ///
    /// ```
    /// use bulwark_error::MessageKey;
    /// use bulwark_validator::field;
    ///
    /// let broken = field("f", "value").format("[").unwrap_err();
    /// assert_eq!(broken.message_key(), MessageKey::InvalidRegex);
    ///
    /// let rejected = field("f", "dummy").format("[0-9]+").unwrap_err();
    /// assert_eq!(rejected.message_key(), MessageKey::InvalidFormat);
    /// ```
    pub fn format<'r>(self, regex: impl Into<Option<&'r str>>) -> Result<Self, StructuredError> {
        let pattern = require_present("regex", regex.into())?;
        if self.value.is_none() {
            return Ok(self);
        }
        self.satisfies(&Format::compile(pattern)?)
    }

    /// Requires the value to match a precompiled `regex`, used exactly as
    /// compiled.
    pub fn matches(self, regex: &Regex) -> Result<Self, StructuredError> {
        if self.value.is_none() {
            return Ok(self);
        }
        self.satisfies(&Format::from_regex(regex.clone()))
    }

    /// Applies any string rule; skipped when the value is absent.
    pub fn satisfies<V>(self, rule: &V) -> Result<Self, StructuredError>
    where
        V: Validate<Input = str> + ?Sized,
    {
        if let Some(value) = self.value {
            rule.validate(self.field, value)?;
        }
        Ok(self)
    }
}

impl<'a> IntoAssertion<'a> for &'a str {
    type Assertion = StringAssertion<'a>;

    fn into_assertion(self, field: &'a str) -> Self::Assertion {
        StringAssertion::new(field, Some(self))
    }
}

impl<'a> IntoAssertion<'a> for &'a String {
    type Assertion = StringAssertion<'a>;

    fn into_assertion(self, field: &'a str) -> Self::Assertion {
        StringAssertion::new(field, Some(self.as_str()))
    }
}

impl<'a> IntoAssertion<'a> for Option<&'a str> {
    type Assertion = StringAssertion<'a>;

    fn into_assertion(self, field: &'a str) -> Self::Assertion {
        StringAssertion::new(field, self)
    }
}

impl<'a> IntoAssertion<'a> for Option<&'a String> {
    type Assertion = StringAssertion<'a>;

    fn into_assertion(self, field: &'a str) -> Self::Assertion {
        StringAssertion::new(field, self.map(String::as_str))
    }
}

impl<'a> IntoAssertion<'a> for &'a Option<String> {
    type Assertion = StringAssertion<'a>;

    fn into_assertion(self, field: &'a str) -> Self::Assertion {
        StringAssertion::new(field, self.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use crate::assertion::field;
    use bulwark_error::MessageKey;
    use regex::Regex;

    #[test]
    fn test_not_blank_in_chain() {
        let err = field("field", " ").not_blank().unwrap_err();
        assert_eq!(err.message_key(), MessageKey::MandatoryBlank);
        assert!(err.to_string().contains("\"field\""));
    }

    #[test]
    fn test_absent_string_skips_length_and_format() {
        let handle = field("field", None::<&str>)
            .max_length(1)
            .and_then(|h| h.min_length(10))
            .and_then(|h| h.format("[0-9]+"))
            .unwrap();
        assert_eq!(handle.value(), None);
    }

    #[test]
    fn test_missing_regex_fails_even_on_absent_value() {
        let err = field("field", None::<&str>).format(None::<&str>).unwrap_err();
        assert_eq!(err.message_key(), MessageKey::MandatoryNull);
        assert_eq!(err.argument("field"), Some("regex"));
    }

    #[test]
    fn test_owned_string_sources() {
        let owned = String::from("value");
        let optional: Option<String> = Some(owned.clone());
        assert!(field("f", &owned).max_length(5).is_ok());
        assert!(field("f", &optional).max_length(4).is_err());
        assert!(field("f", optional.as_ref()).min_length(6).is_err());
    }

    #[test]
    fn test_matches_precompiled() {
        let digits = Regex::new("^[0-9]+$").unwrap();
        assert!(field("zip", "75001").matches(&digits).is_ok());
        let err = field("zip", "7500A").matches(&digits).unwrap_err();
        assert_eq!(err.message_key(), MessageKey::InvalidFormat);
        assert_eq!(err.argument("regex"), Some("^[0-9]+$"));
    }
}
