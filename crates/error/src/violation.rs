//! The built-in violation kinds
//!
//! [`Violation`] is the closed sum of everything an assertion can reject. Each
//! variant carries exactly the arguments its kind reports, and its `Display`
//! output is the kind's fixed human-message template.
//!
//! Numeric inputs are rendered to their canonical decimal form by the
//! constructors, so `i32`, `i64` and decimal limits all produce the same
//! argument strings.

use crate::error::{StructuredError, StructuredErrorBuilder};
use crate::message::MessageKey;
use crate::severity::ErrorSeverity;
use std::fmt;

/// Which flavour of "missing" a mandatory value hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Missing {
    /// No value at all.
    Null,
    /// A collection with zero elements.
    Empty,
    /// A string that is empty or whitespace only.
    Blank,
}

impl Missing {
    /// Returns the suffix used in the human message.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Missing::Null => "null",
            Missing::Empty => "empty",
            Missing::Blank => "blank",
        }
    }
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A rejected value, typed by kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A mandatory value was null, empty or blank.
    #[error("The field \"{field}\" is mandatory and wasn't set ({missing})")]
    MissingMandatoryValue {
        /// Field name.
        field: String,
        /// What kind of missing.
        missing: Missing,
    },

    /// A string was longer than allowed.
    #[error("Length of \"{field}\" must be under {max_length} but was {current_length}")]
    StringTooLong {
        /// Field name.
        field: String,
        /// Actual length.
        current_length: String,
        /// Inclusive maximum.
        max_length: String,
    },

    /// A string was shorter than allowed.
    #[error("Length of \"{field}\" must be over {min_length} but was {current_length}")]
    StringTooShort {
        /// Field name.
        field: String,
        /// Actual length.
        current_length: String,
        /// Inclusive minimum.
        min_length: String,
    },

    /// A number was above its maximum.
    #[error("Value of \"{field}\" must be under {max} but was {value}")]
    ValueOverMax {
        /// Field name.
        field: String,
        /// Inclusive maximum.
        max: String,
        /// Offending value.
        value: String,
    },

    /// A number was below its minimum.
    #[error("Value of \"{field}\" must be over {min} but was {value}")]
    ValueUnderMin {
        /// Field name.
        field: String,
        /// Inclusive minimum.
        min: String,
        /// Offending value.
        value: String,
    },

    /// The pattern used to validate a format does not compile.
    #[error("Can't validate format, invalid regex: \"{regex}\"")]
    InvalidRegex {
        /// The malformed pattern.
        regex: String,
    },

    /// A string did not match its expected pattern.
    #[error("Can't validate \"{field}\" value, expected format is \"{regex}\" for \"{value}\"")]
    WrongFormat {
        /// Field name.
        field: String,
        /// Expected pattern.
        regex: String,
        /// Offending value.
        value: String,
    },
}

impl Violation {
    /// The field was absent.
    pub fn missing_null(field: impl Into<String>) -> Self {
        Self::MissingMandatoryValue {
            field: field.into(),
            missing: Missing::Null,
        }
    }

    /// The collection had no elements.
    pub fn missing_empty(field: impl Into<String>) -> Self {
        Self::MissingMandatoryValue {
            field: field.into(),
            missing: Missing::Empty,
        }
    }

    /// The string was empty or whitespace only.
    pub fn missing_blank(field: impl Into<String>) -> Self {
        Self::MissingMandatoryValue {
            field: field.into(),
            missing: Missing::Blank,
        }
    }

    /// The string had more than `max_length` characters.
    pub fn string_too_long(
        field: impl Into<String>,
        current_length: impl fmt::Display,
        max_length: impl fmt::Display,
    ) -> Self {
        Self::StringTooLong {
            field: field.into(),
            current_length: current_length.to_string(),
            max_length: max_length.to_string(),
        }
    }

    /// The string had fewer than `min_length` characters.
    pub fn string_too_short(
        field: impl Into<String>,
        current_length: impl fmt::Display,
        min_length: impl fmt::Display,
    ) -> Self {
        Self::StringTooShort {
            field: field.into(),
            current_length: current_length.to_string(),
            min_length: min_length.to_string(),
        }
    }

    /// The number was above `max`.
    pub fn value_over_max(
        field: impl Into<String>,
        max: impl fmt::Display,
        value: impl fmt::Display,
    ) -> Self {
        Self::ValueOverMax {
            field: field.into(),
            max: max.to_string(),
            value: value.to_string(),
        }
    }

    /// The number was below `min`.
    pub fn value_under_min(
        field: impl Into<String>,
        min: impl fmt::Display,
        value: impl fmt::Display,
    ) -> Self {
        Self::ValueUnderMin {
            field: field.into(),
            min: min.to_string(),
            value: value.to_string(),
        }
    }

    /// The pattern did not compile.
    pub fn invalid_regex(regex: impl Into<String>) -> Self {
        Self::InvalidRegex {
            regex: regex.into(),
        }
    }

    /// The value did not match `regex`.
    pub fn wrong_format(
        field: impl Into<String>,
        regex: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::WrongFormat {
            field: field.into(),
            regex: regex.into(),
            value: value.into(),
        }
    }

    /// Returns the stable key of this kind.
    #[must_use]
    pub fn message_key(&self) -> MessageKey {
        match self {
            Violation::MissingMandatoryValue { missing, .. } => match missing {
                Missing::Null => MessageKey::MandatoryNull,
                Missing::Empty => MessageKey::MandatoryEmpty,
                Missing::Blank => MessageKey::MandatoryBlank,
            },
            Violation::StringTooLong { .. } => MessageKey::StringTooLong,
            Violation::StringTooShort { .. } => MessageKey::StringTooShort,
            Violation::ValueOverMax { .. } => MessageKey::ValueOverMax,
            Violation::ValueUnderMin { .. } => MessageKey::ValueUnderMin,
            Violation::InvalidRegex { .. } => MessageKey::InvalidRegex,
            Violation::WrongFormat { .. } => MessageKey::InvalidFormat,
        }
    }

    /// Every built-in kind is a server fault; reclassifying is up to the caller.
    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::ServerFault
    }

    /// Returns the field this violation is about, if it names one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Violation::MissingMandatoryValue { field, .. }
            | Violation::StringTooLong { field, .. }
            | Violation::StringTooShort { field, .. }
            | Violation::ValueOverMax { field, .. }
            | Violation::ValueUnderMin { field, .. }
            | Violation::WrongFormat { field, .. } => Some(field.as_str()),
            Violation::InvalidRegex { .. } => None,
        }
    }

    /// Returns the arguments this kind reports, as `(name, value)` pairs.
    #[must_use]
    pub fn arguments(&self) -> Vec<(&'static str, &str)> {
        match self {
            Violation::MissingMandatoryValue { field, .. } => vec![("field", field.as_str())],
            Violation::StringTooLong {
                field,
                current_length,
                max_length,
            } => vec![
                ("field", field.as_str()),
                ("currentLength", current_length.as_str()),
                ("maxLength", max_length.as_str()),
            ],
            Violation::StringTooShort {
                field,
                current_length,
                min_length,
            } => vec![
                ("field", field.as_str()),
                ("currentLength", current_length.as_str()),
                ("minLength", min_length.as_str()),
            ],
            Violation::ValueOverMax { field, max, value } => {
                vec![("field", field.as_str()), ("max", max.as_str()), ("value", value.as_str())]
            }
            Violation::ValueUnderMin { field, min, value } => {
                vec![("field", field.as_str()), ("min", min.as_str()), ("value", value.as_str())]
            }
            Violation::InvalidRegex { regex } => vec![("regex", regex.as_str())],
            Violation::WrongFormat {
                field,
                regex,
                value,
            } => vec![("field", field.as_str()), ("regex", regex.as_str()), ("value", value.as_str())],
        }
    }

    /// Returns a builder prefilled with key, severity, message and arguments.
    ///
    /// Use it to attach a cause before building.
    pub fn into_builder(self) -> StructuredErrorBuilder {
        let builder = StructuredError::builder(self.message_key())
            .severity(self.severity())
            .message(self.to_string());
        self.arguments()
            .into_iter()
            .fold(builder, |b, (name, value)| b.argument(name, value))
    }
}

impl From<Violation> for StructuredError {
    fn from(violation: Violation) -> Self {
        violation.into_builder().build()
    }
}
