//! Stable message keys
//!
//! A [`MessageKey`] identifies the *kind* of an error independently of its
//! display text. Callers match on it for programmatic branching and use its
//! string form for localisation lookups, so the string values never change
//! between versions.

use std::fmt;
use std::str::FromStr;

/// Stable identifier of an error kind.
///
/// The set is closed: adding a key is a code change, and matches over it are
/// expected to be exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    /// Generic rejected request.
    BadRequest,
    /// Generic internal failure.
    InternalServerError,
    /// A mandatory value was absent.
    MandatoryNull,
    /// A mandatory collection had no elements.
    MandatoryEmpty,
    /// A mandatory string was empty or whitespace only.
    MandatoryBlank,
    /// A string exceeded its maximum length.
    StringTooLong,
    /// A string was shorter than its minimum length.
    StringTooShort,
    /// A number exceeded its maximum.
    ValueOverMax,
    /// A number was below its minimum.
    ValueUnderMin,
    /// A string did not match its expected pattern.
    InvalidFormat,
    /// The pattern itself could not be compiled.
    InvalidRegex,
}

impl MessageKey {
    /// Every message key, in declaration order.
    pub const ALL: [MessageKey; 11] = [
        MessageKey::BadRequest,
        MessageKey::InternalServerError,
        MessageKey::MandatoryNull,
        MessageKey::MandatoryEmpty,
        MessageKey::MandatoryBlank,
        MessageKey::StringTooLong,
        MessageKey::StringTooShort,
        MessageKey::ValueOverMax,
        MessageKey::ValueUnderMin,
        MessageKey::InvalidFormat,
        MessageKey::InvalidRegex,
    ];

    /// Returns the stable string form of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::BadRequest => "user.bad-request",
            MessageKey::InternalServerError => "server.internal-server-error",
            MessageKey::MandatoryNull => "server.mandatory-null",
            MessageKey::MandatoryEmpty => "server.mandatory-empty",
            MessageKey::MandatoryBlank => "server.mandatory-blank",
            MessageKey::StringTooLong => "server.string-too-long",
            MessageKey::StringTooShort => "server.string-too-short",
            MessageKey::ValueOverMax => "server.value-over-max",
            MessageKey::ValueUnderMin => "server.value-under-min",
            MessageKey::InvalidFormat => "server.invalid-format",
            MessageKey::InvalidRegex => "server.invalid-regex",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not a known [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message key: \"{0}\"")]
pub struct UnknownMessageKey(pub String);

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownMessageKey(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let strings: HashSet<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(strings.len(), MessageKey::ALL.len());
    }

    #[test]
    fn test_parse_every_key() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_str().parse::<MessageKey>(), Ok(key));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "server.nope".parse::<MessageKey>().unwrap_err();
        assert_eq!(err, UnknownMessageKey("server.nope".to_owned()));
        assert_eq!(err.to_string(), "unknown message key: \"server.nope\"");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(MessageKey::StringTooLong.to_string(), "server.string-too-long");
        assert_eq!(MessageKey::BadRequest.to_string(), "user.bad-request");
    }
}
