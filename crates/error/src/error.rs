//! Structured error value and its builder
//!
//! [`StructuredError`] is what every failed assertion produces. It always
//! carries a [`MessageKey`]; message, severity, arguments and cause are
//! optional so that a bare key is still a well-formed error.
//!
//! # Examples
//!
//! ```
//! use bulwark_error::{ErrorSeverity, MessageKey, StructuredError};
//!
//! let error = StructuredError::builder(MessageKey::BadRequest)
//!     .message("Login already in use")
//!     .severity(ErrorSeverity::ClientFault)
//!     .argument("login", "alice")
//!     .build();
//!
//! assert_eq!(error.message_key(), MessageKey::BadRequest);
//! assert_eq!(error.status_code(), Some(400));
//! assert_eq!(error.argument("login"), Some("alice"));
//! ```

use crate::arguments::Arguments;
use crate::message::MessageKey;
use crate::severity::ErrorSeverity;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Type-erased lower-level error wrapped by a [`StructuredError`].
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

// ============================================================================
// STRUCTURED ERROR
// ============================================================================

/// A self-describing, immutable error value.
///
/// All fields are private; once built, the error can only be read. Cloning is
/// cheap for the cause, which is shared.
#[derive(Clone)]
pub struct StructuredError {
    key: MessageKey,
    message: Option<String>,
    severity: Option<ErrorSeverity>,
    arguments: Arguments,
    cause: Option<Cause>,
}

impl StructuredError {
    /// Creates an error holding only its key.
    ///
    /// Message, severity and cause are absent and the arguments are empty.
    #[must_use]
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            message: None,
            severity: None,
            arguments: Arguments::default(),
            cause: None,
        }
    }

    /// Starts building an error for `key`.
    pub fn builder(key: MessageKey) -> StructuredErrorBuilder {
        StructuredErrorBuilder::new(key)
    }

    /// Returns the stable key identifying this kind of error.
    #[must_use]
    pub fn message_key(&self) -> MessageKey {
        self.key
    }

    /// Returns the human-readable message, if one was set.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the severity, if one was set.
    #[must_use]
    pub fn severity(&self) -> Option<ErrorSeverity> {
        self.severity
    }

    /// Returns the status code of the severity, if one was set.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.severity.map(ErrorSeverity::status_code)
    }

    /// Returns a read-only view of the arguments.
    #[must_use]
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Shorthand for `self.arguments().get(name)`.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name)
    }

    /// Returns the wrapped lower-level error, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl From<MessageKey> for StructuredError {
    fn from(key: MessageKey) -> Self {
        Self::new(key)
    }
}

impl fmt::Debug for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredError")
            .field("key", &self.key)
            .field("message", &self.message)
            .field("severity", &self.severity)
            .field("arguments", &self.arguments)
            .field("cause", &self.cause.as_ref().map(ToString::to_string))
            .finish()
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "{}", self.key),
        }
    }
}

impl Error for StructuredError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`StructuredError`].
///
/// Argument values are rendered to strings as they are added, never lazily.
#[derive(Debug)]
#[must_use = "builder methods must be chained or built"]
pub struct StructuredErrorBuilder {
    key: MessageKey,
    message: Option<String>,
    severity: Option<ErrorSeverity>,
    arguments: Vec<(String, String)>,
    cause: Option<DebugCause>,
}

/// Wrapper so the builder can derive `Debug`.
struct DebugCause(Cause);

impl fmt::Debug for DebugCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StructuredErrorBuilder {
    /// Creates a builder for `key` with nothing else set.
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            message: None,
            severity: None,
            arguments: Vec::new(),
            cause: None,
        }
    }

    /// Replaces the message key.
    pub fn message_key(mut self, key: MessageKey) -> Self {
        self.key = key;
        self
    }

    /// Sets the human-readable message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the severity.
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Adds an argument, rendering `value` immediately.
    ///
    /// Adding the same key twice keeps the last value.
    pub fn argument(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.arguments.push((key.into(), value.to_string()));
        self
    }

    /// Adds an argument whose value may be absent; absence renders as `"null"`.
    pub fn optional_argument<V: fmt::Display>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.argument(key, value),
            None => self.argument(key, "null"),
        }
    }

    /// Wraps a lower-level error.
    pub fn cause<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(DebugCause(Arc::new(cause)));
        self
    }

    /// Wraps an already shared lower-level error.
    pub fn shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(DebugCause(cause));
        self
    }

    /// Finishes the error.
    #[must_use]
    pub fn build(self) -> StructuredError {
        StructuredError {
            key: self.key,
            message: self.message,
            severity: self.severity,
            arguments: Arguments::from_pairs(self.arguments),
            cause: self.cause.map(|c| c.0),
        }
    }
}

impl From<StructuredErrorBuilder> for StructuredError {
    fn from(builder: StructuredErrorBuilder) -> Self {
        builder.build()
    }
}
