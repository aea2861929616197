//! Fault classification for structured errors
//!
//! Severity tells an outer layer which response class a failure belongs to.
//! The core only carries it; translating it to a transport status is the
//! caller's job.

use std::fmt;

// ============================================================================
// ERROR SEVERITY
// ============================================================================

/// Coarse classification of where a fault originates.
///
/// Each level maps to a stable HTTP-like status code so that an outer layer
/// can pick a response class without matching on message keys.
///
/// # Examples
///
/// ```
/// use bulwark_error::ErrorSeverity;
///
/// assert_eq!(ErrorSeverity::ClientFault.status_code(), 400);
/// assert_eq!(ErrorSeverity::from_status_code(500), Some(ErrorSeverity::ServerFault));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The caller sent something it should not have (400-class).
    ClientFault,
    /// A defect that needs server-side attention (500-class).
    ServerFault,
}

impl ErrorSeverity {
    /// Every severity level, in declaration order.
    pub const ALL: [ErrorSeverity; 2] = [ErrorSeverity::ClientFault, ErrorSeverity::ServerFault];

    /// Returns the status code this severity maps to.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorSeverity::ClientFault => 400,
            ErrorSeverity::ServerFault => 500,
        }
    }

    /// Looks up the severity for an exact status code.
    ///
    /// Only the two codes produced by [`status_code`](Self::status_code) are
    /// recognised; any other code yields `None`.
    #[must_use]
    pub fn from_status_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.status_code() == code)
    }

    /// Returns true for [`ErrorSeverity::ClientFault`].
    #[must_use]
    pub const fn is_client_fault(self) -> bool {
        matches!(self, ErrorSeverity::ClientFault)
    }

    /// Returns true for [`ErrorSeverity::ServerFault`].
    #[must_use]
    pub const fn is_server_fault(self) -> bool {
        matches!(self, ErrorSeverity::ServerFault)
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::ClientFault => f.write_str("client fault"),
            ErrorSeverity::ServerFault => f.write_str("server fault"),
        }
    }
}
