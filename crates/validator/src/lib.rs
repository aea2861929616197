//! # bulwark-validator
//!
//! Fluent domain assertions that fail with a structured, machine-readable
//! error.
//!
//! ## Quick Start
//!
//! ```
//! use bulwark_validator::prelude::*;
//!
//! fn check_login(login: Option<&str>) -> Result<(), StructuredError> {
//!     field("login", login)
//!         .not_blank()?
//!         .min_length(1)?
//!         .max_length(50)?
//!         .format("[_.@A-Za-z0-9-]+")?;
//!     Ok(())
//! }
//!
//! assert!(check_login(Some("alice")).is_ok());
//!
//! let err = check_login(Some("bad login!")).unwrap_err();
//! assert_eq!(err.message_key(), MessageKey::InvalidFormat);
//! assert_eq!(err.argument("field"), Some("login"));
//! ```
//!
//! ## Building blocks
//!
//! - [`field`] - fluent entry point, dispatched on the value's type
//! - [`validators`] - presence checks and reusable rules
//! - [`combinators`] - rule composition
//!
//! ## Features
//!
//! - `tracing` (default): every rejected value emits a `debug` event carrying
//!   the field name and message key.

// StructuredError is the error type of every check; boxing it would add an
// allocation to every failure for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod assertion;
pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use assertion::{IntoAssertion, NumberAssertion, StringAssertion, field};
pub use validators::{require_not_blank, require_not_empty, require_present};
