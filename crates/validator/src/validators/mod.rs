//! Built-in rules
//!
//! - **Presence**: [`require_present`], [`require_not_blank`], [`require_not_empty`]
//! - **String**: [`MaxLength`], [`MinLength`], [`Format`]
//! - **Numeric**: [`Max`], [`Min`]
//!
//! # Examples
//!
//! ```
//! use bulwark_validator::prelude::*;
//!
//! let login = min_length(1).and(max_length(50));
//! assert!(login.validate("login", "alice").is_ok());
//!
//! let digits = format("[0-9]+").unwrap();
//! assert!(digits.validate("zip", "75001").is_ok());
//! ```

pub mod length;
pub mod pattern;
pub mod presence;
pub mod range;

pub use length::{MaxLength, MinLength, max_length, min_length};
pub use pattern::{Format, format};
pub use presence::{Emptiable, require_not_blank, require_not_empty, require_present};
pub use range::{Max, Min, max, min};
