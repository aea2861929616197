//! Rule combinators
//!
//! - [`And`] - both rules must pass, first failure wins

pub mod and;

pub use and::{And, and};
