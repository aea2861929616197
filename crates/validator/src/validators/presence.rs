//! Presence checks
//!
//! Three increasingly strict ways a mandatory value can be missing:
//!
//! - **null**: there is no value at all (`None`)
//! - **empty**: a collection with zero elements
//! - **blank**: a string that is empty or whitespace only, where whitespace
//!   is the Unicode `White_Space` set (no-break spaces included)
//!
//! Each check returns the unwrapped value on success, so callers can bind it
//! directly:
//!
//! ```
//! use bulwark_validator::validators::require_not_blank;
//!
//! # fn main() -> Result<(), bulwark_error::StructuredError> {
//! let login = require_not_blank("login", Some("alice"))?;
//! assert_eq!(login, "alice");
//! # Ok(())
//! # }
//! ```

use crate::foundation::reject;
use bulwark_error::{StructuredError, Violation};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Fails with a mandatory-null error when `value` is absent.
pub fn require_present<T>(field: &str, value: Option<T>) -> Result<T, StructuredError> {
    value.ok_or_else(|| reject(Violation::missing_null(field)))
}

/// Fails when `value` is absent (null) or, once trimmed, has no characters (blank).
pub fn require_not_blank<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, StructuredError> {
    let value = require_present(field, value)?;
    if value.trim().is_empty() {
        return Err(reject(Violation::missing_blank(field)));
    }
    Ok(value)
}

/// Fails when `value` is absent (null) or has no elements (empty).
pub fn require_not_empty<C: Emptiable>(field: &str, value: Option<C>) -> Result<C, StructuredError> {
    let value = require_present(field, value)?;
    if value.has_no_elements() {
        return Err(reject(Violation::missing_empty(field)));
    }
    Ok(value)
}

// ============================================================================
// EMPTIABLE
// ============================================================================

/// Anything that can have zero elements.
pub trait Emptiable {
    /// Returns true when there are no elements.
    fn has_no_elements(&self) -> bool;
}

impl<C: Emptiable + ?Sized> Emptiable for &C {
    fn has_no_elements(&self) -> bool {
        (**self).has_no_elements()
    }
}

impl<T> Emptiable for [T] {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Emptiable for [T; N] {
    fn has_no_elements(&self) -> bool {
        N == 0
    }
}

impl Emptiable for str {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_emptiable {
    ($($ty:ty => [$($param:ident),*]),* $(,)?) => {
        $(
            impl<$($param),*> Emptiable for $ty {
                fn has_no_elements(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

impl_emptiable! {
    String => [],
    Vec<T> => [T],
    VecDeque<T> => [T],
    HashSet<T, S> => [T, S],
    HashMap<K, V, S> => [K, V, S],
    BTreeSet<T> => [T],
    BTreeMap<K, V> => [K, V],
}
