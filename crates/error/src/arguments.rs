//! Read-only argument view
//!
//! Arguments describe a violation (field name, offending value, limit) as
//! string pairs. Values are rendered when the error is built, so an error stays
//! self-describing after the value that caused it is gone.
//!
//! [`Arguments`] exposes no mutating API at all. Handlers that catch an error
//! (a logger, an HTTP translator) can read it concurrently but cannot alter the
//! evidence it carries:
//!
//! ```compile_fail
//! use bulwark_error::{MessageKey, StructuredError};
//!
//! let error = StructuredError::builder(MessageKey::BadRequest)
//!     .argument("key", "value")
//!     .build();
//! error.arguments().insert("key".to_owned(), "tampered".to_owned());
//! ```
//!
//! ```compile_fail
//! use bulwark_error::{MessageKey, StructuredError};
//!
//! let error = StructuredError::builder(MessageKey::BadRequest)
//!     .argument("key", "value")
//!     .build();
//! let args: &mut bulwark_error::Arguments = error.arguments();
//! ```

use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;
use std::slice;

/// Inline capacity; every built-in violation carries at most three arguments.
const INLINE_ARGUMENTS: usize = 3;

type Entries = SmallVec<[(String, String); INLINE_ARGUMENTS]>;

// ============================================================================
// ARGUMENTS
// ============================================================================

/// Immutable key-to-string mapping attached to a [`StructuredError`](crate::StructuredError).
///
/// Keys are unique and iteration is sorted by key, so two mappings built from
/// the same pairs in any order compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Arguments {
    entries: Entries,
}

impl Arguments {
    /// Builds the view from raw pairs; a later duplicate key wins.
    pub(crate) fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut entries = Entries::with_capacity(pairs.len());
        for (key, value) in pairs {
            match entries.binary_search_by(|(k, _)| k.as_str().cmp(key.as_str())) {
                Ok(idx) => entries[idx].1 = value,
                Err(idx) => entries.insert(idx, (key, value)),
            }
        }
        Self { entries }
    }

    /// Returns the value rendered for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .ok()
            .map(|idx| self.entries[idx].1.as_str())
    }

    /// Returns true if an argument named `key` exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs sorted by key.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the argument names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    /// Copies the arguments into an owned map.
    ///
    /// The copy is detached: changing it never touches the error.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries.iter().cloned().collect()
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: \"{v}\"")?;
        }
        f.write_str("}")
    }
}

/// Iterator over the pairs of an [`Arguments`] view.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Arguments {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
