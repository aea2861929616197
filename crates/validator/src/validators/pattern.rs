//! Regex format rule
//!
//! [`Format`] requires the whole value to match a pattern. The pattern is
//! checked as written, then anchored on its syntax tree, so a malformed
//! pattern always surfaces as an invalid-regex error and a valid one is never
//! reported as malformed.

use crate::foundation::{Validate, reject, reject_with_cause};
use bulwark_error::{StructuredError, Violation};
use regex::Regex;
use regex_syntax::Parser;
use regex_syntax::hir::{Hir, Look};

/// Validates that a string matches a regular expression.
#[derive(Debug, Clone)]
pub struct Format {
    pattern: String,
    regex: Regex,
}

impl Format {
    /// Compiles `pattern` into a whole-value matching rule.
    ///
    /// # Errors
    ///
    /// Returns an invalid-regex error, wrapping the compiler's error, when
    /// `pattern` is not a valid regular expression.
    pub fn compile(pattern: &str) -> Result<Self, StructuredError> {
        if let Err(e) = Regex::new(pattern) {
            return Err(reject_with_cause(Violation::invalid_regex(pattern), e));
        }
        // Anchor the parsed tree, not the text: flags such as `(?x)` would
        // otherwise change how the appended anchors are read.
        let hir = Parser::new()
            .parse(pattern)
            .map_err(|e| reject_with_cause(Violation::invalid_regex(pattern), e))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        let regex = Regex::new(&anchored.to_string())
            .map_err(|e| reject_with_cause(Violation::invalid_regex(pattern), e))?;

        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// Wraps an already compiled regex; it is used exactly as compiled.
    ///
    /// Anchor it with `^` and `$` to require a whole-value match.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            pattern: regex.as_str().to_owned(),
            regex,
        }
    }

    /// Returns the pattern as the caller wrote it.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Validate for Format {
    type Input = str;

    fn validate(&self, field: &str, input: &str) -> Result<(), StructuredError> {
        if !self.regex.is_match(input) {
            return Err(reject(Violation::wrong_format(field, &self.pattern, input)));
        }
        Ok(())
    }
}

/// Compiles a [`Format`] rule.
pub fn format(pattern: &str) -> Result<Format, StructuredError> {
    Format::compile(pattern)
}
