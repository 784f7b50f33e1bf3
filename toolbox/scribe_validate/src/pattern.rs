//! Pattern-backed validation.

use crate::Validator;
use regex::Regex;

/// Validates against an arbitrary pattern.
///
/// The pattern is matched as a search, so anchor it with `^` and `$`
/// when the whole input must conform.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
}

impl RegexValidator {
    /// Compiles `pattern` into a validator.
    ///
    /// # Errors
    ///
    /// Returns the compile error when `pattern` is not a valid regular
    /// expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self { regex: Regex::new(pattern)? })
    }

    /// Wraps an already compiled pattern.
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Validator for RegexValidator {
    fn is_valid(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}
