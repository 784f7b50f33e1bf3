//! Integer validation.

use crate::Validator;
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

// ASCII class rather than `\d`, which also matches digits `parse` rejects.
#[expect(clippy::expect_used, reason = "the pattern is a fixed literal and always compiles")]
static ALL_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digit pattern compiles"));

/// Validates unsigned decimal integers, optionally within a range.
///
/// The input must consist of ASCII digits only (no sign, no grouping)
/// and must fit in an `i64`. When a range is configured, values outside
/// it are rejected.
#[derive(Debug, Clone)]
pub struct IntValidator {
    range: Option<RangeInclusive<i64>>,
}

impl IntValidator {
    /// Accepts any digit string that fits in an `i64`.
    pub fn new() -> Self {
        Self { range: None }
    }

    /// Accepts only values within `range`.
    pub fn in_range(range: RangeInclusive<i64>) -> Self {
        Self { range: Some(range) }
    }

    /// Accepts values representable as a `u16`, such as port numbers.
    pub fn u16_range() -> Self {
        Self::in_range(0..=i64::from(u16::MAX))
    }
}

impl Default for IntValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for IntValidator {
    fn is_valid(&self, input: &str) -> bool {
        if !ALL_DIGITS.is_match(input) {
            return false;
        }
        let Ok(value) = input.parse::<i64>() else {
            return false;
        };
        match &self.range {
            Some(range) => range.contains(&value),
            None => true,
        }
    }
}
