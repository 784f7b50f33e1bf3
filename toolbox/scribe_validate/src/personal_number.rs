//! Swedish personal identity number validation.

use crate::checksum::{decimal_digits, luhn_is_valid};
use crate::Validator;
use regex::Regex;
use std::sync::LazyLock;

// ASCII classes: `\d` would also match digits that `decimal_digits` skips.
#[expect(clippy::expect_used, reason = "the pattern is a fixed literal and always compiles")]
static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:19|20)?[0-9]{6}-?[0-9]{4}$").expect("shape pattern compiles")
});

/// Validates Swedish personal identity numbers.
///
/// Accepts the ten digit form (`YYMMDD-XXXX`) and the twelve digit form
/// with a 19 or 20 century prefix; the dash before the last four digits
/// is optional in both. Only ASCII digits count. The ten digits after
/// any century prefix must pass the Luhn check.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalNumberValidator;

impl PersonalNumberValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for PersonalNumberValidator {
    fn is_valid(&self, input: &str) -> bool {
        if !SHAPE.is_match(input) {
            return false;
        }
        let digits = decimal_digits(input);
        // The check digit scheme covers the ten digits after the century.
        let national = if digits.len() == 12 { &digits[2..] } else { &digits[..] };
        luhn_is_valid(national)
    }
}
