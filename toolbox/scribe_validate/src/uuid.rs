//! UUID validation.

use crate::Validator;
use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "the pattern is a fixed literal and always compiles")]
static UUID_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Fa-f0-9]{8}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{12}$")
        .expect("UUID pattern compiles")
});

/// Validates the 8-4-4-4-12 hexadecimal UUID shape.
///
/// Both hex cases are accepted and the dashes are required. Version and
/// variant bits are not inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidValidator;

impl UuidValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for UuidValidator {
    fn is_valid(&self, input: &str) -> bool {
        UUID_SHAPE.is_match(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_hex_cases() {
        let validator = UuidValidator::new();

        assert!(validator.is_valid("123e4567-e89b-12d3-a456-426614174000"));
        assert!(validator.is_valid("123E4567-E89B-12D3-A456-426614174000"));
        assert!(validator.is_valid("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn requires_the_dashed_shape() {
        let validator = UuidValidator::new();

        assert!(!validator.is_valid("123e4567e89b12d3a456426614174000"));
        assert!(!validator.is_valid("123e4567-e89b-12d3-a456-42661417400"));
        assert!(!validator.is_valid("123e4567-e89b-12d3-a456-4266141740000"));
        assert!(!validator.is_valid("{123e4567-e89b-12d3-a456-426614174000}"));
    }

    #[test]
    fn rejects_non_hex_characters() {
        let validator = UuidValidator::new();

        assert!(!validator.is_valid("123g4567-e89b-12d3-a456-426614174000"));
        assert!(!validator.is_valid(""));
    }
}
