//! Waybill number validation.

use crate::checksum::{decimal_digits, gs1_check_digit, luhn_is_valid};
use crate::{Validator, ValidatorGroup};

/// Validates SIS standard waybill numbers.
///
/// Ten digits with a nonzero first digit and a trailing Luhn check
/// digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SisWaybillValidator;

impl SisWaybillValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for SisWaybillValidator {
    fn is_valid(&self, input: &str) -> bool {
        if input.chars().count() != 10 {
            return false;
        }
        let digits = decimal_digits(input);
        digits.len() == 10 && digits[0] != 0 && luhn_is_valid(&digits)
    }
}

/// Validates GS1 GSIN waybill numbers.
///
/// Seventeen digits where the last is a check digit computed with
/// alternating 3/1 weights from the rightmost data digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct GsinWaybillValidator;

impl GsinWaybillValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for GsinWaybillValidator {
    fn is_valid(&self, input: &str) -> bool {
        if input.chars().count() != 17 {
            return false;
        }
        let digits = decimal_digits(input);
        if digits.len() != 17 {
            return false;
        }
        let Some((&check, data)) = digits.split_last() else {
            return false;
        };
        gs1_check_digit(data) == check
    }
}

/// Accepts either standard form of waybill number.
#[derive(Debug)]
pub struct WaybillValidator {
    group: ValidatorGroup,
}

impl WaybillValidator {
    pub fn new() -> Self {
        Self {
            group: ValidatorGroup::new(vec![
                Box::new(SisWaybillValidator::new()),
                Box::new(GsinWaybillValidator::new()),
            ]),
        }
    }
}

impl Default for WaybillValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for WaybillValidator {
    fn is_valid(&self, input: &str) -> bool {
        self.group.is_valid(input)
    }
}
