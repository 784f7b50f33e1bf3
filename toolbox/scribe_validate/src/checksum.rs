//! Shared check digit arithmetic.

/// Collects the decimal digit values of `input`, skipping everything else.
pub(crate) fn decimal_digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Luhn check over a complete number, check digit included.
///
/// Digits at even zero-based offsets are doubled, with nine subtracted
/// from any double above nine, and the total must divide by ten. Callers
/// pass ten-digit numbers, where this orientation leaves the trailing
/// check digit undoubled.
pub(crate) fn luhn_is_valid(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(offset, &digit)| {
            let doubled = if offset % 2 == 0 { digit * 2 } else { digit };
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        })
        .sum();
    sum % 10 == 0
}

/// GS1 check digit for the data portion of a number, check digit excluded.
///
/// Weights alternate 3, 1, 3, 1 and so on starting from the rightmost
/// data digit. The check digit is the amount that rounds the weighted
/// sum up to the next multiple of ten.
pub(crate) fn gs1_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip([3, 1].into_iter().cycle())
        .map(|(&digit, weight)| digit * weight)
        .sum();
    match sum % 10 {
        0 => 0,
        remainder => 10 - remainder,
    }
}
