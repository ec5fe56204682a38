//! Luhn (mod-10) checksum.
//!
//! The number is read from the right. The rightmost digit is the check digit
//! and is held out of the sum; of the remaining digits, every one at an odd
//! distance from the check digit is doubled and reduced to a single digit.
//! The number is valid when the check digit equals `(10 - sum % 10) % 10`.
//!
//! Doubling uses the integer identity `d / 5 + (2 * d) % 10`, which equals the
//! digit sum of `2 * d` for every `d` in `0..=9`.

use crate::error::{parse_digits, ValidationError};

/// Doubles a digit and folds the result back to a single digit.
#[inline]
const fn double(digit: u8) -> u32 {
    (digit / 5 + (2 * digit) % 10) as u32
}

/// Checks a digit string with the Luhn algorithm.
///
/// An empty string is not valid.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidArgument`] if `digits` contains anything
/// other than `0`-`9`.
///
/// # Example
///
/// ```
/// use cardtype::luhn;
///
/// assert!(luhn::is_valid("79927398713").unwrap());
/// assert!(!luhn::is_valid("79927398714").unwrap());
/// assert!(luhn::is_valid("7992 7398 713").is_err());
/// ```
pub fn is_valid(digits: &str) -> Result<bool, ValidationError> {
    let values = parse_digits(digits)?;
    Ok(validate(&values))
}

/// Validates digit values (0-9) using the Luhn algorithm.
///
/// # Example
///
/// ```
/// use cardtype::luhn::validate;
///
/// // Valid Visa test card
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// // Invalid card (changed last digit)
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    match digits.split_last() {
        Some((&check_digit, payload)) => expected_check_digit(checksum(payload)) == check_digit,
        None => false,
    }
}

/// Computes the Luhn sum of the digits to the left of the check digit.
///
/// `payload` excludes the check digit. Its last element sits at reversed
/// index 1 of the full number and is doubled; the one before it is taken
/// as is, and so on alternating towards the front.
#[inline]
pub fn checksum(payload: &[u8]) -> u32 {
    let mut odd_sum: u32 = 0;
    let mut even_sum: u32 = 0;

    for (offset, &digit) in payload.iter().rev().enumerate() {
        // Reversed index in the full number, check digit being index 0
        let index = offset + 1;
        if index % 2 == 0 {
            even_sum += digit as u32;
        } else {
            odd_sum += double(digit);
        }
    }

    odd_sum + even_sum
}

/// Generates the check digit for a number without its check digit.
///
/// # Example
///
/// ```
/// use cardtype::luhn::generate_check_digit;
///
/// // Visa test card without check digit
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(payload: &[u8]) -> u8 {
    expected_check_digit(checksum(payload))
}

#[inline]
const fn expected_check_digit(sum: u32) -> u8 {
    ((10 - sum % 10) % 10) as u8
}
