//! Main validation orchestration for card numbers.
//!
//! This module combines classification, the per-network length check and
//! the Luhn checksum into a single [`ValidationVerdict`]. It is designed to
//! run on every keystroke: an empty or half-typed number is a normal input
//! and yields a verdict, not an error.

use crate::card::NetworkDefinition;
use crate::detect::{classify_digits, matches_prefix};
use crate::error::{parse_digits, ValidationError};
use crate::luhn;

/// Result of validating a (possibly partial) card number.
///
/// Verdicts are plain values: two calls on the same input give equal
/// verdicts, so a caller can diff successive verdicts to decide when the
/// network changed or validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationVerdict {
    network: &'static NetworkDefinition,
    length: usize,
    is_complete: bool,
    is_valid: bool,
}

impl ValidationVerdict {
    /// Verdict for an empty input.
    pub fn empty() -> Self {
        validate_digits(&[])
    }

    /// The classified network definition.
    #[inline]
    pub const fn network(&self) -> &'static NetworkDefinition {
        self.network
    }

    /// Number of digits validated.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// True if the length is within the network's bounds.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// True if length, prefix and Luhn checksum all pass.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }
}

impl Default for ValidationVerdict {
    fn default() -> Self {
        Self::empty()
    }
}

/// Validates a card number.
///
/// Performs, in order:
/// 1. Classification by prefix
/// 2. Length check against the network's bounds
/// 3. Prefix re-check against the classified network
/// 4. Luhn checksum, only if 2 and 3 pass
///
/// # Errors
///
/// Returns [`ValidationError::InvalidArgument`] if `card_number` contains
/// anything other than `0`-`9`. The empty string is not an error.
///
/// # Example
///
/// ```
/// use cardtype::{validate, CardNetwork};
///
/// let verdict = validate("4111111111111111").unwrap();
/// assert_eq!(verdict.network().network(), CardNetwork::Visa);
/// assert!(verdict.is_complete());
/// assert!(verdict.is_valid());
///
/// // One digit short
/// let verdict = validate("411111111111111").unwrap();
/// assert!(!verdict.is_complete());
/// assert!(!verdict.is_valid());
/// ```
pub fn validate(card_number: &str) -> Result<ValidationVerdict, ValidationError> {
    let digits = parse_digits(card_number)?;
    Ok(validate_digits(&digits))
}

/// Validates pre-parsed digit values (0-9, not ASCII).
///
/// # Example
///
/// ```
/// use cardtype::validate_digits;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate_digits(&digits).is_valid());
/// ```
pub fn validate_digits(digits: &[u8]) -> ValidationVerdict {
    let network = classify_digits(digits);
    let length = digits.len();

    let is_complete = network.is_complete_length(length);
    // Classification already matched, so this only repeats the same
    // predicate for the network it returned.
    let pattern_ok = is_complete && matches_prefix(network.network(), digits);
    let is_valid = pattern_ok && luhn::validate(digits);

    ValidationVerdict {
        network,
        length,
        is_complete,
        is_valid,
    }
}

/// Quickly checks if a card number is valid.
///
/// Non-digit input counts as invalid.
///
/// # Example
///
/// ```
/// use cardtype::is_valid;
///
/// assert!(is_valid("4111111111111111"));
/// assert!(!is_valid("4111111111111112"));
/// assert!(!is_valid("4111-1111-1111-1111"));
/// ```
#[inline]
pub fn is_valid(card_number: &str) -> bool {
    validate(card_number).is_ok_and(|verdict| verdict.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardNetwork;

    const VISA_VALID: &str = "4111111111111111";
    const MASTERCARD_VALID: &str = "5500000000000004";
    const AMEX_VALID: &str = "378282246310005";
    const DISCOVER_VALID: &str = "6011000000000004";
    const DINERS_VALID: &str = "30569309025904";

    #[test]
    fn test_validate_visa() {
        let verdict = validate(VISA_VALID).unwrap();
        assert_eq!(verdict.network().network(), CardNetwork::Visa);
        assert_eq!(verdict.length(), 16);
        assert!(verdict.is_complete());
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_validate_known_networks() {
        for (number, network) in [
            (MASTERCARD_VALID, CardNetwork::Mastercard),
            (AMEX_VALID, CardNetwork::Amex),
            (DISCOVER_VALID, CardNetwork::Discover),
            (DINERS_VALID, CardNetwork::DinersClub),
        ] {
            let verdict = validate(number).unwrap();
            assert_eq!(verdict.network().network(), network, "{number}");
            assert!(verdict.is_valid(), "{number}");
        }
    }

    #[test]
    fn test_one_digit_short() {
        let verdict = validate("411111111111111").unwrap();
        assert_eq!(verdict.network().network(), CardNetwork::Visa);
        assert!(!verdict.is_complete());
        assert!(!verdict.is_valid());
    }

    #[test]
    fn test_too_long_is_incomplete() {
        let verdict = validate("41111111111111111").unwrap();
        assert!(!verdict.is_complete());
        assert!(!verdict.is_valid());
    }

    #[test]
    fn test_invalid_checksum() {
        let verdict = validate("4111111111111112").unwrap();
        assert!(verdict.is_complete());
        assert!(!verdict.is_valid());
    }

    #[test]
    fn test_empty_input() {
        let verdict = validate("").unwrap();
        assert_eq!(verdict.network().network(), CardNetwork::Unknown);
        assert_eq!(verdict.length(), 0);
        assert!(!verdict.is_complete());
        assert!(!verdict.is_valid());
        assert_eq!(verdict, ValidationVerdict::empty());
        assert_eq!(verdict, ValidationVerdict::default());
    }

    #[test]
    fn test_invalid_character() {
        let err = validate("4111-1111-1111-1111").unwrap_err();
        match err {
            ValidationError::InvalidArgument { position, character } => {
                assert_eq!(position, 4);
                assert_eq!(character, '-');
            }
        }
    }

    #[test]
    fn test_maestro_length_range() {
        // 12-digit and 16-digit Maestro numbers are both complete
        let twelve = "501800000009";
        let verdict = validate(twelve).unwrap();
        assert_eq!(verdict.network().network(), CardNetwork::Maestro);
        assert!(verdict.is_complete());
        assert!(verdict.is_valid());

        let sixteen = "6759649826438453";
        let verdict = validate(sixteen).unwrap();
        assert_eq!(verdict.network().network(), CardNetwork::Maestro);
        assert!(verdict.is_complete());
        assert!(verdict.is_valid());

        let eleven = "50180000000";
        assert!(!validate(eleven).unwrap().is_complete());
    }

    #[test]
    fn test_unknown_network_with_valid_checksum() {
        // Unknown still has a 16-digit length and a Luhn check
        let verdict = validate("9999999999999995").unwrap();
        assert_eq!(verdict.network().network(), CardNetwork::Unknown);
        assert!(verdict.is_complete());
        assert!(verdict.is_valid());

        let verdict = validate("9999999999999").unwrap();
        assert!(!verdict.is_complete());
        assert!(!verdict.is_valid());
    }

    #[test]
    fn test_verdicts_are_comparable() {
        assert_eq!(validate("4111").unwrap(), validate("4111").unwrap());
        assert_ne!(validate("4111").unwrap(), validate("41111").unwrap());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(VISA_VALID));
        assert!(is_valid(AMEX_VALID));
        assert!(!is_valid("4111111111111112"));
        assert!(!is_valid(""));
        assert!(!is_valid("4111 1111 1111 1111"));
    }

    #[test]
    fn test_validate_digits() {
        let digits = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
        let verdict = validate_digits(&digits);
        assert_eq!(verdict.network().network(), CardNetwork::Amex);
        assert!(verdict.is_valid());
    }
}
