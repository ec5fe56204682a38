//! Card network classification using prefix matching.
//!
//! Each network is recognised by the leading digits of the number. A rule
//! only matches once every digit of one of its prefixes has been typed, so
//! `"5"` is still `Unknown` while `"51"` is already `Mastercard`. Anything
//! typed after the prefix is accepted, which is what lets classification run
//! on partial input.
//!
//! # Performance
//!
//! Classification is a scan over a fixed table of nine slice patterns; no
//! allocation beyond digit parsing and no hashing.

use crate::card::{CardNetwork, NetworkDefinition};
use crate::error::{parse_digits, ValidationError};

/// A prefix predicate paired with the network it identifies.
struct NetworkRule {
    network: CardNetwork,
    matches: fn(&[u8]) -> bool,
}

// First match wins. Unknown matches every digit sequence and must stay last.
// A rule whose range overlaps an existing one has to be placed ahead of the
// looser rule, otherwise the looser rule shadows it.
static RULES: [NetworkRule; 9] = [
    NetworkRule {
        network: CardNetwork::Visa,
        matches: |d| matches!(d, [4, ..]),
    },
    NetworkRule {
        network: CardNetwork::Mastercard,
        matches: |d| {
            matches!(
                d,
                [5, 1..=5, ..]
                    | [2, 2, 2, 1..=9, ..]
                    | [2, 2, 3..=9, ..]
                    | [2, 3..=6, ..]
                    | [2, 7, 0..=1, ..]
                    | [2, 7, 2, 0, ..]
            )
        },
    },
    NetworkRule {
        network: CardNetwork::Discover,
        matches: |d| {
            matches!(
                d,
                [6, 0, 1, 1, ..] | [6, 5, ..] | [6, 4, 4..=9, ..] | [6, 2, 2, ..]
            )
        },
    },
    NetworkRule {
        network: CardNetwork::Amex,
        matches: |d| matches!(d, [3, 4 | 7, ..]),
    },
    NetworkRule {
        network: CardNetwork::DinersClub,
        matches: |d| matches!(d, [3, 6 | 8, ..] | [3, 0, 0..=5, ..]),
    },
    NetworkRule {
        network: CardNetwork::InstaPayment,
        matches: |d| matches!(d, [6, 3, 7..=9, ..]),
    },
    NetworkRule {
        network: CardNetwork::Jcb,
        matches: |d| matches!(d, [3, 5, ..]),
    },
    NetworkRule {
        network: CardNetwork::Maestro,
        matches: |d| {
            matches!(
                d,
                [5, 0, 1, 8, ..]
                    | [5, 0, 2, 0, ..]
                    | [5, 0, 3, 8, ..]
                    | [5, 6..=9, ..]
                    | [6, 0, 2, 0, ..]
                    | [6, 3, 0, 4, ..]
                    | [6, 7, 0, 3, ..]
                    | [6, 7, 5, 9, ..]
                    | [6, 7, 6, 1..=3, ..]
            )
        },
    },
    NetworkRule {
        network: CardNetwork::Unknown,
        matches: |_| true,
    },
];

/// Classifies a digit string into a card network.
///
/// Partial input is expected: the empty string and anything too short to
/// reach a known prefix classify as [`CardNetwork::Unknown`].
///
/// # Errors
///
/// Returns [`ValidationError::InvalidArgument`] if `digits` contains anything
/// other than `0`-`9`.
///
/// # Example
///
/// ```
/// use cardtype::{classify, CardNetwork};
///
/// assert_eq!(classify("4111111111111111").unwrap().network(), CardNetwork::Visa);
/// assert_eq!(classify("37").unwrap().network(), CardNetwork::Amex);
/// assert_eq!(classify("").unwrap().network(), CardNetwork::Unknown);
/// assert!(classify("4111-1111").is_err());
/// ```
pub fn classify(digits: &str) -> Result<&'static NetworkDefinition, ValidationError> {
    let values = parse_digits(digits)?;
    Ok(classify_digits(&values))
}

/// Classifies pre-parsed digit values (0-9, not ASCII).
///
/// # Example
///
/// ```
/// use cardtype::detect::classify_digits;
/// use cardtype::CardNetwork;
///
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert_eq!(classify_digits(&amex).network(), CardNetwork::Amex);
/// ```
#[inline]
pub fn classify_digits(digits: &[u8]) -> &'static NetworkDefinition {
    RULES
        .iter()
        .find(|rule| (rule.matches)(digits))
        .map_or(CardNetwork::Unknown, |rule| rule.network)
        .definition()
}

/// Returns true if `digits` starts with one of `network`'s prefixes.
///
/// Unknown accepts every digit sequence.
#[inline]
pub fn matches_prefix(network: CardNetwork, digits: &[u8]) -> bool {
    RULES
        .iter()
        .find(|rule| rule.network == network)
        .is_some_and(|rule| (rule.matches)(digits))
}
