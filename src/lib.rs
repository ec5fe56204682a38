//! # cardtype
//!
//! Card network classification and validation for card number input fields.
//!
//! ## Features
//!
//! - Network classification from the leading digits (9 networks)
//! - Per-network length bounds and Luhn checksum
//! - Grouped display of partial input plus a placeholder hint for the rest
//! - Edge-triggered change tracking for as-you-type input
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use cardtype::{classify, validate, is_valid, CardNetwork};
//!
//! // Classification works on partial input
//! assert_eq!(classify("37").unwrap().network(), CardNetwork::Amex);
//!
//! // Validate a card number
//! let verdict = validate("4111111111111111").unwrap();
//! assert_eq!(verdict.network().network(), CardNetwork::Visa);
//! assert!(verdict.is_complete());
//! assert!(verdict.is_valid());
//!
//! // Quick boolean check
//! assert!(is_valid("4111111111111111"));
//! assert!(!is_valid("4111111111111112"));
//! ```
//!
//! ## Display While Typing
//!
//! ```rust
//! use cardtype::{classify, format_hint, grouped_display};
//!
//! let typed = "378282";
//! let network = classify(typed).unwrap();
//! assert_eq!(grouped_display(typed, network), "3782 82");
//! assert_eq!(format_hint(network, typed.len()), "XXXX XXXXX");
//! ```
//!
//! ## Change Tracking
//!
//! ```rust
//! use cardtype::{CardInput, CardNetwork, InputEvent, InputState};
//!
//! let mut field = CardInput::new();
//! field.push_str("3782822463").unwrap();
//! assert_eq!(field.network(), CardNetwork::Amex);
//!
//! let events = field.push_str("10006").unwrap();
//! assert_eq!(field.state(), InputState::CompleteInvalid);
//! assert_eq!(events, vec![InputEvent::ValidationFailed { network: CardNetwork::Amex }]);
//! ```
//!
//! ## Test Card Generation
//!
//! ```rust
//! use cardtype::{generate, is_valid, CardNetwork};
//!
//! // Generate valid test card (deterministic, no randomness)
//! let card = generate::generate_card_deterministic(CardNetwork::Jcb);
//! assert!(is_valid(&card));
//! assert!(card.starts_with("35"));
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use cardtype::{BatchValidator, batch};
//!
//! let batch_validator = BatchValidator::new();
//! let cards = vec!["4111111111111111", "5500000000000004", "4111"];
//!
//! let (valid, invalid) = batch_validator.validate_partitioned(&cards);
//! assert_eq!(valid, vec![0, 1]);
//! assert_eq!(invalid, vec![2]);
//!
//! let (valid_count, _) = batch::count_valid(&cards);
//! assert_eq!(valid_count, 2);
//! ```
//!
//! ## Supported Card Networks
//!
//! Checked top to bottom; the first matching prefix wins.
//!
//! | Network | Prefix | Length | Grouping |
//! |---------|--------|--------|----------|
//! | Visa | 4 | 16 | 4-4-4-4 |
//! | Mastercard | 51-55, 2221-2720 | 16 | 4-4-4-4 |
//! | Discover | 6011, 65, 644-649, 622 | 16 | 4-4-4-4 |
//! | American Express | 34, 37 | 15 | 4-6-5 |
//! | Diners Club | 36, 38, 300-305 | 14 | 4-6-4 |
//! | InstaPayment | 637-639 | 16 | 4-4-4-4 |
//! | JCB | 35 | 16 | 4-4-4-4 |
//! | Maestro | 5018, 5020, 5038, 56-59, 6020, 6304, 6703, 6759, 6761-6763 | 12-16 | 4-4-4-x |
//! | Unknown | anything else | 16 | 4-4-4-4 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for networks, verdicts and input events |
//! | `generate` | Random test card generation |
//! | `parallel` | Rayon-based batch validation |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - [`CardInput`] keeps digits in a buffer that is zeroed on clear and drop
//! - `Debug` for [`CardInput`] never prints the digits
//! - The library does not log
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod error;
pub mod format;
pub mod generate;
pub mod input;
pub mod luhn;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use batch::BatchValidator;
pub use card::{CardNetwork, NetworkDefinition};
pub use detect::{classify, classify_digits};
pub use error::ValidationError;
pub use format::{format_hint, grouped_display};
pub use input::{transition, CardInput, InputEvent, InputState, Transition};
pub use validate::{is_valid, validate, validate_digits, ValidationVerdict};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA: &str = "4111111111111111";
    const MASTERCARD: &str = "5500000000000004";
    const AMEX: &str = "340000000000009";
    const DISCOVER: &str = "6011000000000004";

    #[test]
    fn test_reference_classification() {
        assert_eq!(classify(VISA).unwrap().network(), CardNetwork::Visa);
        assert_eq!(classify(MASTERCARD).unwrap().network(), CardNetwork::Mastercard);
        assert_eq!(classify(AMEX).unwrap().network(), CardNetwork::Amex);
        assert_eq!(classify(DISCOVER).unwrap().network(), CardNetwork::Discover);
        assert_eq!(classify("9999999999999").unwrap().network(), CardNetwork::Unknown);
    }

    #[test]
    fn test_reference_luhn() {
        assert!(luhn::is_valid("4111111111111111").unwrap());
        assert!(!luhn::is_valid("4111111111111112").unwrap());
        assert!(luhn::is_valid("79927398713").unwrap());
        assert!(!luhn::is_valid("79927398714").unwrap());
    }

    #[test]
    fn test_non_digit_input_is_rejected() {
        assert!(matches!(
            classify("4111 1111"),
            Err(ValidationError::InvalidArgument { position: 4, character: ' ' })
        ));
        assert!(luhn::is_valid("4a").is_err());
        assert!(validate("x").is_err());
    }

    #[test]
    fn test_reference_validation() {
        let verdict = validate(VISA).unwrap();
        assert!(verdict.is_complete());
        assert!(verdict.is_valid());

        let verdict = validate("411111111111111").unwrap();
        assert!(!verdict.is_complete());
    }

    #[test]
    fn test_empty_input_never_errors() {
        let verdict = validate("").unwrap();
        assert!(!verdict.is_valid());
        assert!(!verdict.is_complete());
    }

    #[test]
    fn test_grouping_positions() {
        for network in CardNetwork::ALL {
            let expected: &[usize] = match network {
                CardNetwork::Amex | CardNetwork::DinersClub => &[4, 10],
                _ => &[4, 8, 12],
            };
            assert_eq!(network.definition().grouping_positions(), expected);
        }

        let maestro = CardNetwork::Maestro.definition();
        assert_eq!((maestro.min_length(), maestro.max_length()), (12, 16));
    }

    #[test]
    fn test_grouped_display_round_trip() {
        for number in [VISA, MASTERCARD, AMEX, DISCOVER, "30569309025904", "5018"] {
            let network = classify(number).unwrap();
            let shown = grouped_display(number, network);
            assert_eq!(grouped_display(&shown, network), shown);
            assert_eq!(format::strip_formatting(&shown), number);
        }
    }

    #[test]
    fn test_input_tracks_transitions() {
        let mut field = CardInput::new();
        let mut previous = ValidationVerdict::empty();
        for c in AMEX.chars() {
            let events = field.push(c).unwrap();
            let typed = field.number();
            let step = transition(&previous, &typed).unwrap();
            assert_eq!(step.events(), events.as_slice());
            previous = *step.verdict();
        }
        assert_eq!(field.state(), InputState::CompleteValid);
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationVerdict>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<CardNetwork>();
        assert_send_sync::<NetworkDefinition>();
        assert_send_sync::<CardInput>();
        assert_send_sync::<BatchValidator>();
    }
}
