//! Card number generation for testing purposes.
//!
//! Generates numbers that classify as the requested network and pass the
//! Luhn check. They are not connected to real accounts and are meant for
//! exercising input fields and validators only.
//!
//! # Example
//!
//! ```
//! use cardtype::generate::{generate_card_deterministic, CardGenerator};
//! use cardtype::CardNetwork;
//!
//! // Generate a deterministic Visa card (no randomness required)
//! let card_number = generate_card_deterministic(CardNetwork::Visa);
//! assert!(card_number.starts_with('4'));
//! assert!(cardtype::is_valid(&card_number));
//!
//! // Use builder pattern
//! let card = CardGenerator::new(CardNetwork::Maestro).length(13).generate_deterministic();
//! assert_eq!(card.len(), 13);
//! assert!(cardtype::is_valid(&card));
//! ```

use crate::luhn;
use crate::CardNetwork;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns the default prefix used when generating numbers for a network.
pub const fn prefix_for_network(network: CardNetwork) -> &'static str {
    match network {
        CardNetwork::Visa => "4",
        CardNetwork::Mastercard => "51",
        CardNetwork::Discover => "6011",
        CardNetwork::Amex => "34",
        CardNetwork::DinersClub => "36",
        CardNetwork::InstaPayment => "637",
        CardNetwork::Jcb => "35",
        CardNetwork::Maestro => "5018",
        CardNetwork::Unknown => "9",
    }
}

/// Generates a valid card number for the given network using random digits.
///
/// The number has the network's minimum length.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
///
/// # Example
///
/// ```
/// use cardtype::generate::generate_card;
/// use cardtype::CardNetwork;
///
/// let card = generate_card(CardNetwork::Visa);
/// assert!(cardtype::is_valid(&card));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(network: CardNetwork) -> String {
    CardGenerator::new(network).generate()
}

/// Generates a valid card number with the given prefix and length.
///
/// Requires the `generate` feature.
///
/// # Panics
///
/// Panics if prefix length >= total length.
#[cfg(feature = "generate")]
pub fn generate_card_with_prefix(prefix: &str, length: usize) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix, length, &mut rng)
}

/// Generates a valid card number using a provided RNG.
///
/// This is useful for reproducible test generation with seeded RNGs.
///
/// # Panics
///
/// Panics if prefix length >= total length.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    build_number(prefix, length, || rng.gen_range(0..10))
}

/// Generates a valid card number deterministically (no randomness).
///
/// This version doesn't require the `generate` feature and produces
/// the same output for the same inputs. Useful for tests.
///
/// # Example
///
/// ```
/// use cardtype::generate::generate_card_deterministic;
/// use cardtype::CardNetwork;
///
/// let card = generate_card_deterministic(CardNetwork::Amex);
/// assert_eq!(card, "340000000000009");
/// ```
pub fn generate_card_deterministic(network: CardNetwork) -> String {
    CardGenerator::new(network).generate_deterministic()
}

/// Generates a valid card number deterministically with a custom prefix.
///
/// Fills middle digits with zeros and calculates a valid check digit.
///
/// # Panics
///
/// Panics if prefix length >= total length.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    build_number(prefix, length, || 0)
}

/// Generates multiple valid card numbers for the given network.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_cards(network: CardNetwork, count: usize) -> Vec<String> {
    CardGenerator::new(network).generate_many(count)
}

fn build_number(prefix: &str, length: usize, mut fill: impl FnMut() -> u8) -> String {
    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    assert!(
        digits.len() < length,
        "Prefix length must be less than total length"
    );

    while digits.len() < length - 1 {
        digits.push(fill());
    }

    let check_digit = luhn::generate_check_digit(&digits);
    digits.push(check_digit);

    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Card generator builder for more complex generation scenarios.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefix: String,
    length: usize,
}

impl CardGenerator {
    /// Creates a generator for the given network at its minimum length.
    pub fn new(network: CardNetwork) -> Self {
        Self {
            prefix: prefix_for_network(network).to_string(),
            length: network.definition().min_length(),
        }
    }

    /// Creates a new card generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            length: 16,
        }
    }

    /// Sets the card length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Generates a card number deterministically.
    pub fn generate_deterministic(&self) -> String {
        generate_card_deterministic_with_prefix(&self.prefix, self.length)
    }

    /// Generates a card number with randomness.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> String {
        generate_card_with_prefix(&self.prefix, self.length)
    }

    /// Generates multiple card numbers.
    #[cfg(feature = "generate")]
    pub fn generate_many(&self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate()).collect()
    }
}
