//! Batch validation of many card numbers.
//!
//! Validation holds no shared state, so every function here is a plain map
//! over the input. With the `parallel` feature the same maps run on rayon's
//! thread pool and return results in input order.

use crate::card::CardNetwork;
use crate::error::ValidationError;
use crate::validate::{validate, ValidationVerdict};

/// Result of validating a single entry of a batch.
pub type BatchResult = Result<ValidationVerdict, ValidationError>;

/// Batch validator for processing multiple card numbers.
///
/// # Example
///
/// ```
/// use cardtype::BatchValidator;
///
/// let batch = BatchValidator::new();
/// let cards = vec!["4111111111111111", "5500000000000004", "4111"];
/// let results = batch.validate_all(&cards);
///
/// for (card, result) in cards.iter().zip(results.iter()) {
///     match result {
///         Ok(verdict) => println!("{}: {} valid={}", card, verdict.network().network(), verdict.is_valid()),
///         Err(e) => println!("{}: rejected - {}", card, e),
///     }
/// }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchValidator {
    network: Option<CardNetwork>,
}

impl BatchValidator {
    /// Creates a batch validator accepting every network.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only counts numbers of `network` as valid.
    ///
    /// Verdicts for other networks are still returned by
    /// [`validate_all`](Self::validate_all); they are dropped from the
    /// valid side of [`validate_valid_only`](Self::validate_valid_only) and
    /// [`validate_partitioned`](Self::validate_partitioned).
    pub fn restrict_to(mut self, network: CardNetwork) -> Self {
        self.network = Some(network);
        self
    }

    fn accepts(&self, verdict: &ValidationVerdict) -> bool {
        verdict.is_valid()
            && self
                .network
                .map_or(true, |network| verdict.network().network() == network)
    }

    /// Validates a batch of card numbers.
    ///
    /// Returns a vector of results in the same order as the input.
    pub fn validate_all<S: AsRef<str>>(&self, cards: &[S]) -> Vec<BatchResult> {
        validate_batch(cards)
    }

    /// Validates a batch and returns the indices of the accepted numbers
    /// together with their verdicts.
    pub fn validate_valid_only<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> Vec<(usize, ValidationVerdict)> {
        cards
            .iter()
            .enumerate()
            .filter_map(|(i, c)| validate(c.as_ref()).ok().map(|v| (i, v)))
            .filter(|(_, verdict)| self.accepts(verdict))
            .collect()
    }

    /// Validates a batch and partitions it into accepted and rejected
    /// indices.
    ///
    /// Rejected covers non-digit input, incomplete numbers, failed checksums
    /// and networks excluded by [`restrict_to`](Self::restrict_to).
    pub fn validate_partitioned<S: AsRef<str>>(&self, cards: &[S]) -> (Vec<usize>, Vec<usize>) {
        (0..cards.len()).partition(|&i| {
            validate(cards[i].as_ref()).is_ok_and(|verdict| self.accepts(&verdict))
        })
    }

    /// Validates cards in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel<S: AsRef<str> + Sync>(&self, cards: &[S]) -> Vec<BatchResult> {
        validate_batch_parallel(cards)
    }

    /// Validates cards in parallel, returning only accepted ones.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel_valid_only<S: AsRef<str> + Sync>(
        &self,
        cards: &[S],
    ) -> Vec<(usize, ValidationVerdict)> {
        use rayon::prelude::*;
        cards
            .par_iter()
            .enumerate()
            .filter_map(|(i, c)| validate(c.as_ref()).ok().map(|v| (i, v)))
            .filter(|(_, verdict)| self.accepts(verdict))
            .collect()
    }
}

/// Validates a slice of cards without creating a [`BatchValidator`].
///
/// # Example
///
/// ```
/// use cardtype::batch::validate_batch;
///
/// let cards = ["4111111111111111", "4111-1111"];
/// let results = validate_batch(&cards);
/// assert!(results[0].as_ref().unwrap().is_valid());
/// assert!(results[1].is_err());
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<BatchResult> {
    cards.iter().map(|c| validate(c.as_ref())).collect()
}

/// Validates a slice of cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<BatchResult> {
    use rayon::prelude::*;
    cards.par_iter().map(|c| validate(c.as_ref())).collect()
}

/// Counts valid and invalid cards in a batch.
///
/// Partial numbers and non-digit input count as invalid.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use cardtype::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5500000000000004"];
/// let (valid, invalid) = count_valid(&cards);
/// assert_eq!(valid, 2);
/// assert_eq!(invalid, 1);
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards.iter().filter(|c| crate::is_valid(c.as_ref())).count();
    (valid, cards.len() - valid)
}

/// Counts valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid = cards
        .par_iter()
        .filter(|c| crate::is_valid(c.as_ref()))
        .count();

    (valid, cards.len() - valid)
}

/// Tallies the classified network of every digit-only entry.
///
/// Entries with non-digit characters are skipped. The result follows the
/// order of [`CardNetwork::ALL`] and includes networks with a zero count.
///
/// # Example
///
/// ```
/// use cardtype::batch::count_by_network;
/// use cardtype::CardNetwork;
///
/// let counts = count_by_network(&["4111111111111111", "4", "37", "x"]);
/// assert_eq!(counts[0], (CardNetwork::Visa, 2));
/// assert_eq!(counts[3], (CardNetwork::Amex, 1));
/// ```
pub fn count_by_network<S: AsRef<str>>(cards: &[S]) -> Vec<(CardNetwork, usize)> {
    let mut counts: Vec<(CardNetwork, usize)> =
        CardNetwork::ALL.iter().map(|&network| (network, 0)).collect();

    for card in cards {
        if let Ok(definition) = crate::classify(card.as_ref()) {
            if let Some(slot) = counts
                .iter_mut()
                .find(|(network, _)| *network == definition.network())
            {
                slot.1 += 1;
            }
        }
    }

    counts
}
