//! Card network identifiers and their static definitions.
//!
//! This module provides the `CardNetwork` enum identifying each supported
//! network and the immutable `NetworkDefinition` describing its length bounds
//! and display grouping. Prefix matching lives in [`crate::detect`].

use std::fmt;

/// Supported card networks.
///
/// Variants are listed in classification priority order; see
/// [`crate::detect`] for why the order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CardNetwork {
    /// Visa - Prefix 4, length 16
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// Discover - Prefix 6011, 65, 644-649, 622, length 16
    Discover,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Diners Club - Prefix 36, 38, 300-305, length 14
    DinersClub,
    /// InstaPayment - Prefix 637-639, length 16
    InstaPayment,
    /// JCB - Prefix 35, length 16
    Jcb,
    /// Maestro - Prefix 5018, 5020, 5038, 56-59, 6020, 6304, 6703, 6759, 6761-6763, length 12-16
    Maestro,
    /// No known prefix matched (also the state of an empty input)
    Unknown,
}

impl CardNetwork {
    /// All networks, in classification priority order.
    pub const ALL: [CardNetwork; 9] = [
        Self::Visa,
        Self::Mastercard,
        Self::Discover,
        Self::Amex,
        Self::DinersClub,
        Self::InstaPayment,
        Self::Jcb,
        Self::Maestro,
        Self::Unknown,
    ];

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Discover => "Discover",
            Self::Amex => "American Express",
            Self::DinersClub => "Diners Club",
            Self::InstaPayment => "InstaPayment",
            Self::Jcb => "JCB",
            Self::Maestro => "Maestro",
            Self::Unknown => "Unknown",
        }
    }

    /// Looks a network up by name, ignoring case, spaces, dashes and
    /// underscores. Accepts [`name`](Self::name), the variant name and the
    /// usual short forms.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtype::CardNetwork;
    ///
    /// assert_eq!(CardNetwork::from_name("American Express"), Some(CardNetwork::Amex));
    /// assert_eq!(CardNetwork::from_name("diners_club"), Some(CardNetwork::DinersClub));
    /// assert_eq!(CardNetwork::from_name("mc"), Some(CardNetwork::Mastercard));
    /// assert_eq!(CardNetwork::from_name("bogus"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let network = match key.as_str() {
            "visa" => Self::Visa,
            "mastercard" | "mc" => Self::Mastercard,
            "discover" => Self::Discover,
            "amex" | "americanexpress" => Self::Amex,
            "diners" | "dinersclub" => Self::DinersClub,
            "instapayment" => Self::InstaPayment,
            "jcb" => Self::Jcb,
            "maestro" => Self::Maestro,
            "unknown" => Self::Unknown,
            _ => return None,
        };
        Some(network)
    }

    /// Returns the static definition for this network.
    #[inline]
    pub fn definition(self) -> &'static NetworkDefinition {
        match self {
            Self::Visa => &VISA,
            Self::Mastercard => &MASTERCARD,
            Self::Discover => &DISCOVER,
            Self::Amex => &AMEX,
            Self::DinersClub => &DINERS_CLUB,
            Self::InstaPayment => &INSTA_PAYMENT,
            Self::Jcb => &JCB,
            Self::Maestro => &MAESTRO,
            Self::Unknown => &UNKNOWN,
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Separator positions for American Express and Diners Club (4-6-x).
pub const AMEX_DINERS_GROUPING: [usize; 2] = [4, 10];

/// Separator positions for every other network (4-4-4-x).
pub const DEFAULT_GROUPING: [usize; 3] = [4, 8, 12];

/// Immutable description of one card network.
///
/// Lengths are inclusive digit counts. Grouping positions are 1-based digit
/// offsets after which a visual separator goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NetworkDefinition {
    network: CardNetwork,
    min_length: usize,
    max_length: usize,
    grouping_positions: &'static [usize],
}

impl NetworkDefinition {
    /// Returns the network this definition describes.
    #[inline]
    pub const fn network(&self) -> CardNetwork {
        self.network
    }

    /// Minimum number of digits of a complete number.
    #[inline]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum number of digits of a complete number.
    #[inline]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Digit offsets after which a separator is shown.
    #[inline]
    pub const fn grouping_positions(&self) -> &'static [usize] {
        self.grouping_positions
    }

    /// Returns true if `length` digits make a complete number for this network.
    #[inline]
    pub const fn is_complete_length(&self, length: usize) -> bool {
        length >= self.min_length && length <= self.max_length
    }
}

const fn definition(
    network: CardNetwork,
    min_length: usize,
    max_length: usize,
    grouping_positions: &'static [usize],
) -> NetworkDefinition {
    NetworkDefinition {
        network,
        min_length,
        max_length,
        grouping_positions,
    }
}

static VISA: NetworkDefinition = definition(CardNetwork::Visa, 16, 16, &DEFAULT_GROUPING);
static MASTERCARD: NetworkDefinition =
    definition(CardNetwork::Mastercard, 16, 16, &DEFAULT_GROUPING);
static DISCOVER: NetworkDefinition = definition(CardNetwork::Discover, 16, 16, &DEFAULT_GROUPING);
static AMEX: NetworkDefinition = definition(CardNetwork::Amex, 15, 15, &AMEX_DINERS_GROUPING);
static DINERS_CLUB: NetworkDefinition =
    definition(CardNetwork::DinersClub, 14, 14, &AMEX_DINERS_GROUPING);
static INSTA_PAYMENT: NetworkDefinition =
    definition(CardNetwork::InstaPayment, 16, 16, &DEFAULT_GROUPING);
static JCB: NetworkDefinition = definition(CardNetwork::Jcb, 16, 16, &DEFAULT_GROUPING);
static MAESTRO: NetworkDefinition = definition(CardNetwork::Maestro, 12, 16, &DEFAULT_GROUPING);
static UNKNOWN: NetworkDefinition = definition(CardNetwork::Unknown, 16, 16, &DEFAULT_GROUPING);
