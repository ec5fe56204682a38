//! Card number formatting for display while typing.
//!
//! Two strings are produced for the input field: the digits typed so far,
//! grouped with separators, and a placeholder hint for the digits still
//! missing. Concatenated they show the full layout of the number:
//!
//! ```
//! use cardtype::format::{format_hint, grouped_display};
//! use cardtype::CardNetwork;
//!
//! let visa = CardNetwork::Visa.definition();
//! let typed = grouped_display("41111", visa);
//! let hint = format_hint(visa, 5);
//! assert_eq!(typed, "4111 1");
//! assert_eq!(hint, "XXX XXXX XXXX");
//! assert_eq!(format!("{typed}{hint}"), "4111 1XXX XXXX XXXX");
//! ```
//!
//! # Format Conventions
//!
//! - **American Express / Diners Club**: separators after digits 4 and 10
//! - **Every other network**: separators after digits 4, 8 and 12

use crate::card::NetworkDefinition;

/// Separator used by [`grouped_display`] and [`format_hint`].
pub const SEPARATOR: &str = " ";

/// Character standing in for each digit still to be typed.
pub const HINT_PLACEHOLDER: char = 'X';

/// Groups the digits of a card number for display.
///
/// A separator follows every digit whose 1-based offset is one of the
/// network's grouping positions, including the last digit typed, so the
/// cursor lands after the separator once a group is full. Non-digit
/// characters in the input are dropped before grouping, which makes the
/// function idempotent on its own output.
///
/// # Example
///
/// ```
/// use cardtype::format::grouped_display;
/// use cardtype::CardNetwork;
///
/// let visa = CardNetwork::Visa.definition();
/// assert_eq!(grouped_display("4111111111111111", visa), "4111 1111 1111 1111");
/// assert_eq!(grouped_display("4111", visa), "4111 ");
///
/// let amex = CardNetwork::Amex.definition();
/// assert_eq!(grouped_display("378282246310005", amex), "3782 822463 10005");
/// ```
pub fn grouped_display(card_number: &str, network: &NetworkDefinition) -> String {
    grouped_display_with_separator(card_number, network, SEPARATOR)
}

/// Groups the digits of a card number with a custom separator.
///
/// The separator must not contain digits, otherwise re-grouping the output
/// would pick them up as card digits.
///
/// # Example
///
/// ```
/// use cardtype::format::grouped_display_with_separator;
/// use cardtype::CardNetwork;
///
/// let visa = CardNetwork::Visa.definition();
/// assert_eq!(
///     grouped_display_with_separator("4111111111111111", visa, "-"),
///     "4111-1111-1111-1111"
/// );
/// ```
pub fn grouped_display_with_separator(
    card_number: &str,
    network: &NetworkDefinition,
    separator: &str,
) -> String {
    let positions = network.grouping_positions();
    let mut result =
        String::with_capacity(card_number.len() + positions.len() * separator.len());
    let mut count = 0;

    for c in card_number.chars().filter(char::is_ascii_digit) {
        result.push(c);
        count += 1;
        if positions.contains(&count) {
            result.push_str(separator);
        }
    }

    result
}

/// Builds the placeholder hint for the digits still missing.
///
/// The hint is `min_length - entered_length` placeholders long. A separator
/// goes inside the hint wherever a grouping position falls strictly within
/// it; a position right at the boundary is skipped because
/// [`grouped_display`] has already emitted that separator.
///
/// # Example
///
/// ```
/// use cardtype::format::format_hint;
/// use cardtype::CardNetwork;
///
/// let visa = CardNetwork::Visa.definition();
/// assert_eq!(format_hint(visa, 0), "XXXX XXXX XXXX XXXX");
/// assert_eq!(format_hint(visa, 4), "XXXX XXXX XXXX");
/// assert_eq!(format_hint(visa, 16), "");
///
/// let amex = CardNetwork::Amex.definition();
/// assert_eq!(format_hint(amex, 0), "XXXX XXXXXX XXXXX");
/// ```
pub fn format_hint(network: &NetworkDefinition, entered_length: usize) -> String {
    format_hint_with(network, entered_length, HINT_PLACEHOLDER, SEPARATOR)
}

/// Builds the placeholder hint with a custom placeholder and separator.
pub fn format_hint_with(
    network: &NetworkDefinition,
    entered_length: usize,
    placeholder: char,
    separator: &str,
) -> String {
    let hint_length = network.min_length().saturating_sub(entered_length);
    let breaks: Vec<usize> = network
        .grouping_positions()
        .iter()
        .filter_map(|&position| position.checked_sub(entered_length))
        .filter(|&offset| offset > 0 && offset < hint_length)
        .collect();

    let mut result = String::with_capacity(hint_length + breaks.len() * separator.len());
    for i in 1..=hint_length {
        result.push(placeholder);
        if breaks.contains(&i) {
            result.push_str(separator);
        }
    }

    result
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use cardtype::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Splits the digits of a card number into display groups.
///
/// Returns a vector of digit groups for flexible rendering.
///
/// # Example
///
/// ```
/// use cardtype::format::split_into_groups;
/// use cardtype::CardNetwork;
///
/// let amex = CardNetwork::Amex.definition();
/// assert_eq!(split_into_groups("378282246310005", amex), vec!["3782", "822463", "10005"]);
///
/// let visa = CardNetwork::Visa.definition();
/// assert_eq!(split_into_groups("411111", visa), vec!["4111", "11"]);
/// ```
pub fn split_into_groups(card_number: &str, network: &NetworkDefinition) -> Vec<String> {
    let digits = strip_formatting(card_number);
    let mut groups = Vec::with_capacity(network.grouping_positions().len() + 1);
    let mut start = 0;

    for &position in network.grouping_positions() {
        if position >= digits.len() {
            break;
        }
        groups.push(digits[start..position].to_string());
        start = position;
    }

    if start < digits.len() {
        groups.push(digits[start..].to_string());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardNetwork;

    fn def(network: CardNetwork) -> &'static NetworkDefinition {
        network.definition()
    }

    #[test]
    fn test_grouped_display_visa() {
        let visa = def(CardNetwork::Visa);
        assert_eq!(grouped_display("", visa), "");
        assert_eq!(grouped_display("4", visa), "4");
        assert_eq!(grouped_display("411", visa), "411");
        assert_eq!(grouped_display("4111", visa), "4111 ");
        assert_eq!(grouped_display("41111", visa), "4111 1");
        assert_eq!(grouped_display("4111111111111", visa), "4111 1111 1111 1");
        assert_eq!(
            grouped_display("4111111111111111", visa),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_grouped_display_diners() {
        assert_eq!(
            grouped_display("30569309025904", def(CardNetwork::DinersClub)),
            "3056 930902 5904"
        );
    }

    #[test]
    fn test_grouped_display_is_idempotent() {
        let visa = def(CardNetwork::Visa);
        for input in ["4", "4111", "41111111", "4111111111111111"] {
            let once = grouped_display(input, visa);
            let twice = grouped_display(&once, visa);
            assert_eq!(once, twice, "{input}");
        }
    }

    #[test]
    fn test_grouped_display_round_trip() {
        let amex = def(CardNetwork::Amex);
        for input in ["3", "3782", "3782822463", "378282246310005"] {
            assert_eq!(strip_formatting(&grouped_display(input, amex)), input);
        }
    }

    #[test]
    fn test_grouped_display_with_separator() {
        assert_eq!(
            grouped_display_with_separator("378282246310005", def(CardNetwork::Amex), " - "),
            "3782 - 822463 - 10005"
        );
    }

    #[test]
    fn test_format_hint_lengths() {
        let visa = def(CardNetwork::Visa);
        for entered in 0..=16 {
            let hint = format_hint(visa, entered);
            let placeholders = hint.chars().filter(|&c| c == HINT_PLACEHOLDER).count();
            assert_eq!(placeholders, 16 - entered);
        }
        assert_eq!(format_hint(visa, 20), "");
    }

    #[test]
    fn test_format_hint_continues_grouping() {
        let visa = def(CardNetwork::Visa);
        assert_eq!(format_hint(visa, 3), "X XXXX XXXX XXXX");
        assert_eq!(format_hint(visa, 5), "XXX XXXX XXXX");
        assert_eq!(format_hint(visa, 12), "XXXX");
        assert_eq!(format_hint(visa, 15), "X");

        let diners = def(CardNetwork::DinersClub);
        assert_eq!(format_hint(diners, 0), "XXXX XXXXXX XXXX");
        assert_eq!(format_hint(diners, 6), "XXXX XXXX");
    }

    #[test]
    fn test_format_hint_uses_min_length() {
        // Maestro hints the shortest complete number
        assert_eq!(format_hint(def(CardNetwork::Maestro), 0), "XXXX XXXX XXXX");
    }

    #[test]
    fn test_display_and_hint_make_full_layout() {
        let number = "4111111111111111";
        let visa = def(CardNetwork::Visa);
        for entered in 0..=number.len() {
            let typed = grouped_display(&number[..entered], visa);
            let hint = format_hint(visa, entered);
            let layout: String = format!("{typed}{hint}")
                .chars()
                .map(|c| if c == ' ' { ' ' } else { '#' })
                .collect();
            assert_eq!(layout, "#### #### #### ####", "entered {entered}");
        }
    }

    #[test]
    fn test_format_hint_with_custom_placeholder() {
        assert_eq!(
            format_hint_with(def(CardNetwork::Amex), 2, '•', "-"),
            "••-••••••-•••••"
        );
    }

    #[test]
    fn test_split_into_groups() {
        let visa = def(CardNetwork::Visa);
        assert_eq!(
            split_into_groups("4111111111111111", visa),
            vec!["4111", "1111", "1111", "1111"]
        );
        assert_eq!(split_into_groups("4111", visa), vec!["4111"]);
        assert!(split_into_groups("", visa).is_empty());
    }

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("4111.1111.1111.1111"), "4111111111111111");
        assert_eq!(strip_formatting(" - "), "");
    }
}
