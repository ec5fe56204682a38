//! As-you-type tracking of a card number input field.
//!
//! The validation functions are stateless. A text field, however, needs to
//! know when something *changed*: the network icon should swap only when the
//! network differs from the previous keystroke, and an error should be raised
//! once when a complete number turns out invalid, not on every redraw.
//!
//! [`transition`] is the pure step function for that: given the previous
//! verdict and the new input it returns the new verdict, the derived
//! [`InputState`] and the edge-triggered [`InputEvent`]s. [`CardInput`] is a
//! small buffer built on it for callers that do not want to keep the digits
//! themselves.
//!
//! # Example
//!
//! ```
//! use cardtype::input::{CardInput, InputEvent, InputState};
//! use cardtype::CardNetwork;
//!
//! let mut field = CardInput::new();
//! assert_eq!(field.state(), InputState::Empty);
//!
//! let events = field.push('4').unwrap();
//! assert_eq!(
//!     events,
//!     vec![InputEvent::NetworkChanged { from: CardNetwork::Unknown, to: CardNetwork::Visa }]
//! );
//!
//! field.push_str("111111111111111").unwrap();
//! assert_eq!(field.state(), InputState::CompleteValid);
//! assert_eq!(field.display(), "4111 1111 1111 1111");
//! ```

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::card::CardNetwork;
use crate::error::{parse_digits, ValidationError};
use crate::format::{format_hint, grouped_display};
use crate::validate::{validate_digits, ValidationVerdict};

/// Coarse state of the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputState {
    /// Nothing typed yet.
    Empty,
    /// Some digits typed, length not yet complete for the network.
    Typing,
    /// Complete length and valid.
    CompleteValid,
    /// Complete length but the number fails validation.
    CompleteInvalid,
}

impl InputState {
    /// Derives the state from a verdict.
    pub const fn of(verdict: &ValidationVerdict) -> Self {
        if verdict.length() == 0 {
            Self::Empty
        } else if !verdict.is_complete() {
            Self::Typing
        } else if verdict.is_valid() {
            Self::CompleteValid
        } else {
            Self::CompleteInvalid
        }
    }
}

/// Notification produced by a [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum InputEvent {
    /// The classified network differs from the previous verdict.
    NetworkChanged {
        /// Network before the change.
        from: CardNetwork,
        /// Network after the change.
        to: CardNetwork,
    },
    /// The input just became complete but invalid.
    ValidationFailed {
        /// Network of the rejected number.
        network: CardNetwork,
    },
}

/// Outcome of a single input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    verdict: ValidationVerdict,
    state: InputState,
    events: Vec<InputEvent>,
}

impl Transition {
    /// The verdict for the new input.
    #[inline]
    pub const fn verdict(&self) -> &ValidationVerdict {
        &self.verdict
    }

    /// The state derived from the new verdict.
    #[inline]
    pub const fn state(&self) -> InputState {
        self.state
    }

    /// Events fired by this change, network change first.
    #[inline]
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Consumes the transition, returning its events.
    #[inline]
    pub fn into_events(self) -> Vec<InputEvent> {
        self.events
    }
}

/// Computes the effect of changing the input to `card_number`.
///
/// Events are edge-triggered against `previous`: `NetworkChanged` only when
/// the network differs, `ValidationFailed` only when the state enters
/// [`InputState::CompleteInvalid`] from any other state.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidArgument`] if `card_number` contains
/// anything other than `0`-`9`.
///
/// # Example
///
/// ```
/// use cardtype::input::{transition, InputEvent, InputState};
/// use cardtype::{CardNetwork, ValidationVerdict};
///
/// let start = ValidationVerdict::empty();
/// let t = transition(&start, "4111111111111112").unwrap();
/// assert_eq!(t.state(), InputState::CompleteInvalid);
/// assert!(t.events().contains(&InputEvent::ValidationFailed { network: CardNetwork::Visa }));
///
/// // Same input again: nothing new to report
/// let again = transition(t.verdict(), "4111111111111112").unwrap();
/// assert!(again.events().is_empty());
/// ```
pub fn transition(
    previous: &ValidationVerdict,
    card_number: &str,
) -> Result<Transition, ValidationError> {
    let digits = parse_digits(card_number)?;
    Ok(transition_digits(previous, &digits))
}

/// Same as [`transition`] for pre-parsed digit values.
pub fn transition_digits(previous: &ValidationVerdict, digits: &[u8]) -> Transition {
    let verdict = validate_digits(digits);
    let state = InputState::of(&verdict);
    let mut events = Vec::new();

    let from = previous.network().network();
    let to = verdict.network().network();
    if from != to {
        events.push(InputEvent::NetworkChanged { from, to });
    }

    if state == InputState::CompleteInvalid && InputState::of(previous) != state {
        events.push(InputEvent::ValidationFailed { network: to });
    }

    Transition {
        verdict,
        state,
        events,
    }
}

/// Caller-held card number buffer with change tracking.
///
/// Digits beyond the current network's maximum length are ignored, the way
/// a length-limited text field drops extra keystrokes. The buffer is zeroed
/// when cleared and when dropped.
#[derive(Clone, Default)]
pub struct CardInput {
    digits: Zeroizing<Vec<u8>>,
    verdict: ValidationVerdict,
}

impl CardInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one typed character.
    ///
    /// Returns the events fired by the change; an ignored keystroke (the
    /// number is already at maximum length) fires none.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if `c` is not a digit;
    /// the buffer is left unchanged.
    pub fn push(&mut self, c: char) -> Result<Vec<InputEvent>, ValidationError> {
        let digit = c.to_digit(10).ok_or(ValidationError::InvalidArgument {
            position: self.digits.len(),
            character: c,
        })?;

        if !self.accept(digit as u8) {
            return Ok(Vec::new());
        }
        Ok(self.refresh())
    }

    /// Appends several typed characters, as when pasting.
    ///
    /// The whole string is checked before anything is appended. Events are
    /// reported once for the combined change.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if `input` contains a
    /// non-digit; the buffer is left unchanged.
    pub fn push_str(&mut self, input: &str) -> Result<Vec<InputEvent>, ValidationError> {
        let digits = parse_digits(input)?;
        let before = self.digits.len();
        for digit in digits {
            self.accept(digit);
        }

        if self.digits.len() == before {
            return Ok(Vec::new());
        }
        Ok(self.refresh())
    }

    /// Replaces the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if `input` contains a
    /// non-digit; the buffer is left unchanged.
    pub fn set(&mut self, input: &str) -> Result<Vec<InputEvent>, ValidationError> {
        let digits = parse_digits(input)?;
        self.digits.zeroize();
        for digit in digits {
            self.accept(digit);
        }
        Ok(self.refresh())
    }

    /// Removes the last digit, as on backspace.
    pub fn pop(&mut self) -> Vec<InputEvent> {
        match self.digits.pop() {
            Some(_) => self.refresh(),
            None => Vec::new(),
        }
    }

    /// Clears the input, zeroing the buffer.
    pub fn clear(&mut self) -> Vec<InputEvent> {
        self.digits.zeroize();
        self.refresh()
    }

    /// The verdict for the current input.
    #[inline]
    pub const fn verdict(&self) -> &ValidationVerdict {
        &self.verdict
    }

    /// The current input state.
    #[inline]
    pub const fn state(&self) -> InputState {
        InputState::of(&self.verdict)
    }

    /// The currently classified network.
    #[inline]
    pub const fn network(&self) -> CardNetwork {
        self.verdict.network().network()
    }

    /// Number of digits entered.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if nothing has been entered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The entered digits grouped for display.
    pub fn display(&self) -> String {
        grouped_display(&self.number(), self.verdict.network())
    }

    /// Placeholder hint for the digits still missing.
    pub fn hint(&self) -> String {
        format_hint(self.verdict.network(), self.digits.len())
    }

    /// Returns the entered digits as a string.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result.
    pub fn number(&self) -> String {
        self.digits.iter().map(|&d| (b'0' + d) as char).collect()
    }

    fn accept(&mut self, digit: u8) -> bool {
        // Limit by the network of the buffer including the new digit
        self.digits.push(digit);
        let network = crate::detect::classify_digits(&self.digits);
        if self.digits.len() > network.max_length() {
            self.digits.pop();
            return false;
        }
        true
    }

    fn refresh(&mut self) -> Vec<InputEvent> {
        let transition = transition_digits(&self.verdict, &self.digits);
        self.verdict = transition.verdict;
        transition.into_events()
    }
}

impl fmt::Debug for CardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the digits
        f.debug_struct("CardInput")
            .field("network", &self.network())
            .field("length", &self.digits.len())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_changed(from: CardNetwork, to: CardNetwork) -> InputEvent {
        InputEvent::NetworkChanged { from, to }
    }

    #[test]
    fn test_state_of_verdict() {
        assert_eq!(InputState::of(&validate_digits(&[])), InputState::Empty);
        assert_eq!(InputState::of(&validate_digits(&[4, 1])), InputState::Typing);

        let verdict = crate::validate("4111111111111111").unwrap();
        assert_eq!(InputState::of(&verdict), InputState::CompleteValid);

        let verdict = crate::validate("4111111111111112").unwrap();
        assert_eq!(InputState::of(&verdict), InputState::CompleteInvalid);
    }

    #[test]
    fn test_transition_network_change_is_edge_triggered() {
        let start = ValidationVerdict::empty();
        let t = transition(&start, "3").unwrap();
        assert!(t.events().is_empty());

        let t = transition(t.verdict(), "37").unwrap();
        assert_eq!(
            t.events(),
            &[network_changed(CardNetwork::Unknown, CardNetwork::Amex)]
        );

        let t = transition(t.verdict(), "378").unwrap();
        assert!(t.events().is_empty());
        assert_eq!(t.state(), InputState::Typing);
    }

    #[test]
    fn test_transition_validation_failed_fires_once() {
        let typing = crate::validate("411111111111111").unwrap();
        let t = transition(&typing, "4111111111111112").unwrap();
        assert_eq!(
            t.events(),
            &[InputEvent::ValidationFailed {
                network: CardNetwork::Visa
            }]
        );

        // Still complete and invalid: no repeat
        let t = transition(t.verdict(), "4111111111111113").unwrap();
        assert!(t.events().is_empty());
        assert_eq!(t.state(), InputState::CompleteInvalid);
    }

    #[test]
    fn test_transition_rejects_non_digits() {
        assert!(transition(&ValidationVerdict::empty(), "41a").is_err());
    }

    #[test]
    fn test_card_input_typing() {
        let mut field = CardInput::new();
        assert!(field.is_empty());
        assert_eq!(field.hint(), "XXXX XXXX XXXX XXXX");

        assert_eq!(
            field.push('5').unwrap(),
            Vec::new(),
            "a lone 5 is not a known prefix yet"
        );
        assert_eq!(
            field.push('5').unwrap(),
            vec![network_changed(CardNetwork::Unknown, CardNetwork::Mastercard)]
        );
        assert_eq!(field.network(), CardNetwork::Mastercard);
        assert_eq!(field.len(), 2);
        assert_eq!(field.display(), "55");
        assert_eq!(field.hint(), "XX XXXX XXXX XXXX");
    }

    #[test]
    fn test_card_input_backspace() {
        let mut field = CardInput::new();
        field.push_str("37").unwrap();
        assert_eq!(field.network(), CardNetwork::Amex);

        assert_eq!(
            field.pop(),
            vec![network_changed(CardNetwork::Amex, CardNetwork::Unknown)]
        );
        assert_eq!(field.pop(), Vec::new());
        assert_eq!(field.state(), InputState::Empty);
        assert_eq!(field.pop(), Vec::new());
    }

    #[test]
    fn test_card_input_ignores_digits_past_max_length() {
        let mut field = CardInput::new();
        field.push_str("378282246310005").unwrap();
        assert_eq!(field.state(), InputState::CompleteValid);

        assert_eq!(field.push('1').unwrap(), Vec::new());
        assert_eq!(field.len(), 15);
        assert_eq!(field.number(), "378282246310005");
    }

    #[test]
    fn test_card_input_paste_is_truncated() {
        let mut field = CardInput::new();
        field.set("41111111111111111111").unwrap();
        assert_eq!(field.len(), 16);
        assert_eq!(field.state(), InputState::CompleteValid);
    }

    #[test]
    fn test_card_input_maestro_accepts_up_to_sixteen() {
        let mut field = CardInput::new();
        field.push_str("501800000009").unwrap();
        assert_eq!(field.network(), CardNetwork::Maestro);
        assert_eq!(field.state(), InputState::CompleteValid);

        field.push_str("00001").unwrap();
        assert_eq!(field.len(), 16);
    }

    #[test]
    fn test_card_input_rejects_non_digit() {
        let mut field = CardInput::new();
        field.push_str("41").unwrap();

        let err = field.push(' ').unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidArgument {
                position: 2,
                character: ' '
            }
        );
        assert!(field.push('\u{0664}').is_err());
        assert!(field.push_str("1a").is_err());
        assert_eq!(field.number(), "41");
    }

    #[test]
    fn test_card_input_validation_failed_once() {
        let mut field = CardInput::new();
        field.push_str("411111111111111").unwrap();
        assert_eq!(
            field.push('2').unwrap(),
            vec![InputEvent::ValidationFailed {
                network: CardNetwork::Visa
            }]
        );

        // Backspace and retype the same wrong digit: fires again
        assert_eq!(field.pop(), Vec::new());
        assert_eq!(
            field.push('2').unwrap(),
            vec![InputEvent::ValidationFailed {
                network: CardNetwork::Visa
            }]
        );
    }

    #[test]
    fn test_card_input_clear() {
        let mut field = CardInput::new();
        field.push_str("4111").unwrap();
        assert_eq!(
            field.clear(),
            vec![network_changed(CardNetwork::Visa, CardNetwork::Unknown)]
        );
        assert!(field.is_empty());
        assert_eq!(field.state(), InputState::Empty);
    }

    #[test]
    fn test_debug_does_not_expose_digits() {
        let mut field = CardInput::new();
        field.push_str("4111111111111111").unwrap();
        let debug = format!("{:?}", field);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("Visa"));
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardInput>();
        assert_send_sync::<Transition>();
        assert_send_sync::<InputEvent>();
    }
}
