//! Error type for card number classification and validation.
//!
//! Every operation in this crate is a pure computation over a digit string,
//! so there is exactly one way to fail: handing it something that is not a
//! digit. Callers that strip non-digits before calling never see an error.

use std::fmt;

/// Errors returned when the input is not a plain digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationError {
    /// A character other than `0`-`9` was found where only digits are allowed.
    InvalidArgument {
        /// The position in the input string (0-indexed, in characters).
        position: usize,
        /// The offending character.
        character: char,
    },
}

impl ValidationError {
    /// Returns the character position the error refers to.
    #[inline]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidArgument { position, .. } => *position,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                position,
                character,
            } => {
                write!(
                    f,
                    "not a digit: '{}' at position {} (only 0-9 allowed)",
                    character.escape_default(),
                    position
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Converts a digit string into digit values (0-9).
///
/// Fails on the first character that is not an ASCII digit.
pub(crate) fn parse_digits(input: &str) -> Result<Vec<u8>, ValidationError> {
    input
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0'..='9' => Ok(character as u8 - b'0'),
            _ => Err(ValidationError::InvalidArgument {
                position,
                character,
            }),
        })
        .collect()
}
