//! Error types for detailed card number checks.
//!
//! [`crate::validate::validate_number`] only says VALID or INVALID. When a form
//! needs to tell the user *why* a number was rejected, use
//! [`crate::validate::check_card_number`], which reports one of these.

use std::fmt;

/// Reasons a card number is rejected, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardNumberError {
    /// A character other than a digit or separator was found.
    ///
    /// Spaces, hyphens and dots are accepted as separators.
    IllegalCharacter {
        /// Position of the character in the input (0-indexed, in chars).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The number has more digits than any card.
    TooLong {
        /// Number of digits provided.
        length: usize,
        /// Maximum allowed digits (19).
        maximum: usize,
    },

    /// The number has fewer digits than any card.
    TooShort {
        /// Number of digits provided.
        length: usize,
        /// Minimum required digits (8).
        minimum: usize,
    },

    /// None of the accepted card types matches the number's prefix.
    UnsupportedBrand,

    /// The Luhn checksum failed.
    ///
    /// This usually indicates a typo in the card number.
    LuhnCheck,
}

impl fmt::Display for CardNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, hyphens and dots allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} digits, maximum is {}",
                    length, maximum
                )
            }

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} digits, minimum is {}",
                    length, minimum
                )
            }

            Self::UnsupportedBrand => {
                write!(f, "card brand not supported - check the card number prefix")
            }

            Self::LuhnCheck => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }
        }
    }
}

impl std::error::Error for CardNumberError {}
