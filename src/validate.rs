//! Card number validation.
//!
//! [`validate_number`] is the brand-independent check used while the user
//! types: strip separators, check the length window, run Luhn.
//! [`check_card_number`] additionally checks the brand against an accepted set
//! and reports the first reason the number was rejected.

use crate::card::{CardType, NumberValidationResult, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::detect;
use crate::error::CardNumberError;
use crate::luhn;

/// Returns true for characters stripped from card number input.
#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '.'
}

/// Validates a card number as typed by the user.
///
/// Whitespace, hyphens and dots are stripped first. The number is VALID when
/// only digits remain, there are 8 to 19 of them, and the Luhn checksum
/// passes. The brand is not considered.
///
/// # Example
///
/// ```
/// use checkout_validation::{validate_number, Validity};
///
/// let result = validate_number("4111 1111 1111 1111");
/// assert_eq!(result.validity(), Validity::Valid);
/// assert_eq!(result.normalized_number(), Some("4111111111111111"));
///
/// let result = validate_number("4111 1111 1111 1112");
/// assert_eq!(result.validity(), Validity::Invalid);
/// assert_eq!(result.normalized_number(), None);
/// ```
pub fn validate_number(raw: &str) -> NumberValidationResult {
    let normalized: String = raw.chars().filter(|&c| !is_separator(c)).collect();

    if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return NumberValidationResult::invalid();
    }

    let length = normalized.len();
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&length) {
        return NumberValidationResult::invalid();
    }

    if !luhn::validate_str(&normalized) {
        return NumberValidationResult::invalid();
    }

    NumberValidationResult::valid(normalized)
}

/// Checks a card number and explains why it is rejected.
///
/// Checks run in this order and the first failure is returned:
/// 1. illegal characters (anything but digits and separators),
/// 2. more than 19 digits,
/// 3. fewer than 8 digits,
/// 4. no accepted card type matches the prefix (`allowed` of `None` accepts
///    every type),
/// 5. Luhn checksum, only when `luhn_check` is set.
///
/// On success the digit-only number is returned.
///
/// # Example
///
/// ```
/// use checkout_validation::{check_card_number, CardNumberError, CardType};
///
/// let allowed = [CardType::Visa, CardType::Mastercard];
/// assert_eq!(
///     check_card_number("4111 1111 1111 1111", Some(&allowed), true).as_deref(),
///     Ok("4111111111111111")
/// );
/// assert_eq!(
///     check_card_number("3782 822463 10005", Some(&allowed), true),
///     Err(CardNumberError::UnsupportedBrand)
/// );
/// ```
pub fn check_card_number(
    raw: &str,
    allowed: Option<&[CardType]>,
    luhn_check: bool,
) -> Result<String, CardNumberError> {
    let mut normalized = String::with_capacity(raw.len());

    for (position, c) in raw.chars().enumerate() {
        match c {
            '0'..='9' => normalized.push(c),
            c if is_separator(c) => {}
            _ => {
                return Err(CardNumberError::IllegalCharacter {
                    position,
                    character: c,
                });
            }
        }
    }

    let length = normalized.len();
    if length > MAX_CARD_DIGITS {
        return Err(CardNumberError::TooLong {
            length,
            maximum: MAX_CARD_DIGITS,
        });
    }
    if length < MIN_CARD_DIGITS {
        return Err(CardNumberError::TooShort {
            length,
            minimum: MIN_CARD_DIGITS,
        });
    }

    if detect::estimate(&normalized, allowed).is_empty() {
        return Err(CardNumberError::UnsupportedBrand);
    }

    if luhn_check && !luhn::validate_str(&normalized) {
        return Err(CardNumberError::LuhnCheck);
    }

    Ok(normalized)
}

/// Quickly checks if a card number is valid without returning the digits.
///
/// # Example
///
/// ```
/// use checkout_validation::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    validate_number(raw).is_valid()
}

/// Checks the Luhn checksum only, ignoring every non-digit character.
///
/// # Example
///
/// ```
/// use checkout_validation::passes_luhn;
///
/// assert!(passes_luhn("4111111111111111"));
/// assert!(!passes_luhn("4111111111111112"));
/// ```
#[inline]
pub fn passes_luhn(raw: &str) -> bool {
    let digits: Vec<u8> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    luhn::validate(&digits)
}
