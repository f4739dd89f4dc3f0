//! Display masking for card numbers and IBANs.
//!
//! Masked values are safe to log or show in a UI: a card number keeps only
//! its last four digits, an IBAN its first and last four characters.
//!
//! # Example
//!
//! ```
//! use checkout_validation::mask::{mask_iban, mask_number};
//!
//! assert_eq!(mask_number("4111 1111 1111 1111"), "****-****-****-1111");
//! assert_eq!(mask_iban("NL91 ABNA 0417 1643 00"), "NL91 \u{2026} 4300");
//! ```

const VISIBLE_DIGITS: usize = 4;

/// Masks a card number, keeping only the last four digits.
///
/// Non-digit characters are dropped. Masked digits are shown as `*` in
/// groups of four. Inputs of four digits or fewer are masked entirely.
#[inline]
pub fn mask_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= VISIBLE_DIGITS {
        return "*".repeat(len);
    }

    let masked_count = len - VISIBLE_DIGITS;
    let mut result = String::with_capacity(len + len / 4 + 1);

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }
    result.push('-');
    result.extend(&digits[masked_count..]);

    result
}

/// Returns the last four digits of a card number, or an empty string if
/// there are fewer than four.
#[inline]
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= VISIBLE_DIGITS {
        digits[digits.len() - VISIBLE_DIGITS..].iter().collect()
    } else {
        String::new()
    }
}

/// Masks an IBAN as `first four … last four`.
///
/// Whitespace is removed and letters are upper-cased. Values too short to
/// hide anything are returned normalized but unmasked.
pub fn mask_iban(input: &str) -> String {
    let normalized: Vec<char> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let len = normalized.len();

    if len <= 2 * VISIBLE_DIGITS {
        return normalized.into_iter().collect();
    }

    let head: String = normalized[..VISIBLE_DIGITS].iter().collect();
    let tail: String = normalized[len - VISIBLE_DIGITS..].iter().collect();
    format!("{head} \u{2026} {tail}")
}
