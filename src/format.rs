//! Input formatting for card fields.
//!
//! These are the as-you-type formatters for the card number, expiry date and
//! security code fields. They accept partial input and never fail.
//!
//! # Format Conventions
//!
//! - **American Express**: `XXXX XXXXXX XXXXX`
//! - **Diners Club** (14 digits): `XXXX XXXXXX XXXX`
//! - **Everything else**: groups of 4 with the remainder at the end
//!
//! # Example
//!
//! ```
//! use checkout_validation::format::{format_expiry_date, format_number};
//!
//! assert_eq!(format_number("4111111111111111", None), "4111 1111 1111 1111");
//! assert_eq!(format_number("378282246310005", None), "3782 822463 10005");
//! assert_eq!(format_number("3782822", None), "3782 822");
//!
//! assert_eq!(format_expiry_date("1225", '/'), "12/25");
//! assert_eq!(format_expiry_date("5", '/'), "05");
//! ```

use crate::card::CardType;
use crate::detect;

const DEFAULT_SECURITY_CODE_LENGTH: usize = 4;

/// Formats a (partial) card number with spaces.
///
/// When `card_type` is `None` it is detected from the digits.
pub fn format_number(input: &str, card_type: Option<CardType>) -> String {
    format_number_with_separator(input, card_type, " ")
}

/// Formats a (partial) card number with a custom separator.
///
/// # Example
///
/// ```
/// use checkout_validation::format::format_number_with_separator;
/// use checkout_validation::CardType;
///
/// assert_eq!(
///     format_number_with_separator("4111111111111111", None, "-"),
///     "4111-1111-1111-1111"
/// );
/// assert_eq!(
///     format_number_with_separator("30569309025904", Some(CardType::DinersClub), " "),
///     "3056 930902 5904"
/// );
/// ```
pub fn format_number_with_separator(input: &str, card_type: Option<CardType>, separator: &str) -> String {
    let digits = strip_formatting(input);
    if digits.is_empty() {
        return digits;
    }

    let card_type = card_type.or_else(|| detect::detect(&digits, None));
    let groups = grouping_for(card_type, digits.len());

    let mut result = String::with_capacity(digits.len() + groups.len() * separator.len());
    let mut rest = digits.as_str();

    for &size in &groups {
        if rest.is_empty() {
            break;
        }
        if !result.is_empty() {
            result.push_str(separator);
        }
        let (head, tail) = rest.split_at(size.min(rest.len()));
        result.push_str(head);
        rest = tail;
    }

    if !rest.is_empty() {
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(rest);
    }

    result
}

/// Returns the digit grouping for a card type.
fn grouping_for(card_type: Option<CardType>, length: usize) -> Vec<usize> {
    match card_type {
        Some(CardType::AmericanExpress) => vec![4, 6, 5],
        Some(CardType::DinersClub) if length == 14 => vec![4, 6, 4],
        _ => {
            let mut groups = vec![4; length / 4];
            if length % 4 > 0 {
                groups.push(length % 4);
            }
            groups
        }
    }
}

/// Formats a (partial) expiry date as `MM<separator>YY`.
///
/// Non-digits are dropped. A first digit above 1 can only be a single-digit
/// month, so it gets a leading zero. The separator is inserted once year
/// digits follow the month. At most four year digits are kept.
///
/// # Example
///
/// ```
/// use checkout_validation::format::format_expiry_date;
///
/// assert_eq!(format_expiry_date("1", '/'), "1");
/// assert_eq!(format_expiry_date("12", '/'), "12");
/// assert_eq!(format_expiry_date("123", '/'), "12/3");
/// assert_eq!(format_expiry_date("3/27", '/'), "03/27");
/// assert_eq!(format_expiry_date("12/2030", '/'), "12/2030");
/// ```
pub fn format_expiry_date(input: &str, separator: char) -> String {
    let mut digits = strip_formatting(input);
    if digits.starts_with(|c: char| ('2'..='9').contains(&c)) {
        digits.insert(0, '0');
    }
    digits.truncate(6);

    if digits.len() <= 2 {
        return digits;
    }
    let (month, year) = digits.split_at(2);
    format!("{month}{separator}{year}")
}

/// Keeps only the digits of a security code, truncated to the card type's
/// code size (4 when the type is unknown).
pub fn format_security_code(input: &str, card_type: Option<CardType>) -> String {
    let max = card_type.map_or(DEFAULT_SECURITY_CODE_LENGTH, |t| t.security_code_size());
    input.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Strips all formatting, leaving only ASCII digits.
///
/// # Example
///
/// ```
/// use checkout_validation::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
