//! Luhn (mod 10) checksum.
//!
//! Starting from the rightmost digit, every second digit is doubled; doubled
//! values above 9 have 9 subtracted. The number is valid when the sum of all
//! digits is divisible by 10.

/// Doubled digit with 9 subtracted when the result has two digits.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a digit slice (values 0-9, not ASCII) with the Luhn algorithm.
///
/// Returns false for empty input or any element above 9.
///
/// # Example
///
/// ```
/// use checkout_validation::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && digits.iter().all(|&d| d <= 9) && compute_checksum(digits) % 10 == 0
}

/// Validates an ASCII digit string with the Luhn algorithm.
///
/// Returns false for empty input or any non-digit character.
#[inline]
pub fn validate_str(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| weigh(i, b - b'0'))
        .sum();
    sum % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) of a digit slice.
///
/// # Panics
///
/// Panics if any element is above 9.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| weigh(i, d))
        .sum()
}

/// Computes the check digit that makes `digits` followed by it Luhn-valid.
///
/// # Example
///
/// ```
/// use checkout_validation::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
///
/// # Panics
///
/// Panics if any element is above 9.
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit moves one position left once the check digit is
    // appended, so the doubling parity flips.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| weigh(i + 1, d))
        .sum();
    ((10 - (sum % 10)) % 10) as u8
}

#[inline]
fn weigh(position_from_right: usize, digit: u8) -> u32 {
    if position_from_right % 2 == 1 {
        DOUBLE_TABLE[digit as usize] as u32
    } else {
        digit as u32
    }
}
