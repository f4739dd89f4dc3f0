//! Parsing of typed major-unit amounts into minor units.

use std::fmt;

/// Errors from [`crate::amount::parse_major_amount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is empty or only whitespace.
    Empty,

    /// The input has signs or separators but no digits.
    NoDigits,

    /// A character that cannot appear in an amount.
    UnexpectedCharacter {
        /// Position of the character in the input (0-indexed, in chars).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// More non-zero minor digits than the currency allows.
    TooPrecise {
        /// Number of minor digits typed.
        digits: usize,
        /// Minor digits the currency allows.
        exponent: u32,
    },

    /// The value does not fit in a 64-bit minor-unit amount.
    Overflow,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "amount is empty"),
            Self::NoDigits => write!(f, "amount contains no digits"),
            Self::UnexpectedCharacter {
                position,
                character,
            } => write!(
                f,
                "unexpected character '{}' at position {}",
                character.escape_default(),
                position
            ),
            Self::TooPrecise { digits, exponent } => write!(
                f,
                "amount has {} minor digits but the currency allows {}",
                digits, exponent
            ),
            Self::Overflow => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Picks the decimal mark from the separators present in `input`.
///
/// When both `.` and `,` appear, the later one is the decimal mark. A single
/// kind appearing once is the decimal mark; appearing several times it is a
/// thousands separator and there is no decimal mark.
fn decimal_mark(input: &str) -> Option<char> {
    match (input.rfind('.'), input.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) => (input.matches('.').count() == 1).then_some('.'),
        (None, Some(_)) => (input.matches(',').count() == 1).then_some(','),
        (None, None) => None,
    }
}

/// Converts a typed amount into minor units for a currency with `exponent`
/// minor digits.
pub(crate) fn parse_minor_units(input: &str, exponent: u32) -> Result<i64, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let decimal = decimal_mark(input);

    let mut negative = false;
    let mut trailing_sign = false;
    let mut in_minor = false;
    let mut seen_digit = false;
    let mut major: u64 = 0;
    let mut minor_digits: Vec<u8> = Vec::new();

    for (position, c) in input.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        let unexpected = ParseError::UnexpectedCharacter {
            position,
            character: c,
        };
        if trailing_sign {
            return Err(unexpected);
        }
        match c {
            '-' if !negative && !seen_digit && !in_minor => negative = true,
            '-' if !negative && seen_digit => {
                negative = true;
                trailing_sign = true;
            }
            '0'..='9' => {
                let digit = c as u8 - b'0';
                seen_digit = true;
                if in_minor {
                    minor_digits.push(digit);
                } else {
                    major = major
                        .checked_mul(10)
                        .and_then(|m| m.checked_add(u64::from(digit)))
                        .ok_or(ParseError::Overflow)?;
                }
            }
            '.' | ',' if Some(c) == decimal && !in_minor => in_minor = true,
            '.' | ',' if Some(c) != decimal => {}
            _ => return Err(unexpected),
        }
    }

    if !seen_digit {
        return Err(ParseError::NoDigits);
    }

    let precision = exponent as usize;
    if minor_digits.len() > precision {
        if minor_digits[precision..].iter().any(|&d| d != 0) {
            return Err(ParseError::TooPrecise {
                digits: minor_digits.len(),
                exponent,
            });
        }
        minor_digits.truncate(precision);
    }
    minor_digits.resize(precision, 0);

    // Magnitude is unsigned so that i64::MIN is reachable.
    let power = 10u64.checked_pow(exponent).ok_or(ParseError::Overflow)?;
    let minor = minor_digits.iter().try_fold(0u64, |acc, &d| {
        acc.checked_mul(10)
            .and_then(|a| a.checked_add(u64::from(d)))
            .ok_or(ParseError::Overflow)
    })?;

    let magnitude = major
        .checked_mul(power)
        .and_then(|v| v.checked_add(minor))
        .ok_or(ParseError::Overflow)?;

    let signed = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(signed).map_err(|_| ParseError::Overflow)
}
