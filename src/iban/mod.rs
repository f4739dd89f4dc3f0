//! IBAN validation and formatting.
//!
//! Two levels of checking are offered:
//!
//! - [`validate`] is the structural check used while typing: known country
//!   (aliases included) and exact length.
//! - [`Iban::parse`] is the full ISO 13616 check: country, length, BBAN
//!   structure, numeric check digits and the mod-97 checksum.
//!
//! # Example
//!
//! ```
//! use checkout_validation::iban::{self, Iban};
//!
//! assert!(iban::validate("NL91 ABNA 0417 1643 00"));
//!
//! let parsed = Iban::parse("nl91abna0417164300").unwrap();
//! assert_eq!(parsed.country_code(), "NL");
//! assert_eq!(parsed.to_string(), "NL91 ABNA 0417 1643 00");
//!
//! // Right length, wrong checksum
//! assert!(iban::validate("NL00ABNA0417164300"));
//! assert!(Iban::parse("NL00ABNA0417164300").is_err());
//! ```

mod registry;

pub use registry::{lookup, IbanFormat, ALIASES, IBAN_FORMATS};

use std::fmt;
use tracing::trace;

const BLOCK_SIZE: usize = 4;
const COUNTRY_CODE_LENGTH: usize = 2;

/// Structural IBAN check: known country and exact length.
///
/// Spaces are ignored and the country code is case-insensitive. The
/// checksum is not verified; use [`Iban::parse`] for that.
pub fn validate(iban: &str) -> bool {
    let stripped: String = iban.chars().filter(|c| !c.is_whitespace()).collect();
    let Some(country) = stripped.get(..COUNTRY_CODE_LENGTH) else {
        return false;
    };
    lookup(country).is_some_and(|fmt| fmt.length == stripped.len())
}

/// Errors from [`Iban::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IbanError {
    /// The input is empty or only whitespace.
    Empty,

    /// A character other than a letter or digit was found.
    InvalidCharacter {
        /// Position in the input with whitespace removed (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The country code has no known IBAN format.
    UnknownCountry(String),

    /// The length does not match the country's format.
    InvalidLength {
        /// Country code of the IBAN.
        country: String,
        /// Length provided.
        length: usize,
        /// Length required for the country.
        expected: usize,
    },

    /// Positions 3 and 4 are not digits.
    InvalidCheckDigits,

    /// The account part does not match the country's structure.
    InvalidBban {
        /// Country code of the IBAN.
        country: String,
    },

    /// The mod-97 checksum failed.
    ChecksumMismatch,
}

impl fmt::Display for IbanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "IBAN is empty"),
            Self::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "invalid character '{}' at position {} (only letters and digits allowed)",
                character.escape_default(),
                position
            ),
            Self::UnknownCountry(code) => write!(f, "no IBAN format known for country '{}'", code),
            Self::InvalidLength {
                country,
                length,
                expected,
            } => write!(
                f,
                "{} IBANs must have {} characters, got {}",
                country, expected, length
            ),
            Self::InvalidCheckDigits => write!(f, "IBAN check digits must be numeric"),
            Self::InvalidBban { country } => {
                write!(f, "account number does not match the {} IBAN format", country)
            }
            Self::ChecksumMismatch => {
                write!(f, "invalid IBAN checksum - please verify the account number")
            }
        }
    }
}

impl std::error::Error for IbanError {}

/// A fully validated IBAN, stored upper-case without spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban {
    value: String,
}

impl Iban {
    /// Parses and fully validates an IBAN.
    ///
    /// Whitespace is removed and letters are upper-cased first.
    pub fn parse(value: &str) -> Result<Self, IbanError> {
        let normalized = normalize(value);
        Self::check(&normalized)?;
        Ok(Self { value: normalized })
    }

    /// Parses an IBAN where the user left out leading zeros of the trailing
    /// account digits.
    ///
    /// When the input is one to three characters short, zeros are inserted
    /// in front of the trailing run of digits: `NL13 TEST 1234 5678 9`
    /// becomes `NL13 TEST 0123 4567 89`.
    ///
    /// # Example
    ///
    /// ```
    /// use checkout_validation::iban::Iban;
    ///
    /// let iban = Iban::parse_adding_missing_zeros("NL91 ABNA 4171 6430 0").unwrap();
    /// assert_eq!(iban.value(), "NL91ABNA0417164300");
    /// ```
    pub fn parse_adding_missing_zeros(value: &str) -> Result<Self, IbanError> {
        let normalized = normalize(value);
        let padded = normalized
            .get(..COUNTRY_CODE_LENGTH)
            .and_then(lookup)
            .and_then(|fmt| zero_padded(&normalized, fmt.length));

        match padded {
            Some(candidate) if Self::check(&candidate).is_ok() => {
                trace!(added = candidate.len() - normalized.len(), "IBAN zero-padded");
                Ok(Self { value: candidate })
            }
            _ => Self::parse(&normalized),
        }
    }

    fn check(normalized: &str) -> Result<(), IbanError> {
        if normalized.is_empty() {
            return Err(IbanError::Empty);
        }
        if let Some((position, character)) = normalized
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphanumeric())
        {
            return Err(IbanError::InvalidCharacter {
                position,
                character,
            });
        }

        let country = normalized.get(..COUNTRY_CODE_LENGTH).unwrap_or(normalized);
        let fmt = lookup(country).ok_or_else(|| IbanError::UnknownCountry(country.to_string()))?;

        if normalized.len() != fmt.length {
            return Err(IbanError::InvalidLength {
                country: country.to_string(),
                length: normalized.len(),
                expected: fmt.length,
            });
        }

        if !normalized[COUNTRY_CODE_LENGTH..BLOCK_SIZE]
            .bytes()
            .all(|b| b.is_ascii_digit())
        {
            return Err(IbanError::InvalidCheckDigits);
        }

        if !registry::matches_structure(fmt.bban, &normalized[BLOCK_SIZE..], false) {
            return Err(IbanError::InvalidBban {
                country: country.to_string(),
            });
        }

        if mod97(normalized) != 1 {
            return Err(IbanError::ChecksumMismatch);
        }

        Ok(())
    }

    /// Returns the IBAN without spaces.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the two-letter country code.
    #[inline]
    pub fn country_code(&self) -> &str {
        &self.value[..COUNTRY_CODE_LENGTH]
    }

    /// Returns the two check digits.
    #[inline]
    pub fn check_digits(&self) -> &str {
        &self.value[COUNTRY_CODE_LENGTH..BLOCK_SIZE]
    }

    /// Returns the basic bank account number (everything after the check
    /// digits).
    #[inline]
    pub fn bban(&self) -> &str {
        &self.value[BLOCK_SIZE..]
    }

    /// Returns true if the IBAN's country is in the SEPA scheme.
    pub fn is_sepa(&self) -> bool {
        lookup(self.country_code()).is_some_and(|fmt| fmt.sepa)
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(&self.value))
    }
}

impl std::str::FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns true if `value` could still become a valid IBAN with more input.
///
/// Fewer than two characters match any known country code prefix. Beyond
/// that, the country must be known, the input shorter than its IBAN, and
/// every character so far consistent with the country's structure.
pub fn is_partial(value: &str) -> bool {
    let normalized = normalize(value);
    if normalized.len() < COUNTRY_CODE_LENGTH {
        return registry::country_codes().any(|code| code.starts_with(normalized.as_str()));
    }

    let Some(fmt) = normalized.get(..COUNTRY_CODE_LENGTH).and_then(lookup) else {
        return false;
    };
    if normalized.len() >= fmt.length {
        return false;
    }

    let check_digits = normalized.get(COUNTRY_CODE_LENGTH..BLOCK_SIZE.min(normalized.len()));
    let bban = normalized.get(BLOCK_SIZE..).unwrap_or("");

    check_digits.is_some_and(|d| d.bytes().all(|b| b.is_ascii_digit()))
        && registry::matches_structure(fmt.bban, bban, true)
}

/// Returns true if `value` starts with (a prefix of) a SEPA country code.
pub fn starts_with_sepa_country_code(value: &str) -> bool {
    let normalized = normalize(value);
    if normalized.len() < COUNTRY_CODE_LENGTH {
        return registry::country_codes()
            .any(|code| code.starts_with(normalized.as_str()) && lookup(code).is_some_and(|fmt| fmt.sepa));
    }
    normalized
        .get(..COUNTRY_CODE_LENGTH)
        .and_then(lookup)
        .is_some_and(|fmt| fmt.sepa)
}

/// Formats an IBAN in groups of four characters.
///
/// # Example
///
/// ```
/// use checkout_validation::iban::format;
///
/// assert_eq!(format("de89370400440532013000"), "DE89 3704 0044 0532 0130 00");
/// ```
pub fn format(value: &str) -> String {
    let normalized = normalize(value);
    let mut out = String::with_capacity(normalized.len() + normalized.len() / BLOCK_SIZE);
    for (i, c) in normalized.chars().enumerate() {
        if i > 0 && i % BLOCK_SIZE == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Longest possible IBAN once formatted with [`format`].
pub fn formatted_max_length() -> usize {
    let max = registry::max_length();
    max + max.saturating_sub(1) / BLOCK_SIZE
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Inserts zeros in front of the trailing digit run to reach `length`.
fn zero_padded(normalized: &str, length: usize) -> Option<String> {
    let missing = length.checked_sub(normalized.len())?;
    if !(1..=3).contains(&missing) {
        return None;
    }

    let bytes = normalized.as_bytes();
    let mut start = bytes.len();
    while start > BLOCK_SIZE + 1 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == bytes.len() {
        return None;
    }

    let mut padded = String::with_capacity(length);
    padded.push_str(&normalized[..start]);
    padded.extend(std::iter::repeat('0').take(missing));
    padded.push_str(&normalized[start..]);
    Some(padded)
}

/// ISO 7064 mod-97-10 over the rearranged IBAN.
///
/// The first four characters move to the end and letters expand to two
/// digits (A = 10 ... Z = 35). The remainder is accumulated digit by digit
/// so no big-number arithmetic is needed.
fn mod97(normalized: &str) -> u32 {
    let (head, tail) = normalized.split_at(BLOCK_SIZE);
    tail.bytes().chain(head.bytes()).fold(0u32, |acc, b| match b {
        b'0'..=b'9' => (acc * 10 + (b - b'0') as u32) % 97,
        b'A'..=b'Z' => (acc * 100 + (b - b'A' + 10) as u32) % 97,
        _ => acc,
    })
}
