//! Core card types.
//!
//! This module provides the `CardType` enum for identifying card networks,
//! the `Validity` verdict shared by the validators, and the
//! `NumberValidationResult` returned by card number validation.

use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

/// Supported card brands.
///
/// The set is closed. BIN prefix data for each variant lives in
/// [`crate::detect`], keyed by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// Visa - Prefix 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    AmericanExpress,
    /// JCB - Prefix 3528-3589, length 16-19
    Jcb,
    /// Diners Club - Prefix 300-305, 309, 36, 38, 39, length 14-19
    DinersClub,
    /// Discover - Prefix 6011, 644-649, 65, length 16-19
    Discover,
    /// Maestro - Prefix 56-58, 6, length 12-19
    Maestro,
    /// Hipercard - Brazilian network, Prefix 606282, 3841, length 16 or 19
    Hipercard,
    /// Elo - Brazilian network, many six-digit prefixes, length 16
    Elo,
    /// Dankort - Danish network, Prefix 5019, 4571, length 16
    Dankort,
    /// China UnionPay - Prefix 62, 81, length 16-19
    Cup,
    /// UATP - Airline cards, Prefix 1, length 15
    Uatp,
    /// Bancontact - Belgian network, Prefix 6703, 479658, 606005, length 16-19
    Bcmc,
    /// de Bijenkorf store card - Prefix 5100081, length 16
    Bijcard,
    /// Mir - Russian network, Prefix 2200-2204, length 16-19
    Mir,
}

impl CardType {
    /// Every card type, in detection table order.
    pub const ALL: [CardType; 15] = [
        Self::Visa,
        Self::Mastercard,
        Self::AmericanExpress,
        Self::Jcb,
        Self::DinersClub,
        Self::Discover,
        Self::Maestro,
        Self::Hipercard,
        Self::Elo,
        Self::Dankort,
        Self::Cup,
        Self::Uatp,
        Self::Bcmc,
        Self::Bijcard,
        Self::Mir,
    ];

    /// Returns the valid lengths for this card type.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::AmericanExpress => &[15],
            Self::Jcb => &[16, 17, 18, 19],
            Self::DinersClub => &[14, 15, 16, 17, 18, 19],
            Self::Discover => &[16, 17, 18, 19],
            Self::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
            Self::Hipercard => &[16, 19],
            Self::Elo => &[16],
            Self::Dankort => &[16],
            Self::Cup => &[16, 17, 18, 19],
            Self::Uatp => &[15],
            Self::Bcmc => &[16, 17, 18, 19],
            Self::Bijcard => &[16],
            Self::Mir => &[16, 17, 18, 19],
        }
    }

    /// Returns true if the given length is valid for this card type.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns the longest valid number length for this card type.
    #[inline]
    pub const fn max_length(&self) -> usize {
        let valid = self.valid_lengths();
        valid[valid.len() - 1] as usize
    }

    /// Returns the number of security code digits printed on the card.
    #[inline]
    pub const fn security_code_size(&self) -> usize {
        match self {
            Self::AmericanExpress => 4,
            _ => 3,
        }
    }

    /// Returns the payment method variant name, e.g. `"mc"` for Mastercard.
    #[inline]
    pub const fn tx_variant(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mc",
            Self::AmericanExpress => "amex",
            Self::Jcb => "jcb",
            Self::DinersClub => "diners",
            Self::Discover => "discover",
            Self::Maestro => "maestro",
            Self::Hipercard => "hipercard",
            Self::Elo => "elo",
            Self::Dankort => "dankort",
            Self::Cup => "cup",
            Self::Uatp => "uatp",
            Self::Bcmc => "bcmc",
            Self::Bijcard => "bijcard",
            Self::Mir => "mir",
        }
    }

    /// Returns a human-readable name for the card type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::Maestro => "Maestro",
            Self::Hipercard => "Hipercard",
            Self::Elo => "Elo",
            Self::Dankort => "Dankort",
            Self::Cup => "China UnionPay",
            Self::Uatp => "UATP",
            Self::Bcmc => "Bancontact",
            Self::Bijcard => "de Bijenkorf Card",
            Self::Mir => "Mir",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string names no known card type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCardType(pub String);

impl fmt::Display for UnknownCardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown card type '{}'", self.0)
    }
}

impl std::error::Error for UnknownCardType {}

impl FromStr for CardType {
    type Err = UnknownCardType;

    /// Parses a payment method variant name (`"visa"`, `"mc"`, ...).
    ///
    /// A few common aliases are accepted as well (`"mastercard"`,
    /// `"unionpay"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let found = Self::ALL
            .iter()
            .copied()
            .find(|t| t.tx_variant() == lower)
            .or(match lower.as_str() {
                "mastercard" => Some(Self::Mastercard),
                "americanexpress" => Some(Self::AmericanExpress),
                "unionpay" | "chinaunionpay" => Some(Self::Cup),
                "bancontact" => Some(Self::Bcmc),
                _ => None,
            });
        found.ok_or_else(|| UnknownCardType(s.to_string()))
    }
}

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 8;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Outcome of a validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Validity {
    /// The input is acceptable.
    Valid,
    /// The input is not acceptable.
    Invalid,
    /// No verdict can be given with the information available.
    Unknown,
}

impl Validity {
    /// Returns true for `Validity::Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// Result of card number validation.
///
/// A valid result carries the digit-only number. The digits are zeroed when
/// the result is dropped, and `Debug` only ever shows the masked number.
#[derive(Clone, PartialEq, Eq)]
pub struct NumberValidationResult {
    validity: Validity,
    normalized_number: Option<String>,
}

impl NumberValidationResult {
    #[inline]
    pub(crate) fn valid(normalized_number: String) -> Self {
        Self {
            validity: Validity::Valid,
            normalized_number: Some(normalized_number),
        }
    }

    #[inline]
    pub(crate) const fn invalid() -> Self {
        Self {
            validity: Validity::Invalid,
            normalized_number: None,
        }
    }

    /// Returns the validity verdict.
    #[inline]
    pub const fn validity(&self) -> Validity {
        self.validity
    }

    /// Returns true if the number passed validation.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Returns the digit-only card number for valid results.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result; use
    /// [`NumberValidationResult::masked`] for display.
    #[inline]
    pub fn normalized_number(&self) -> Option<&str> {
        self.normalized_number.as_deref()
    }

    /// Returns the masked number (last four digits visible), if valid.
    pub fn masked(&self) -> Option<String> {
        self.normalized_number
            .as_deref()
            .map(crate::mask::mask_number)
    }
}

impl fmt::Debug for NumberValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberValidationResult")
            .field("validity", &self.validity)
            .field("normalized_number", &self.masked())
            .finish()
    }
}

impl Drop for NumberValidationResult {
    fn drop(&mut self) {
        if let Some(number) = self.normalized_number.as_mut() {
            number.zeroize();
        }
    }
}
