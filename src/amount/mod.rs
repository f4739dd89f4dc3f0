//! Amount formatting and parsing in minor units.
//!
//! Amounts are always carried as an integer number of minor units (cents)
//! plus an ISO 4217 currency code. The number of minor digits comes from
//! [`get_exponent`]: a fixed override table first, then currency metadata,
//! then 0.
//!
//! # Example
//!
//! ```
//! use checkout_validation::amount::{format, parse_major_amount, Amount, Locale};
//!
//! let amount = Amount::new(123456, "EUR");
//! assert_eq!(format(&amount, true, None), "€1234.56");
//! assert_eq!(format(&amount, false, Some(&Locale::DE_DE)), "1.234,56");
//!
//! assert_eq!(parse_major_amount("EUR", "1.234,56"), Ok(123456));
//! assert_eq!(format(&Amount::new(100, "IDR"), true, None), "IDR 100");
//! ```

mod currency;
mod format;
mod locale;
mod parse;

pub use currency::{exponent_override, CurrencyMetadata, Iso4217, EXPONENT_OVERRIDES};
pub use format::format_value;
pub use locale::{Locale, UnknownLocale};
pub use parse::ParseError;

use std::fmt;
use tracing::debug;

/// A monetary amount in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amount {
    /// Value in minor units (e.g. cents).
    pub value: i64,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Amount {
    /// Creates a new amount.
    pub fn new(value: i64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self, true, None))
    }
}

/// Formats and parses amounts using a [`CurrencyMetadata`] provider.
///
/// The free functions in this module use [`Iso4217`].
#[derive(Debug, Clone, Default)]
pub struct AmountFormatter<M = Iso4217> {
    metadata: M,
}

impl<M: CurrencyMetadata> AmountFormatter<M> {
    /// Creates a formatter backed by `metadata`.
    pub const fn new(metadata: M) -> Self {
        Self { metadata }
    }

    /// Returns the metadata provider.
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Returns the number of minor digits for a currency.
    ///
    /// The override table wins; then the metadata's fraction digits (negative
    /// values clamp to 0); unknown codes get 0.
    pub fn get_exponent(&self, currency: &str) -> u32 {
        if let Some(exponent) = exponent_override(currency) {
            return exponent;
        }
        match self.metadata.default_fraction_digits(currency) {
            Some(digits) => digits.max(0) as u32,
            None => {
                debug!(currency, "unknown currency code, using exponent 0");
                0
            }
        }
    }

    /// Returns true if the code is in the override table or known to the
    /// metadata provider.
    pub fn is_valid_currency_code(&self, currency: &str) -> bool {
        !currency.is_empty()
            && (exponent_override(currency).is_some()
                || self.metadata.default_fraction_digits(currency).is_some())
    }

    /// Returns the symbol for a currency, falling back to the code itself.
    pub fn currency_symbol(&self, currency: &str, locale: Option<&Locale>) -> String {
        self.metadata
            .symbol(currency, locale)
            .unwrap_or_else(|| currency.to_string())
    }

    /// Renders an amount, optionally prefixed by its currency symbol.
    ///
    /// A symbol longer than one character (or a bare currency code) is
    /// followed by a space: `$100.00`, `CA$ 100.00`, `IDR 100`.
    pub fn format(&self, amount: &Amount, include_currency_symbol: bool, locale: Option<&Locale>) -> String {
        let value = format_value(amount.value, self.get_exponent(&amount.currency), locale);
        if !include_currency_symbol {
            return value;
        }

        let symbol = self.currency_symbol(&amount.currency, locale);
        if symbol.chars().count() > 1 {
            format!("{symbol} {value}")
        } else {
            format!("{symbol}{value}")
        }
    }

    /// Converts a typed major-unit amount into minor units of `currency`.
    pub fn parse_major_amount(&self, currency: &str, amount: &str) -> Result<i64, ParseError> {
        let exponent = self.get_exponent(currency);
        parse::parse_minor_units(amount, exponent).map_err(|error| {
            debug!(currency, %error, "amount parse failed");
            error
        })
    }
}

static DEFAULT_FORMATTER: AmountFormatter<Iso4217> = AmountFormatter::new(Iso4217);

/// Returns the number of minor digits for a currency (see
/// [`AmountFormatter::get_exponent`]).
pub fn get_exponent(currency: &str) -> u32 {
    DEFAULT_FORMATTER.get_exponent(currency)
}

/// Returns true for codes in the override table or the ISO 4217 table.
pub fn is_valid_currency_code(currency: &str) -> bool {
    DEFAULT_FORMATTER.is_valid_currency_code(currency)
}

/// Renders an amount (see [`AmountFormatter::format`]).
pub fn format(amount: &Amount, include_currency_symbol: bool, locale: Option<&Locale>) -> String {
    DEFAULT_FORMATTER.format(amount, include_currency_symbol, locale)
}

/// Converts a typed major-unit amount into minor units.
///
/// # Example
///
/// ```
/// use checkout_validation::amount::{parse_major_amount, ParseError};
///
/// assert_eq!(parse_major_amount("EUR", "12.34"), Ok(1234));
/// assert_eq!(parse_major_amount("EUR", "1,234.5"), Ok(123450));
/// assert_eq!(parse_major_amount("JPY", "1,000,000"), Ok(1000000));
/// assert!(matches!(parse_major_amount("EUR", "12.345"), Err(ParseError::TooPrecise { .. })));
/// ```
pub fn parse_major_amount(currency: &str, amount: &str) -> Result<i64, ParseError> {
    DEFAULT_FORMATTER.parse_major_amount(currency, amount)
}
