//! # checkout_validation
//!
//! Payment input validation for checkout forms.
//!
//! ## Features
//!
//! - Card brand detection from BIN prefixes (15 brands), narrowing as digits arrive
//! - Luhn checksum validation and check digit generation
//! - Expiry date parsing with two-digit-year century resolution
//! - Security code validation per brand
//! - Amount formatting and parsing in minor units
//! - IBAN structure and checksum validation
//! - As-you-type input formatting and display masking
//!
//! ## Quick Start
//!
//! ```rust
//! use checkout_validation::{validate_number, detect, CardType, Validity};
//!
//! // Validate a card number
//! let result = validate_number("4111 1111 1111 1111");
//! assert_eq!(result.validity(), Validity::Valid);
//! assert_eq!(result.normalized_number(), Some("4111111111111111"));
//!
//! // Safe for logging - never exposes full card number
//! println!("Card: {}", result.masked().unwrap_or_default()); // "****-****-****-1111"
//!
//! // Brand detection works on partial input
//! assert_eq!(detect("4111", None), Some(CardType::Visa));
//! assert_eq!(detect("37", None), Some(CardType::AmericanExpress));
//! ```
//!
//! ## Detailed Errors
//!
//! ```rust
//! use checkout_validation::{check_card_number, CardNumberError, CardType};
//!
//! let allowed = [CardType::Visa];
//! assert_eq!(
//!     check_card_number("5500 0000 0000 0004", Some(&allowed), true),
//!     Err(CardNumberError::UnsupportedBrand)
//! );
//! assert_eq!(
//!     check_card_number("4111111111111112", None, true),
//!     Err(CardNumberError::LuhnCheck)
//! );
//! ```
//!
//! ## Expiry Validation
//!
//! ```rust
//! use checkout_validation::expiry::{ExpiryDateValidator, FixedClock, YearMonth};
//! use checkout_validation::Validity;
//!
//! let validator = ExpiryDateValidator::new()
//!     .with_clock(FixedClock(YearMonth::new(2024, 6)));
//!
//! assert_eq!(validator.validate_expiry_date("12/30").validity(), Validity::Valid);
//! // A couple of months past expiry is still accepted
//! assert_eq!(validator.validate_expiry_date("04/24").validity(), Validity::Valid);
//! assert_eq!(validator.validate_expiry_date("01/20").validity(), Validity::Invalid);
//! ```
//!
//! ## Security Codes
//!
//! ```rust
//! use checkout_validation::security_code::validate_security_code;
//! use checkout_validation::{CardType, Validity};
//!
//! assert!(validate_security_code("1234", Some(CardType::AmericanExpress), false).is_valid());
//! assert!(!validate_security_code("1234", Some(CardType::Visa), false).is_valid());
//! ```
//!
//! ## Amounts
//!
//! ```rust
//! use checkout_validation::amount::{self, Amount};
//!
//! assert_eq!(amount::format(&Amount::new(1234, "EUR"), false, None), "12.34");
//! assert_eq!(amount::format(&Amount::new(100, "IDR"), false, None), "100");
//! assert_eq!(amount::parse_major_amount("EUR", "12.34"), Ok(1234));
//! ```
//!
//! ## IBAN
//!
//! ```rust
//! use checkout_validation::iban::{self, Iban};
//!
//! assert!(iban::validate("NL91ABNA0417164300"));
//!
//! let parsed = Iban::parse("nl91 abna 0417 1643 00").unwrap();
//! assert_eq!(parsed.to_string(), "NL91 ABNA 0417 1643 00");
//! assert!(parsed.is_sepa());
//! ```
//!
//! ## Card Formatting
//!
//! ```rust
//! use checkout_validation::format;
//!
//! assert_eq!(format::format_number("4111111111111111", None), "4111 1111 1111 1111");
//!
//! // Amex uses 4-6-5 grouping
//! assert_eq!(format::format_number("378282246310005", None), "3782 822463 10005");
//!
//! assert_eq!(format::format_expiry_date("525", '/'), "05/25");
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Length | CVC |
//! |-------|--------|--------|-----|
//! | Visa | 4 | 13, 16, 19 | 3 |
//! | Mastercard | 51-55, 2221-2720 | 16 | 3 |
//! | American Express | 34, 37 | 15 | 4 |
//! | JCB | 3528-3589 | 16-19 | 3 |
//! | Diners Club | 300-305, 309, 36, 38, 39 | 14-19 | 3 |
//! | Discover | 6011, 644-649, 65 | 16-19 | 3 |
//! | Maestro | 56-58, 6 | 12-19 | 3 |
//! | Hipercard | 606282, 3841 | 16, 19 | 3 |
//! | Elo | various six-digit BINs | 16 | 3 |
//! | Dankort | 5019, 4571 | 16 | 3 |
//! | China UnionPay | 62, 81 | 16-19 | 3 |
//! | UATP | 1 | 15 | 3 |
//! | Bancontact | 6703, 479658, 606005 | 16-19 | 3 |
//! | de Bijenkorf | 5100081 | 16 | 3 |
//! | Mir | 2200-2204 | 16-19 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` on public data types |
//! | `cli` | `checkout-validate` command-line tool |
//!
//! ## Security
//!
//! - Normalized card numbers and security codes are zeroized on drop
//! - `Debug` output of validation results shows masked values only
//! - No unsafe code (`#![deny(unsafe_code)]`)
//!
//! ## Logging
//!
//! The library emits [`tracing`] events at `debug` and `trace` level and
//! never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod amount;
pub mod card;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod format;
pub mod iban;
pub mod luhn;
pub mod mask;
pub mod security_code;
pub mod validate;

// Re-export main types at crate root
pub use card::{
    CardType, NumberValidationResult, UnknownCardType, Validity, MAX_CARD_DIGITS,
    MIN_CARD_DIGITS,
};
pub use detect::{detect, estimate, possible_types};
pub use error::CardNumberError;
pub use validate::{check_card_number, is_valid, passes_luhn, validate_number};
