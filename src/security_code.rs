//! Security code (CVC/CVV/CID) validation.
//!
//! American Express prints a 4-digit code on the front of the card; every
//! other brand prints 3 digits on the back. When the brand is not known yet
//! a 3 or 4 digit code cannot be judged and is reported as
//! [`Validity::Unknown`].
//!
//! # Example
//!
//! ```
//! use checkout_validation::security_code::validate_security_code;
//! use checkout_validation::{CardType, Validity};
//!
//! let result = validate_security_code("1234", Some(CardType::AmericanExpress), false);
//! assert_eq!(result.validity(), Validity::Valid);
//!
//! let result = validate_security_code("1234", Some(CardType::Visa), false);
//! assert_eq!(result.validity(), Validity::Invalid);
//!
//! let result = validate_security_code("123", None, false);
//! assert_eq!(result.validity(), Validity::Unknown);
//! ```

use crate::card::{CardType, Validity};
use std::fmt;
use zeroize::Zeroize;

/// Outcome of security code validation.
///
/// Carries the whitespace-stripped code. `Debug` and `Display` never show
/// the digits, and they are zeroed on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct SecurityCodeValidationResult {
    validity: Validity,
    normalized: String,
}

impl SecurityCodeValidationResult {
    /// Returns the validity verdict.
    #[inline]
    pub const fn validity(&self) -> Validity {
        self.validity
    }

    /// Returns true for `Validity::Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Returns the code with whitespace removed.
    #[inline]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Debug for SecurityCodeValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityCodeValidationResult")
            .field("validity", &self.validity)
            .field("normalized", &"*".repeat(self.normalized.chars().count()))
            .finish()
    }
}

impl fmt::Display for SecurityCodeValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.validity)
    }
}

impl Drop for SecurityCodeValidationResult {
    fn drop(&mut self) {
        self.normalized.zeroize();
    }
}

/// Validates a security code, optionally against a known card type.
///
/// - Non-digit characters (after stripping whitespace) are INVALID.
/// - An empty code is VALID only when `optional` is set.
/// - With a card type, the code is VALID iff its length equals the type's
///   [`CardType::security_code_size`].
/// - Without a card type, 3 or 4 digits give UNKNOWN; anything else is
///   INVALID.
pub fn validate_security_code(
    code: &str,
    card_type: Option<CardType>,
    optional: bool,
) -> SecurityCodeValidationResult {
    let normalized: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    let length = normalized.len();

    let validity = if !normalized.bytes().all(|b| b.is_ascii_digit()) {
        Validity::Invalid
    } else if length == 0 {
        if optional {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    } else {
        match card_type {
            Some(t) if length == t.security_code_size() => Validity::Valid,
            Some(_) => Validity::Invalid,
            None if length == 3 || length == 4 => Validity::Unknown,
            None => Validity::Invalid,
        }
    };

    SecurityCodeValidationResult {
        validity,
        normalized,
    }
}
