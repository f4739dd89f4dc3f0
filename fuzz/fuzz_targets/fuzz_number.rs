//! Fuzz target for card number validation.
//!
//! Tests that number and security code validation never panic and agree
//! with each other on arbitrary input.

#![no_main]

use checkout_validation::security_code::validate_security_code;
use checkout_validation::{
    check_card_number, detect, estimate, is_valid, passes_luhn, possible_types, validate_number,
    CardType,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let result = validate_number(data);
    let _ = is_valid(data);
    let _ = passes_luhn(data);
    let _ = check_card_number(data, Some(&[CardType::Visa, CardType::Mastercard]), false);

    // Anything accepted in full is accepted by the quick check
    if let Ok(digits) = check_card_number(data, None, true) {
        assert!(result.is_valid(), "check_card_number accepted {:?}", data);
        assert_eq!(result.normalized_number(), Some(digits.as_str()));
    }

    // Detection on raw input
    let _ = estimate(data, None);
    let _ = possible_types(data, None);
    let _ = detect(data, None);

    for card_type in [None, Some(CardType::Visa), Some(CardType::AmericanExpress)] {
        let _ = validate_security_code(data, card_type, false);
        let _ = validate_security_code(data, card_type, true);
    }
});
