//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use checkout_validation::{format, mask, CardType};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_number(data, None);
    let _ = format::format_number_with_separator(data, None, "-");
    let _ = format::format_number_with_separator(data, None, "");
    let _ = format::strip_formatting(data);
    let _ = format::format_security_code(data, None);
    let _ = mask::mask_number(data);
    let _ = mask::last_four(data);

    // Test with all card types
    for card_type in CardType::ALL {
        let _ = format::format_number(data, Some(card_type));
        let code = format::format_security_code(data, Some(card_type));
        assert!(code.len() <= card_type.security_code_size());
    }

    // Verify roundtrip property
    let formatted = format::format_number(data, None);
    let stripped = format::strip_formatting(&formatted);
    let original_digits = format::strip_formatting(data);
    assert_eq!(stripped, original_digits, "Format roundtrip should preserve digits");
});
