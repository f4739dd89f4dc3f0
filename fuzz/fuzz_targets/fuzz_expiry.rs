//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use checkout_validation::expiry::{self, ExpiryDateValidator, FixedClock, YearMonth};
use checkout_validation::format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let validator = ExpiryDateValidator::new().with_clock(FixedClock(YearMonth::new(2024, 1)));

    // These should never panic
    let _ = expiry::parse_expiry_date(data);
    let _ = expiry::validate_expiry_date(data);
    let result = validator.validate_expiry_date(data);

    // A parse failure is always invalid
    let date = result.date();
    if date.is_empty() {
        assert!(!result.is_valid(), "empty date accepted for {:?}", data);
    } else {
        assert!((1..=12).contains(&date.month()));
        let _ = date.to_string();
        let _ = date.format_long();
        assert_eq!(validator.parse(&date.format_long()), date);
    }

    let _ = format::format_expiry_date(data, '/');
});
