//! Fuzz target for amount parsing.
//!
//! Tests that parsing never panics and that anything parsed formats back
//! to the same value.

#![no_main]

use checkout_validation::amount::{self, Amount};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for currency in ["EUR", "JPY", "KWD", "MRO", "ZZZ"] {
        let Ok(value) = amount::parse_major_amount(currency, data) else {
            continue;
        };

        let formatted = amount::format(&Amount::new(value, currency), false, None);
        assert_eq!(
            amount::parse_major_amount(currency, &formatted),
            Ok(value),
            "{:?} parsed to {} but formatted as {:?}",
            data,
            value,
            formatted
        );
        let _ = amount::format(&Amount::new(value, currency), true, None);
    }
});
