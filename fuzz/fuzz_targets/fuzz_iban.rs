//! Fuzz target for IBAN validation.
//!
//! Tests that IBAN functions never panic and that the full parse implies the
//! structural check.

#![no_main]

use checkout_validation::iban::{self, Iban};
use checkout_validation::mask;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let structure_valid = iban::validate(data);
    let _ = iban::is_partial(data);
    let _ = iban::starts_with_sepa_country_code(data);
    let _ = iban::format(data);
    let _ = mask::mask_iban(data);
    let _ = Iban::parse_adding_missing_zeros(data);

    if let Ok(parsed) = Iban::parse(data) {
        assert!(structure_valid, "Iban::parse accepted {:?} but validate did not", data);
        assert_eq!(Iban::parse(&parsed.to_string()), Ok(parsed.clone()));
        assert!(parsed.to_string().len() <= iban::formatted_max_length());
    }
});
