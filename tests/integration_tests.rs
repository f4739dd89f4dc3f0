//! Integration tests for checkout_validation.
//!
//! These tests cover real-world inputs, edge cases and security considerations
//! across the public API.

use checkout_validation::amount::{self, Amount, AmountFormatter, CurrencyMetadata, Locale, ParseError};
use checkout_validation::expiry::{ExpiryDate, ExpiryDateValidator, FixedClock, YearMonth};
use checkout_validation::iban::{self, Iban, IbanError};
use checkout_validation::security_code::validate_security_code;
use checkout_validation::{
    check_card_number, detect, estimate, format, is_valid, luhn, mask, passes_luhn, possible_types,
    validate_number, CardNumberError, CardType, Validity,
};

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// These are official test card numbers from payment processors.
// They pass Luhn validation but are not real cards.

mod test_cards {
    // Visa test cards
    pub const VISA_1: &str = "4111111111111111";
    pub const VISA_2: &str = "4012888888881881";
    pub const VISA_3: &str = "4222222222222"; // 13 digits
    pub const VISA_4: &str = "4242424242424242";

    // Mastercard test cards
    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";
    pub const MC_3: &str = "5200828282828210";
    // Mastercard 2-series
    pub const MC_2SERIES_1: &str = "2223000048400011";
    pub const MC_2SERIES_2: &str = "2223520043560014";

    // American Express test cards
    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";
    pub const AMEX_3: &str = "340000000000009";

    // Discover test cards
    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6011000990139424";
    pub const DISCOVER_3: &str = "6445644564456445";

    // Diners Club test cards
    pub const DINERS_1: &str = "30569309025904";
    pub const DINERS_2: &str = "38520000023237";
    pub const DINERS_3: &str = "36700102000000";

    // JCB test cards
    pub const JCB_1: &str = "3530111333300000";
    pub const JCB_2: &str = "3566002020360505";

    // Regional networks
    pub const MAESTRO: &str = "6759649826438453";
    pub const HIPERCARD: &str = "6062826786276634";
    pub const ELO: &str = "5066991111111118";
    pub const DANKORT: &str = "5019555544445555";
    pub const CUP: &str = "6243030000000001";
    pub const UATP: &str = "135410014004955";
    pub const BCMC: &str = "6703444444444449";
    pub const BIJCARD: &str = "5100081112223332";
    pub const MIR: &str = "2200000000000004";
}

fn clock(year: i32, month: u32) -> FixedClock {
    FixedClock(YearMonth::new(year, month))
}

// =============================================================================
// CARD NUMBER VALIDATION
// =============================================================================

#[test]
fn test_all_test_cards_are_valid_and_detected() {
    use test_cards::*;

    let cases = [
        (VISA_1, CardType::Visa),
        (VISA_2, CardType::Visa),
        (VISA_3, CardType::Visa),
        (VISA_4, CardType::Visa),
        (MC_1, CardType::Mastercard),
        (MC_2, CardType::Mastercard),
        (MC_3, CardType::Mastercard),
        (MC_2SERIES_1, CardType::Mastercard),
        (MC_2SERIES_2, CardType::Mastercard),
        (AMEX_1, CardType::AmericanExpress),
        (AMEX_2, CardType::AmericanExpress),
        (AMEX_3, CardType::AmericanExpress),
        (DISCOVER_1, CardType::Discover),
        (DISCOVER_2, CardType::Discover),
        (DISCOVER_3, CardType::Discover),
        (DINERS_1, CardType::DinersClub),
        (DINERS_2, CardType::DinersClub),
        (DINERS_3, CardType::DinersClub),
        (JCB_1, CardType::Jcb),
        (JCB_2, CardType::Jcb),
        (MAESTRO, CardType::Maestro),
        (HIPERCARD, CardType::Hipercard),
        (ELO, CardType::Elo),
        (DANKORT, CardType::Dankort),
        (CUP, CardType::Cup),
        (UATP, CardType::Uatp),
        (BCMC, CardType::Bcmc),
        (BIJCARD, CardType::Bijcard),
        (MIR, CardType::Mir),
    ];

    for (number, expected) in cases {
        let result = validate_number(number);
        assert_eq!(result.validity(), Validity::Valid, "{} should be valid", number);
        assert_eq!(result.normalized_number(), Some(number));
        assert_eq!(detect(number, None), Some(expected), "wrong type for {}", number);
        assert!(
            check_card_number(number, Some(&[expected]), true).is_ok(),
            "{} should be accepted for {}",
            number,
            expected
        );
    }
}

#[test]
fn test_separator_variations() {
    let base = test_cards::VISA_1;
    let variations = [
        "4111111111111111",
        "4111 1111 1111 1111",
        "4111  1111  1111  1111",
        "4111-1111-1111-1111",
        "4111--1111--1111--1111",
        "4111.1111.1111.1111",
        "4111-1111 1111.1111",
        "  4111-1111-1111-1111  ",
        "4111\t1111\t1111\t1111",
    ];

    for input in variations {
        let result = validate_number(input);
        assert_eq!(result.validity(), Validity::Valid, "{:?}", input);
        assert_eq!(result.normalized_number(), Some(base));
    }
}

#[test]
fn test_invalid_characters() {
    let test_cases = [
        ("4111111111111111a", 'a', 16),
        ("a4111111111111111", 'a', 0),
        ("4111111111x111111", 'x', 10),
        ("4111-1111-1111-111!", '!', 18),
        ("4111111111111111\0", '\0', 16),
        ("4111111111111111é", 'é', 16),
        ("4111111111111111中", '中', 16),
    ];

    for (input, expected_char, expected_pos) in test_cases {
        assert!(!validate_number(input).is_valid(), "{:?} should be invalid", input);
        match check_card_number(input, None, true) {
            Err(CardNumberError::IllegalCharacter {
                character,
                position,
            }) => {
                assert_eq!(character, expected_char, "Wrong char for input: {}", input);
                assert_eq!(position, expected_pos, "Wrong position for input: {}", input);
            }
            other => panic!("Expected IllegalCharacter for '{}', got {:?}", input, other),
        }
    }
}

// =============================================================================
// LENGTH BOUNDARY TESTS
// =============================================================================

#[test]
fn test_minimum_length_boundary() {
    // 7 digits - too short even with a valid checksum
    let seven = "4000006";
    assert!(passes_luhn(seven));
    assert!(!validate_number(seven).is_valid());
    assert_eq!(
        check_card_number(seven, None, true),
        Err(CardNumberError::TooShort {
            length: 7,
            minimum: 8
        })
    );

    // 8 digits - the shortest accepted number
    let eight = "40000002";
    assert!(passes_luhn(eight));
    assert!(validate_number(eight).is_valid());
}

#[test]
fn test_maximum_length_boundary() {
    // 19 digits - longest accepted
    let nineteen = "4111111111111111110";
    assert!(passes_luhn(nineteen));
    assert!(validate_number(nineteen).is_valid());
    assert_eq!(detect(nineteen, None), Some(CardType::Visa));

    // 20 digits - too long
    let twenty = "41111111111111111111";
    assert!(!validate_number(twenty).is_valid());
    assert_eq!(
        check_card_number(twenty, None, true),
        Err(CardNumberError::TooLong {
            length: 20,
            maximum: 19
        })
    );
}

#[test]
fn test_check_order() {
    // Illegal characters are reported before length problems
    assert!(matches!(
        check_card_number("12x", None, true),
        Err(CardNumberError::IllegalCharacter { position: 2, .. })
    ));
    // Length before brand
    assert!(matches!(
        check_card_number("0000", None, true),
        Err(CardNumberError::TooShort { .. })
    ));
    // Brand before Luhn
    assert_eq!(
        check_card_number("0000000000000001", None, true),
        Err(CardNumberError::UnsupportedBrand)
    );
    // Luhn last, and only when requested
    assert_eq!(
        check_card_number("4111111111111112", None, true),
        Err(CardNumberError::LuhnCheck)
    );
    assert_eq!(
        check_card_number("4111111111111112", None, false).as_deref(),
        Ok("4111111111111112")
    );
}

#[test]
fn test_allowed_brands() {
    let allowed = [CardType::Visa, CardType::Mastercard];
    assert!(check_card_number(test_cards::VISA_1, Some(&allowed), true).is_ok());
    assert!(check_card_number(test_cards::MC_1, Some(&allowed), true).is_ok());
    assert_eq!(
        check_card_number(test_cards::AMEX_1, Some(&allowed), true),
        Err(CardNumberError::UnsupportedBrand)
    );

    // A number that is too long for every allowed brand is unsupported
    assert_eq!(
        check_card_number("3782822463100051", Some(&[CardType::AmericanExpress]), true),
        Err(CardNumberError::UnsupportedBrand)
    );
}

#[test]
fn test_luhn_edge_cases() {
    assert!(passes_luhn("0000000000000000"));
    assert!(!is_valid("0000000"));
    assert!(!is_valid(""));
    assert!(!is_valid("   "));
    assert!(!is_valid("----"));

    // Every single-digit change breaks the checksum
    let digits: Vec<u8> = test_cards::VISA_1.bytes().map(|b| b - b'0').collect();
    for position in 0..digits.len() {
        for delta in 1..10u8 {
            let mut changed = digits.clone();
            changed[position] = (changed[position] + delta) % 10;
            assert!(!luhn::validate(&changed), "position {} delta {}", position, delta);
        }
    }
}

#[test]
fn test_generated_check_digits() {
    for prefix in ["411111111111111", "37828224631000", "601111111111111"] {
        let digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
        let check = luhn::generate_check_digit(&digits);
        let full = format!("{}{}", prefix, check);
        assert!(is_valid(&full), "{}", full);
    }
}

// =============================================================================
// CARD TYPE DETECTION
// =============================================================================

#[test]
fn test_detection_narrows_while_typing() {
    let number = test_cards::BIJCARD;
    let mut previous = possible_types("", None);
    assert_eq!(previous.len(), CardType::ALL.len());

    for len in 1..=number.len() {
        let current = possible_types(&number[..len], None);
        for card_type in &current {
            assert!(previous.contains(card_type), "{} reappeared at {}", card_type, len);
        }
        previous = current;
    }
    // The Mastercard range still covers the full number
    assert_eq!(previous, vec![CardType::Mastercard, CardType::Bijcard]);
}

#[test]
fn test_estimate_prefers_longest_prefix() {
    assert_eq!(estimate("5", None), Vec::<CardType>::new());
    assert_eq!(estimate("51", None), vec![CardType::Mastercard]);
    assert_eq!(estimate("5100081", None), vec![CardType::Bijcard]);

    // Mastercard not allowed: the Bijenkorf prefix still resolves
    let allowed = [CardType::Visa, CardType::Bijcard];
    assert_eq!(estimate("51", Some(&allowed)), Vec::<CardType>::new());
    assert_eq!(estimate("5100081", Some(&allowed)), vec![CardType::Bijcard]);
}

#[test]
fn test_detection_rejects_non_digits() {
    assert_eq!(estimate("4111 1111", None), Vec::<CardType>::new());
    assert_eq!(possible_types("41a", None), Vec::<CardType>::new());
    assert_eq!(detect("", None), None);
}

// =============================================================================
// SECURITY CODES
// =============================================================================

#[test]
fn test_security_code_by_brand() {
    assert!(validate_security_code("123", Some(CardType::Visa), false).is_valid());
    assert!(validate_security_code(" 1 2 3 ", Some(CardType::Visa), false).is_valid());
    assert!(validate_security_code("1234", Some(CardType::AmericanExpress), false).is_valid());
    assert!(!validate_security_code("123", Some(CardType::AmericanExpress), false).is_valid());
    assert!(!validate_security_code("12a", Some(CardType::Visa), false).is_valid());

    for brand in CardType::ALL {
        let code = "9".repeat(brand.security_code_size());
        assert!(validate_security_code(&code, Some(brand), false).is_valid(), "{}", brand);
    }
}

#[test]
fn test_security_code_unknown_brand() {
    assert_eq!(validate_security_code("123", None, false).validity(), Validity::Unknown);
    assert_eq!(validate_security_code("1234", None, false).validity(), Validity::Unknown);
    assert_eq!(validate_security_code("12", None, false).validity(), Validity::Invalid);
    assert_eq!(validate_security_code("12345", None, false).validity(), Validity::Invalid);
}

#[test]
fn test_security_code_optional() {
    assert!(validate_security_code("", Some(CardType::Visa), true).is_valid());
    assert!(validate_security_code("  ", None, true).is_valid());
    assert!(!validate_security_code("", Some(CardType::Visa), false).is_valid());
}

#[test]
fn test_security_code_is_not_leaked() {
    let result = validate_security_code("737", Some(CardType::Visa), false);
    assert!(!format!("{:?}", result).contains("737"));
    assert!(!result.to_string().contains("737"));
    assert_eq!(result.normalized(), "737");
}

// =============================================================================
// EXPIRY DATES
// =============================================================================

#[test]
fn test_expiry_century_correction() {
    let validator = ExpiryDateValidator::new().with_clock(clock(2024, 1));

    let result = validator.validate_expiry_date("01/45");
    assert_eq!(result.validity(), Validity::Valid);
    assert_eq!(result.date(), ExpiryDate::new(1, 2045).unwrap());

    // Too far ahead for this century: previous century, and expired
    let result = validator.validate_expiry_date("01/99");
    assert_eq!(result.date().year(), 1999);
    assert_eq!(result.validity(), Validity::Invalid);
}

#[test]
fn test_expiry_boundaries() {
    let validator = ExpiryDateValidator::new().with_clock(clock(2024, 6));

    // Exactly three months in the past is rejected, two are accepted
    assert_eq!(validator.validate_expiry_date("03/24").validity(), Validity::Invalid);
    assert_eq!(validator.validate_expiry_date("04/24").validity(), Validity::Valid);
    assert_eq!(validator.validate_expiry_date("06/24").validity(), Validity::Valid);

    // Thirty years ahead is the limit
    assert_eq!(validator.validate_expiry_date("06/2054").validity(), Validity::Valid);
    assert_eq!(validator.validate_expiry_date("07/2054").validity(), Validity::Invalid);
}

#[test]
fn test_expiry_custom_window() {
    let validator = ExpiryDateValidator::new()
        .with_clock(clock(2024, 6))
        .with_max_expired_months(0)
        .with_max_years_in_future(5);

    // With no grace period even the current month counts as expired
    assert_eq!(validator.validate_expiry_date("06/24").validity(), Validity::Invalid);
    assert_eq!(validator.validate_expiry_date("07/24").validity(), Validity::Valid);
    assert_eq!(validator.validate_expiry_date("06/29").validity(), Validity::Valid);
    assert_eq!(validator.validate_expiry_date("07/29").validity(), Validity::Invalid);
}

#[test]
fn test_expiry_custom_separator() {
    let validator = ExpiryDateValidator::new()
        .with_clock(clock(2024, 6))
        .with_separator('-');

    assert_eq!(validator.parse("12-30"), ExpiryDate::new(12, 2030).unwrap());
    assert!(validator.parse("12/30").is_empty());
}

#[test]
fn test_expiry_malformed_input() {
    let validator = ExpiryDateValidator::new().with_clock(clock(2024, 6));

    for input in ["", "/", "13/30", "00/30", "1230", "12/3", "12/305", "ab/cd", "12/30/1"] {
        let result = validator.validate_expiry_date(input);
        assert_eq!(result.validity(), Validity::Invalid, "{:?}", input);
        assert!(result.date().is_empty(), "{:?}", input);
    }
}

#[test]
fn test_expiry_formatting_and_parsing_agree() {
    let validator = ExpiryDateValidator::new().with_clock(clock(2024, 6));

    for typed in ["1230", "525", "12/2030", "3/27"] {
        let formatted = format::format_expiry_date(typed, validator.separator());
        assert!(
            !validator.parse(&formatted).is_empty(),
            "{:?} formatted as {:?}",
            typed,
            formatted
        );
    }
}

// =============================================================================
// AMOUNTS
// =============================================================================

#[test]
fn test_amount_documented_cases() {
    assert_eq!(amount::format(&Amount::new(100, "IDR"), false, None), "100");
    assert_eq!(amount::parse_major_amount("EUR", "12.34"), Ok(1234));
}

#[test]
fn test_amount_round_trip_all_exponents() {
    for currency in ["EUR", "JPY", "KWD", "MRO", "ISK", "CLP", "IDR", "CVE", "BYN", "XAU", "ZZZ"] {
        for value in [0, 1, -1, 99, 100, 12345, -987654, 1_000_000_007] {
            let text = amount::format(&Amount::new(value, currency), false, None);
            assert_eq!(
                amount::parse_major_amount(currency, &text),
                Ok(value),
                "{} {} formatted as {}",
                currency,
                value,
                text
            );
        }
    }
}

#[test]
fn test_amount_round_trip_with_locales() {
    for tag in ["en-US", "de-DE", "fr_FR", "pt-BR"] {
        let locale: Locale = tag.parse().unwrap();
        let text = amount::format(&Amount::new(123456789, "EUR"), false, Some(&locale));
        assert_eq!(amount::parse_major_amount("EUR", &text), Ok(123456789), "{}", text);
    }
}

#[test]
fn test_amount_parse_errors() {
    assert_eq!(amount::parse_major_amount("EUR", "   "), Err(ParseError::Empty));
    assert_eq!(amount::parse_major_amount("EUR", "-"), Err(ParseError::NoDigits));
    assert!(matches!(
        amount::parse_major_amount("EUR", "12.345"),
        Err(ParseError::TooPrecise {
            digits: 3,
            exponent: 2
        })
    ));
    assert!(matches!(
        amount::parse_major_amount("JPY", "1.5"),
        Err(ParseError::TooPrecise { .. })
    ));
    assert!(matches!(
        amount::parse_major_amount("EUR", "12a"),
        Err(ParseError::UnexpectedCharacter {
            position: 2,
            character: 'a'
        })
    ));
    assert_eq!(
        amount::parse_major_amount("EUR", "99999999999999999999"),
        Err(ParseError::Overflow)
    );
}

#[test]
fn test_amount_custom_metadata() {
    struct ThreeDigits;

    impl CurrencyMetadata for ThreeDigits {
        fn default_fraction_digits(&self, code: &str) -> Option<i32> {
            (code.len() == 3).then_some(3)
        }

        fn symbol(&self, _code: &str, _locale: Option<&Locale>) -> Option<String> {
            None
        }
    }

    let formatter = AmountFormatter::new(ThreeDigits);
    // Overrides still win over the metadata
    assert_eq!(formatter.get_exponent("ISK"), 2);
    assert_eq!(formatter.get_exponent("EUR"), 3);
    assert_eq!(formatter.get_exponent("TOOLONG"), 0);
    assert_eq!(formatter.format(&Amount::new(1500, "EUR"), true, None), "EUR 1.500");
}

// =============================================================================
// IBAN
// =============================================================================

const VALID_IBANS: &[&str] = &[
    "NL91ABNA0417164300",
    "DE89370400440532013000",
    "GB82WEST12345698765432",
    "FR1420041010050500013M02606",
    "BE68539007547034",
    "CH9300762011623852957",
    "NO9386011117947",
    "MT84MALT011000012345MTLCAST001S",
    "AT611904300234573201",
    "ES9121000418450200051332",
    "IT60X0542811101000000123456",
    "PL61109010140000071219812874",
];

#[test]
fn test_valid_ibans() {
    for value in VALID_IBANS {
        assert!(iban::validate(value), "{}", value);
        let parsed = Iban::parse(value).unwrap_or_else(|e| panic!("{}: {}", value, e));
        assert_eq!(parsed.value(), *value);

        // Grouped, lower-case input parses to the same IBAN
        let grouped = iban::format(&value.to_lowercase());
        assert_eq!(Iban::parse(&grouped), Ok(parsed));
    }
}

#[test]
fn test_iban_structure_only_validation() {
    // Right country and length, wrong checksum
    assert!(iban::validate("GB82WEST12345698765433"));
    assert_eq!(
        Iban::parse("GB82WEST12345698765433"),
        Err(IbanError::ChecksumMismatch)
    );

    assert!(!iban::validate("NL91ABNA041716430"));
    assert!(!iban::validate("XX91ABNA0417164300"));
    assert!(!iban::validate(""));
    assert!(!iban::validate("N"));
}

#[test]
fn test_iban_aliases() {
    // Jersey uses the GB format
    assert!(iban::validate("JE82WEST12345698765432"));
    assert!(iban::lookup("JE").is_some_and(|fmt| fmt.country == "GB"));
}

#[test]
fn test_iban_errors() {
    assert_eq!(Iban::parse(""), Err(IbanError::Empty));
    assert_eq!(
        Iban::parse("US12345678"),
        Err(IbanError::UnknownCountry("US".to_string()))
    );
    assert_eq!(
        Iban::parse("NL91ABNA041716430"),
        Err(IbanError::InvalidLength {
            country: "NL".to_string(),
            length: 17,
            expected: 18
        })
    );
    assert_eq!(Iban::parse("NLXXABNA0417164300"), Err(IbanError::InvalidCheckDigits));
    assert_eq!(
        Iban::parse("NL911BNA0417164300"),
        Err(IbanError::InvalidBban {
            country: "NL".to_string()
        })
    );
    assert!(matches!(
        Iban::parse("NL91-ABNA-0417-1643-00"),
        Err(IbanError::InvalidCharacter { character: '-', .. })
    ));
}

#[test]
fn test_iban_while_typing() {
    let full = "NL91ABNA0417164300";
    for len in 0..full.len() {
        assert!(iban::is_partial(&full[..len]), "{}", &full[..len]);
    }
    assert!(!iban::is_partial(full));
    assert!(!iban::is_partial("NL91ABN1"));

    assert!(iban::starts_with_sepa_country_code("NL"));
    assert!(!iban::starts_with_sepa_country_code("KW"));
    assert_eq!(iban::formatted_max_length(), 38);
}

// =============================================================================
// FORMATTING AND MASKING
// =============================================================================

#[test]
fn test_formatted_numbers_validate() {
    use test_cards::*;

    for number in [VISA_1, VISA_3, MC_1, AMEX_1, DINERS_1, DISCOVER_1, MIR] {
        let formatted = format::format_number(number, None);
        let result = validate_number(&formatted);
        assert!(result.is_valid(), "{} -> {}", number, formatted);
        assert_eq!(result.normalized_number(), Some(number));
    }
}

#[test]
fn test_masking_never_leaks_numbers() {
    use test_cards::*;

    for number in [VISA_1, MC_1, AMEX_1, DISCOVER_1, JCB_1, DINERS_1] {
        let masked = mask::mask_number(number);
        assert!(!masked.contains(number));
        assert!(!masked.contains(&number[..6]), "BIN leaked in {}", masked);
        assert!(masked.ends_with(&number[number.len() - 4..]));

        let result = validate_number(number);
        assert_eq!(result.masked().as_deref(), Some(masked.as_str()));
        assert!(!format!("{:?}", result).contains(number));
    }

    let masked = mask::mask_iban("GB82 WEST 1234 5698 7654 32");
    assert_eq!(masked, "GB82 \u{2026} 5432");
}
