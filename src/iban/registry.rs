//! Per-country IBAN formats.
//!
//! BBAN structures use the IBAN registry notation: `4!a10!n` is four
//! upper-case letters followed by ten digits. Classes are `n` (digits),
//! `a` (upper-case letters) and `c` (upper-case letters or digits).

/// IBAN structure for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanFormat {
    /// ISO 3166 country code.
    pub country: &'static str,
    /// Total IBAN length, country code and check digits included.
    pub length: usize,
    /// BBAN structure in registry notation.
    pub bban: &'static str,
    /// Whether the country is in the SEPA scheme.
    pub sepa: bool,
}

const fn f(country: &'static str, length: usize, bban: &'static str, sepa: bool) -> IbanFormat {
    IbanFormat {
        country,
        length,
        bban,
        sepa,
    }
}

/// Supported IBAN formats.
#[rustfmt::skip]
pub static IBAN_FORMATS: &[IbanFormat] = &[
    f("AD", 24, "4!n4!n12!c", false),
    f("AE", 23, "3!n16!n", false),
    f("AL", 28, "8!n16!c", false),
    f("AT", 20, "5!n11!n", true),
    f("BA", 20, "3!n3!n8!n2!n", false),
    f("BE", 16, "3!n7!n2!n", true),
    f("BG", 22, "4!a4!n2!n8!c", true),
    f("BH", 22, "4!a14!c", false),
    f("CH", 21, "5!n12!c", true),
    f("CY", 28, "3!n5!n16!c", true),
    f("CZ", 24, "4!n6!n10!n", true),
    f("DE", 22, "8!n10!n", true),
    f("DK", 18, "4!n9!n1!n", true),
    f("DO", 28, "4!c20!n", false),
    f("EE", 20, "2!n2!n11!n1!n", true),
    f("ES", 24, "4!n4!n1!n1!n10!n", true),
    f("FI", 18, "3!n11!n", true),
    f("FR", 27, "5!n5!n11!c2!n", true),
    f("GB", 22, "4!a6!n8!n", true),
    f("GE", 22, "2!a16!n", false),
    f("GI", 23, "4!a15!c", false),
    f("GR", 27, "3!n4!n16!c", true),
    f("HR", 21, "7!n10!n", true),
    f("HU", 28, "3!n4!n1!n15!n1!n", true),
    f("IE", 22, "4!a6!n8!n", true),
    f("IL", 23, "3!n3!n13!n", false),
    f("IS", 26, "4!n2!n6!n10!n", true),
    f("IT", 27, "1!a5!n5!n12!c", true),
    f("KW", 30, "4!a22!c", false),
    f("KZ", 20, "3!n13!c", false),
    f("LB", 28, "4!n20!c", false),
    f("LI", 21, "5!n12!c", true),
    f("LT", 20, "5!n11!n", true),
    f("LU", 20, "3!n13!c", true),
    f("LV", 21, "4!a13!c", true),
    f("MC", 27, "5!n5!n11!c2!n", true),
    f("ME", 22, "3!n13!n2!n", false),
    f("MK", 19, "3!n10!c2!n", false),
    f("MR", 27, "5!n5!n11!n2!n", false),
    f("MT", 31, "4!a5!n18!c", true),
    f("MU", 30, "4!a2!n2!n12!n3!n3!a", false),
    f("NL", 18, "4!a10!n", true),
    f("NO", 15, "4!n6!n1!n", true),
    f("PL", 28, "8!n16!n", true),
    f("PT", 25, "4!n4!n11!n2!n", true),
    f("RO", 24, "4!a16!c", true),
    f("RS", 22, "3!n13!n2!n", false),
    f("SA", 24, "2!n18!c", false),
    f("SE", 24, "3!n16!n1!n", true),
    f("SI", 19, "5!n8!n2!n", true),
    f("SK", 24, "4!n6!n10!n", true),
    f("SM", 27, "1!a5!n5!n12!c", true),
    f("TN", 24, "2!n3!n13!n2!n", false),
    f("TR", 26, "5!n1!n16!c", false),
];

/// Territories that use another country's IBAN format.
#[rustfmt::skip]
pub const ALIASES: &[(&str, &str)] = &[
    // French overseas departments and territories
    ("GF", "FR"), ("GP", "FR"), ("MQ", "FR"), ("RE", "FR"), ("PF", "FR"), ("TF", "FR"),
    ("YT", "FR"), ("NC", "FR"), ("BL", "FR"), ("MF", "FR"), ("PM", "FR"), ("WF", "FR"),
    // Crown dependencies
    ("JE", "GB"), ("GG", "GB"), ("IM", "GB"),
    // Faroe Islands, Greenland
    ("FO", "DK"), ("GL", "DK"),
];

/// Finds the format for a country code, following aliases.
///
/// The lookup is case-insensitive.
pub fn lookup(country: &str) -> Option<&'static IbanFormat> {
    if country.len() != 2 {
        return None;
    }
    let upper = country.to_ascii_uppercase();
    let target = ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map_or(upper.as_str(), |&(_, target)| target);

    IBAN_FORMATS.iter().find(|fmt| fmt.country == target)
}

/// Every country code with a format, aliases included.
pub fn country_codes() -> impl Iterator<Item = &'static str> {
    IBAN_FORMATS
        .iter()
        .map(|fmt| fmt.country)
        .chain(ALIASES.iter().map(|&(alias, _)| alias))
}

/// Longest IBAN length in the table.
pub fn max_length() -> usize {
    IBAN_FORMATS.iter().map(|fmt| fmt.length).max().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Digit,
    Alpha,
    AlphaNumeric,
}

impl CharClass {
    fn accepts(self, b: u8) -> bool {
        match self {
            Self::Digit => b.is_ascii_digit(),
            Self::Alpha => b.is_ascii_uppercase(),
            Self::AlphaNumeric => b.is_ascii_digit() || b.is_ascii_uppercase(),
        }
    }
}

/// Iterates `(count, class)` pairs of a registry structure string.
struct Segments<'a> {
    rest: &'a [u8],
}

impl Iterator for Segments<'_> {
    type Item = (usize, CharClass);

    fn next(&mut self) -> Option<Self::Item> {
        let mut count = 0usize;
        while let Some((&b, rest)) = self.rest.split_first() {
            self.rest = rest;
            match b {
                b'0'..=b'9' => count = count * 10 + (b - b'0') as usize,
                b'!' => {}
                b'n' => return Some((count, CharClass::Digit)),
                b'a' => return Some((count, CharClass::Alpha)),
                b'c' => return Some((count, CharClass::AlphaNumeric)),
                _ => return None,
            }
        }
        None
    }
}

fn segments(structure: &str) -> Segments<'_> {
    Segments {
        rest: structure.as_bytes(),
    }
}

/// Checks `bban` against a structure string.
///
/// With `partial` set, a `bban` that is a valid prefix of the structure also
/// matches.
pub fn matches_structure(structure: &str, bban: &str, partial: bool) -> bool {
    let mut chars = bban.bytes();
    for (count, class) in segments(structure) {
        for _ in 0..count {
            match chars.next() {
                Some(b) if class.accepts(b) => {}
                Some(_) => return false,
                None => return partial,
            }
        }
    }
    chars.next().is_none()
}
