//! Currency metadata: minor-unit exponents and display symbols.

use super::locale::Locale;

/// Exponents that take precedence over ISO 4217 metadata.
///
/// Some codes are legacy (MXP, GHC, BYR) and some differ from the ISO minor
/// units because the payment platform settles them differently (ISK and CLP
/// in cents, IDR without minor units).
pub const EXPONENT_OVERRIDES: &[(&str, u32)] = &[
    ("ISK", 2),
    ("CLP", 2),
    ("MXP", 2),
    ("MRO", 1),
    ("IDR", 0),
    ("VND", 0),
    ("UGX", 0),
    ("CVE", 0),
    ("ZMW", 2),
    ("GHC", 0),
    ("BYR", 0),
    ("BYN", 2),
];

/// Returns the override exponent for a currency code, if there is one.
pub fn exponent_override(code: &str) -> Option<u32> {
    EXPONENT_OVERRIDES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, e)| e)
}

/// Provider of per-currency metadata.
///
/// Implement this to plug in a different currency database; the formatter
/// only ever asks these two questions.
pub trait CurrencyMetadata {
    /// Number of minor-unit digits for `code`, or `None` if the code is
    /// unknown. A negative value means the currency has no minor units
    /// defined (precious metals, testing codes).
    fn default_fraction_digits(&self, code: &str) -> Option<i32>;

    /// Display symbol for `code`, or `None` when there is no symbol and the
    /// code itself should be shown.
    fn symbol(&self, code: &str, locale: Option<&Locale>) -> Option<String>;
}

impl<M: CurrencyMetadata + ?Sized> CurrencyMetadata for &M {
    fn default_fraction_digits(&self, code: &str) -> Option<i32> {
        (**self).default_fraction_digits(code)
    }

    fn symbol(&self, code: &str, locale: Option<&Locale>) -> Option<String> {
        (**self).symbol(code, locale)
    }
}

/// Built-in ISO 4217 table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso4217;

impl Iso4217 {
    fn lookup(code: &str) -> Option<&'static CurrencyInfo> {
        ISO_4217.iter().find(|info| info.code == code)
    }
}

impl CurrencyMetadata for Iso4217 {
    fn default_fraction_digits(&self, code: &str) -> Option<i32> {
        Self::lookup(code).map(|info| info.fraction_digits)
    }

    fn symbol(&self, code: &str, _locale: Option<&Locale>) -> Option<String> {
        Self::lookup(code)
            .and_then(|info| info.symbol)
            .map(str::to_string)
    }
}

struct CurrencyInfo {
    code: &'static str,
    fraction_digits: i32,
    symbol: Option<&'static str>,
}

const fn c(code: &'static str, fraction_digits: i32) -> CurrencyInfo {
    CurrencyInfo {
        code,
        fraction_digits,
        symbol: None,
    }
}

const fn s(code: &'static str, fraction_digits: i32, symbol: &'static str) -> CurrencyInfo {
    CurrencyInfo {
        code,
        fraction_digits,
        symbol: Some(symbol),
    }
}

#[rustfmt::skip]
static ISO_4217: &[CurrencyInfo] = &[
    c("AED", 2), c("AFN", 2), c("ALL", 2), c("AMD", 2), c("ANG", 2),
    c("AOA", 2), c("ARS", 2), s("AUD", 2, "A$"), c("AWG", 2), c("AZN", 2),
    c("BAM", 2), c("BBD", 2), c("BDT", 2), c("BGN", 2), c("BHD", 3),
    c("BIF", 0), c("BMD", 2), c("BND", 2), c("BOB", 2), s("BRL", 2, "R$"),
    c("BSD", 2), c("BTN", 2), c("BWP", 2), c("BYN", 2), c("BZD", 2),
    s("CAD", 2, "CA$"), c("CDF", 2), c("CHF", 2), c("CLF", 4), c("CLP", 0),
    s("CNY", 2, "CN¥"), c("COP", 2), c("CRC", 2), c("CUP", 2), c("CVE", 2),
    c("CZK", 2), c("DJF", 0), c("DKK", 2), c("DOP", 2), c("DZD", 2),
    c("EGP", 2), c("ERN", 2), c("ETB", 2), s("EUR", 2, "€"), c("FJD", 2),
    c("FKP", 2), s("GBP", 2, "£"), c("GEL", 2), c("GHS", 2), c("GIP", 2),
    c("GMD", 2), c("GNF", 0), c("GTQ", 2), c("GYD", 2), s("HKD", 2, "HK$"),
    c("HNL", 2), c("HTG", 2), c("HUF", 2), c("IDR", 2), s("ILS", 2, "₪"),
    s("INR", 2, "₹"), c("IQD", 3), c("IRR", 2), c("ISK", 0), c("JMD", 2),
    c("JOD", 3), s("JPY", 0, "¥"), c("KES", 2), c("KGS", 2), c("KHR", 2),
    c("KMF", 0), c("KPW", 2), s("KRW", 0, "₩"), c("KWD", 3), c("KYD", 2),
    c("KZT", 2), c("LAK", 2), c("LBP", 2), c("LKR", 2), c("LRD", 2),
    c("LSL", 2), c("LYD", 3), c("MAD", 2), c("MDL", 2), c("MGA", 2),
    c("MKD", 2), c("MMK", 2), c("MNT", 2), c("MOP", 2), c("MRU", 2),
    c("MUR", 2), c("MVR", 2), c("MWK", 2), s("MXN", 2, "MX$"), c("MYR", 2),
    c("MZN", 2), c("NAD", 2), c("NGN", 2), c("NIO", 2), c("NOK", 2),
    c("NPR", 2), s("NZD", 2, "NZ$"), c("OMR", 3), c("PAB", 2), c("PEN", 2),
    c("PGK", 2), s("PHP", 2, "₱"), c("PKR", 2), c("PLN", 2), c("PYG", 0),
    c("QAR", 2), c("RON", 2), c("RSD", 2), c("RUB", 2), c("RWF", 0),
    c("SAR", 2), c("SBD", 2), c("SCR", 2), c("SDG", 2), c("SEK", 2),
    c("SGD", 2), c("SHP", 2), c("SLE", 2), c("SOS", 2), c("SRD", 2),
    c("SSP", 2), c("STN", 2), c("SVC", 2), c("SYP", 2), c("SZL", 2),
    c("THB", 2), c("TJS", 2), c("TMT", 2), c("TND", 3), c("TOP", 2),
    c("TRY", 2), c("TTD", 2), s("TWD", 2, "NT$"), c("TZS", 2), c("UAH", 2),
    c("UGX", 0), s("USD", 2, "$"), c("UYI", 0), c("UYU", 2), c("UYW", 4),
    c("UZS", 2), c("VES", 2), s("VND", 0, "₫"), c("VUV", 0), c("WST", 2),
    s("XAF", 0, "FCFA"), c("XCD", 2), s("XOF", 0, "F\u{202f}CFA"), s("XPF", 0, "CFPF"), c("YER", 2),
    c("ZAR", 2), c("ZMW", 2), c("ZWL", 2),
    // No minor units defined
    c("XAG", -1), c("XAU", -1), c("XBA", -1), c("XBB", -1), c("XBC", -1),
    c("XBD", -1), c("XDR", -1), c("XPD", -1), c("XPT", -1), c("XSU", -1),
    c("XTS", -1), c("XUA", -1), c("XXX", -1),
];
