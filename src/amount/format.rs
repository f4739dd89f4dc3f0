//! Rendering of minor-unit values.

use super::locale::Locale;

/// Renders `value` minor units with `exponent` fraction digits.
///
/// Without a locale the output is plain (`-1234.56`); with one, the integer
/// part is grouped and the locale's decimal separator is used. An exponent
/// of 0 renders no separator.
pub fn format_value(value: i64, exponent: u32, locale: Option<&Locale>) -> String {
    let magnitude = value.unsigned_abs() as u128;
    let (major, minor) = match 10u128.checked_pow(exponent) {
        Some(power) => (magnitude / power, magnitude % power),
        None => (0, magnitude),
    };

    let mut out = String::new();
    if value < 0 {
        out.push('-');
    }

    let integer = major.to_string();
    match locale.and_then(|l| l.grouping_separator) {
        Some(separator) => push_grouped(&mut out, &integer, separator),
        None => out.push_str(&integer),
    }

    if exponent > 0 {
        out.push(locale.map_or('.', |l| l.decimal_separator));
        out.push_str(&format!("{:0width$}", minor, width = exponent as usize));
    }

    out
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
}
