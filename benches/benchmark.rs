//! Benchmarks for checkout_validation performance testing.
//!
//! Run with: cargo bench

use checkout_validation::amount::{self, Amount, Locale};
use checkout_validation::expiry::{ExpiryDateValidator, FixedClock, YearMonth};
use checkout_validation::iban::{self, Iban};
use checkout_validation::{
    check_card_number, estimate, format, luhn, possible_types, validate_number, CardType,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111-1111-1111-1111";
const MASTERCARD: &str = "5500000000000004";
const AMEX: &str = "378282246310005";
const BIJCARD: &str = "5100081112223332";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

/// Benchmark single card validation
fn bench_number_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_validation");

    group.bench_function("visa_16_raw", |b| {
        b.iter(|| validate_number(black_box(VISA_16)))
    });

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| validate_number(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("mastercard", |b| {
        b.iter(|| validate_number(black_box(MASTERCARD)))
    });

    group.bench_function("amex_15", |b| {
        b.iter(|| validate_number(black_box(AMEX)))
    });

    let allowed = [CardType::Visa, CardType::Mastercard, CardType::AmericanExpress];
    group.bench_function("check_card_number_allowed", |b| {
        b.iter(|| check_card_number(black_box(VISA_16_FORMATTED), Some(&allowed), true))
    });

    group.finish();
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("luhn_16_digits", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("luhn_16_str", |b| {
        b.iter(|| luhn::validate_str(black_box(VISA_16)))
    });

    group.bench_function("check_digit_15", |b| {
        b.iter(|| luhn::generate_check_digit(black_box(&VISA_DIGITS[..15])))
    });

    group.finish();
}

/// Benchmark detection as the number is typed, one digit at a time
fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    for number in [VISA_16, AMEX, BIJCARD] {
        group.throughput(Throughput::Elements(number.len() as u64));

        group.bench_with_input(BenchmarkId::new("estimate_typing", number), number, |b, n| {
            b.iter(|| {
                for len in 1..=n.len() {
                    black_box(estimate(black_box(&n[..len]), None));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("possible_typing", number), number, |b, n| {
            b.iter(|| {
                for len in 1..=n.len() {
                    black_box(possible_types(black_box(&n[..len]), None));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark expiry date parsing and validation
fn bench_expiry(c: &mut Criterion) {
    let mut group = c.benchmark_group("expiry");
    let validator = ExpiryDateValidator::new().with_clock(FixedClock(YearMonth::new(2024, 6)));

    group.bench_function("two_digit_year", |b| {
        b.iter(|| validator.validate_expiry_date(black_box("12/30")))
    });

    group.bench_function("four_digit_year", |b| {
        b.iter(|| validator.validate_expiry_date(black_box("12/2030")))
    });

    group.bench_function("system_clock", |b| {
        let validator = ExpiryDateValidator::new();
        b.iter(|| validator.validate_expiry_date(black_box("12/30")))
    });

    group.finish();
}

/// Benchmark amount formatting and parsing
fn bench_amount(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount");
    let value = Amount::new(123456789, "EUR");

    group.bench_function("format_plain", |b| {
        b.iter(|| amount::format(black_box(&value), false, None))
    });

    group.bench_function("format_symbol_locale", |b| {
        b.iter(|| amount::format(black_box(&value), true, Some(&Locale::DE_DE)))
    });

    group.bench_function("parse_grouped", |b| {
        b.iter(|| amount::parse_major_amount(black_box("EUR"), black_box("1.234.567,89")))
    });

    group.finish();
}

/// Benchmark IBAN checks
fn bench_iban(c: &mut Criterion) {
    let mut group = c.benchmark_group("iban");
    const LONG: &str = "MT84 MALT 0110 0001 2345 MTLC AST0 01S";

    group.bench_function("validate_structure", |b| {
        b.iter(|| iban::validate(black_box(LONG)))
    });

    group.bench_function("parse_full", |b| {
        b.iter(|| Iban::parse(black_box(LONG)))
    });

    group.bench_function("is_partial", |b| {
        b.iter(|| iban::is_partial(black_box("MT84 MALT 0110")))
    });

    group.finish();
}

/// Benchmark as-you-type formatting
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    group.bench_function("format_number_detect", |b| {
        b.iter(|| format::format_number(black_box(AMEX), None))
    });

    group.bench_function("format_number_known_type", |b| {
        b.iter(|| format::format_number(black_box(VISA_16), Some(CardType::Visa)))
    });

    group.bench_function("format_expiry_date", |b| {
        b.iter(|| format::format_expiry_date(black_box("1230"), '/'))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_number_validation,
    bench_luhn,
    bench_detection,
    bench_expiry,
    bench_amount,
    bench_iban,
    bench_formatting,
);

criterion_main!(benches);
