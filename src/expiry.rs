//! Card expiry date parsing and validation.
//!
//! Dates are typed as `MM/YY` (or `M/YY`, `MM/YYYY`). Two-digit years are
//! placed in the current century unless that lands too far in the future,
//! in which case the previous century is used. A date is accepted from a
//! few months in the past (cards are often still honoured shortly after
//! expiring) up to a number of years ahead.
//!
//! "Now" comes from a [`Clock`], so validation is deterministic under test.
//!
//! # Example
//!
//! ```
//! use checkout_validation::expiry::{ExpiryDateValidator, FixedClock, YearMonth};
//! use checkout_validation::Validity;
//!
//! let validator = ExpiryDateValidator::new().with_clock(FixedClock(YearMonth::new(2024, 1)));
//!
//! let date = validator.parse("01/45");
//! assert_eq!((date.month(), date.year()), (1, 2045));
//!
//! assert_eq!(validator.validate_expiry_date("01/45").validity(), Validity::Valid);
//! assert_eq!(validator.validate_expiry_date("10/23").validity(), Validity::Invalid);
//! ```

use crate::card::Validity;
use chrono::Datelike;
use std::fmt;
use tracing::trace;

const MONTHS_IN_YEAR: i64 = 12;

/// A calendar month, as returned by a [`Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearMonth {
    /// Four-digit year.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
}

impl YearMonth {
    /// Creates a new year/month pair.
    #[inline]
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    #[inline]
    const fn month_index(&self) -> i64 {
        self.year as i64 * MONTHS_IN_YEAR + self.month as i64
    }
}

/// Source of the current month.
pub trait Clock {
    /// Returns the current year and month.
    fn now(&self) -> YearMonth;
}

/// Reads the current month from the system clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> YearMonth {
        let today = chrono::Utc::now().date_naive();
        YearMonth::new(today.year(), today.month())
    }
}

/// A clock that always returns the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub YearMonth);

impl Clock for FixedClock {
    fn now(&self) -> YearMonth {
        self.0
    }
}

/// A card expiry date.
///
/// [`ExpiryDate::EMPTY`] (month 0, year 0) stands for "no date"; parsing
/// returns it for any input it cannot read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryDate {
    month: u32,
    year: i32,
}

impl ExpiryDate {
    /// The "no date" sentinel.
    pub const EMPTY: ExpiryDate = ExpiryDate { month: 0, year: 0 };

    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is not 1-12.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12, or 0 for [`ExpiryDate::EMPTY`]).
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the four-digit year (0 for [`ExpiryDate::EMPTY`]).
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns true for the [`ExpiryDate::EMPTY`] sentinel.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.month == 0 && self.year == 0
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }

    #[inline]
    const fn month_index(&self) -> i64 {
        self.year as i64 * MONTHS_IN_YEAR + self.month as i64
    }
}

impl fmt::Display for ExpiryDate {
    /// Formats as MM/YY.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

/// Outcome of expiry date validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryDateValidationResult {
    validity: Validity,
    date: ExpiryDate,
}

impl ExpiryDateValidationResult {
    /// Returns the validity verdict (never `Unknown`).
    #[inline]
    pub const fn validity(&self) -> Validity {
        self.validity
    }

    /// Returns true for `Validity::Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Returns the parsed date, or [`ExpiryDate::EMPTY`] for malformed input.
    #[inline]
    pub const fn date(&self) -> ExpiryDate {
        self.date
    }
}

/// Expiry date parser and validator.
///
/// # Defaults
///
/// | Setting | Default |
/// |---|---|
/// | separator | `'/'` |
/// | max expired months | 3 |
/// | max years in future | 30 |
/// | century window years | 30 |
#[derive(Debug, Clone)]
pub struct ExpiryDateValidator<C = SystemClock> {
    separator: char,
    max_expired_months: u32,
    max_years_in_future: u32,
    century_window_years: u32,
    clock: C,
}

impl Default for ExpiryDateValidator<SystemClock> {
    fn default() -> Self {
        Self {
            separator: '/',
            max_expired_months: 3,
            max_years_in_future: 30,
            century_window_years: 30,
            clock: SystemClock,
        }
    }
}

impl ExpiryDateValidator<SystemClock> {
    /// Creates a validator with default settings and the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> ExpiryDateValidator<C> {
    /// Replaces the clock.
    pub fn with_clock<D: Clock>(self, clock: D) -> ExpiryDateValidator<D> {
        ExpiryDateValidator {
            separator: self.separator,
            max_expired_months: self.max_expired_months,
            max_years_in_future: self.max_years_in_future,
            century_window_years: self.century_window_years,
            clock,
        }
    }

    /// Sets the month/year separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets how many months in the past a date is still accepted.
    pub fn with_max_expired_months(mut self, months: u32) -> Self {
        self.max_expired_months = months;
        self
    }

    /// Sets how many years in the future a date is still accepted.
    pub fn with_max_years_in_future(mut self, years: u32) -> Self {
        self.max_years_in_future = years;
        self
    }

    /// Sets how far ahead a two-digit year may resolve before the previous
    /// century is used instead.
    pub fn with_century_window_years(mut self, years: u32) -> Self {
        self.century_window_years = years;
        self
    }

    /// Returns the month/year separator.
    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parses `M/YY`, `MM/YY` or `MM/YYYY`.
    ///
    /// Surrounding whitespace is ignored. Anything else, including a month
    /// outside 1-12, yields [`ExpiryDate::EMPTY`].
    pub fn parse(&self, input: &str) -> ExpiryDate {
        let Some((month_str, year_str)) = input.trim().split_once(self.separator) else {
            return ExpiryDate::EMPTY;
        };

        if !is_digits(month_str, 1..=2) {
            return ExpiryDate::EMPTY;
        }
        let Ok(month) = month_str.parse::<u32>() else {
            return ExpiryDate::EMPTY;
        };

        let year = match year_str.len() {
            2 | 4 if is_digits(year_str, 2..=4) => match year_str.parse::<i32>() {
                Ok(y) if year_str.len() == 2 => self.resolve_century(y, month),
                Ok(y) => y,
                Err(_) => return ExpiryDate::EMPTY,
            },
            _ => return ExpiryDate::EMPTY,
        };

        ExpiryDate::new(month, year).unwrap_or(ExpiryDate::EMPTY)
    }

    /// Parses and validates a typed expiry date.
    pub fn validate_expiry_date(&self, input: &str) -> ExpiryDateValidationResult {
        self.validate_date(self.parse(input))
    }

    /// Validates an already-parsed date against the acceptance window.
    ///
    /// VALID iff the date is less than `max_expired_months` months in the
    /// past and at most `max_years_in_future` years ahead.
    pub fn validate_date(&self, date: ExpiryDate) -> ExpiryDateValidationResult {
        if !(1..=12).contains(&date.month) || date.year <= 0 {
            return ExpiryDateValidationResult {
                validity: Validity::Invalid,
                date,
            };
        }

        let current = self.clock.now().month_index();
        let input = date.month_index();
        let oldest = current - self.max_expired_months as i64;
        let newest = current + self.max_years_in_future as i64 * MONTHS_IN_YEAR;

        let validity = if input > oldest && input <= newest {
            Validity::Valid
        } else {
            Validity::Invalid
        };

        ExpiryDateValidationResult { validity, date }
    }

    fn resolve_century(&self, two_digit_year: i32, month: u32) -> i32 {
        let now = self.clock.now();
        let year = now.year - now.year.rem_euclid(100) + two_digit_year;
        let candidate = year as i64 * MONTHS_IN_YEAR + month as i64;
        let limit = now.month_index() + self.century_window_years as i64 * MONTHS_IN_YEAR;

        if candidate > limit {
            trace!(year, corrected = year - 100, "two-digit year moved to previous century");
            year - 100
        } else {
            year
        }
    }
}

fn is_digits(s: &str, lengths: std::ops::RangeInclusive<usize>) -> bool {
    lengths.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses an expiry date with the default validator and the system clock.
///
/// See [`ExpiryDateValidator::parse`].
pub fn parse_expiry_date(input: &str) -> ExpiryDate {
    ExpiryDateValidator::new().parse(input)
}

/// Validates an expiry date with the default validator and the system clock.
///
/// See [`ExpiryDateValidator::validate_expiry_date`].
pub fn validate_expiry_date(input: &str) -> ExpiryDateValidationResult {
    ExpiryDateValidator::new().validate_expiry_date(input)
}
