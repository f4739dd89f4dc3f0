//! Card type detection using BIN/IIN prefix matching.
//!
//! The Bank Identification Number (BIN), also known as Issuer Identification
//! Number (IIN), is the leading digits of a card number. Every [`CardType`]
//! owns one or more prefix patterns in [`BIN_TABLE`]: exact prefixes such as
//! `4` or equal-width ranges such as `2221..=2720`.
//!
//! Detection runs on every keystroke, so it works on partial numbers:
//!
//! - A pattern is *confirmed* once the input contains all of its digits and
//!   they fall inside the pattern.
//! - A pattern is *possible* while the input could still grow into it.
//!
//! [`estimate`] reports the most specific confirmed types and is what input
//! fields use to show a brand logo. [`possible_types`] reports everything the
//! input could still become and only ever shrinks as digits are appended.
//!
//! # Example
//!
//! ```
//! use checkout_validation::detect::estimate;
//! use checkout_validation::CardType;
//!
//! let allowed = [CardType::Maestro, CardType::Cup];
//!
//! // "6" is a Maestro prefix; "62" is the more specific UnionPay prefix
//! assert_eq!(estimate("6", Some(&allowed)), vec![CardType::Maestro]);
//! assert_eq!(estimate("62", Some(&allowed)), vec![CardType::Cup]);
//! ```

use crate::CardType;

/// A BIN prefix pattern: every number whose leading digits fall between
/// `start` and `end` (inclusive, same width) matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinRange {
    start: &'static str,
    end: &'static str,
}

impl BinRange {
    /// A single exact prefix.
    pub const fn exact(prefix: &'static str) -> Self {
        Self {
            start: prefix,
            end: prefix,
        }
    }

    /// An inclusive range of equal-width prefixes.
    pub const fn range(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    /// Number of leading digits this pattern constrains.
    #[inline]
    pub const fn width(&self) -> usize {
        self.start.len()
    }

    /// Returns true if `digits` contains the whole prefix and it is in range.
    #[inline]
    pub fn is_confirmed_by(&self, digits: &[u8]) -> bool {
        let width = self.width();
        digits.len() >= width && self.contains_truncated(&digits[..width])
    }

    /// Returns true if `digits` can still be extended into this pattern.
    #[inline]
    pub fn is_possible_for(&self, digits: &[u8]) -> bool {
        let k = digits.len().min(self.width());
        self.contains_truncated(&digits[..k])
    }

    // Equal-width ASCII digit strings order the same lexicographically and
    // numerically, so truncating both bounds keeps the comparison exact.
    #[inline]
    fn contains_truncated(&self, prefix: &[u8]) -> bool {
        let k = prefix.len();
        let start = &self.start.as_bytes()[..k];
        let end = &self.end.as_bytes()[..k];
        start <= prefix && prefix <= end
    }
}

use BinRange as B;

/// Prefix patterns per card type, in detection order.
pub const BIN_TABLE: &[(CardType, &[BinRange])] = &[
    (CardType::Visa, &[B::exact("4")]),
    (
        CardType::Mastercard,
        &[B::range("51", "55"), B::range("2221", "2720")],
    ),
    (CardType::AmericanExpress, &[B::exact("34"), B::exact("37")]),
    (
        CardType::Jcb,
        &[B::range("3528", "3529"), B::range("353", "358")],
    ),
    (
        CardType::DinersClub,
        &[
            B::range("300", "305"),
            B::exact("309"),
            B::exact("36"),
            B::range("38", "39"),
        ],
    ),
    (
        CardType::Discover,
        &[B::exact("6011"), B::range("644", "649"), B::exact("65")],
    ),
    (CardType::Maestro, &[B::range("56", "58"), B::exact("6")]),
    (
        CardType::Hipercard,
        &[
            B::exact("606282"),
            B::exact("384100"),
            B::exact("384140"),
            B::exact("384160"),
        ],
    ),
    (
        CardType::Elo,
        &[
            B::range("401178", "401179"),
            B::exact("431274"),
            B::exact("438935"),
            B::exact("451416"),
            B::exact("457393"),
            B::range("457631", "457632"),
            B::exact("504175"),
            B::range("506699", "506778"),
            B::range("509000", "509999"),
            B::exact("627780"),
            B::exact("636297"),
            B::exact("636368"),
            B::range("650031", "650033"),
            B::range("650035", "650051"),
            B::range("650405", "650439"),
            B::range("650485", "650538"),
            B::range("650541", "650598"),
            B::range("650700", "650718"),
            B::range("650720", "650727"),
            B::range("650901", "650920"),
            B::range("651652", "651679"),
            B::range("655000", "655019"),
            B::range("655021", "655058"),
        ],
    ),
    (CardType::Dankort, &[B::exact("5019"), B::exact("4571")]),
    (CardType::Cup, &[B::exact("62"), B::exact("81")]),
    (CardType::Uatp, &[B::exact("1")]),
    (
        CardType::Bcmc,
        &[B::exact("6703"), B::exact("479658"), B::exact("606005")],
    ),
    (CardType::Bijcard, &[B::exact("5100081")]),
    (CardType::Mir, &[B::range("2200", "2204")]),
];

/// Returns the prefix patterns of a card type.
pub fn patterns_for(card_type: CardType) -> &'static [BinRange] {
    BIN_TABLE
        .iter()
        .find(|(t, _)| *t == card_type)
        .map(|(_, patterns)| *patterns)
        .unwrap_or(&[])
}

/// Estimates the card type(s) of a partially typed card number.
///
/// Returns every allowed type whose prefix is confirmed by the input, keeping
/// only the most specific confirmation (the longest matched prefix). Several
/// types are returned when they tie. The list is empty while no prefix is
/// confirmed, or when the input contains a non-digit.
///
/// # Arguments
///
/// * `digits` - The digits typed so far (separators already removed).
/// * `allowed` - The card types enabled for the merchant; `None` allows all.
///
/// # Example
///
/// ```
/// use checkout_validation::detect::estimate;
/// use checkout_validation::CardType;
///
/// let allowed = [CardType::Visa, CardType::Mastercard, CardType::AmericanExpress];
/// assert_eq!(estimate("4", Some(&allowed)), vec![CardType::Visa]);
/// assert_eq!(estimate("37", Some(&allowed)), vec![CardType::AmericanExpress]);
/// assert!(estimate("3", Some(&allowed)).is_empty());
/// ```
pub fn estimate(digits: &str, allowed: Option<&[CardType]>) -> Vec<CardType> {
    let Some(bytes) = digit_bytes(digits) else {
        return Vec::new();
    };

    let mut best_width = 0;
    let mut result = Vec::new();

    for (card_type, patterns) in candidates(bytes.len(), allowed) {
        let width = patterns
            .iter()
            .filter(|p| p.is_confirmed_by(bytes))
            .map(BinRange::width)
            .max();

        match width {
            Some(w) if w > best_width => {
                best_width = w;
                result.clear();
                result.push(card_type);
            }
            Some(w) if w == best_width => result.push(card_type),
            _ => {}
        }
    }

    result
}

/// Returns every allowed card type the input could still turn into.
///
/// Unlike [`estimate`] this never grows as digits are appended: a type that
/// is excluded for some prefix stays excluded for every longer input.
///
/// # Example
///
/// ```
/// use checkout_validation::detect::possible_types;
/// use checkout_validation::CardType;
///
/// let allowed = [CardType::Visa, CardType::Mastercard, CardType::Mir];
/// assert_eq!(possible_types("2", Some(&allowed)), vec![CardType::Mastercard, CardType::Mir]);
/// assert_eq!(possible_types("220", Some(&allowed)), vec![CardType::Mir]);
/// ```
pub fn possible_types(digits: &str, allowed: Option<&[CardType]>) -> Vec<CardType> {
    let Some(bytes) = digit_bytes(digits) else {
        return Vec::new();
    };

    candidates(bytes.len(), allowed)
        .filter(|(_, patterns)| patterns.iter().any(|p| p.is_possible_for(bytes)))
        .map(|(card_type, _)| card_type)
        .collect()
}

/// Detects the single most likely card type.
///
/// This is the first entry of [`estimate`].
///
/// # Example
///
/// ```
/// use checkout_validation::detect::detect;
/// use checkout_validation::CardType;
///
/// assert_eq!(detect("4111111111111111", None), Some(CardType::Visa));
/// assert_eq!(detect("5100081112223332", None), Some(CardType::Bijcard));
/// assert_eq!(detect("0000", None), None);
/// ```
#[inline]
pub fn detect(digits: &str, allowed: Option<&[CardType]>) -> Option<CardType> {
    estimate(digits, allowed).into_iter().next()
}

fn digit_bytes(digits: &str) -> Option<&[u8]> {
    let bytes = digits.as_bytes();
    if bytes.iter().all(u8::is_ascii_digit) {
        Some(bytes)
    } else {
        None
    }
}

fn candidates(
    length: usize,
    allowed: Option<&[CardType]>,
) -> impl Iterator<Item = (CardType, &'static [BinRange])> + '_ {
    BIN_TABLE
        .iter()
        .copied()
        .filter(move |(t, _)| allowed.map_or(true, |a| a.contains(t)))
        .filter(move |(t, _)| length <= t.max_length())
}
