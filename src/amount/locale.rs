//! Number rendering conventions.

use std::fmt;
use std::str::FromStr;

/// How a locale renders numbers: decimal mark and digit grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Separator between major and minor units.
    pub decimal_separator: char,
    /// Separator between groups of three integer digits, if any.
    pub grouping_separator: Option<char>,
}

const NBSP: char = '\u{a0}';
const NNBSP: char = '\u{202f}';

// Region-specific entries come before their language fallback.
#[rustfmt::skip]
const LOCALES: &[(&str, Locale)] = &[
    ("de-CH", Locale::new('.', Some('\u{2019}'))),
    ("es-MX", Locale::new('.', Some(','))),
    ("pt-BR", Locale::new(',', Some('.'))),
    ("en-ZA", Locale::new(',', Some(NBSP))),
    ("en", Locale::new('.', Some(','))),
    ("de", Locale::new(',', Some('.'))),
    ("fr", Locale::new(',', Some(NNBSP))),
    ("es", Locale::new(',', Some('.'))),
    ("it", Locale::new(',', Some('.'))),
    ("nl", Locale::new(',', Some('.'))),
    ("pt", Locale::new(',', Some(NBSP))),
    ("da", Locale::new(',', Some('.'))),
    ("id", Locale::new(',', Some('.'))),
    ("tr", Locale::new(',', Some('.'))),
    ("vi", Locale::new(',', Some('.'))),
    ("el", Locale::new(',', Some('.'))),
    ("ro", Locale::new(',', Some('.'))),
    ("sv", Locale::new(',', Some(NBSP))),
    ("nb", Locale::new(',', Some(NBSP))),
    ("no", Locale::new(',', Some(NBSP))),
    ("fi", Locale::new(',', Some(NBSP))),
    ("pl", Locale::new(',', Some(NBSP))),
    ("cs", Locale::new(',', Some(NBSP))),
    ("sk", Locale::new(',', Some(NBSP))),
    ("hu", Locale::new(',', Some(NBSP))),
    ("ru", Locale::new(',', Some(NBSP))),
    ("uk", Locale::new(',', Some(NBSP))),
    ("ja", Locale::new('.', Some(','))),
    ("zh", Locale::new('.', Some(','))),
    ("ko", Locale::new('.', Some(','))),
    ("th", Locale::new('.', Some(','))),
    ("he", Locale::new('.', Some(','))),
    ("hi", Locale::new('.', Some(','))),
    ("ms", Locale::new('.', Some(','))),
];

impl Locale {
    /// Creates a locale from its separators.
    pub const fn new(decimal_separator: char, grouping_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
        }
    }

    /// English conventions: `1,234.56`.
    pub const EN_US: Locale = Locale::new('.', Some(','));

    /// German conventions: `1.234,56`.
    pub const DE_DE: Locale = Locale::new(',', Some('.'));

    /// Resolves a language tag such as `"de-DE"`, `"en_US"` or `"fr"`.
    ///
    /// The region is tried first, then the bare language. Returns `None` for
    /// languages without an entry.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().replace('_', "-");
        let mut parts = tag.split('-');
        let language = parts.next()?.to_ascii_lowercase();
        if language.is_empty() {
            return None;
        }
        let region = parts.next().map(str::to_ascii_uppercase);

        let find = |key: &str| {
            LOCALES
                .iter()
                .find(|(k, _)| *k == key)
                .map(|&(_, locale)| locale)
        };

        region
            .and_then(|r| find(&format!("{language}-{r}")))
            .or_else(|| find(&language))
    }
}

/// Error returned when a language tag has no known conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}'", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}
