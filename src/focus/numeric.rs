//! Locale-tolerant number parsing
//!
//! Authored documents mix decimal separators depending on the environment they were written
//! in, so `cost = 2,5` and `cost = 2.5` must both read as 2.5. [parse_double] tries three
//! conventions in turn:
//!
//! 1. the current convention, taken from the locale environment or from configuration;
//! 2. the Western convention: `.` as decimal mark, no grouping;
//! 3. the invariant convention: a single `.` or `,` as decimal mark.
//!
//! Grouping separators are never accepted. Non-finite spellings (`inf`, `NaN`) are rejected
//! by every convention.

use once_cell::sync::Lazy;
use regex::Regex;
use std::env;

static NUMBER_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("number shape regex is valid")
});

/// Languages whose locales write the decimal mark as a comma
const COMMA_DECIMAL_LANGUAGES: &[&str] = &[
    "bg", "ca", "cs", "da", "de", "el", "es", "et", "fi", "fr", "hr", "hu", "id", "it", "lt",
    "lv", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv", "tr", "uk",
    "vi",
];

static CURRENT: Lazy<NumberConvention> = Lazy::new(NumberConvention::from_env);

/// Which character separates the integer part from the fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalMark {
    Period,
    Comma,
    /// Either character, provided it appears at most once
    Either,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberConvention {
    pub decimal: DecimalMark,
}

impl NumberConvention {
    pub const WESTERN: NumberConvention = NumberConvention {
        decimal: DecimalMark::Period,
    };

    pub const INVARIANT: NumberConvention = NumberConvention {
        decimal: DecimalMark::Either,
    };

    /// Convention for a POSIX locale name such as `de_DE.UTF-8` or `fr`.
    ///
    /// Empty names, `C` and `POSIX` use the Western convention.
    pub fn for_locale(name: &str) -> NumberConvention {
        let language = name
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if COMMA_DECIMAL_LANGUAGES.contains(&language.as_str()) {
            NumberConvention {
                decimal: DecimalMark::Comma,
            }
        } else {
            NumberConvention::WESTERN
        }
    }

    /// Convention of the first non-empty of `LC_ALL`, `LC_NUMERIC`, `LANG`
    pub fn from_env() -> NumberConvention {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.is_empty())
            .map(|value| NumberConvention::for_locale(&value))
            .unwrap_or(NumberConvention::WESTERN)
    }

    /// Convention of the running process, read once
    pub fn current() -> NumberConvention {
        *CURRENT
    }

    /// Parse `text` under this convention alone.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        let normalised = match self.decimal {
            DecimalMark::Period if !text.contains(',') => text.to_string(),
            DecimalMark::Comma if !text.contains('.') => text.replace(',', "."),
            DecimalMark::Either if text.matches(['.', ',']).count() <= 1 => text.replace(',', "."),
            _ => return None,
        };
        if !NUMBER_SHAPE.is_match(&normalised) {
            return None;
        }
        normalised.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

impl Default for NumberConvention {
    fn default() -> Self {
        NumberConvention::current()
    }
}

/// Parse `text` with the current convention, falling back to the Western and invariant
/// conventions, and finally to `default`.
pub fn parse_double(text: &str, default: f64) -> f64 {
    parse_double_with(text, default, NumberConvention::current())
}

/// [parse_double] with an explicit first convention.
pub fn parse_double_with(text: &str, default: f64, convention: NumberConvention) -> f64 {
    [
        convention,
        NumberConvention::WESTERN,
        NumberConvention::INVARIANT,
    ]
    .iter()
    .find_map(|candidate| candidate.parse(text))
    .unwrap_or(default)
}
