//! Locale aware decimal and integer parsing

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use super::ClientLocale;

const NO_BREAK_SPACE: char = '\u{a0}';
const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// Languages writing `1.234,56`
const COMMA_DECIMAL_DOT_GROUPING: &[&str] = &[
    "az", "ca", "da", "de", "el", "es", "hr", "id", "in", "is", "it", "mk", "nl", "pt", "ro", "sl",
    "sr", "tr", "vi",
];

/// Languages writing `1 234,56` with a no-break space
const COMMA_DECIMAL_SPACE_GROUPING: &[&str] = &[
    "be", "bg", "cs", "et", "fi", "fr", "hu", "hy", "ka", "kk", "lt", "lv", "nb", "nn", "no", "pl",
    "ru", "sk", "sv", "uk",
];

/// Language and country pairs writing `1'234.56`
const DOT_DECIMAL_APOSTROPHE_GROUPING: &[(&str, &str)] =
    &[("de", "CH"), ("de", "LI"), ("fr", "CH"), ("it", "CH")];

/// Language and country pairs writing `1,234.56` against their language default
const DOT_DECIMAL_COMMA_GROUPING: &[(&str, &str)] = &[
    ("es", "DO"),
    ("es", "GT"),
    ("es", "HN"),
    ("es", "MX"),
    ("es", "NI"),
    ("es", "PA"),
    ("es", "PE"),
    ("es", "PR"),
    ("es", "SV"),
    ("es", "US"),
];

/// Why a numeric text value was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberFormatError {
    /// No digits in the value
    #[error("no digits")]
    Empty,

    /// A character that is neither a digit nor a separator of the locale
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A second decimal separator
    #[error("repeated decimal separator")]
    RepeatedDecimalSeparator,

    /// The value does not fit the target type
    #[error("value out of range")]
    OutOfRange,

    /// A decimal separator in an integer value
    #[error("fractional digits in an integer value")]
    FractionalInteger,
}

/// Decimal and grouping separators of one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    /// Separator between integer and fractional digits
    pub decimal:  char,
    /// Thousands separator
    pub grouping: char,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            decimal:  '.',
            grouping: ',',
        }
    }
}

impl NumberSymbols {
    /// Separators for `locale`: language defaults with country overrides
    pub fn for_locale(locale: &ClientLocale) -> Self {
        let pair = (locale.language(), locale.country());
        match pair {
            _ if DOT_DECIMAL_APOSTROPHE_GROUPING.contains(&pair) => Self {
                decimal:  '.',
                grouping: '\'',
            },
            _ if DOT_DECIMAL_COMMA_GROUPING.contains(&pair) => Self::default(),
            (language, _) if COMMA_DECIMAL_DOT_GROUPING.contains(&language) => Self {
                decimal:  ',',
                grouping: '.',
            },
            (language, _) if COMMA_DECIMAL_SPACE_GROUPING.contains(&language) => Self {
                decimal:  ',',
                grouping: NO_BREAK_SPACE,
            },
            _ => Self::default(),
        }
    }

    /// Parse a decimal value written with these separators
    pub fn parse_decimal(self, text: &str) -> Result<Decimal, NumberFormatError> {
        let digits = self.canonical_digits(text)?;
        Decimal::from_str(&digits).map_err(|_| NumberFormatError::OutOfRange)
    }

    /// Parse a whole number written with these separators
    pub fn parse_integer(self, text: &str) -> Result<i32, NumberFormatError> {
        if text.contains(self.decimal) {
            return Err(NumberFormatError::FractionalInteger);
        }
        self.parse_decimal(text)?
            .to_i32()
            .ok_or(NumberFormatError::OutOfRange)
    }

    /// Rewrite `text` into `-123.45` form, dropping grouping separators
    fn canonical_digits(self, text: &str) -> Result<String, NumberFormatError> {
        let text = text.trim();
        let (negative, unsigned) = text
            .strip_prefix('-')
            .map_or((false, text), |rest| (true, rest));

        let mut integer = String::new();
        let mut fraction = String::new();
        let mut seen_decimal = false;

        for c in unsigned.chars() {
            match self.normalise_space(c) {
                digit if digit.is_ascii_digit() => {
                    if seen_decimal {
                        fraction.push(digit);
                    } else {
                        integer.push(digit);
                    }
                }
                separator if separator == self.decimal => {
                    if seen_decimal {
                        return Err(NumberFormatError::RepeatedDecimalSeparator);
                    }
                    seen_decimal = true;
                }
                separator if separator == self.grouping && !seen_decimal => {}
                other => return Err(NumberFormatError::UnexpectedCharacter(other)),
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return Err(NumberFormatError::Empty);
        }

        let mut canonical = String::with_capacity(integer.len() + fraction.len() + 3);
        if negative {
            canonical.push('-');
        }
        if integer.is_empty() {
            canonical.push('0');
        } else {
            canonical.push_str(&integer);
        }
        if !fraction.is_empty() {
            canonical.push('.');
            canonical.push_str(&fraction);
        }
        Ok(canonical)
    }

    /// Clients type ordinary or narrow spaces where the locale groups with a no-break space
    fn normalise_space(self, c: char) -> char {
        if self.grouping == NO_BREAK_SPACE && matches!(c, ' ' | NARROW_NO_BREAK_SPACE) {
            NO_BREAK_SPACE
        } else {
            c
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "tests fail loudly"
    )]

    use rust_decimal_macros::dec;

    use super::*;

    fn symbols(locale: &str) -> NumberSymbols {
        ClientLocale::parse(locale).unwrap().number_symbols()
    }

    #[test]
    fn test_decimal_per_locale() {
        assert_eq!(symbols("de").parse_decimal("1.234,56").unwrap(), dec!(1234.56));
        assert_eq!(symbols("en").parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(symbols("fr").parse_decimal("1 234,56").unwrap(), dec!(1234.56));
        assert_eq!(
            symbols("fr_FR").parse_decimal("1\u{a0}234,56").unwrap(),
            dec!(1234.56)
        );
        assert_eq!(symbols("de_CH").parse_decimal("1'234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn test_country_overrides_language_default() {
        assert_eq!(symbols("es_MX").parse_decimal("1,500").unwrap(), dec!(1500));
        assert_eq!(symbols("es_US").parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(symbols("es_ES").parse_decimal("1,5").unwrap(), dec!(1.5));
        assert_eq!(symbols("fr_CH").parse_decimal("1'234.50").unwrap(), dec!(1234.50));
        assert_eq!(symbols("de_LI").parse_decimal("1'234.5").unwrap(), dec!(1234.5));
        assert_eq!(symbols("es_mx").parse_integer("2,000").unwrap(), 2000);
    }

    #[test]
    fn test_decimal_keeps_exact_digits() {
        assert_eq!(symbols("en").parse_decimal("0.1").unwrap(), dec!(0.1));
        assert_eq!(symbols("en").parse_decimal("-.5").unwrap(), dec!(-0.5));
        assert_eq!(symbols("en").parse_decimal(" 12 ").unwrap(), dec!(12));
    }

    #[test]
    fn test_decimal_rejects_malformed_text() {
        let en = symbols("en");
        assert_eq!(
            en.parse_decimal("12a").unwrap_err(),
            NumberFormatError::UnexpectedCharacter('a')
        );
        assert_eq!(
            en.parse_decimal("1.2.3").unwrap_err(),
            NumberFormatError::RepeatedDecimalSeparator
        );
        assert_eq!(
            en.parse_decimal("1.234,5").unwrap_err(),
            NumberFormatError::UnexpectedCharacter(',')
        );
        assert_eq!(en.parse_decimal("-").unwrap_err(), NumberFormatError::Empty);
    }

    #[test]
    fn test_integer_rejects_decimal_separator_and_overflow() {
        assert_eq!(symbols("en").parse_integer("1,000").unwrap(), 1000);
        assert_eq!(
            symbols("en").parse_integer("12.0").unwrap_err(),
            NumberFormatError::FractionalInteger
        );
        assert_eq!(
            symbols("de").parse_integer("12,5").unwrap_err(),
            NumberFormatError::FractionalInteger
        );
        assert_eq!(
            symbols("en").parse_integer("2147483648").unwrap_err(),
            NumberFormatError::OutOfRange
        );
        assert_eq!(symbols("en").parse_integer("-2147483648").unwrap(), i32::MIN);
    }
}
