//! Date patterns in the `dd MMMM yyyy` style used by API clients
//!
//! This module uses nom to tokenize patterns such as:
//! - `dd MMMM yyyy`
//! - `dd/MM/yy`
//! - `yyyyMMdd`
//! - `d 'de' MMMM 'de' yyyy`
//!
//! Supported letters are `d` (day), `M` (month, numeric up to two letters,
//! by name from three) and `y`/`Y` (year, `yy` is a two-digit year).

use chrono::{Datelike, Local, NaiveDate};
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_while_m_n, take_while1};
use nom::character::complete::{char, satisfy};
use nom::combinator::{all_consuming, value};
use nom::error::ErrorKind;
use nom::multi::{many0, many1};
use nom::sequence::delimited;
use nom::{IResult, Parser};
use thiserror::Error;

use super::month_names;

/// Two-digit years land in the hundred years starting this many years ago
const TWO_DIGIT_YEAR_LOOKBACK: i32 = 80;

/// Longest run of digits read for an unbounded year
const MAX_YEAR_DIGITS: usize = 9;

/// Why a date value or pattern was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    /// The pattern uses letters or quoting that cannot be parsed
    #[error("unsupported date pattern '{0}'")]
    InvalidPattern(String),

    /// The text does not follow the pattern
    #[error("text does not match the date pattern")]
    Mismatch,

    /// The fields parsed but do not form a calendar date
    #[error("not a calendar date")]
    InvalidDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternToken {
    Day { width: usize },
    Month { width: usize },
    Year { width: usize },
    Literal(String),
}

impl PatternToken {
    const fn is_numeric(&self) -> bool {
        match self {
            Self::Day { .. } | Self::Year { .. } => true,
            Self::Month { width } => *width <= 2,
            Self::Literal(_) => false,
        }
    }
}

/// A compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    tokens: Vec<PatternToken>,
}

impl DatePattern {
    /// Tokenize `pattern`
    pub fn compile(pattern: &str) -> Result<Self, DateFormatError> {
        let (_, tokens) = all_consuming(many0(alt((
            escaped_quote,
            quoted_text,
            pattern_letters,
            literal_text,
        ))))
        .parse(pattern)
        .map_err(|_| DateFormatError::InvalidPattern(pattern.to_string()))?;

        Ok(Self { tokens })
    }

    /// Parse `text` with month names in `language`
    pub fn parse(&self, text: &str, language: &str) -> Result<NaiveDate, DateFormatError> {
        self.parse_in_year(text, language, Local::now().year())
    }

    /// Parse `text` with two-digit years resolved around `current_year`
    pub fn parse_in_year(
        &self,
        text: &str,
        language: &str,
        current_year: i32,
    ) -> Result<NaiveDate, DateFormatError> {
        let lowered = text.trim().to_lowercase();
        let names = month_names::for_language(language);

        let mut rest = lowered.as_str();
        let mut day = 1;
        let mut month = 1;
        let mut year = 1970;

        for (index, token) in self.tokens.iter().enumerate() {
            let fixed_width = self
                .tokens
                .get(index + 1)
                .is_some_and(PatternToken::is_numeric);

            match token {
                PatternToken::Literal(literal) => {
                    rest = rest
                        .strip_prefix(literal.to_lowercase().as_str())
                        .ok_or(DateFormatError::Mismatch)?;
                }
                PatternToken::Day { width } => {
                    let (remaining, digits) = numeric_field(rest, *width, 2, fixed_width)?;
                    day = parse_number(digits)?;
                    rest = remaining;
                }
                PatternToken::Month { width } if *width >= 3 => {
                    let (number, length) =
                        month_names::match_prefix(names, rest).ok_or(DateFormatError::Mismatch)?;
                    month = number;
                    rest = &rest[length..];
                }
                PatternToken::Month { width } => {
                    let (remaining, digits) = numeric_field(rest, *width, 2, fixed_width)?;
                    month = parse_number(digits)?;
                    rest = remaining;
                }
                PatternToken::Year { width } => {
                    let (remaining, digits) =
                        numeric_field(rest, *width, MAX_YEAR_DIGITS, fixed_width)?;
                    let parsed: i32 = parse_number(digits)?;
                    year = if *width == 2 && digits.len() == 2 {
                        two_digit_year(parsed, current_year)
                    } else {
                        parsed
                    };
                    rest = remaining;
                }
            }
        }

        if !rest.is_empty() {
            return Err(DateFormatError::Mismatch);
        }

        NaiveDate::from_ymd_opt(year, month, day).ok_or(DateFormatError::InvalidDate)
    }
}

/// `''` outside quotes is a literal quote
fn escaped_quote(input: &str) -> IResult<&str, PatternToken> {
    value(PatternToken::Literal("'".to_string()), tag("''")).parse(input)
}

/// `'text'` is literal text, `''` inside it is a quote
fn quoted_text(input: &str) -> IResult<&str, PatternToken> {
    delimited(
        char('\''),
        many1(alt((value("'", tag("''")), is_not("'")))),
        char('\''),
    )
    .map(|parts: Vec<&str>| PatternToken::Literal(parts.concat()))
    .parse(input)
}

/// A run of one repeated pattern letter
fn pattern_letters(input: &str) -> IResult<&str, PatternToken> {
    let first: IResult<&str, char> = satisfy(|c: char| c.is_ascii_alphabetic()).parse(input);
    let (_, letter) = first?;
    let run: IResult<&str, &str> = take_while1(|c: char| c == letter).parse(input);
    let (rest, run) = run?;
    let width = run.len();

    let token = match letter {
        'd' => PatternToken::Day { width },
        'M' => PatternToken::Month { width },
        'y' | 'Y' => PatternToken::Year { width },
        _ => {
            return Err(nom::Err::Failure(nom::error::Error::new(
                input,
                ErrorKind::Verify,
            )));
        }
    };
    Ok((rest, token))
}

/// Anything that is neither a letter nor a quote
fn literal_text(input: &str) -> IResult<&str, PatternToken> {
    take_while1(|c: char| !c.is_ascii_alphabetic() && c != '\'')
        .map(|text: &str| PatternToken::Literal(text.to_string()))
        .parse(input)
}

/// Digits of one numeric field: exactly `width` when the next field is also
/// numeric, otherwise between one and `max(width, default_max)`
fn numeric_field(
    input: &str,
    width: usize,
    default_max: usize,
    fixed_width: bool,
) -> Result<(&str, &str), DateFormatError> {
    let (min, max) = if fixed_width {
        (width, width)
    } else {
        (1, width.max(default_max))
    };

    let result: IResult<&str, &str> =
        take_while_m_n(min, max, |c: char| c.is_ascii_digit()).parse(input);
    result.map_err(|_| DateFormatError::Mismatch)
}

fn parse_number<T: std::str::FromStr>(digits: &str) -> Result<T, DateFormatError> {
    digits.parse().map_err(|_| DateFormatError::Mismatch)
}

fn two_digit_year(two_digits: i32, current_year: i32) -> i32 {
    let start = current_year - TWO_DIGIT_YEAR_LOOKBACK;
    start + (two_digits - start).rem_euclid(100)
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "tests fail loudly"
    )]

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_full_month_name() {
        let pattern = DatePattern::compile("dd MMMM yyyy").unwrap();
        assert_eq!(
            pattern.parse("01 January 2013", "en").unwrap(),
            date(2013, 1, 1)
        );
        assert_eq!(
            pattern.parse("15 avril 2013", "fr").unwrap(),
            date(2013, 4, 15)
        );
        assert_eq!(
            pattern.parse("3 März 2012", "de").unwrap(),
            date(2012, 3, 3)
        );
    }

    #[test]
    fn test_short_month_name_in_french_keeps_dot() {
        let pattern = DatePattern::compile("dd MMM yyyy").unwrap();
        assert_eq!(
            pattern.parse("02 févr. 2014", "fr").unwrap(),
            date(2014, 2, 2)
        );
    }

    #[test]
    fn test_numeric_pattern_with_separators() {
        let pattern = DatePattern::compile("dd/MM/yyyy").unwrap();
        assert_eq!(pattern.parse("5/6/2013", "en").unwrap(), date(2013, 6, 5));
        assert_eq!(
            pattern.parse("31/02/2013", "en").unwrap_err(),
            DateFormatError::InvalidDate
        );
        assert_eq!(
            pattern.parse("05-06-2013", "en").unwrap_err(),
            DateFormatError::Mismatch
        );
    }

    #[test]
    fn test_adjacent_numeric_fields_use_fixed_widths() {
        let pattern = DatePattern::compile("yyyyMMdd").unwrap();
        assert_eq!(pattern.parse("20130415", "en").unwrap(), date(2013, 4, 15));
    }

    #[test]
    fn test_two_digit_year_window() {
        let pattern = DatePattern::compile("dd/MM/yy").unwrap();
        assert_eq!(
            pattern.parse_in_year("01/01/45", "en", 2026).unwrap(),
            date(2045, 1, 1)
        );
        assert_eq!(
            pattern.parse_in_year("01/01/46", "en", 2026).unwrap(),
            date(1946, 1, 1)
        );
        assert_eq!(
            pattern.parse_in_year("01/01/2013", "en", 2026).unwrap(),
            date(2013, 1, 1)
        );
    }

    #[test]
    fn test_quoted_literals() {
        let pattern = DatePattern::compile("d 'de' MMMM 'de' yyyy").unwrap();
        assert_eq!(
            pattern.parse("7 de julio de 2013", "es").unwrap(),
            date(2013, 7, 7)
        );

        let pattern = DatePattern::compile("dd MMMM ''yy").unwrap();
        assert_eq!(
            pattern.parse_in_year("01 May '13", "en", 2026).unwrap(),
            date(2013, 5, 1)
        );
    }

    #[test]
    fn test_unsupported_letters_and_unterminated_quotes() {
        assert_eq!(
            DatePattern::compile("EEE dd MMMM yyyy").unwrap_err(),
            DateFormatError::InvalidPattern("EEE dd MMMM yyyy".to_string())
        );
        assert!(DatePattern::compile("dd 'of MMMM").is_err());
    }

    #[test]
    fn test_trailing_text_is_rejected() {
        let pattern = DatePattern::compile("dd MMMM yyyy").unwrap();
        assert_eq!(
            pattern.parse("01 January 2013 extra", "en").unwrap_err(),
            DateFormatError::Mismatch
        );
    }
}
