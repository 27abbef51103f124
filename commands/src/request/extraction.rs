//! Typed parameter readers over one JSON request object
//!
//! Readers never fail fast. Each problem becomes an `ApiParameterError` in
//! the extraction's collector and the reader returns `None`, so one response
//! can report every bad parameter of a request.

use std::str::FromStr;

use chrono::NaiveDate;
use error_stack::Report;
use once_cell::unsync::OnceCell;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Number, Value};
use tracing::trace;

use super::ModifiedParameters;
use crate::config::ConversionConfig;
use crate::constants::{
    CODE_INVALID_DATE, CODE_INVALID_DECIMAL, CODE_INVALID_INTEGER, CODE_INVALID_LONG,
    CODE_INVALID_TYPE, CODE_MISSING_DATE_FORMAT, CODE_MISSING_LOCALE, PARAM_DATE_FORMAT,
    PARAM_LOCALE,
};
use crate::error::{ApiParameterError, Error, Result};
use crate::json_traits::{JsonFieldAccess, ScalarText, ScalarValue};
use crate::locale::{ClientLocale, DateFormatError, DatePattern};

/// Outcome of resolving the request locale
#[derive(Debug, Clone, Copy)]
pub enum LocaleLookup<'a> {
    /// Neither the request nor the configuration names a locale
    Missing,
    /// A locale was named but rejected, errors already reported
    Invalid,
    /// The locale to parse with
    Valid(&'a ClientLocale),
}

#[derive(Debug)]
enum ResolvedLocale {
    Missing,
    Invalid,
    Valid(ClientLocale),
}

/// The `locale` and `dateFormat` of one request, resolved on first use
///
/// Resolution is shared by nested extractions, so locale errors are reported
/// once per request no matter how many parameters depend on it.
#[derive(Debug)]
pub struct RequestFormatting {
    locale_text:      Option<String>,
    date_format_text: Option<String>,
    locale:           OnceCell<ResolvedLocale>,
    date_pattern:     OnceCell<Option<std::result::Result<DatePattern, DateFormatError>>>,
}

impl RequestFormatting {
    /// Read `locale` and `dateFormat` from `object`, falling back to `config`
    /// when a key is absent
    pub fn from_request(object: &Map<String, Value>, config: &ConversionConfig) -> Self {
        let locale_text = object.get_field_text(PARAM_LOCALE).map_or_else(
            || config.default_locale.clone(),
            |text| Some(text.non_blank().unwrap_or_default().to_string()),
        );
        let date_format_text = object.get_field_text(PARAM_DATE_FORMAT).map_or_else(
            || {
                config
                    .default_date_format
                    .as_deref()
                    .map(str::trim)
                    .filter(|format| !format.is_empty())
                    .map(ToString::to_string)
            },
            ScalarText::into_trimmed,
        );

        Self {
            locale_text,
            date_format_text,
            locale: OnceCell::new(),
            date_pattern: OnceCell::new(),
        }
    }

    /// Resolve the locale, pushing its validation errors the first time only
    pub fn resolve_locale(&self, errors: &mut Vec<ApiParameterError>) -> LocaleLookup<'_> {
        let resolved = self.locale.get_or_init(|| match &self.locale_text {
            None => ResolvedLocale::Missing,
            Some(text) => match ClientLocale::parse(text) {
                Ok(locale) => {
                    trace!("Resolved request locale {locale}");
                    ResolvedLocale::Valid(locale)
                }
                Err(locale_errors) => {
                    errors.extend(locale_errors);
                    ResolvedLocale::Invalid
                }
            },
        });

        match resolved {
            ResolvedLocale::Missing => LocaleLookup::Missing,
            ResolvedLocale::Invalid => LocaleLookup::Invalid,
            ResolvedLocale::Valid(locale) => LocaleLookup::Valid(locale),
        }
    }

    /// The compiled date pattern, `None` when no date format was given
    pub fn date_pattern(&self) -> Option<&std::result::Result<DatePattern, DateFormatError>> {
        self.date_pattern
            .get_or_init(|| self.date_format_text.as_deref().map(DatePattern::compile))
            .as_ref()
    }

    /// The date format text as the client sent it
    pub fn date_format_text(&self) -> &str {
        self.date_format_text.as_deref().unwrap_or_default()
    }

    /// The locale text as the client sent it
    pub fn locale_text(&self) -> &str {
        self.locale_text.as_deref().unwrap_or_default()
    }
}

/// Types a command field can be read as
pub trait FromParameter: Sized {
    /// Read parameter `name`, recording problems in `extraction`
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self;
}

/// Reader state for one JSON object
pub struct Extraction<'r> {
    object:     &'r Map<String, Value>,
    formatting: &'r RequestFormatting,
    modified:   ModifiedParameters,
    errors:     Vec<ApiParameterError>,
}

impl<'r> Extraction<'r> {
    /// Start reading `object` with the request's `formatting`
    pub fn new(object: &'r Map<String, Value>, formatting: &'r RequestFormatting) -> Self {
        Self {
            object,
            formatting,
            modified: ModifiedParameters::default(),
            errors: Vec::new(),
        }
    }

    /// A reader over an element object that shares this request's formatting
    pub fn nested(&self, object: &'r Map<String, Value>) -> Self {
        Self::new(object, self.formatting)
    }

    /// Take over the errors of a nested reader
    pub fn absorb(&mut self, child: Extraction<'_>) {
        self.errors.extend(child.errors);
    }

    /// Hand the set of present parameters to the command being built
    pub fn take_modified(&mut self) -> ModifiedParameters {
        std::mem::take(&mut self.modified)
    }

    /// Errors collected so far
    pub fn errors(&self) -> &[ApiParameterError] {
        &self.errors
    }

    /// Turn collected errors into one `DataValidation` error
    pub fn finish(self) -> Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }

        let count = self.errors.len();
        Err(Report::new(Error::DataValidation(self.errors))
            .attach(format!("{count} parameter error(s)")))
    }

    fn present(&mut self, name: &str) -> Option<&'r Value> {
        let value = self.object.get_field(name)?;
        self.modified.insert(name);
        Some(value)
    }

    fn push(&mut self, error: ApiParameterError) {
        self.errors.push(error);
    }

    /// Trimmed text, numbers and booleans stringified
    ///
    /// Blank text stays `Some("")` so clearing a value differs from `null`.
    pub fn string(&mut self, name: &str) -> Option<String> {
        let value = self.present(name)?;
        match value.scalar_text() {
            ScalarText::Null => None,
            ScalarText::Composite => {
                self.push(invalid_type(name, value, "a single value"));
                None
            }
            ScalarText::Text(text) => Some(text.trim().to_string()),
        }
    }

    /// Whole number, fractional digits dropped, no locale involved
    pub fn long(&mut self, name: &str) -> Option<i64> {
        let value = self.present(name)?;
        let text = match value.scalar_text() {
            ScalarText::Composite => {
                self.push(invalid_type(name, value, "a number"));
                return None;
            }
            text => text.into_trimmed()?,
        };

        let parsed = text.parse::<i64>().ok().or_else(|| {
            parse_plain_decimal(&text).and_then(|decimal| decimal.trunc().to_i64())
        });
        if parsed.is_none() {
            self.push(
                ApiParameterError::parameter_error(
                    CODE_INVALID_LONG,
                    format!("The parameter {name} has value: {text} which is invalid long value."),
                    name,
                )
                .with_value(text.clone())
                .with_arg(text),
            );
        }
        parsed
    }

    /// Whole number in `i32` range, text parsed with the request locale
    pub fn integer(&mut self, name: &str) -> Option<i32> {
        let value = self.present(name)?;
        match value {
            Value::Number(number) => {
                let parsed = number_decimal(number)
                    .filter(|decimal| decimal.fract().is_zero())
                    .and_then(|decimal| decimal.to_i32());
                if parsed.is_none() {
                    let error = self.invalid_number(name, &number.to_string(), NumberKind::Integer);
                    self.push(error);
                }
                parsed
            }
            _ => {
                let text = self.locale_text_value(name, value, "a number")?;
                let LocaleLookup::Valid(locale) = self.locale_for(name) else {
                    return None;
                };
                let parsed = locale.number_symbols().parse_integer(&text).ok();
                if parsed.is_none() {
                    let error = self.invalid_number(name, &text, NumberKind::Integer);
                    self.push(error);
                }
                parsed
            }
        }
    }

    /// Exact decimal, text parsed with the request locale
    pub fn decimal(&mut self, name: &str) -> Option<Decimal> {
        let value = self.present(name)?;
        match value {
            Value::Number(number) => {
                let parsed = number_decimal(number);
                if parsed.is_none() {
                    let error = self.invalid_number(name, &number.to_string(), NumberKind::Decimal);
                    self.push(error);
                }
                parsed
            }
            _ => {
                let text = self.locale_text_value(name, value, "a number")?;
                let LocaleLookup::Valid(locale) = self.locale_for(name) else {
                    return None;
                };
                let parsed = locale.number_symbols().parse_decimal(&text).ok();
                if parsed.is_none() {
                    let error = self.invalid_number(name, &text, NumberKind::Decimal);
                    self.push(error);
                }
                parsed
            }
        }
    }

    /// JSON `true` or the text `true` in any case, everything else is `false`
    pub fn boolean(&mut self, name: &str) -> bool {
        match self.present(name) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Calendar date parsed with the request `dateFormat` and `locale`
    pub fn date(&mut self, name: &str) -> Option<NaiveDate> {
        let value = self.present(name)?;
        let text = self.locale_text_value(name, value, "a date")?;

        let formatting = self.formatting;
        let pattern = formatting.date_pattern();
        if pattern.is_none() {
            self.push(ApiParameterError::parameter_error(
                CODE_MISSING_DATE_FORMAT,
                format!("The parameter '{name}' requires a '{PARAM_DATE_FORMAT}' parameter to be passed with it."),
                name,
            ));
        }
        let locale = self.locale_for(name);

        let (Some(pattern), LocaleLookup::Valid(locale)) = (pattern, locale) else {
            return None;
        };

        let parsed = pattern
            .as_ref()
            .ok()
            .and_then(|pattern| pattern.parse(&text, locale.language()).ok());
        if parsed.is_none() {
            self.push(
                ApiParameterError::parameter_error(
                    CODE_INVALID_DATE,
                    format!(
                        "The parameter {name} is invalid based on the dateFormat: '{}' and locale: '{locale}' provided:",
                        formatting.date_format_text()
                    ),
                    name,
                )
                .with_value(text.clone())
                .with_arg(text)
                .with_arg(formatting.date_format_text()),
            );
        }
        parsed
    }

    /// Array of scalars, each stringified and trimmed, nulls skipped
    pub fn string_array(&mut self, name: &str) -> Option<Vec<String>> {
        let value = self.present(name)?;
        match value {
            Value::Null => None,
            Value::Array(items) => {
                let mut strings = Vec::with_capacity(items.len());
                for item in items {
                    match item.scalar_text() {
                        ScalarText::Null => {}
                        ScalarText::Composite => {
                            self.push(invalid_type(name, value, "an array of values"));
                            return None;
                        }
                        ScalarText::Text(text) => strings.push(text.trim().to_string()),
                    }
                }
                Some(strings)
            }
            _ => {
                self.push(invalid_type(name, value, "an array of values"));
                None
            }
        }
    }

    /// Array of JSON objects for nested extraction
    pub fn object_array(&mut self, name: &str) -> Option<Vec<&'r Map<String, Value>>> {
        let value = self.present(name)?;
        match value {
            Value::Null => None,
            Value::Array(items) => {
                let objects: Option<Vec<_>> = items.iter().map(Value::as_object).collect();
                if objects.is_none() {
                    self.push(invalid_type(name, value, "an array of objects"));
                }
                objects
            }
            _ => {
                self.push(invalid_type(name, value, "an array of objects"));
                None
            }
        }
    }

    /// Non-blank text of a value read through the locale, type errors recorded
    fn locale_text_value(&mut self, name: &str, value: &Value, expected: &str) -> Option<String> {
        match value.scalar_text() {
            ScalarText::Composite => {
                self.push(invalid_type(name, value, expected));
                None
            }
            text => text.into_trimmed(),
        }
    }

    /// Resolve the locale for parameter `name`, reporting it missing against `name`
    fn locale_for(&mut self, name: &str) -> LocaleLookup<'r> {
        let formatting = self.formatting;
        let lookup = formatting.resolve_locale(&mut self.errors);
        if matches!(lookup, LocaleLookup::Missing) {
            self.push(ApiParameterError::parameter_error(
                CODE_MISSING_LOCALE,
                format!("The parameter '{name}' requires a '{PARAM_LOCALE}' parameter to be passed with it."),
                name,
            ));
        }
        lookup
    }

    fn invalid_number(&self, name: &str, text: &str, kind: NumberKind) -> ApiParameterError {
        let locale = self.formatting.locale_text();
        let (code, label) = match kind {
            NumberKind::Integer => (CODE_INVALID_INTEGER, "integer"),
            NumberKind::Decimal => (CODE_INVALID_DECIMAL, "decimal"),
        };
        ApiParameterError::parameter_error(
            code,
            format!(
                "The parameter {name} has value: {text} which is invalid {label} value for provided locale of [{locale}]."
            ),
            name,
        )
        .with_value(text)
        .with_arg(text)
        .with_arg(locale)
    }
}

#[derive(Clone, Copy)]
enum NumberKind {
    Integer,
    Decimal,
}

fn invalid_type(name: &str, value: &Value, expected: &str) -> ApiParameterError {
    ApiParameterError::parameter_error(
        CODE_INVALID_TYPE,
        format!("The parameter {name} has an invalid type, expected {expected}."),
        name,
    )
    .with_value(value.to_string())
    .with_arg(expected)
}

/// Exact value of a JSON number, exponent notation included
fn number_decimal(number: &Number) -> Option<Decimal> {
    parse_plain_decimal(&number.to_string())
}

fn parse_plain_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

impl FromParameter for Option<String> {
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self {
        extraction.string(name)
    }
}

impl FromParameter for Option<i64> {
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self {
        extraction.long(name)
    }
}

impl FromParameter for Option<i32> {
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self {
        extraction.integer(name)
    }
}

impl FromParameter for Option<Decimal> {
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self {
        extraction.decimal(name)
    }
}

impl FromParameter for bool {
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self {
        extraction.boolean(name)
    }
}

impl FromParameter for Option<NaiveDate> {
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self {
        extraction.date(name)
    }
}

impl FromParameter for Option<Vec<String>> {
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self {
        extraction.string_array(name)
    }
}
