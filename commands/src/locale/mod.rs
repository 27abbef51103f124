//! Client locales and the locale dependent number and date formats

mod date_format;
mod iso_codes;
mod month_names;
mod number_format;

use std::fmt;

pub use date_format::{DateFormatError, DatePattern};
pub use number_format::{NumberFormatError, NumberSymbols};

use crate::constants::{CODE_INVALID_LOCALE, PARAM_LOCALE};
use crate::error::ApiParameterError;

/// A validated `lang[_COUNTRY[_variant]]` locale sent by an API client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientLocale {
    language: String,
    country:  String,
    variant:  String,
}

impl ClientLocale {
    /// Parse and validate locale text
    ///
    /// Language and country problems are reported together so a client can
    /// fix both in one round trip.
    pub fn parse(text: &str) -> Result<Self, Vec<ApiParameterError>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(vec![ApiParameterError::parameter_error(
                CODE_INVALID_LOCALE,
                "The parameter locale is invalid. It cannot be blank.",
                PARAM_LOCALE,
            )]);
        }

        let parts: Vec<&str> = text.split('_').collect();
        let (language, country, variant) = match parts.as_slice() {
            [language] => (*language, "", ""),
            [language, country] => (*language, *country, ""),
            [language, country, variant] => (*language, *country, *variant),
            _ => ("", "", ""),
        };

        let mut errors = Vec::new();
        if !iso_codes::is_language(language) {
            errors.push(
                ApiParameterError::parameter_error(
                    CODE_INVALID_LOCALE,
                    format!("The parameter locale has an invalid language value {language} ."),
                    PARAM_LOCALE,
                )
                .with_value(text)
                .with_arg(language),
            );
        }
        if !country.trim().is_empty() && !iso_codes::is_country(country) {
            errors.push(
                ApiParameterError::parameter_error(
                    CODE_INVALID_LOCALE,
                    format!("The parameter locale has an invalid country value {country} ."),
                    PARAM_LOCALE,
                )
                .with_value(text)
                .with_arg(country),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            country:  country.to_ascii_uppercase(),
            variant:  variant.to_string(),
        })
    }

    /// Lowercase language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase country code, empty when the locale has none
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Variant, empty when the locale has none
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Decimal and grouping separators of this locale
    pub fn number_symbols(&self) -> NumberSymbols {
        NumberSymbols::for_locale(self)
    }
}

impl fmt::Display for ClientLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}
