//! Conversion settings shared by every request

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATE_FORMAT_ENV_VAR, DEFAULT_LOCALE_ENV_VAR};

/// Fallbacks applied when a request omits `locale` or `dateFormat`
///
/// The default carries no fallbacks, so a request has to name its own locale
/// and date format whenever it sends locale dependent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionConfig {
    /// Locale used when the request has no `locale` key
    pub default_locale:      Option<String>,
    /// Date pattern used when the request has no `dateFormat` key
    pub default_date_format: Option<String>,
}

impl ConversionConfig {
    /// Read fallbacks from `PLATFORM_COMMANDS_DEFAULT_LOCALE` and
    /// `PLATFORM_COMMANDS_DEFAULT_DATE_FORMAT`, ignoring blank values
    pub fn from_env() -> Self {
        Self {
            default_locale:      non_blank_env(DEFAULT_LOCALE_ENV_VAR),
            default_date_format: non_blank_env(DEFAULT_DATE_FORMAT_ENV_VAR),
        }
    }

    /// Replace the fallback locale
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Replace the fallback date format
    #[must_use]
    pub fn with_default_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.default_date_format = Some(date_format.into());
        self
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
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

    #[test]
    fn test_default_has_no_fallbacks() {
        let config = ConversionConfig::default();
        assert!(config.default_locale.is_none());
        assert!(config.default_date_format.is_none());
    }

    #[test]
    fn test_builders_set_fallbacks() {
        let config = ConversionConfig::default()
            .with_default_locale("en_GB")
            .with_default_date_format("dd MMMM yyyy");
        assert_eq!(config.default_locale.as_deref(), Some("en_GB"));
        assert_eq!(config.default_date_format.as_deref(), Some("dd MMMM yyyy"));
    }

    #[test]
    fn test_missing_env_var_reads_as_none() {
        assert!(non_blank_env("PLATFORM_COMMANDS_TEST_SURELY_UNSET_VARIABLE").is_none());
    }
}
