//! JSON request bodies and the typed extraction of their parameters

mod extraction;
mod modified;

use error_stack::{Report, ResultExt};
pub use extraction::{Extraction, FromParameter, LocaleLookup, RequestFormatting};
pub use modified::ModifiedParameters;
use serde_json::{Map, Value};
use tracing::warn;

use crate::config::ConversionConfig;
use crate::error::{Error, Result};

/// A request body known to be a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRequest {
    object: Map<String, Value>,
}

impl JsonRequest {
    /// Parse request text
    ///
    /// Blank text, malformed JSON and JSON that is not an object are all
    /// rejected as `InvalidJson`.
    pub fn parse(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Err(Report::new(Error::InvalidJson(
                "the request body is blank".to_string(),
            )));
        }

        let value: Value = serde_json::from_str(json)
            .change_context(Error::InvalidJson("the request body is not valid JSON".to_string()))?;

        match value {
            Value::Object(object) => Ok(Self { object }),
            other => Err(Report::new(Error::InvalidJson(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )))),
        }
    }

    /// Reject every key outside `supported`, reported in request order
    pub fn check_supported(&self, supported: &[&str]) -> Result<()> {
        let unsupported: Vec<String> = self
            .object
            .keys()
            .filter(|key| !supported.contains(&key.as_str()))
            .cloned()
            .collect();

        if unsupported.is_empty() {
            return Ok(());
        }

        warn!(
            "Rejecting request with unsupported parameter(s): {}",
            unsupported.join(", ")
        );
        Err(Report::new(Error::UnsupportedParameters(unsupported))
            .attach(format!("Supported parameters: {}", supported.join(", "))))
    }

    /// The top-level JSON object
    pub const fn object(&self) -> &Map<String, Value> {
        &self.object
    }

    /// Locale and date format of this request
    pub fn formatting(&self, config: &ConversionConfig) -> RequestFormatting {
        RequestFormatting::from_request(&self.object, config)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
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

    use super::*;

    #[test]
    fn test_blank_body_is_invalid_json() {
        for body in ["", "   ", "\n\t"] {
            let report = JsonRequest::parse(body).unwrap_err();
            assert!(matches!(report.current_context(), Error::InvalidJson(_)));
        }
    }

    #[test]
    fn test_malformed_and_non_object_bodies_are_invalid_json() {
        for body in ["{\"name\": ", "[1, 2]", "\"text\"", "null"] {
            let report = JsonRequest::parse(body).unwrap_err();
            assert!(
                matches!(report.current_context(), Error::InvalidJson(_)),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn test_unsupported_keys_reported_in_request_order() {
        let request =
            JsonRequest::parse(r#"{"zeta": 1, "name": "x", "alpha": 2, "externalId": "e"}"#)
                .unwrap();
        let report = request.check_supported(&["name", "externalId"]).unwrap_err();

        let Error::UnsupportedParameters(keys) = report.current_context() else {
            panic!("expected unsupported parameters");
        };
        assert_eq!(keys, &vec!["zeta".to_string(), "alpha".to_string()]);
    }

    #[test]
    fn test_supported_keys_pass() {
        let request = JsonRequest::parse(r#"{"name": "x"}"#).unwrap();
        assert!(request.check_supported(&["name", "externalId"]).is_ok());
        assert_eq!(request.object().len(), 1);
    }
}
