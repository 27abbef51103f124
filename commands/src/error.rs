//! Errors raised by conversion and the API error body built from them

use serde::Serialize;
use thiserror::Error;

use crate::constants::{
    CODE_INVALID_ARGUMENT, CODE_INVALID_REQUEST_BODY, CODE_PLATFORM_INTERNAL,
    CODE_UNSUPPORTED_PARAMETER, CODE_VALIDATION_ERRORS_EXIST, HTTP_BAD_REQUEST,
    HTTP_INTERNAL_ERROR, MSG_VALIDATION_ERRORS_EXIST,
};

// Error message prefixes
const MSG_FAILED_TO_PREFIX: &str = "Failed to";
const MSG_INVALID_PREFIX: &str = "Invalid";

/// Result type for the `platform_commands` library
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Errors raised while turning a request body into a command
#[derive(Error, Debug)]
pub enum Error {
    /// The body is blank, not JSON, or not a JSON object
    #[error("Invalid JSON request body: {0}")]
    InvalidJson(String),

    /// The body carries keys outside the command's allow-list, in request order
    #[error("Unsupported parameter(s): {}", .0.join(", "))]
    UnsupportedParameters(Vec<String>),

    /// One or more parameter values could not be parsed
    #[error("Validation errors exist.")]
    DataValidation(Vec<ApiParameterError>),

    /// A caller mistake outside the request body
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading request input or writing logs failed
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Anything else
    #[error("{0}")]
    General(String),
}

impl Error {
    // Builder methods for common patterns

    /// Create a "Failed to X" error
    pub fn failed_to(action: &str, details: impl std::fmt::Display) -> Self {
        Self::General(format!("{MSG_FAILED_TO_PREFIX} {action}: {details}"))
    }

    /// Create an "Invalid X" error
    pub fn invalid(what: &str, details: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("{MSG_INVALID_PREFIX} {what}: {details}"))
    }

    /// Create error for IO operations
    pub fn io_failed(
        operation: &str,
        path: &std::path::Path,
        error: impl std::fmt::Display,
    ) -> Self {
        Self::FileOperation(format!(
            "{MSG_FAILED_TO_PREFIX} {operation} {}: {error}",
            path.display()
        ))
    }

    /// Per-parameter errors carried by this error, empty for non-validation errors
    pub fn parameter_errors(&self) -> &[ApiParameterError] {
        match self {
            Self::DataValidation(errors) => errors,
            _ => &[],
        }
    }
}

/// One rejected parameter, in the shape the platform API reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParameterError {
    /// Message for the developer of the calling application
    pub developer_message:               String,
    /// Message to show when the code has no translation
    pub default_user_message:            String,
    /// Code clients translate into their own message
    pub user_message_globalisation_code: String,
    /// JSON key of the rejected parameter
    pub parameter_name:                  String,
    /// Rejected value as sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value:                           Option<String>,
    /// Values substituted into the translated message
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args:                            Vec<String>,
}

impl ApiParameterError {
    /// Create an error for `parameter_name` with a globalisation code and default message
    pub fn parameter_error(
        globalisation_code: &str,
        default_message: impl Into<String>,
        parameter_name: &str,
    ) -> Self {
        let default_message = default_message.into();
        Self {
            developer_message:               default_message.clone(),
            default_user_message:            default_message,
            user_message_globalisation_code: globalisation_code.to_string(),
            parameter_name:                  parameter_name.to_string(),
            value:                           None,
            args:                            Vec::new(),
        }
    }

    /// Record the rejected value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Append a message argument
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// JSON error body returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Message for the developer of the calling application
    pub developer_message:               String,
    /// HTTP status the API answers with
    pub http_status_code:                String,
    /// Message to show when the code has no translation
    pub default_user_message:            String,
    /// Code clients translate into their own message
    pub user_message_globalisation_code: String,
    /// Per-parameter errors, empty unless validation failed
    pub errors:                          Vec<ApiParameterError>,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        match error {
            Error::InvalidJson(details) => Self {
                developer_message:               format!(
                    "The request body could not be read: {details}"
                ),
                http_status_code:                HTTP_BAD_REQUEST.to_string(),
                default_user_message:            "The request body is invalid.".to_string(),
                user_message_globalisation_code: CODE_INVALID_REQUEST_BODY.to_string(),
                errors:                          Vec::new(),
            },
            Error::UnsupportedParameters(names) => Self {
                developer_message:               "The request was invalid. This typically will happen due to validation errors which are provided.".to_string(),
                http_status_code:                HTTP_BAD_REQUEST.to_string(),
                default_user_message:            MSG_VALIDATION_ERRORS_EXIST.to_string(),
                user_message_globalisation_code: CODE_VALIDATION_ERRORS_EXIST.to_string(),
                errors:                          names
                    .iter()
                    .map(|name| {
                        ApiParameterError::parameter_error(
                            CODE_UNSUPPORTED_PARAMETER,
                            format!("The parameter {name} is not supported."),
                            name,
                        )
                        .with_value(name.clone())
                    })
                    .collect(),
            },
            Error::DataValidation(errors) => Self {
                developer_message:               "The request was invalid. This typically will happen due to validation errors which are provided.".to_string(),
                http_status_code:                HTTP_BAD_REQUEST.to_string(),
                default_user_message:            MSG_VALIDATION_ERRORS_EXIST.to_string(),
                user_message_globalisation_code: CODE_VALIDATION_ERRORS_EXIST.to_string(),
                errors:                          errors.clone(),
            },
            Error::InvalidArgument(details) => Self {
                developer_message:               details.clone(),
                http_status_code:                HTTP_BAD_REQUEST.to_string(),
                default_user_message:            details.clone(),
                user_message_globalisation_code: CODE_INVALID_ARGUMENT.to_string(),
                errors:                          Vec::new(),
            },
            Error::FileOperation(details) | Error::General(details) => Self {
                developer_message:               details.clone(),
                http_status_code:                HTTP_INTERNAL_ERROR.to_string(),
                default_user_message:            "An unexpected error occurred.".to_string(),
                user_message_globalisation_code: CODE_PLATFORM_INTERNAL.to_string(),
                errors:                          Vec::new(),
            },
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

    use serde_json::json;

    use super::*;

    #[test]
    fn test_unsupported_parameters_body_lists_each_key() {
        let error = Error::UnsupportedParameters(vec!["colour".to_string(), "size".to_string()]);
        let body = ErrorBody::from(&error);

        assert_eq!(body.http_status_code, "400");
        assert_eq!(body.errors.len(), 2);
        assert_eq!(body.errors[0].parameter_name, "colour");
        assert_eq!(
            body.errors[1].user_message_globalisation_code,
            "error.msg.parameter.unsupported"
        );
        assert_eq!(error.to_string(), "Unsupported parameter(s): colour, size");
    }

    #[test]
    fn test_parameter_error_serializes_in_api_shape() {
        let error = ApiParameterError::parameter_error(
            "validation.msg.invalid.decimal.format",
            "The parameter amount has value: x which is invalid decimal value for provided locale of [en].",
            "amount",
        )
        .with_value("x")
        .with_arg("x")
        .with_arg("en");

        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["parameterName"], json!("amount"));
        assert_eq!(value["value"], json!("x"));
        assert_eq!(value["args"], json!(["x", "en"]));
        assert_eq!(
            value["userMessageGlobalisationCode"],
            json!("validation.msg.invalid.decimal.format")
        );
    }

    #[test]
    fn test_general_errors_map_to_internal_status() {
        let body = ErrorBody::from(&Error::failed_to("read input", "broken pipe"));
        assert_eq!(body.http_status_code, "500");
        assert_eq!(body.developer_message, "Failed to read input: broken pipe");
    }
}
