//! Constants for request parameters, globalisation codes and environment
//!
//! This module contains the JSON keys that steer parsing, the message codes
//! carried by `ApiParameterError`, and the environment variable names read by
//! configuration and logging.

// ============================================================================
// FORMATTING PARAMETERS
// ============================================================================

/// JSON key carrying the client locale, e.g. `en_GB`
pub const PARAM_LOCALE: &str = "locale";

/// JSON key carrying the date pattern used for every date parameter
pub const PARAM_DATE_FORMAT: &str = "dateFormat";

// ============================================================================
// GLOBALISATION CODES
// ============================================================================

/// Top-level code of a data validation failure
pub const CODE_VALIDATION_ERRORS_EXIST: &str = "validation.msg.validation.errors.exist";
/// Top-level message of a data validation failure
pub const MSG_VALIDATION_ERRORS_EXIST: &str = "Validation errors exist.";

/// Code of a locale-sensitive value sent without a locale
pub const CODE_MISSING_LOCALE: &str = "validation.msg.missing.locale.parameter";
/// Code of a date sent without a date format
pub const CODE_MISSING_DATE_FORMAT: &str = "validation.msg.missing.dateFormat.parameter";
/// Code of a locale that names an unknown language or country
pub const CODE_INVALID_LOCALE: &str = "validation.msg.invalid.locale.format";
/// Code of a date that does not match the date format
pub const CODE_INVALID_DATE: &str = "validation.msg.invalid.date.format";
/// Code of an integer that cannot be read
pub const CODE_INVALID_INTEGER: &str = "validation.msg.invalid.integer.format";
/// Code of a decimal that cannot be read
pub const CODE_INVALID_DECIMAL: &str = "validation.msg.invalid.decimal.format";
/// Code of an identifier that cannot be read
pub const CODE_INVALID_LONG: &str = "validation.msg.invalid.long.format";
/// Code of a value with the wrong JSON type
pub const CODE_INVALID_TYPE: &str = "validation.msg.invalid.parameter.type";

/// Per-parameter code of an unsupported JSON key
pub const CODE_UNSUPPORTED_PARAMETER: &str = "error.msg.parameter.unsupported";
/// Code of a request body that is blank or not a JSON object
pub const CODE_INVALID_REQUEST_BODY: &str = "error.msg.invalid.request.body";
/// Code of a caller mistake outside the request body
pub const CODE_INVALID_ARGUMENT: &str = "error.msg.invalid.argument";
/// Code of failures that are not the caller's fault
pub const CODE_PLATFORM_INTERNAL: &str = "error.msg.platform.internal";

/// HTTP status reported for request problems
pub const HTTP_BAD_REQUEST: &str = "400";
/// HTTP status reported for everything else
pub const HTTP_INTERNAL_ERROR: &str = "500";

// ============================================================================
// ENVIRONMENT
// ============================================================================

/// Environment variable holding the fallback locale
pub const DEFAULT_LOCALE_ENV_VAR: &str = "PLATFORM_COMMANDS_DEFAULT_LOCALE";

/// Environment variable holding the fallback date format
pub const DEFAULT_DATE_FORMAT_ENV_VAR: &str = "PLATFORM_COMMANDS_DEFAULT_DATE_FORMAT";

/// Environment variable holding the log level of the command line tool
pub const LOG_LEVEL_ENV_VAR: &str = "PLATFORM_COMMANDS_LOG";
