//! Typed commands from microfinance platform API request bodies
//!
//! A request body is a JSON object whose keys name command parameters.
//! Numbers and dates may arrive as text in the client's own format, so every
//! request can carry a `locale` (e.g. `de_DE`) and a `dateFormat` (e.g.
//! `dd MMMM yyyy`) that steer how those values are read.
//!
//! ```
//! use platform_commands::{CommandConverter, ConversionConfig};
//!
//! let converter = CommandConverter::new(ConversionConfig::default());
//! let command = converter
//!     .convert_json_to_loan_transaction_command(
//!         Some(42),
//!         r#"{"locale":"en","dateFormat":"dd MMMM yyyy",
//!             "transactionDate":"05 May 2024","transactionAmount":"1,250.00"}"#,
//!     )
//!     .map_err(|report| report.current_context().to_string())?;
//!
//! assert_eq!(command.loan_id, Some(42));
//! assert!(command.modified_parameters.contains("transactionAmount"));
//! # Ok::<(), String>(())
//! ```

pub mod command;
pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod json_traits;
pub mod locale;
pub mod request;

pub use command::{ApiCommand, CommandKind, ConvertedCommand, ResourceIds};
pub use config::ConversionConfig;
pub use converter::CommandConverter;
pub use error::{ApiParameterError, Error, ErrorBody, Result};
pub use request::ModifiedParameters;
