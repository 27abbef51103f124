//! Command line definition and the `convert` and `kinds` subcommands

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use error_stack::{Report, ResultExt};
use itertools::Itertools;
use platform_commands::constants::LOG_LEVEL_ENV_VAR;
use platform_commands::error::{Error, Result};
use platform_commands::{CommandConverter, CommandKind, ConversionConfig, ResourceIds};
use strum::IntoEnumIterator;
use tracing::info;

use crate::logging::TracingLevel;

/// Convert platform API request bodies into typed commands
#[derive(Parser, Debug)]
#[command(name = "command-convert", version, about, long_about = None)]
pub struct Cli {
    /// Locale used when a request has no `locale`, overrides
    /// `PLATFORM_COMMANDS_DEFAULT_LOCALE`
    #[arg(long, global = true)]
    pub default_locale: Option<String>,

    /// Date format used when a request has no `dateFormat`, overrides
    /// `PLATFORM_COMMANDS_DEFAULT_DATE_FORMAT`
    #[arg(long, global = true)]
    pub default_date_format: Option<String>,

    /// error, warn, info, debug or trace
    #[arg(long, global = true, env = LOG_LEVEL_ENV_VAR, default_value = "warn")]
    pub log_level: TracingLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands of `command-convert`
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one request body and print the command as JSON
    Convert {
        /// Command kind, e.g. `loan-transaction`
        #[arg(long)]
        kind: CommandKind,

        /// Id of the resource from the request path
        #[arg(long)]
        resource_id: Option<i64>,

        /// Id of the owning resource, e.g. the loan of a loan charge
        #[arg(long)]
        parent_id: Option<i64>,

        /// Request body file, stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print on one line
        #[arg(long)]
        compact: bool,
    },
    /// List every command kind with the parameters it accepts
    Kinds,
}

impl Cli {
    /// Fallbacks from the environment, overridden by flags, blank values ignored
    pub fn conversion_config(&self) -> ConversionConfig {
        let mut config = ConversionConfig::from_env();
        if let Some(locale) = non_blank(self.default_locale.as_deref()) {
            config = config.with_default_locale(locale);
        }
        if let Some(date_format) = non_blank(self.default_date_format.as_deref()) {
            config = config.with_default_date_format(date_format);
        }
        config
    }

    /// Run the selected subcommand and return what should be printed
    pub fn run(&self) -> Result<String> {
        match &self.command {
            Commands::Convert {
                kind,
                resource_id,
                parent_id,
                input,
                compact,
            } => {
                let json = read_input(input.as_deref())?;
                let converter = CommandConverter::new(self.conversion_config());
                let ids = ResourceIds {
                    resource: *resource_id,
                    parent:   *parent_id,
                };
                let converted = converter.convert(*kind, ids, &json)?;
                info!("Converted {kind} request");

                let rendered = if *compact {
                    serde_json::to_string(&converted)
                } else {
                    serde_json::to_string_pretty(&converted)
                };
                rendered.change_context(Error::failed_to("render the command", kind))
            }
            Commands::Kinds => Ok(list_kinds()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Report::new(Error::io_failed("read request file", path, e))),
        None => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .change_context(Error::failed_to("read the request", "stdin"))?;
            Ok(json)
        }
    }
}

fn list_kinds() -> String {
    CommandKind::iter()
        .map(|kind| {
            format!(
                "{kind} ({}): {}",
                kind.path_ids(),
                kind.supported_parameters().iter().join(", ")
            )
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "tests fail loudly"
    )]

    use std::io::Write;

    use serde_json::Value;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("command-convert").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_convert_reads_request_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"locale":"en","dateFormat":"dd/MM/yyyy","eventDate":"02/01/2024","note":"ok"}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = parse(&[
            "convert",
            "--kind",
            "loan-state-transition",
            "--resource-id",
            "12",
            "--input",
            path,
            "--compact",
        ]);
        let output: Value = serde_json::from_str(&cli.run().unwrap()).unwrap();

        assert_eq!(output["kind"], "loan-state-transition");
        assert_eq!(output["command"]["loanId"], 12);
        assert_eq!(output["command"]["eventDate"], "2024-01-02");
        assert_eq!(output["command"]["note"], "ok");
    }

    #[test]
    fn test_default_locale_flag_feeds_conversion() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"amount":"1.234,5"}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let cli = parse(&[
            "--default-locale",
            "de",
            "convert",
            "--kind",
            "charge",
            "--input",
            path,
        ]);
        let output: Value = serde_json::from_str(&cli.run().unwrap()).unwrap();
        assert_eq!(output["command"]["amount"], "1234.5");
    }

    #[test]
    fn test_missing_input_file_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let cli = parse(&[
            "convert",
            "--kind",
            "fund",
            "--input",
            missing.to_str().unwrap(),
        ]);

        let error = cli.run().unwrap_err();
        assert!(matches!(error.current_context(), Error::FileOperation(_)));
    }

    #[test]
    fn test_unknown_kind_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["command-convert", "convert", "--kind", "mortgage"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_default_locale_is_ignored() {
        let cli = parse(&["--default-locale", "  ", "kinds"]);
        assert_eq!(cli.conversion_config(), ConversionConfig::from_env());

        let cli = parse(&["--default-locale", "pt_BR", "kinds"]);
        assert_eq!(cli.conversion_config().default_locale.as_deref(), Some("pt_BR"));
    }

    #[test]
    fn test_kinds_lists_every_kind() {
        let listing = list_kinds();
        assert_eq!(listing.lines().count(), 28);
        assert!(listing.contains("note (resource-and-parent): note"));
    }
}
