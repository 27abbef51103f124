//! # command-convert
//!
//! Converts a platform API request body into its typed command and prints
//! the command as JSON. Failures print the API error body on stderr and exit
//! with a non-zero status.

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use platform_commands::ErrorBody;
use tracing::error;

mod cli;
mod logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _guard = match cli.log_level.init(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(report) => {
            eprintln!("{report:?}");
            return ExitCode::FAILURE;
        }
    };

    match cli.run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(report) => {
            error!("{report:?}");
            let body = ErrorBody::from(report.current_context());
            match serde_json::to_string_pretty(&body) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", report.current_context()),
            }
            ExitCode::FAILURE
        }
    }
}
