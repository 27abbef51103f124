//! Tracing subscriber setup for the `command-convert` binary

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use error_stack::{Report, ResultExt};
use platform_commands::error::{Error, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Log levels accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// One line per conversion
    Info,
    /// Request details
    Debug,
    /// Everything
    Trace,
}

impl FromStr for TracingLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid tracing level '{s}'. Valid levels are: error, warn, info, debug, trace"
            )),
        }
    }
}

impl TracingLevel {
    /// Filter directive for this level
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Install the global subscriber, writing to stderr or to `log_file`
    ///
    /// The returned guard flushes the file writer when dropped and must be
    /// held until the program exits.
    pub fn init(self, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
        let registry = Registry::default().with(EnvFilter::new(self.as_str()));

        let Some(log_file) = log_file else {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .try_init()
                .change_context(Error::failed_to("install the log subscriber", "stderr"))?;
            return Ok(None);
        };

        let (directory, file_name) = split_log_path(log_file)?;
        std::fs::create_dir_all(&directory)
            .map_err(|e| Report::new(Error::io_failed("create log directory", &directory, e)))?;

        // No rotation, one run appends to one file
        let appender = tracing_appender::rolling::never(&directory, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
            .change_context(Error::failed_to(
                "install the log subscriber",
                log_file.display(),
            ))?;

        Ok(Some(guard))
    }
}

fn split_log_path(log_file: &Path) -> Result<(PathBuf, OsString)> {
    let file_name = log_file
        .file_name()
        .ok_or_else(|| Report::new(Error::invalid("log file", log_file.display())))?
        .to_os_string();

    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name))
}
