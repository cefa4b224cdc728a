// src/cli.rs

//! CLI argument parsing using `clap`.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `linestamp`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "linestamp",
    version,
    about = "Run a command and prefix every line it prints with a UTC timestamp.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level for diagnostics on stderr (error, warn, info, debug, trace).
    ///
    /// If omitted, `LINESTAMP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Run as the capture process for the supervisor with this pid.
    ///
    /// Set by the supervisor when it re-executes itself; the channel is
    /// expected on stdin.
    #[arg(long, value_name = "PID", hide = true)]
    pub capture_for: Option<i32>,

    /// Command to run, followed by its arguments. Passed through untouched.
    #[arg(
        value_name = "COMMAND",
        required_unless_present = "capture_for",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 1..
    )]
    pub command: Vec<OsString>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Spelling accepted by `--log-level`, used when forwarding the flag.
    pub fn as_arg(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
