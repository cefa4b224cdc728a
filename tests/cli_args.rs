// tests/cli_args.rs

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use linestamp::cli::{CliArgs, LogLevel};
use linestamp::logging::resolve_level;

fn os(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn command_and_arguments_pass_through_untouched() {
    let args = CliArgs::try_parse_from(["linestamp", "ls", "-la", "--color=never"]).unwrap();

    assert_eq!(args.command, os(&["ls", "-la", "--color=never"]));
    assert_eq!(args.capture_for, None);
    assert_eq!(args.log_level, None);
}

#[test]
fn own_flags_before_the_command_are_parsed() {
    let args = CliArgs::try_parse_from(["linestamp", "--log-level", "debug", "make", "-j4"]).unwrap();

    assert_eq!(args.log_level, Some(LogLevel::Debug));
    assert_eq!(args.command, os(&["make", "-j4"]));
}

#[test]
fn own_flags_after_the_command_belong_to_the_command() {
    let args = CliArgs::try_parse_from(["linestamp", "prog", "--log-level", "trace"]).unwrap();

    assert_eq!(args.log_level, None);
    assert_eq!(args.command, os(&["prog", "--log-level", "trace"]));
}

#[test]
fn missing_command_is_a_usage_error() {
    let err = CliArgs::try_parse_from(["linestamp"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn capture_mode_needs_no_command() {
    let args = CliArgs::try_parse_from(["linestamp", "--capture-for", "42"]).unwrap();

    assert_eq!(args.capture_for, Some(42));
    assert!(args.command.is_empty());
}

#[test]
fn forwarded_level_spelling_parses_back() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let args =
            CliArgs::try_parse_from(["linestamp", "--log-level", level.as_arg(), "--capture-for", "1"])
                .unwrap();
        assert_eq!(args.log_level, Some(level));
    }
}

#[test]
fn cli_level_beats_env_which_beats_default() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), tracing::Level::TRACE);
    assert_eq!(resolve_level(None, Some(" Info ")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, Some("warning")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("bogus")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, None), tracing::Level::WARN);
}
