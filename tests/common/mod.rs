#![allow(dead_code)]

use regex::Regex;

pub use linestamp_test_utils::init_tracing;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Matches one complete output record and captures its body.
pub fn record_regex() -> Regex {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z): (.*)$").expect("valid regex")
}

/// Split captured output into `(timestamp, body)` pairs, asserting that
/// every line is a well-formed record.
pub fn records(output: &str) -> Vec<(String, String)> {
    let re = record_regex();
    output
        .lines()
        .map(|line| {
            let caps = re
                .captures(line)
                .unwrap_or_else(|| panic!("not a timestamped record: {line:?}"));
            (caps[1].to_string(), caps[2].to_string())
        })
        .collect()
}

/// Just the bodies of [`records`].
pub fn bodies(output: &str) -> Vec<String> {
    records(output).into_iter().map(|(_, body)| body).collect()
}
