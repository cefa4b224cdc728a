// tests/errors.rs

use std::io;

use linestamp::errors::LinestampError;

#[test]
fn exec_failure_renders_the_os_error_once_on_one_line() {
    let err = LinestampError::Exec {
        command: "missing-tool".into(),
        source: io::Error::from_raw_os_error(2),
    };

    let line = format!("{:#}", anyhow::Error::from(err));

    assert!(line.starts_with("executing \"missing-tool\" failed: "), "{line}");
    assert_eq!(line.matches("os error 2").count(), 1, "{line}");
    assert!(!line.contains('\n'), "{line}");
}

#[test]
fn io_variants_keep_the_platform_error_as_source() {
    use std::error::Error;

    let err = LinestampError::Redirect {
        fd: 1,
        source: io::Error::from_raw_os_error(9),
    };

    assert_eq!(err.to_string(), "dup2 onto fd 1 failed");
    let source = err.source().expect("source kept");
    assert!(source.to_string().contains("os error 9"));
}
