// src/emit/timestamp.rs

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};

use crate::emit::clock::Clock;
use crate::errors::{LinestampError, Result};

/// `YYYY-MM-DDThh:mm:ssZ`, UTC, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Literal separating the timestamp from the line.
pub const SEPARATOR: &str = ": ";

/// Rendered prefix of `yyyy-mm-ddThh:mm:ssZ: `, no trailing NUL.
pub const PREFIX_LEN: usize = "yyyy-mm-ddThh:mm:ssZ: ".len();

/// A rendered timestamp prefix, ready to be written in front of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    prefix: String,
}

impl Timestamp {
    /// Render `time`. Fails if the result does not have the fixed width,
    /// which only happens for years outside 0000..=9999.
    pub fn at(time: DateTime<Utc>) -> Result<Self> {
        let mut prefix = String::with_capacity(PREFIX_LEN);
        write!(prefix, "{}{SEPARATOR}", time.format(TIMESTAMP_FORMAT))
            .map_err(|_| LinestampError::Timestamp(format!("formatting {time:?}")))?;

        if prefix.len() != PREFIX_LEN {
            return Err(LinestampError::Timestamp(format!(
                "unexpected width {} for {prefix:?}",
                prefix.len()
            )));
        }

        Ok(Self { prefix })
    }

    pub fn now(clock: &impl Clock) -> Result<Self> {
        Self::at(clock.now())
    }

    /// The prefix bytes, separator included.
    pub fn as_bytes(&self) -> &[u8] {
        self.prefix.as_bytes()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}
