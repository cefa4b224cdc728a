// src/emit/mod.rs

//! Timestamped output.
//!
//! - [`timestamp`] renders the `YYYY-MM-DDThh:mm:ssZ: ` prefix.
//! - [`clock`] abstracts "now" so tests can pin it.
//!
//! Every record is `<prefix><bytes>\n`, written with [`write_fully`] so a
//! short write or a signal landing mid-write never truncates or duplicates
//! output. Any other write error is fatal for the caller.

pub mod clock;
pub mod timestamp;

use std::io::{self, Write};

use tracing::trace;

use crate::errors::{LinestampError, Result};
use crate::frame::TERMINATOR;
use crate::status::StatusEvent;

pub use clock::{Clock, SystemClock};
pub use timestamp::Timestamp;

/// Write all of `buf`, retrying on short writes and on `Interrupted`.
///
/// A sink that accepts zero bytes is reported as `WriteZero` instead of
/// spinning.
pub fn write_fully<W: Write + ?Sized>(sink: &mut W, mut buf: &[u8]) -> io::Result<()> {
    while !buf.is_empty() {
        match sink.write(buf) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "log sink accepted no bytes",
                ));
            }
            Ok(n) => buf = &buf[n..],
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn flush_fully<W: Write + ?Sized>(sink: &mut W) -> io::Result<()> {
    loop {
        match sink.flush() {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

/// Writes timestamped records to a sink.
#[derive(Debug)]
pub struct Emitter<W, C = SystemClock> {
    sink: W,
    clock: C,
}

impl<W: Write, C: Clock> Emitter<W, C> {
    pub fn new(sink: W, clock: C) -> Self {
        Self { sink, clock }
    }

    /// Fresh timestamp from this emitter's clock.
    pub fn stamp(&self) -> Result<Timestamp> {
        Timestamp::now(&self.clock)
    }

    /// Write one line under `stamp`.
    ///
    /// An incomplete line is followed by an `[logging: interrupted line]`
    /// record under the same stamp.
    pub fn emit(&mut self, stamp: &Timestamp, line: &[u8], incomplete: bool) -> Result<()> {
        self.write_record(stamp, line)?;
        if incomplete {
            let marker = StatusEvent::Interrupted.to_string();
            self.write_record(stamp, marker.as_bytes())?;
        }
        Ok(())
    }

    /// Write a status record under a freshly taken timestamp.
    pub fn status(&mut self, event: StatusEvent) -> Result<()> {
        let stamp = self.stamp()?;
        self.write_record(&stamp, event.to_string().as_bytes())
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_record(&mut self, stamp: &Timestamp, line: &[u8]) -> Result<()> {
        write_fully(&mut self.sink, stamp.as_bytes()).map_err(LinestampError::Write)?;
        write_fully(&mut self.sink, line).map_err(LinestampError::Write)?;
        write_fully(&mut self.sink, &[TERMINATOR]).map_err(LinestampError::Write)?;
        flush_fully(&mut self.sink).map_err(LinestampError::Write)?;
        trace!(len = line.len(), "record written");
        Ok(())
    }
}
