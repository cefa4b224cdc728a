#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::io::{self, ErrorKind, Write};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use linestamp::channel::reader::ChunkSource;
use linestamp::emit::Clock;

/// A chunk source that replays a fixed script, then reports end-of-stream
/// forever.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<io::Result<Vec<u8>>>,
    reads: usize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunk(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.script.push_back(Ok(bytes.into()));
        self
    }

    /// Next read fails with `ErrorKind::Interrupted`.
    pub fn interrupt(mut self) -> Self {
        self.script
            .push_back(Err(io::Error::new(ErrorKind::Interrupted, "EINTR")));
        self
    }

    pub fn fail(mut self, kind: ErrorKind) -> Self {
        self.script
            .push_back(Err(io::Error::new(kind, "scripted read failure")));
        self
    }

    /// Number of `read_chunk` calls so far, failed ones included.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ChunkSource for ScriptedSource {
    fn read_chunk(&mut self) -> io::Result<Vec<u8>> {
        self.reads += 1;
        self.script.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// One scripted reaction of [`FlakyWriter`] to a `write` call.
#[derive(Debug, Clone, Copy)]
pub enum WriteStep {
    /// Accept at most this many bytes.
    Accept(usize),
    Interrupt,
    Zero,
    Fail(ErrorKind),
}

/// A sink that misbehaves according to a script, then accepts everything.
#[derive(Debug, Default)]
pub struct FlakyWriter {
    steps: VecDeque<WriteStep>,
    written: Vec<u8>,
    writes: usize,
    flushes: usize,
}

impl FlakyWriter {
    pub fn new(steps: impl IntoIterator<Item = WriteStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn reliable() -> Self {
        Self::default()
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Write for FlakyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        let accepted = match self.steps.pop_front() {
            None => buf.len(),
            Some(WriteStep::Accept(max)) => max.min(buf.len()),
            Some(WriteStep::Interrupt) => {
                return Err(io::Error::new(ErrorKind::Interrupted, "EINTR"));
            }
            Some(WriteStep::Zero) => 0,
            Some(WriteStep::Fail(kind)) => {
                return Err(io::Error::new(kind, "scripted write failure"));
            }
        };
        self.written.extend_from_slice(&buf[..accepted]);
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let time = Utc
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .expect("valid fixed time");
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that moves one second forward every time it is read.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Cell::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + TimeDelta::seconds(1));
        now
    }
}
