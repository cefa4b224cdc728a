// src/capture.rs

//! The capture loop: drain the channel, frame, timestamp, emit.
//!
//! ```text
//! AwaitingChunk --read, data--> Draining --lines emitted--> AwaitingChunk
//! AwaitingChunk --read, empty--> Terminated   ([logging: finished cleanly])
//! ```
//!
//! An interrupted read is retried without a state change. Any other read
//! error, and any emit error, ends the loop with that error.

use std::io::{ErrorKind, Write};

use tracing::{debug, trace};

use crate::channel::reader::ChunkSource;
use crate::emit::{Clock, Emitter, SystemClock};
use crate::errors::{LinestampError, Result};
use crate::frame::frame;
use crate::status::{ProcessIds, StatusEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    AwaitingChunk,
    Draining,
    Terminated,
}

#[derive(Debug)]
pub struct CaptureLoop<S, W, C = SystemClock> {
    source: S,
    emitter: Emitter<W, C>,
    state: CaptureState,
    chunks: u64,
    lines: u64,
}

impl<S, W, C> CaptureLoop<S, W, C>
where
    S: ChunkSource,
    W: Write,
    C: Clock,
{
    pub fn new(source: S, emitter: Emitter<W, C>) -> Self {
        Self {
            source,
            emitter,
            state: CaptureState::AwaitingChunk,
            chunks: 0,
            lines: 0,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Emit the `Started` record, then step until end-of-stream.
    pub fn run(&mut self, pids: ProcessIds) -> Result<()> {
        self.emitter.status(pids.started())?;

        while self.step()? != CaptureState::Terminated {}

        debug!(chunks = self.chunks, lines = self.lines, "capture finished");
        Ok(())
    }

    /// Read and handle exactly one chunk. A no-op once terminated.
    pub fn step(&mut self) -> Result<CaptureState> {
        if self.state == CaptureState::Terminated {
            return Ok(self.state);
        }

        let chunk = self.read_chunk()?;

        if chunk.is_empty() {
            self.emitter.status(StatusEvent::FinishedCleanly)?;
            self.state = CaptureState::Terminated;
            return Ok(self.state);
        }

        self.state = CaptureState::Draining;
        self.chunks += 1;
        trace!(len = chunk.len(), "chunk read");

        // One timestamp per pass; every line of this chunk shares it.
        let stamp = self.emitter.stamp()?;
        for (line, incomplete) in frame(&chunk).iter() {
            self.emitter.emit(&stamp, line, incomplete)?;
            self.lines += 1;
        }

        self.state = CaptureState::AwaitingChunk;
        Ok(self.state)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_emitter(self) -> Emitter<W, C> {
        self.emitter
    }

    fn read_chunk(&mut self) -> Result<Vec<u8>> {
        loop {
            match self.source.read_chunk() {
                Ok(chunk) => return Ok(chunk),
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    trace!("read interrupted; retrying");
                }
                Err(e) => return Err(LinestampError::Read(e)),
            }
        }
    }
}
