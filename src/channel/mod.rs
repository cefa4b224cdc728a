// src/channel/mod.rs

//! The byte channel between the worker and the capture process.
//!
//! A [`Pipe`] owns both descriptors of one OS pipe until they are handed
//! out. Each endpoint can leave the pipe exactly once, either moved out on
//! its own (typically into a spawn request for another process) or
//! converted into a [`Reader`] / [`Writer`]. Converting drops whatever
//! endpoint is still held, so a process that only reads never keeps a write
//! descriptor alive and end-of-stream stays observable.
//!
//! Both descriptors are created close-on-exec. They only reach another
//! program through an explicit `Stdio` hand-off or `dup2`.

pub mod reader;
pub mod writer;

use std::os::fd::{AsRawFd, OwnedFd};
use std::process::Stdio;

use nix::fcntl::{fcntl, FcntlArg, FdFlag};
use nix::unistd;
use tracing::trace;

use crate::errors::{LinestampError, Result};

pub use reader::Reader;
pub use writer::Writer;

/// Read side of the channel.
#[derive(Debug)]
pub struct ReadEndpoint(OwnedFd);

/// Write side of the channel.
#[derive(Debug)]
pub struct WriteEndpoint(OwnedFd);

impl From<ReadEndpoint> for OwnedFd {
    fn from(endpoint: ReadEndpoint) -> Self {
        endpoint.0
    }
}

impl From<WriteEndpoint> for OwnedFd {
    fn from(endpoint: WriteEndpoint) -> Self {
        endpoint.0
    }
}

impl From<ReadEndpoint> for Stdio {
    fn from(endpoint: ReadEndpoint) -> Self {
        Stdio::from(endpoint.0)
    }
}

impl From<WriteEndpoint> for Stdio {
    fn from(endpoint: WriteEndpoint) -> Self {
        Stdio::from(endpoint.0)
    }
}

/// A connected pair of endpoints, not yet split between processes.
#[derive(Debug)]
pub struct Pipe {
    read: Option<ReadEndpoint>,
    write: Option<WriteEndpoint>,
}

impl Pipe {
    /// Create a new pipe. Both descriptors are close-on-exec.
    pub fn create() -> Result<Self> {
        let (read, write) =
            unistd::pipe().map_err(|e| LinestampError::ChannelCreation(e.into()))?;

        for fd in [&read, &write] {
            fcntl(fd.as_raw_fd(), FcntlArg::F_SETFD(FdFlag::FD_CLOEXEC))
                .map_err(|e| LinestampError::ChannelCreation(e.into()))?;
        }

        trace!(
            read_fd = read.as_raw_fd(),
            write_fd = write.as_raw_fd(),
            "pipe created"
        );

        Ok(Self {
            read: Some(ReadEndpoint(read)),
            write: Some(WriteEndpoint(write)),
        })
    }

    /// Move the read endpoint out, leaving the write endpoint in place.
    pub fn take_read_endpoint(&mut self) -> Result<ReadEndpoint> {
        self.read.take().ok_or(LinestampError::EndpointTaken("read"))
    }

    /// Move the write endpoint out, leaving the read endpoint in place.
    pub fn take_write_endpoint(&mut self) -> Result<WriteEndpoint> {
        self.write.take().ok_or(LinestampError::EndpointTaken("write"))
    }

    /// Become the reading side. The write endpoint, if still held, is closed.
    pub fn into_reader(mut self) -> Result<Reader> {
        let endpoint = self.take_read_endpoint()?;
        drop(self);
        Reader::new(endpoint)
    }

    /// Become the writing side. The read endpoint, if still held, is closed.
    pub fn into_writer(mut self) -> Result<Writer> {
        let endpoint = self.take_write_endpoint()?;
        drop(self);
        Ok(Writer::new(endpoint))
    }
}
