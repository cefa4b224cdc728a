// src/channel/reader.rs

use std::fs::File;
use std::io::{self, Read};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

use nix::fcntl::{fcntl, FcntlArg};
use nix::libc;
use tracing::debug;

use crate::channel::ReadEndpoint;
use crate::errors::{LinestampError, Result};

/// Used where the platform cannot report a pipe's capacity.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub const DEFAULT_PIPE_CAPACITY: usize = 64 * 1024;

/// Source of chunks for the capture loop.
///
/// An empty chunk means end-of-stream. Errors are passed through untouched,
/// including `ErrorKind::Interrupted`; deciding to retry is the caller's job.
pub trait ChunkSource {
    fn read_chunk(&mut self) -> io::Result<Vec<u8>>;
}

/// Blocking reader over the read side of the channel.
///
/// Each read returns at most one pipe's worth of bytes.
#[derive(Debug)]
pub struct Reader {
    file: File,
    capacity: usize,
}

impl Reader {
    pub fn new(endpoint: ReadEndpoint) -> Result<Self> {
        Self::from_owned_fd(endpoint.into())
    }

    /// Adopt file descriptor 0 as the read side of the channel.
    ///
    /// The capture process receives the channel as its standard input.
    /// Taking ownership means fd 0 is closed when the reader goes away,
    /// and `std::io::stdin()` must not be used afterwards in this process.
    pub fn adopt_stdin() -> Result<Self> {
        fcntl(libc::STDIN_FILENO, FcntlArg::F_GETFD)
            .map_err(|e| LinestampError::Read(e.into()))?;

        // SAFETY: fd 0 was just checked to be open, and nothing else in the
        // capture process reads from or closes standard input.
        let fd = unsafe { OwnedFd::from_raw_fd(libc::STDIN_FILENO) };
        Self::from_owned_fd(fd)
    }

    fn from_owned_fd(fd: OwnedFd) -> Result<Self> {
        let capacity = pipe_capacity(&fd)?;
        debug!(fd = fd.as_raw_fd(), capacity, "reader ready");
        Ok(Self {
            file: File::from(fd),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl ChunkSource for Reader {
    fn read_chunk(&mut self) -> io::Result<Vec<u8>> {
        let mut data = vec![0u8; self.capacity];
        let n = self.file.read(&mut data)?;
        data.truncate(n);
        Ok(data)
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn pipe_capacity(fd: &OwnedFd) -> Result<usize> {
    let size = fcntl(fd.as_raw_fd(), FcntlArg::F_GETPIPE_SZ)
        .map_err(|e| LinestampError::PipeCapacity(e.into()))?;
    usize::try_from(size).map_err(|_| {
        LinestampError::PipeCapacity(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("negative pipe size {size}"),
        ))
    })
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn pipe_capacity(_fd: &OwnedFd) -> Result<usize> {
    Ok(DEFAULT_PIPE_CAPACITY)
}
