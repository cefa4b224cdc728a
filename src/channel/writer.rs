// src/channel/writer.rs

use std::os::fd::{AsRawFd, IntoRawFd, OwnedFd, RawFd};

use nix::fcntl::{fcntl, FcntlArg, FdFlag};
use nix::libc;
use nix::unistd;
use tracing::trace;

use crate::channel::WriteEndpoint;
use crate::errors::{LinestampError, Result};

/// Write side of the channel, held by the worker just long enough to
/// redirect its standard streams.
#[derive(Debug)]
pub struct Writer {
    fd: OwnedFd,
}

impl Writer {
    pub fn new(endpoint: WriteEndpoint) -> Self {
        Self { fd: endpoint.into() }
    }

    /// Point `target` at the channel's write side.
    pub fn duplicate_onto(&self, target: RawFd) -> Result<()> {
        unistd::dup2(self.fd.as_raw_fd(), target).map_err(|e| LinestampError::Redirect {
            fd: target,
            source: e.into(),
        })?;
        trace!(from = self.fd.as_raw_fd(), to = target, "descriptor duplicated");
        Ok(())
    }

    /// Redirect stdout and stderr into the channel, then release the
    /// original descriptor.
    ///
    /// `dup2` clears close-on-exec on the new descriptors, so the program
    /// exec'd afterwards writes into the channel through fds 1 and 2 only.
    pub fn redirect_stdio(self) -> Result<()> {
        let targets = [libc::STDOUT_FILENO, libc::STDERR_FILENO];
        for target in targets {
            self.duplicate_onto(target)?;
        }

        // The pipe itself can land on fd 1 or 2 when the supervisor was
        // started with that stream closed. dup2 onto itself is a no-op, so
        // keep it open and inheritable instead of releasing it.
        let raw = self.fd.as_raw_fd();
        if targets.contains(&raw) {
            fcntl(raw, FcntlArg::F_SETFD(FdFlag::empty())).map_err(|e| {
                LinestampError::Redirect {
                    fd: raw,
                    source: e.into(),
                }
            })?;
            let _ = self.fd.into_raw_fd();
        }
        Ok(())
    }
}
