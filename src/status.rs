// src/status.rs

//! Lifecycle records written into the log stream next to the child's output.

use std::fmt;

/// A synthetic, bracketed record describing the capture itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// Capture began. `origin_pid` is the supervisor that was invoked (and
    /// became the target command), `logger_pid` the capture process.
    Started { origin_pid: i32, logger_pid: i32 },
    /// The channel reached end-of-stream.
    FinishedCleanly,
    /// The previous line was cut off at a read boundary.
    Interrupted,
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::Started {
                origin_pid,
                logger_pid,
            } => write!(
                f,
                "[logging: started from pid: {origin_pid} logged by pid: {logger_pid}]"
            ),
            StatusEvent::FinishedCleanly => f.write_str("[logging: finished cleanly]"),
            StatusEvent::Interrupted => f.write_str("[logging: interrupted line]"),
        }
    }
}

/// Process identifiers shown in the `Started` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessIds {
    pub origin_pid: i32,
    pub logger_pid: i32,
}

impl ProcessIds {
    /// Pair the supervisor's pid with the pid of the calling process.
    pub fn for_logger(origin_pid: i32) -> Self {
        Self {
            origin_pid,
            logger_pid: nix::unistd::getpid().as_raw(),
        }
    }

    pub fn started(self) -> StatusEvent {
        StatusEvent::Started {
            origin_pid: self.origin_pid,
            logger_pid: self.logger_pid,
        }
    }
}
