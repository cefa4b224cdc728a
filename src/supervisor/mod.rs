// src/supervisor/mod.rs

//! Process wiring.
//!
//! The invoked process is the supervisor. It creates the channel, spawns a
//! second copy of this binary as the capture process (channel read side on
//! its stdin, `--capture-for <supervisor pid>` on its command line), points
//! its own stdout and stderr at the channel's write side and finally execs
//! the target command. The target therefore keeps the pid the caller
//! started, and the capture process sees end-of-stream once the target and
//! everything that inherited its output have exited.
//!
//! - [`signals`] keeps the capture process alive through signals aimed at
//!   the process group.

pub mod signals;

use std::convert::Infallible;
use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::os::fd::AsFd;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};

use anyhow::anyhow;
use nix::unistd;
use tracing::{debug, info};

use crate::capture::CaptureLoop;
use crate::channel::{Pipe, ReadEndpoint, Reader};
use crate::cli::LogLevel;
use crate::emit::{Emitter, SystemClock};
use crate::errors::{LinestampError, Result};
use crate::status::ProcessIds;

/// Flag that switches the binary into capture mode.
pub const CAPTURE_FLAG: &str = "--capture-for";

/// Run `command` with its output captured, replacing the current process.
///
/// Only returns on failure. Errors raised after the redirect end up in the
/// channel like any other output of the worker.
pub fn run_supervisor(command: &[OsString], log_level: Option<LogLevel>) -> Result<Infallible> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| LinestampError::Other(anyhow!("no command given")))?;

    let origin_pid = unistd::getpid().as_raw();
    let mut pipe = Pipe::create()?;

    let capture = spawn_capture(origin_pid, pipe.take_read_endpoint()?, log_level)?;
    info!(origin_pid, capture_pid = capture.id(), "capture process spawned");

    let writer = pipe.into_writer()?;
    debug!(?program, ?args, "redirecting stdout/stderr and executing command");
    writer.redirect_stdio()?;

    let source = Command::new(program).args(args).exec();
    Err(LinestampError::Exec {
        command: program.clone(),
        source,
    })
}

/// Re-execute this binary in capture mode with `read` as its stdin.
///
/// The child is deliberately not waited for: once the exec happens, the
/// target command is its parent.
fn spawn_capture(
    origin_pid: i32,
    read: ReadEndpoint,
    log_level: Option<LogLevel>,
) -> Result<Child> {
    let exe = std::env::current_exe().map_err(LinestampError::SpawnCapture)?;

    let mut cmd = Command::new(exe);
    if let Some(level) = log_level {
        cmd.arg("--log-level").arg(level.as_arg());
    }
    cmd.arg(CAPTURE_FLAG)
        .arg(origin_pid.to_string())
        .stdin(Stdio::from(read))
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    signals::ignore_in_spawned(&mut cmd);

    // `cmd` still owns the read descriptor; it is closed here when `cmd`
    // drops, leaving the capture process as its only holder.
    cmd.spawn().map_err(LinestampError::SpawnCapture)
}

/// Body of the capture process: log everything arriving on stdin to stdout.
pub fn run_capture(origin_pid: i32) -> Result<()> {
    let pids = ProcessIds::for_logger(origin_pid);
    let reader = Reader::adopt_stdin()?;
    let sink = stdout_sink().map_err(LinestampError::Write)?;

    debug!(
        origin_pid = pids.origin_pid,
        logger_pid = pids.logger_pid,
        capacity = reader.capacity(),
        "capture starting"
    );

    let mut capture = CaptureLoop::new(reader, Emitter::new(sink, SystemClock));
    capture.run(pids)
}

/// Unbuffered handle on stdout, so each record reaches the kernel as it is
/// written.
fn stdout_sink() -> io::Result<File> {
    let fd = io::stdout().as_fd().try_clone_to_owned()?;
    Ok(File::from(fd))
}
