// src/lib.rs

pub mod capture;
pub mod channel;
pub mod cli;
pub mod emit;
pub mod errors;
pub mod frame;
pub mod logging;
pub mod status;
pub mod supervisor;

use tracing::debug;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::supervisor::signals;

/// High-level entry point used by `main.rs`.
///
/// Without `--capture-for` this is the supervisor path, which execs the
/// target command and only comes back with an error. With it, this process
/// is the capture process and returns once the channel is drained.
pub fn run(args: CliArgs) -> Result<()> {
    match args.capture_for {
        Some(origin_pid) => {
            signals::ignore_interactive_signals();
            debug!(origin_pid, "running as capture process");
            supervisor::run_capture(origin_pid)
        }
        None => match supervisor::run_supervisor(&args.command, args.log_level)? {},
    }
}
