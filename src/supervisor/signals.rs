// src/supervisor/signals.rs

use std::io;
use std::os::unix::process::CommandExt;
use std::process::Command;

use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use tracing::{debug, warn};

/// Signals that would end an interactive process and are usually aimed at
/// the whole process group rather than at the logger.
pub const INTERACTIVE_SIGNALS: [Signal; 7] = [
    Signal::SIGHUP,
    Signal::SIGINT,
    Signal::SIGQUIT,
    Signal::SIGPIPE,
    Signal::SIGTERM,
    Signal::SIGUSR1,
    Signal::SIGUSR2,
];

/// Ignore [`INTERACTIVE_SIGNALS`] in the calling process, resetting each to
/// its default disposition after the first delivery.
///
/// Best effort: a signal that cannot be changed is logged and skipped.
/// Returns how many dispositions were installed.
pub fn ignore_interactive_signals() -> usize {
    let action = SigAction::new(SigHandler::SigIgn, SaFlags::SA_RESETHAND, SigSet::empty());

    let mut installed = 0;
    for signal in INTERACTIVE_SIGNALS {
        // SAFETY: SigIgn runs no code in signal context.
        match unsafe { sigaction(signal, &action) } {
            Ok(_) => installed += 1,
            Err(e) => warn!(?signal, error = %e, "could not ignore signal"),
        }
    }

    debug!(installed, "interactive signals ignored");
    installed
}

/// Have `cmd` start its program with [`INTERACTIVE_SIGNALS`] already ignored.
///
/// Ignored dispositions survive `execve`, so the spawned process is covered
/// from its first instruction rather than only once it gets around to
/// calling [`ignore_interactive_signals`] itself.
pub fn ignore_in_spawned(cmd: &mut Command) {
    let action = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());

    // SAFETY: the hook runs between fork and exec and only calls
    // sigaction(2), which is async-signal-safe. It allocates nothing.
    unsafe {
        cmd.pre_exec(move || {
            for signal in INTERACTIVE_SIGNALS {
                sigaction(signal, &action).map_err(io::Error::from)?;
            }
            Ok(())
        });
    }
}
