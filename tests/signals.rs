// tests/signals.rs
//
// Own test binary: changes signal dispositions of the whole process.

use nix::sys::signal::{raise, Signal};

use linestamp::supervisor::signals::{ignore_interactive_signals, INTERACTIVE_SIGNALS};

#[test]
fn interactive_signals_no_longer_terminate_the_process() {
    let installed = ignore_interactive_signals();
    assert_eq!(installed, INTERACTIVE_SIGNALS.len());

    // Would kill the test binary under the default disposition.
    raise(Signal::SIGUSR1).expect("raise SIGUSR1");
    raise(Signal::SIGUSR2).expect("raise SIGUSR2");
    raise(Signal::SIGHUP).expect("raise SIGHUP");
}
