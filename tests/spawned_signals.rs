// tests/spawned_signals.rs
//
// Separate binary from tests/signals.rs: that one ignores signals in the test
// process itself, which children would then inherit regardless.

use std::process::Command;

use linestamp::supervisor::signals::ignore_in_spawned;

#[test]
fn spawned_process_starts_with_group_signals_ignored() {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", "kill -TERM $$; kill -HUP $$; echo alive"]);
    ignore_in_spawned(&mut cmd);

    let output = cmd.output().expect("run sh");
    assert!(output.status.success(), "{:?}", output.status);
    assert_eq!(output.stdout, b"alive\n");
}

#[test]
fn without_the_hook_the_same_script_is_killed() {
    let output = Command::new("sh")
        .args(["-c", "kill -TERM $$; echo alive"])
        .output()
        .expect("run sh");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
