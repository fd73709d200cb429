// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Run the built binary over stdin and check what reaches stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with(args: &[&str], envs: &[(&str, &str)], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stack-smash"))
        .args(args)
        .env_remove("STACK_SMASH_LOG")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start stack-smash");
    {
        let mut stdin = child.stdin.take().unwrap();
        if !input.is_empty() {
            stdin.write_all(input).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn run(input: &[u8]) -> Output {
    run_with(&[], &[], input)
}

#[test]
fn short_input_is_echoed() {
    let output = run(b"hello");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Received: hello\n");
}

#[test]
fn secret_is_found() {
    let output = run(b"secret");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"You found the secret!\n");
}

#[test]
fn secret_with_newline_is_only_received() {
    let output = run(b"secret\n");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Received: secret\n\n");
}

#[test]
fn empty_input_prints_nothing() {
    let output = run(b"");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn every_short_length_round_trips() {
    for len in 1..10 {
        let input = vec![b'x'; len];
        let output = run(&input);
        assert!(output.status.success());
        let mut expected = b"Received: ".to_vec();
        expected.extend_from_slice(&input);
        expected.push(b'\n');
        assert_eq!(output.stdout, expected, "length {len}");
    }
}

#[test]
fn overflow_crashes_or_prints_received() {
    // Nothing beyond this is promised once the buffer is overrun. Ten bytes is
    // the shortest overflowing string; 100 fills the read with no terminator.
    for len in [10, 11, 64, 100] {
        let output = run(&vec![b'A'; len]);
        assert!(
            !output.status.success() || output.stdout.starts_with(b"Received: "),
            "unexpected clean run for length {len} with output {:?}",
            String::from_utf8_lossy(&output.stdout)
        );
    }
}

#[test]
fn checked_copy_refuses_long_input() {
    let output = run_with(&["--checked"], &[], &[b'A'; 64]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "{stderr}");
    assert!(stderr.contains("refusing to copy input"), "{stderr}");
    assert!(stderr.contains("65 bytes"), "{stderr}");
}

#[test]
fn checked_copy_matches_default_for_short_input() {
    let output = run_with(&["--checked"], &[], b"secret");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"You found the secret!\n");
}

#[test]
fn logs_stay_off_stdout() {
    let output = run_with(&["--log-json"], &[("STACK_SMASH_LOG", "debug")], b"hello");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Received: hello\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("processing input"));
}

#[test]
fn invalid_log_level_is_rejected() {
    // Argument validation exits before stdin is read, so send nothing.
    let output = run_with(&["--log-level", "stack_smash=loud"], &[], b"");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
