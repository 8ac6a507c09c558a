//! End-to-end tests for the `fib` binary
//!
//! Each test spawns the built executable and checks stdout, stderr and the
//! exit code.

use std::process::{Command, Output};

fn fib(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fib"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn fib")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_arguments_prints_f42() {
    let output = fib(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "267914296\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_index_argument() {
    let output = fib(&["20"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "6765\n");
}

#[test]
fn test_negative_index_fails() {
    let output = fib(&["-1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("index must be non-negative"));
}

#[test]
fn test_non_integer_fails() {
    let output = fib(&["3.5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("invalid argument '3.5'"));
}

#[test]
fn test_empty_argument_fails() {
    let output = fib(&[""]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("invalid argument ''"));
}

#[test]
fn test_overflowing_index_fails() {
    let output = fib(&["93"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("too large"));
}

#[test]
fn test_completions() {
    let output = fib(&["--completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("fib"));
}

#[cfg(unix)]
#[test]
fn test_environment_does_not_select_index() {
    use std::os::unix::ffi::OsStrExt;

    let garbage = std::ffi::OsStr::from_bytes(b"1\xff");
    let output = Command::new(env!("CARGO_BIN_EXE_fib"))
        .env_remove("RUST_LOG")
        .env("FIB_INDEX", garbage)
        .env("N", "10")
        .output()
        .expect("failed to spawn fib");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "267914296\n");
    assert!(stderr(&output).is_empty());
}
