//! Integration tests for the `fanctl` binary.
//!
//! These validate argument parsing, help output, and the fatal
//! missing-configuration path — all without a live controller.
#![allow(clippy::unwrap_used)]

use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `fanctl` binary with env isolation, so tests
/// never pick up a real controller address from the environment.
fn fanctl_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("fanctl").unwrap();
    cmd.env_remove("CONTROLLER_IP").env_remove("FANCTL_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    fanctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("ventilation fans")
            .and(predicate::str::contains("--controller"))
            .and(predicate::str::contains("--timeout")),
    );
}

#[test]
fn test_version_flag() {
    fanctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fanctl"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_missing_controller_address_is_fatal() {
    let output = fanctl_cmd().output().unwrap();

    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("CONTROLLER_IP"),
        "Expected CONTROLLER_IP hint in output:\n{text}"
    );
}

#[test]
fn test_invalid_controller_address_is_fatal() {
    let output = fanctl_cmd()
        .args(["--controller", "http://[not a host"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("invalid controller address"),
        "Expected address diagnostic in output:\n{text}"
    );
}
