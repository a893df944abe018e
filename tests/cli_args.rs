//! Tests for CLI argument parsing and startup failures.
//!
//! Every case exits before the terminal UI starts.

mod common;

use common::temp_config;
use std::process::Command;

fn octofit_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_octofit"));
    cmd.env_remove("OCTOFIT_API_ORIGIN")
        .env_remove("CODESPACE_NAME")
        .env_remove("OCTOFIT_LOG");
    cmd
}

#[test]
fn test_help_shows_origin_option() {
    let output = octofit_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--origin"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--view"));
}

#[test]
fn test_missing_origin_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 250\n");
    let output = octofit_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Service origin is not configured"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_unsupported_origin_scheme_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = octofit_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--origin")
        .arg("ftp://files.example.com")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid service origin 'ftp://files.example.com'"));
}

#[test]
fn test_invalid_config_file_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let output = octofit_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--origin")
        .arg("http://localhost:8000")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[test]
fn test_unknown_view_is_rejected_by_clap() {
    let output = octofit_cmd()
        .arg("--view")
        .arg("profile")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value 'profile'"), "stderr: {stderr}");
}
