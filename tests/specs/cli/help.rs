// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs
//!
//! Verify help text and version output for the binary and its
//! subcommands.

use crate::prelude::*;

fn stdout_of(args: &[&str]) -> String {
    let output = cli().args(args).output().unwrap();
    assert!(output.status.success(), "{args:?} exited with {:?}", output.status);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn help_lists_both_subcommands() {
    let text = stdout_of(&["--help"]);
    assert!(text.contains("Usage:"));
    assert!(text.contains("serve"));
    assert!(text.contains("console"));
}

#[test]
fn serve_help_lists_the_session_flags() {
    let text = stdout_of(&["serve", "--help"]);
    for flag in ["--name", "--trace-file", "--log-file", "--max-depth", "--max-message-bytes"] {
        assert!(text.contains(flag), "missing {flag} in {text}");
    }
}

#[test]
fn console_takes_the_same_flags() {
    let text = stdout_of(&["console", "--help"]);
    assert!(text.contains("--name"));
    assert!(text.contains("--max-message-bytes"));
}

#[test]
fn version_prints_the_package_version() {
    let text = stdout_of(&["--version"]);
    assert!(text.contains("0.1"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let output = cli().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Usage:"));
}

#[test]
fn unknown_subcommands_are_rejected() {
    let output = cli().arg("serve-forever").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
