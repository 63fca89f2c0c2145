// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end flag behavior specs
//!
//! Verify that session flags and their `TETHER_*` fallbacks reach a real
//! child process: greeting names, decode ceilings, trace and log files.

use crate::prelude::*;

#[test]
fn the_environment_names_the_process() {
    let mut command = serve_command();
    command.env("TETHER_NAME", "enviro");
    let (_session, greeting) = Session::from_command(&mut command);
    assert_eq!(greeting, varr!["enviro", 1]);
}

#[test]
fn the_name_flag_beats_the_environment() {
    let mut command = serve_command();
    command.env("TETHER_NAME", "enviro").args(["--name", "flagged"]);
    let (_session, greeting) = Session::from_command(&mut command);
    assert_eq!(greeting, varr!["flagged", 1]);
}

#[test]
fn the_environment_sets_the_message_ceiling() {
    let mut command = serve_command();
    command.env("TETHER_MAX_MESSAGE_BYTES", "8");
    let (mut session, _greeting) = Session::from_command(&mut command);
    session.send(&varr!["echo", "far too long for eight bytes"]);
    session.expect_closed();
    assert_eq!(session.wait_code(), 28);
}

#[test]
fn the_trace_file_records_both_directions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.trace");
    let (mut session, _greeting) =
        Session::open_with(&["--trace-file", path.to_str().unwrap()]);

    session.ok(&varr!["echo", "traced"]);
    session.send(&varr!["exit"]);
    session.expect_closed();
    assert_eq!(session.wait_code(), 0);

    let trace = std::fs::read_to_string(&path).unwrap();
    assert!(trace.contains(" <- "), "no inbound lines in {trace}");
    assert!(trace.contains(" -> "), "no outbound lines in {trace}");
    assert!(trace.contains("\"traced\""), "echo payload missing from {trace}");
}

#[test]
fn the_log_file_captures_session_logs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tether.log");
    let mut command = serve_command();
    command.env("TETHER_LOG", "info").args(["--log-file", path.to_str().unwrap()]);
    let (mut session, _greeting) = Session::from_command(&mut command);

    session.send(&varr!["exit"]);
    session.expect_closed();
    assert_eq!(session.wait_code(), 0);

    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.contains("session open"), "missing open line in {log}");
}
