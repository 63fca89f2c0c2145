// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session failure specs
//!
//! Verify the split between caught failures, which answer `[false, ...]`
//! and keep the session alive, and fatal ones, which close the channel
//! with a distinct exit status.

use crate::prelude::*;

#[test]
fn caught_failures_keep_the_session_alive() {
    let mut session = Session::open();
    assert_eq!(session.fail(&varr!["nope"]), "unknown command 'nope'");
    assert_eq!(session.fail(&varr!["sleep", "soon"]), "sleep: argument 'seconds' must be integer");
    assert_eq!(session.ok(&varr!["echo", "still here"]), vec!["still here".into()]);
}

#[test]
fn an_unknown_symbol_exits_27() {
    let mut session = Session::open();
    session.write_bytes(b",\n");
    session.expect_closed();
    assert_eq!(session.wait_code(), 27);
}

#[test]
fn a_dangling_minus_exits_21() {
    let mut session = Session::open();
    session.write_bytes(b"-\n");
    session.expect_closed();
    assert_eq!(session.wait_code(), 21);
}

#[test]
fn a_bare_terminator_exits_23() {
    let mut session = Session::open();
    session.write_bytes(b"\n");
    session.expect_closed();
    assert_eq!(session.wait_code(), 23);
}

#[test]
fn trailing_input_after_the_root_exits_24() {
    let mut session = Session::open();
    session.write_bytes(b"[\"echo\" 1] 2\n");
    session.expect_closed();
    assert_eq!(session.wait_code(), 24);
}

#[test]
fn a_non_string_key_exits_25() {
    let mut session = Session::open();
    session.write_bytes(b"{1 2}\n");
    session.expect_closed();
    assert_eq!(session.wait_code(), 25);
}

#[test]
fn a_mismatched_bracket_exits_26() {
    let mut session = Session::open();
    session.write_bytes(b"[}\n");
    session.expect_closed();
    assert_eq!(session.wait_code(), 26);
}

#[test]
fn an_oversized_message_exits_28() {
    let (mut session, greeting) = Session::open_with(&["--max-message-bytes", "8"]);
    assert_eq!(greeting, varr!["tether", 1]);
    session.send(&varr!["echo", "far too long for eight bytes"]);
    session.expect_closed();
    assert_eq!(session.wait_code(), 28);
}

#[test]
fn exceeding_the_depth_ceiling_exits_28() {
    let (mut session, _greeting) = Session::open_with(&["--max-depth", "2"]);
    session.send(&varr![varr![varr![1]]]);
    session.expect_closed();
    assert_eq!(session.wait_code(), 28);
}

#[test]
fn an_exhausted_group_walk_exits_2() {
    let mut session = Session::open();
    session.send(&varr!["new"]);
    session.expect_closed();
    assert_eq!(session.wait_code(), 2);
}

#[test]
fn a_bare_call_exits_2() {
    let mut session = Session::open();
    session.send(&varr!["call"]);
    session.expect_closed();
    assert_eq!(session.wait_code(), 2);
}
