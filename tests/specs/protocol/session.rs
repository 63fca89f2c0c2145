// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle specs
//!
//! Verify the greeting, request/reply ordering, and both clean ways a
//! session ends.

use tether_core::Value;

use crate::prelude::*;

#[test]
fn greeting_announces_name_and_protocol_version() {
    let (_session, greeting) = Session::open_with(&[]);
    assert_eq!(greeting, varr!["tether", 1]);
}

#[test]
fn the_name_flag_changes_the_greeting() {
    let (_session, greeting) = Session::open_with(&["--name", "robot"]);
    assert_eq!(greeting, varr!["robot", 1]);
}

#[test]
fn echo_round_trips_every_value_kind() {
    let mut session = Session::open();
    let expected = varr![
        42,
        -7,
        "text",
        true,
        false,
        Value::Null,
        varr![1, 2],
        vobj! { "nested" => vobj! { "deep" => "yes" } },
    ];

    let mut request = varr!["echo"];
    for item in expected.as_array().unwrap() {
        request.push(item.clone()).unwrap();
    }

    assert_eq!(session.ok(&request), expected.into_array().unwrap());
}

#[test]
fn version_reports_the_process_name() {
    let mut session = Session::open();
    assert_eq!(session.ok(&varr!["version"]), varr!["tether", 1].into_array().unwrap());
}

#[test]
fn sleep_zero_replies_immediately() {
    let mut session = Session::open();
    assert_eq!(session.ok(&varr!["sleep", 0]), Vec::<Value>::new());
}

#[test]
fn replies_answer_requests_in_order() {
    let mut session = Session::open();
    for n in 0..3i64 {
        session.send(&varr!["echo", n]);
    }
    for n in 0..3i64 {
        assert_eq!(session.read(), varr![true, n]);
    }
}

#[test]
fn help_describes_the_command_table() {
    let mut session = Session::open();
    let payload = session.ok(&varr!["help"]);
    let text = payload[0].as_str().unwrap();
    assert!(text.starts_with("commands:\n"), "unexpected help text: {text}");
    assert!(text.contains("objects:"));
    assert!(text.contains("queue <command>"));

    let payload = session.ok(&varr!["help", "queue", "push"]);
    let text = payload[0].as_str().unwrap();
    assert!(text.contains("push"), "unexpected help text: {text}");
}

#[test]
fn exit_closes_the_channel_with_status_zero() {
    let mut session = Session::open();
    session.send(&varr!["exit"]);
    session.expect_closed();
    assert_eq!(session.wait_code(), 0);
}

#[test]
fn messages_after_exit_are_never_read() {
    let mut session = Session::open();
    let mut burst = wire(&varr!["exit"]);
    burst.extend_from_slice(&wire(&varr!["echo", 1]));
    session.write_bytes(&burst);
    session.expect_closed();
    assert_eq!(session.wait_code(), 0);
}

#[test]
fn end_of_input_is_a_clean_shutdown() {
    let mut session = Session::open();
    session.ok(&varr!["echo", 1]);
    session.close();
    assert_eq!(session.wait_code(), 0);
}
