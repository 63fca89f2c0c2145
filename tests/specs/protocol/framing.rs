// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Frame reassembly specs
//!
//! Verify that message boundaries never depend on write boundaries: the
//! decoder resumes across arbitrary splits and drains batched input.

use std::time::Duration;

use crate::prelude::*;

#[test]
fn a_message_may_arrive_one_byte_at_a_time() {
    let mut session = Session::open();
    let frame = wire(&varr!["echo", "line\none \"quoted\"", -42]);
    for byte in frame {
        session.write_bytes(&[byte]);
        std::thread::sleep(Duration::from_millis(1));
    }
    assert_eq!(session.read(), varr![true, "line\none \"quoted\"", -42]);
}

#[test]
fn batched_messages_drain_in_order() {
    let mut session = Session::open();
    let mut burst = wire(&varr!["echo", 1]);
    burst.extend_from_slice(&wire(&varr!["echo", 2]));
    session.write_bytes(&burst);
    assert_eq!(session.read(), varr![true, 1]);
    assert_eq!(session.read(), varr![true, 2]);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    let mut session = Session::open();
    session.write_bytes(b"[\"echo\" \t\r 5]\n");
    assert_eq!(session.read(), varr![true, 5]);
}

#[test]
fn long_strings_span_read_buffers() {
    let mut session = Session::open();
    let text = "x".repeat(20_000);
    assert_eq!(session.ok(&varr!["echo", text.as_str()]), vec![text.as_str().into()]);
}
