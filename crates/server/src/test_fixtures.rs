// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test fixtures: a dispatcher harness and wire-level helpers.

use tether_codec::{Decode, Decoder, EncodeStatus, Encoder, Scanner, TokenWriter};
use tether_core::{Limits, Value};

use crate::dispatch::{Dispatched, Dispatcher};

pub fn dispatcher() -> Dispatcher {
    Dispatcher::new("test")
}

/// Dispatch one message, asserting the session survives it.
pub fn dispatched(dispatcher: &mut Dispatcher, message: Value) -> Dispatched {
    dispatcher.dispatch(&message).unwrap()
}

/// Dispatch one message and return its reply, asserting it produced one
/// and raised no warnings.
pub fn reply(dispatcher: &mut Dispatcher, message: Value) -> Value {
    let outcome = dispatched(dispatcher, message);
    assert!(outcome.warnings.is_empty(), "unexpected warnings: {:?}", outcome.warnings);
    outcome.reply.unwrap()
}

/// Encode one message to its full wire form.
pub fn encode(message: &Value) -> Vec<u8> {
    let mut writer = TokenWriter::with_capacity(64);
    let mut encoder = Encoder::new(message);
    let mut out = Vec::new();
    loop {
        let status = encoder.run(&mut writer);
        out.extend_from_slice(writer.buffer());
        writer.clear();
        if status == EncodeStatus::Complete {
            return out;
        }
    }
}

/// Decode every complete message in `bytes`.
pub fn decode_all(bytes: &[u8]) -> Vec<Value> {
    let mut scanner = Scanner::new(Limits::default());
    scanner.push(bytes);
    let mut decoder = Decoder::new(Limits::default());
    let mut out = Vec::new();
    loop {
        match decoder.feed(scanner.next_token()).unwrap() {
            Decode::Pending => {}
            Decode::NeedInput => return out,
            Decode::Complete(value) => out.push(value),
        }
    }
}
