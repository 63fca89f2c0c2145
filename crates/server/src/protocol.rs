// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message envelopes: greeting, reply, and warning shapes.

use tether_core::{varr, Value};

use crate::env::PROTOCOL_VERSION;

/// The 2-element array written when the channel opens, before any request
/// is read.
pub fn greeting(name: &str) -> Value {
    varr![name, PROTOCOL_VERSION]
}

/// Success reply: `[true, ...results]`.
pub fn ok(results: Vec<Value>) -> Value {
    let mut elements = vec![Value::Boolean(true)];
    elements.extend(results);
    Value::Array(elements)
}

/// Caught-failure reply: `[false, "<message>"]`.
pub fn fail(message: &str) -> Value {
    varr![false, message]
}

/// An out-of-band condition raised by an object mid-invocation. Written
/// standalone between a request and its reply, never replacing the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub text: String,
    pub type_name: &'static str,
    pub handle: i64,
}

impl Warning {
    /// `[false, "warning: <text>", "<type>", <handle>]`.
    pub fn envelope(&self) -> Value {
        varr![false, format!("warning: {}", self.text), self.type_name, self.handle]
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
