// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental message encoder: one [`Value`] in, framed tokens out.
//!
//! Encoding walks the value with an explicit work stack and pauses whenever
//! the [`TokenWriter`] reports its buffer full. A paused encoder resumes
//! after the caller flushes the writer; no token is ever written twice. The
//! end-of-message symbol is part of the run, so a completed run is a whole
//! framed message.

use tether_core::{Map, Value};

use crate::token::symbol;
use crate::writer::{TokenWriter, WriteStatus};

/// Outcome of [`Encoder::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStatus {
    /// The whole message, end-of-message symbol included, has been written.
    Complete,
    /// The writer is full. Flush it, clear it, and call `run` again.
    Paused,
}

enum Work<'a> {
    Value(&'a Value),
    Array { items: &'a [Value], next: usize },
    Object { map: &'a Map, next: usize },
    Key(&'a str),
    EndOfMessage,
}

pub struct Encoder<'a> {
    stack: Vec<Work<'a>>,
}

impl<'a> Encoder<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { stack: vec![Work::EndOfMessage, Work::Value(root)] }
    }

    /// Write tokens until the message completes or the writer fills up.
    pub fn run(&mut self, writer: &mut TokenWriter) -> EncodeStatus {
        if !writer.is_drained() && writer.resume() == WriteStatus::Full {
            return EncodeStatus::Paused;
        }
        while let Some(work) = self.stack.pop() {
            if self.step(work, writer) == Some(WriteStatus::Full) {
                return EncodeStatus::Paused;
            }
        }
        EncodeStatus::Complete
    }

    /// Process one work item: write at most one token, queueing any
    /// follow-up work. `None` means the item wrote nothing.
    fn step(&mut self, work: Work<'a>, writer: &mut TokenWriter) -> Option<WriteStatus> {
        match work {
            Work::Value(value) => Some(match value {
                Value::Null => writer.write_symbol(symbol::NULL),
                Value::Boolean(true) => writer.write_symbol(symbol::TRUE),
                Value::Boolean(false) => writer.write_symbol(symbol::FALSE),
                Value::Integer(n) => writer.write_integer(*n),
                Value::String(text) => writer.write_chunk(text),
                Value::Array(items) => {
                    self.stack.push(Work::Array { items, next: 0 });
                    writer.write_symbol(symbol::ARRAY_OPEN)
                }
                Value::Object(map) => {
                    self.stack.push(Work::Object { map, next: 0 });
                    writer.write_symbol(symbol::OBJECT_OPEN)
                }
            }),
            Work::Array { items, next } => match items.get(next) {
                Some(item) => {
                    self.stack.push(Work::Array { items, next: next + 1 });
                    self.stack.push(Work::Value(item));
                    None
                }
                None => Some(writer.write_symbol(symbol::ARRAY_CLOSE)),
            },
            Work::Object { map, next } => match map.get_index(next) {
                Some((key, value)) => {
                    self.stack.push(Work::Object { map, next: next + 1 });
                    self.stack.push(Work::Value(value));
                    self.stack.push(Work::Key(key));
                    None
                }
                None => Some(writer.write_symbol(symbol::OBJECT_CLOSE)),
            },
            Work::Key(text) => Some(writer.write_chunk(text)),
            Work::EndOfMessage => {
                tracing::trace!("message encoded");
                Some(writer.write_symbol(symbol::END_OF_MESSAGE))
            }
        }
    }
}

#[cfg(test)]
#[path = "encoder_tests.rs"]
mod tests;
