// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token-to-byte writer over a bounded flush buffer.
//!
//! Callers write whole tokens; the writer fills its buffer up to the
//! configured capacity and spills the rest into an internal carry queue.
//! When a write reports [`WriteStatus::Full`], flush [`TokenWriter::buffer`]
//! to the transport, [`clear`](TokenWriter::clear) it, and call
//! [`resume`](TokenWriter::resume) until the carry drains. The emitted byte
//! stream is identical for every capacity down to a single byte.

use std::collections::VecDeque;

/// Outcome of a write or resume call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// Everything written so far fits in the buffer.
    Complete,
    /// The buffer is at capacity and bytes are waiting in the carry.
    Full,
}

pub struct TokenWriter {
    buf: Vec<u8>,
    cap: usize,
    carry: VecDeque<u8>,
    /// A digit byte ended the previous token; a following integer needs a
    /// separating space.
    last_was_digit: bool,
}

impl TokenWriter {
    /// `cap` is the flush granularity. A capacity of zero is treated as one.
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(1);
        Self { buf: Vec::with_capacity(cap), cap, carry: VecDeque::new(), last_was_digit: false }
    }

    /// Bytes ready to flush. Never longer than the configured capacity.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Drop flushed bytes; call after handing [`buffer`](Self::buffer) to
    /// the transport.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// True when no bytes wait in the carry.
    pub fn is_drained(&self) -> bool {
        self.carry.is_empty()
    }

    /// Move carried bytes into the freed buffer.
    pub fn resume(&mut self) -> WriteStatus {
        while self.buf.len() < self.cap {
            match self.carry.pop_front() {
                Some(byte) => self.buf.push(byte),
                None => break,
            }
        }
        self.status()
    }

    pub fn write_symbol(&mut self, byte: u8) -> WriteStatus {
        self.last_was_digit = false;
        self.push_bytes(&[byte])
    }

    pub fn write_integer(&mut self, n: i64) -> WriteStatus {
        if self.last_was_digit {
            self.push_bytes(b" ");
        }
        self.last_was_digit = true;
        self.push_bytes(n.to_string().as_bytes())
    }

    pub fn write_chunk(&mut self, text: &str) -> WriteStatus {
        self.last_was_digit = false;
        self.push_bytes(&[b'"']);
        for &byte in text.as_bytes() {
            match byte {
                b'"' => self.push_bytes(b"\\\""),
                b'\\' => self.push_bytes(b"\\\\"),
                b'\n' => self.push_bytes(b"\\n"),
                b'\t' => self.push_bytes(b"\\t"),
                b'\r' => self.push_bytes(b"\\r"),
                byte if byte < 0x20 => self.push_bytes(format!("\\u{byte:04x}").as_bytes()),
                other => self.push_bytes(&[other]),
            };
        }
        self.push_bytes(&[b'"'])
    }

    fn push_bytes(&mut self, bytes: &[u8]) -> WriteStatus {
        for &byte in bytes {
            if self.carry.is_empty() && self.buf.len() < self.cap {
                self.buf.push(byte);
            } else {
                self.carry.push_back(byte);
            }
        }
        self.status()
    }

    fn status(&self) -> WriteStatus {
        if self.carry.is_empty() {
            WriteStatus::Complete
        } else {
            WriteStatus::Full
        }
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
