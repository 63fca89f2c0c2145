// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous framed-message transport over any byte channel.
//!
//! A [`Channel`] pairs a reader with a writer and speaks whole messages:
//! `receive` blocks until one message decodes (feeding the scanner in
//! fixed-size refills), `send` encodes through a bounded buffer and
//! flushes. Bytes already buffered past a complete message stay put for
//! the next `receive`, so pipelined requests are fine.

use std::io::{ErrorKind, Read, Write};

use tether_codec::{Decode, Decoder, EncodeStatus, Encoder, Scanner, TokenWriter};
use tether_core::{Limits, Value};

use crate::error::SessionError;

/// Bytes requested from the reader per refill.
const READ_CHUNK: usize = 4096;

/// Encoder buffer capacity; larger messages flush in parts.
const WRITE_CAPACITY: usize = 4096;

/// What one `receive` call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received {
    Message(Value),
    /// The peer closed the channel. A close between messages is the
    /// normal way for a session to end.
    Eof,
}

pub struct Channel<R, W> {
    reader: R,
    writer: W,
    scanner: Scanner,
    decoder: Decoder,
    out: TokenWriter,
}

impl<R: Read, W: Write> Channel<R, W> {
    pub fn new(reader: R, writer: W, limits: Limits) -> Self {
        Self {
            reader,
            writer,
            scanner: Scanner::new(limits),
            decoder: Decoder::new(limits),
            out: TokenWriter::with_capacity(WRITE_CAPACITY),
        }
    }

    /// Block until one whole message decodes, or the channel ends.
    pub fn receive(&mut self) -> Result<Received, SessionError> {
        loop {
            match self.decoder.feed(self.scanner.next_token())? {
                Decode::Pending => {}
                Decode::Complete(message) => return Ok(Received::Message(message)),
                Decode::NeedInput => {
                    let mut buf = [0u8; READ_CHUNK];
                    let n = match self.reader.read(&mut buf) {
                        Ok(n) => n,
                        Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                        Err(err) => return Err(err.into()),
                    };
                    if n == 0 {
                        if !(self.decoder.is_idle() && self.scanner.is_idle()) {
                            tracing::warn!("channel closed mid-message");
                        }
                        return Ok(Received::Eof);
                    }
                    self.scanner.push(&buf[..n]);
                }
            }
        }
    }

    /// Encode and write one whole framed message, then flush.
    pub fn send(&mut self, message: &Value) -> Result<(), SessionError> {
        let mut encoder = Encoder::new(message);
        loop {
            let status = encoder.run(&mut self.out);
            self.writer.write_all(self.out.buffer())?;
            self.out.clear();
            if status == EncodeStatus::Complete {
                self.writer.flush()?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
