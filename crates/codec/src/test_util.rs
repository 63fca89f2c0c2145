// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by the codec unit and property tests.

use tether_core::{Limits, Value};

use crate::decoder::{Decode, Decoder};
use crate::encoder::{EncodeStatus, Encoder};
use crate::error::DecodeError;
use crate::scanner::Scanner;
use crate::writer::TokenWriter;

/// One-shot encode of a whole framed message through a writer of the given
/// capacity, flushing as often as the capacity demands.
pub fn encode_to_vec(value: &Value, cap: usize) -> Vec<u8> {
    let mut writer = TokenWriter::with_capacity(cap);
    let mut encoder = Encoder::new(value);
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

/// One-shot decode of a single complete framed message.
pub fn decode_one(bytes: &[u8], limits: Limits) -> Result<Value, DecodeError> {
    decode_chunked(bytes, limits, bytes.len().max(1))
}

/// Decode a single framed message, refilling the scanner `chunk` bytes at a
/// time to exercise every suspend point.
pub fn decode_chunked(bytes: &[u8], limits: Limits, chunk: usize) -> Result<Value, DecodeError> {
    let chunk = chunk.max(1);
    let mut scanner = Scanner::new(limits);
    let mut decoder = Decoder::new(limits);
    let mut rest = bytes;
    loop {
        match decoder.feed(scanner.next_token())? {
            Decode::Pending => {}
            Decode::Complete(value) => return Ok(value),
            Decode::NeedInput => {
                if rest.is_empty() {
                    return Err(DecodeError::UnexpectedEndOfMessage);
                }
                let take = chunk.min(rest.len());
                scanner.push(&rest[..take]);
                rest = &rest[take..];
            }
        }
    }
}
