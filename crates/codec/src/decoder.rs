// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental message decoder: [`Token`] events in, [`Value`] messages out.
//!
//! The decoder keeps an explicit frame stack for open containers, so nesting
//! depth never translates into call depth. Feeding [`Token::EndOfInput`]
//! parks all partial progress; decoding resumes exactly where it stopped
//! once the scanner is refilled. Any error is fatal to the whole session,
//! not just the current message.

use tether_core::{Kind, Limits, Map, Value};

use crate::error::DecodeError;
use crate::token::{symbol, Token};

/// Outcome of feeding one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decode {
    /// Mid-message; feed the next token.
    Pending,
    /// The token source ran dry; refill it and keep feeding.
    NeedInput,
    /// One whole message. The decoder is reset for the next one.
    Complete(Value),
}

enum Frame {
    Array(Vec<Value>),
    Object { map: Map, pending_key: Option<String> },
}

pub struct Decoder {
    frames: Vec<Frame>,
    /// Accumulated chunk-parts of a string still being delivered.
    chunks: Option<String>,
    /// The completed root value, waiting for the end-of-message symbol.
    root: Option<Value>,
    limits: Limits,
}

impl Decoder {
    pub fn new(limits: Limits) -> Self {
        Self { frames: Vec::new(), chunks: None, root: None, limits }
    }

    /// True between messages: no partial progress is held.
    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.chunks.is_none() && self.root.is_none()
    }

    pub fn feed(&mut self, token: Token) -> Result<Decode, DecodeError> {
        match token {
            Token::EndOfInput => Ok(Decode::NeedInput),
            Token::FormatError(err) => Err(DecodeError::from_scan(err)),
            Token::ChunkPart(part) => {
                if self.frames.is_empty() && self.root.is_some() {
                    return Err(DecodeError::TrailingInput);
                }
                self.chunks.get_or_insert_with(String::new).push_str(&part);
                Ok(Decode::Pending)
            }
            Token::Chunk(last) => {
                let mut text = self.chunks.take().unwrap_or_default();
                text.push_str(&last);
                self.attach(Value::String(text))
            }
            Token::Integer(n) => {
                self.expect_no_open_chunk("integer")?;
                self.attach(Value::Integer(n))
            }
            Token::Symbol(byte) => self.symbol(byte),
        }
    }

    fn symbol(&mut self, byte: u8) -> Result<Decode, DecodeError> {
        self.expect_no_open_chunk("control symbol")?;
        match byte {
            symbol::END_OF_MESSAGE => {
                if !self.frames.is_empty() {
                    return Err(DecodeError::UnexpectedEndOfMessage);
                }
                match self.root.take() {
                    Some(value) => {
                        tracing::trace!(kind = %value.kind(), "message decoded");
                        Ok(Decode::Complete(value))
                    }
                    None => Err(DecodeError::UnexpectedEndOfMessage),
                }
            }
            symbol::ARRAY_OPEN => self.open(Frame::Array(Vec::new())),
            symbol::OBJECT_OPEN => self.open(Frame::Object { map: Map::new(), pending_key: None }),
            symbol::ARRAY_CLOSE => match self.frames.pop() {
                Some(Frame::Array(items)) => self.attach(Value::Array(items)),
                Some(Frame::Object { .. }) | None => {
                    Err(DecodeError::MismatchedBracket { got: ']' })
                }
            },
            symbol::OBJECT_CLOSE => match self.frames.pop() {
                Some(Frame::Object { map, pending_key: None }) => self.attach(Value::Object(map)),
                Some(Frame::Object { pending_key: Some(_), .. }) => Err(DecodeError::DanglingKey),
                Some(Frame::Array(_)) | None => Err(DecodeError::MismatchedBracket { got: '}' }),
            },
            symbol::TRUE => self.attach(Value::Boolean(true)),
            symbol::FALSE => self.attach(Value::Boolean(false)),
            symbol::NULL => self.attach(Value::Null),
            other => Err(DecodeError::UnknownSymbol { byte: other }),
        }
    }

    fn open(&mut self, frame: Frame) -> Result<Decode, DecodeError> {
        if self.frames.is_empty() && self.root.is_some() {
            return Err(DecodeError::TrailingInput);
        }
        if let Some(Frame::Object { pending_key: None, .. }) = self.frames.last() {
            let got = match frame {
                Frame::Array(_) => Kind::Array,
                Frame::Object { .. } => Kind::Object,
            };
            return Err(DecodeError::NonStringKey { got });
        }
        if self.frames.len() >= self.limits.max_depth {
            return Err(DecodeError::DepthExceeded { limit: self.limits.max_depth });
        }
        self.frames.push(frame);
        Ok(Decode::Pending)
    }

    /// Deliver a finished value to the innermost open container, or make it
    /// the message root when none is open.
    fn attach(&mut self, value: Value) -> Result<Decode, DecodeError> {
        match self.frames.last_mut() {
            None => {
                if self.root.is_some() {
                    return Err(DecodeError::TrailingInput);
                }
                self.root = Some(value);
                Ok(Decode::Pending)
            }
            Some(Frame::Array(items)) => {
                items.push(value);
                Ok(Decode::Pending)
            }
            Some(Frame::Object { map, pending_key }) => match pending_key.take() {
                Some(key) => {
                    map.insert(key, value);
                    Ok(Decode::Pending)
                }
                None => match value {
                    Value::String(key) => {
                        *pending_key = Some(key);
                        Ok(Decode::Pending)
                    }
                    other => Err(DecodeError::NonStringKey { got: other.kind() }),
                },
            },
        }
    }

    fn expect_no_open_chunk(&self, got: &'static str) -> Result<(), DecodeError> {
        if self.chunks.is_some() {
            return Err(DecodeError::ChunkContinuationExpected { got });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
